use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{self, Debug};
use std::marker::PhantomData;

use crate::domain::ports::EntityCodec;

/// Default codec: the whole collection as one JSON array, keyed by a predicate.
///
/// ```
/// use ttsync::adapters::codecs::JsonCodec;
/// use ttsync::domain::ports::EntityCodec;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Venue { id: u32, name: String }
///
/// let codec = JsonCodec::new(|a: &Venue, b: &Venue| a.id == b.id);
/// let venues = codec.deserialize(r#"[{"id":1,"name":"Nord"}]"#).unwrap();
/// assert_eq!(venues.len(), 1);
/// ```
pub struct JsonCodec<T, K> {
    same_key: K,
    _entity: PhantomData<fn() -> T>,
}

impl<T, K> JsonCodec<T, K>
where
    K: Fn(&T, &T) -> bool,
{
    pub const fn new(same_key: K) -> Self {
        Self {
            same_key,
            _entity: PhantomData,
        }
    }
}

impl<T, K> Debug for JsonCodec<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec").finish_non_exhaustive()
    }
}

impl<T, K> EntityCodec for JsonCodec<T, K>
where
    T: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static,
    K: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    type Entity = T;

    fn is_same_primary_key(&self, a: &T, b: &T) -> bool {
        (self.same_key)(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::CodecError;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Item {
        id: u32,
        v: String,
    }

    fn codec() -> impl EntityCodec<Entity = Item> {
        JsonCodec::new(|a: &Item, b: &Item| a.id == b.id)
    }

    #[test]
    fn test_predicate_is_used_for_key_equality() {
        let codec = codec();
        let a = Item { id: 1, v: "a".into() };
        let b = Item { id: 1, v: "b".into() };
        let c = Item { id: 2, v: "a".into() };
        assert!(codec.is_same_primary_key(&a, &b));
        assert!(!codec.is_same_primary_key(&a, &c));
    }

    #[test]
    fn test_serialize_whole_collection_as_array() {
        let codec = codec();
        let text = codec
            .serialize(&[Item { id: 1, v: "a".into() }, Item { id: 2, v: "b".into() }])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, serde_json::json!([{"id": 1, "v": "a"}, {"id": 2, "v": "b"}]));
        assert_eq!(codec.deserialize(&text).unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_content_is_a_decode_error() {
        let codec = codec();
        assert!(matches!(codec.deserialize("[{\"id\": 1,"), Err(CodecError::Decode(_))));
        assert!(matches!(codec.deserialize("{\"id\": 1}"), Err(CodecError::Decode(_))));
        assert!(matches!(codec.deserialize(""), Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_describe_uses_debug() {
        let codec = codec();
        assert_eq!(
            codec.describe(&Item { id: 7, v: "y".into() }),
            r#"Item { id: 7, v: "y" }"#
        );
    }
}
