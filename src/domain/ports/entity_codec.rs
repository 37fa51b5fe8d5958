use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::domain::errors::CodecError;

/// Per-entity-type behaviour plugged into a cached repository
///
/// A codec decides three things the repository itself does not interpret:
/// which stored entity an incoming one replaces (`is_same_primary_key`), and
/// how the whole collection maps to and from its stored text form.
///
/// The default encoding is a pretty-printed JSON array of the complete
/// collection. Implementations that override one direction must override the
/// other so that `deserialize` stays the inverse of `serialize`.
///
/// `is_same_primary_key` must be an equivalence relation over the identifying
/// fields. A predicate that is not (or that compares too few fields) is not
/// detected and shows up as duplicates or clobbered entries.
pub trait EntityCodec: Send + Sync + 'static {
    /// The stored entity type
    type Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;

    /// Whether `a` and `b` denote the same logical entity
    fn is_same_primary_key(&self, a: &Self::Entity, b: &Self::Entity) -> bool;

    /// Encode the full collection
    fn serialize(&self, entities: &[Self::Entity]) -> Result<String, CodecError> {
        serde_json::to_string_pretty(entities).map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Decode the full collection
    fn deserialize(&self, content: &str) -> Result<Vec<Self::Entity>, CodecError> {
        serde_json::from_str(content).map_err(|e| CodecError::Decode(e.to_string()))
    }

    /// Human-readable identification of an entity for failure logs
    fn describe(&self, entity: &Self::Entity) -> String {
        format!("{entity:?}")
    }
}
