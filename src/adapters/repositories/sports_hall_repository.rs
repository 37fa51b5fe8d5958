//! Sports halls, stored grouped by club.
//!
//! File layout:
//!
//! ```json
//! {
//!   "TTC Nord": [
//!     { "number": 1, "name": "...", "street": "...", "postalCode": "...", "city": "..." }
//!   ]
//! }
//! ```
//!
//! The club only appears as the group key. Loading flattens the groups back
//! into one list and stamps each hall with the club it was filed under.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::adapters::cache::CachedRepository;
use crate::domain::errors::{CodecError, RepositoryResult};
use crate::domain::models::SportsHall;
use crate::domain::ports::{EntityCodec, Logger, Storage};

/// A hall as written inside its club group
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HallRecord {
    number: u32,
    name: String,
    street: String,
    postal_code: String,
    city: String,
}

impl HallRecord {
    fn from_hall(hall: &SportsHall) -> Self {
        Self {
            number: hall.number,
            name: hall.name.clone(),
            street: hall.street.clone(),
            postal_code: hall.postal_code.clone(),
            city: hall.city.clone(),
        }
    }

    fn into_hall(self, club: &str) -> SportsHall {
        SportsHall {
            club: club.to_string(),
            number: self.number,
            name: self.name,
            street: self.street,
            postal_code: self.postal_code,
            city: self.city,
        }
    }
}

/// Codec for halls grouped under their club, keyed by `(club, number)`.
///
/// `deserialize` inverts `serialize` up to order: halls come back grouped by
/// club, clubs in first-appearance order. `[Nord 1, Süd 1, Nord 2]` reloads as
/// `[Nord 1, Nord 2, Süd 1]`, so a live snapshot and a reloaded one may list
/// the same halls differently. Grouped input round-trips exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SportsHallCodec;

impl EntityCodec for SportsHallCodec {
    type Entity = SportsHall;

    fn is_same_primary_key(&self, a: &SportsHall, b: &SportsHall) -> bool {
        a.same_hall(b)
    }

    fn serialize(&self, entities: &[SportsHall]) -> Result<String, CodecError> {
        // Groups keep the order in which their club first appears.
        let mut groups: Vec<(&str, Vec<HallRecord>)> = Vec::new();
        for hall in entities {
            let record = HallRecord::from_hall(hall);
            match groups.iter_mut().find(|(club, _)| *club == hall.club) {
                Some((_, records)) => records.push(record),
                None => groups.push((hall.club.as_str(), vec![record])),
            }
        }

        let mut document = Map::with_capacity(groups.len());
        for (club, records) in groups {
            let records =
                serde_json::to_value(records).map_err(|e| CodecError::Encode(e.to_string()))?;
            document.insert(club.to_string(), records);
        }

        serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<Vec<SportsHall>, CodecError> {
        let document: Map<String, Value> =
            serde_json::from_str(content).map_err(|e| CodecError::Decode(e.to_string()))?;

        let mut halls = Vec::new();
        for (club, records) in document {
            let records: Vec<HallRecord> = serde_json::from_value(records)
                .map_err(|e| CodecError::Decode(format!("club {club}: {e}")))?;
            halls.extend(records.into_iter().map(|record| record.into_hall(&club)));
        }
        Ok(halls)
    }

    fn describe(&self, entity: &SportsHall) -> String {
        format!("sports hall {entity}")
    }
}

pub type SportsHallRepository = CachedRepository<SportsHallCodec>;

impl CachedRepository<SportsHallCodec> {
    /// Repository of sports halls backed by `locator`
    pub fn sports_halls(
        storage: Arc<dyn Storage>,
        logger: Arc<dyn Logger>,
        locator: impl Into<String>,
    ) -> Self {
        Self::new(SportsHallCodec, storage, logger, locator)
    }

    /// All halls of one club, in stored order
    pub async fn for_club(&self, club: &str) -> RepositoryResult<Vec<SportsHall>> {
        let halls = self.get_all().await?;
        Ok(halls.iter().filter(|hall| hall.club == club).cloned().collect())
    }
}
