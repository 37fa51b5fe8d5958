use serde::{Deserialize, Serialize};
use std::fmt;

/// A venue where a club plays its home matches
///
/// Clubs number their halls ("Halle 1", "Halle 2"), so a hall is identified
/// by `(club, number)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportsHall {
    /// Owning club; in the stored file this is the group key
    pub club: String,
    /// Hall number within the club
    pub number: u32,
    pub name: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
}

impl SportsHall {
    /// Whether both values refer to the same `(club, number)` hall
    pub fn same_hall(&self, other: &Self) -> bool {
        self.club == other.club && self.number == other.number
    }

    /// Single-line postal address, as used for calendar event locations
    pub fn address(&self) -> String {
        format!("{}, {} {}", self.street, self.postal_code, self.city)
    }
}

impl fmt::Display for SportsHall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.club, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall(club: &str, number: u32) -> SportsHall {
        SportsHall {
            club: club.to_string(),
            number,
            name: "Sporthalle am See".to_string(),
            street: "Seestraße 4".to_string(),
            postal_code: "12345".to_string(),
            city: "Musterstadt".to_string(),
        }
    }

    #[test]
    fn test_same_hall() {
        assert!(hall("TTC Nord", 1).same_hall(&hall("TTC Nord", 1)));
        assert!(!hall("TTC Nord", 1).same_hall(&hall("TTC Nord", 2)));
        assert!(!hall("TTC Nord", 1).same_hall(&hall("SV Süd", 1)));
    }

    #[test]
    fn test_address() {
        assert_eq!(hall("TTC Nord", 1).address(), "Seestraße 4, 12345 Musterstadt");
    }
}
