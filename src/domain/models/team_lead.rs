use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact person responsible for one team of a club
///
/// Identified by the compound key `(club, team)`: a club fields several teams,
/// and the same team name (e.g. "Herren I") exists in many clubs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamLead {
    /// Club name as printed in the league schedule
    pub club: String,
    /// Team designation within the club
    pub team: String,
    /// Full name of the team lead
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl TeamLead {
    pub fn new(club: impl Into<String>, team: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            club: club.into(),
            team: team.into(),
            name: name.into(),
            email: None,
            phone: None,
        }
    }

    /// Whether both values refer to the same `(club, team)` slot
    pub fn same_team(&self, other: &Self) -> bool {
        self.club == other.club && self.team == other.team
    }
}

impl fmt::Display for TeamLead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.club, self.team)
    }
}
