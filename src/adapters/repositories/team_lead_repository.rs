use std::sync::Arc;

use crate::adapters::cache::CachedRepository;
use crate::domain::errors::RepositoryResult;
use crate::domain::models::TeamLead;
use crate::domain::ports::{EntityCodec, Logger, Storage};

/// Team leads stored as a plain JSON array, keyed by `(club, team)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamLeadCodec;

impl EntityCodec for TeamLeadCodec {
    type Entity = TeamLead;

    fn is_same_primary_key(&self, a: &TeamLead, b: &TeamLead) -> bool {
        a.same_team(b)
    }

    fn describe(&self, entity: &TeamLead) -> String {
        format!("team lead {entity}")
    }
}

pub type TeamLeadRepository = CachedRepository<TeamLeadCodec>;

impl CachedRepository<TeamLeadCodec> {
    /// Repository of team leads backed by `locator`
    pub fn team_leads(
        storage: Arc<dyn Storage>,
        logger: Arc<dyn Logger>,
        locator: impl Into<String>,
    ) -> Self {
        Self::new(TeamLeadCodec, storage, logger, locator)
    }

    /// The lead of one team, if known
    pub async fn find(&self, club: &str, team: &str) -> RepositoryResult<Option<TeamLead>> {
        let leads = self.get_all().await?;
        Ok(leads
            .iter()
            .find(|lead| lead.club == club && lead.team == team)
            .cloned())
    }
}
