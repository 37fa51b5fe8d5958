//! Concrete repositories: one codec per entity type over the shared cache.

pub mod sports_hall_repository;
pub mod team_lead_repository;

pub use sports_hall_repository::{SportsHallCodec, SportsHallRepository};
pub use team_lead_repository::{TeamLeadCodec, TeamLeadRepository};
