pub mod config;
pub mod sports_hall;
pub mod team_lead;

pub use config::{Config, LoggingConfig, RepositoriesConfig, StorageConfig};
pub use sports_hall::SportsHall;
pub use team_lead::TeamLead;
