//! Command handlers and dispatch

pub mod config;
pub mod hall;
pub mod team_lead;

use anyhow::Result;

use crate::cli::types::{Commands, ConfigCommands, HallCommands, TeamLeadCommands};
use crate::domain::models::{Config, SportsHall, TeamLead};
use crate::infrastructure::setup::Repositories;

/// Run one parsed command against the configured repositories
pub async fn execute(command: Commands, config: &Config, json: bool) -> Result<()> {
    match command {
        Commands::Config(ConfigCommands::Show) => config::handle_show(config, json),
        Commands::TeamLead(cmd) => {
            let repos = Repositories::from_config(config);
            match cmd {
                TeamLeadCommands::List => team_lead::handle_list(&repos.team_leads, json).await,
                TeamLeadCommands::Set {
                    club,
                    team,
                    name,
                    email,
                    phone,
                } => {
                    let lead = TeamLead {
                        club,
                        team,
                        name,
                        email,
                        phone,
                    };
                    team_lead::handle_set(&repos.team_leads, lead, json).await
                }
            }
        }
        Commands::Hall(cmd) => {
            let repos = Repositories::from_config(config);
            match cmd {
                HallCommands::List { club } => hall::handle_list(&repos.sports_halls, club, json).await,
                HallCommands::Set {
                    club,
                    number,
                    name,
                    street,
                    postal_code,
                    city,
                } => {
                    let hall = SportsHall {
                        club,
                        number,
                        name,
                        street,
                        postal_code,
                        city,
                    };
                    hall::handle_set(&repos.sports_halls, hall, json).await
                }
            }
        }
    }
}
