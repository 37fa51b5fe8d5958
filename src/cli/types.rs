use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ttsync CLI
#[derive(Parser, Debug)]
#[command(name = "ttsync")]
#[command(about = "ttsync - table-tennis league schedule sync", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .ttsync/config.yaml + .ttsync/local.yaml)
    #[arg(short, long, global = true, env = "TTSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Team lead contacts
    #[command(subcommand)]
    TeamLead(TeamLeadCommands),

    /// Sports halls per club
    #[command(subcommand)]
    Hall(HallCommands),

    /// Configuration inspection
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum TeamLeadCommands {
    /// List all team leads
    List,

    /// Add a team lead, or replace the lead of an existing club team
    Set {
        /// Club name as printed in the league schedule
        #[arg(long)]
        club: String,

        /// Team designation, e.g. "Herren I"
        #[arg(long)]
        team: String,

        /// Full name of the team lead
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum HallCommands {
    /// List sports halls
    List {
        /// Only halls of this club
        #[arg(long)]
        club: Option<String>,
    },

    /// Add a sports hall, or replace an existing one with the same club and number
    Set {
        #[arg(long)]
        club: String,

        /// Hall number within the club
        #[arg(long)]
        number: u32,

        #[arg(long)]
        name: String,

        #[arg(long)]
        street: String,

        #[arg(long)]
        postal_code: String,

        #[arg(long)]
        city: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}
