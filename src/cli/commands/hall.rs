use anyhow::{Context, Result};

use crate::adapters::repositories::SportsHallRepository;
use crate::cli::output::TableFormatter;
use crate::domain::models::SportsHall;

/// Handle hall list command
pub async fn handle_list(repo: &SportsHallRepository, club: Option<String>, json: bool) -> Result<()> {
    let halls = match club {
        Some(ref club) => repo
            .for_club(club)
            .await
            .with_context(|| format!("Failed to list sports halls of {club}"))?,
        None => repo
            .get_all()
            .await
            .context("Failed to list sports halls")?
            .to_vec(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&halls)?);
    } else if halls.is_empty() {
        println!("No sports halls found.");
    } else {
        println!("{}", TableFormatter::new().format_sports_halls(&halls));
    }

    Ok(())
}

/// Handle hall set command
pub async fn handle_set(repo: &SportsHallRepository, hall: SportsHall, json: bool) -> Result<()> {
    let label = hall.to_string();
    repo.save(hall.clone())
        .await
        .with_context(|| format!("Failed to save sports hall {label}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hall)?);
    } else {
        println!("Saved sports hall {label} ({})", hall.address());
    }

    Ok(())
}
