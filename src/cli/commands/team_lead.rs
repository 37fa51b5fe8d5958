use anyhow::{Context, Result};

use crate::adapters::repositories::TeamLeadRepository;
use crate::cli::output::TableFormatter;
use crate::domain::models::TeamLead;

/// Handle team-lead list command
pub async fn handle_list(repo: &TeamLeadRepository, json: bool) -> Result<()> {
    let leads = repo.get_all().await.context("Failed to list team leads")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&*leads)?);
    } else if leads.is_empty() {
        println!("No team leads found.");
    } else {
        println!("{}", TableFormatter::new().format_team_leads(&leads));
        println!("\nShowing {} team lead{}", leads.len(), if leads.len() == 1 { "" } else { "s" });
    }

    Ok(())
}

/// Handle team-lead set command
pub async fn handle_set(repo: &TeamLeadRepository, lead: TeamLead, json: bool) -> Result<()> {
    let label = lead.to_string();
    repo.save(lead.clone())
        .await
        .with_context(|| format!("Failed to save team lead for {label}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lead)?);
    } else {
        println!("Saved team lead {} for {label}", lead.name);
    }

    Ok(())
}
