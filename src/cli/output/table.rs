//! Table output formatting for CLI commands
//!
//! Provides formatted table output for team leads and sports halls using comfy-table.

use crate::domain::models::{SportsHall, TeamLead};
use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format a list of team leads as a table
    pub fn format_team_leads(&self, leads: &[TeamLead]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Club").add_attribute(Attribute::Bold),
            Cell::new("Team").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Email").add_attribute(Attribute::Bold),
            Cell::new("Phone").add_attribute(Attribute::Bold),
        ]);

        for lead in leads {
            table.add_row(vec![
                self.key_cell(&lead.club),
                Cell::new(&lead.team),
                Cell::new(&lead.name),
                Cell::new(lead.email.as_deref().unwrap_or("-")),
                Cell::new(lead.phone.as_deref().unwrap_or("-")),
            ]);
        }

        table.to_string()
    }

    /// Format a list of sports halls as a table
    pub fn format_sports_halls(&self, halls: &[SportsHall]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Club").add_attribute(Attribute::Bold),
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Address").add_attribute(Attribute::Bold),
        ]);

        for hall in halls {
            table.add_row(vec![
                self.key_cell(&hall.club),
                Cell::new(hall.number.to_string()),
                Cell::new(truncate_text(&hall.name, 40)),
                Cell::new(truncate_text(&hall.address(), 60)),
            ]);
        }

        table.to_string()
    }

    fn key_cell(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(Color::Cyan)
        } else {
            Cell::new(text)
        }
    }

    /// Create a base table with common settings
    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if terminal supports colors
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

/// Truncate text to `max_chars` characters, marking the cut with "..."
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
