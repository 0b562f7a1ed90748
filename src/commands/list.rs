//! List command - Show all stored profiles

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use profile_store::profile::Profile;

use super::utils::{self, StoreOptions};

/// Options for the list command
pub struct ListOptions {
    /// Emit the raw collection as JSON instead of a table
    pub json: bool,
}

/// Execute the list command and return formatted output
pub fn execute(store: &StoreOptions, options: ListOptions) -> Result<String> {
    let repo = utils::open_repository(store)?;
    let profiles = repo.get_all_profiles();

    tracing::debug!(count = profiles.len(), profiles = ?profiles, "all profiles");

    if options.json {
        return Ok(serde_json::to_string_pretty(profiles)?);
    }

    Ok(format_table(profiles))
}

/// Render profiles as a table, in stored order
fn format_table(profiles: &[Profile]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Profile"),
        Cell::new("Name"),
        Cell::new("Email"),
        Cell::new("Skills"),
        Cell::new("Updated"),
    ]);

    for profile in profiles {
        let profile_name = if profile.profile_name.is_empty() {
            "-".to_string()
        } else {
            profile.profile_name.clone()
        };

        table.add_row(vec![
            Cell::new(&profile.id),
            Cell::new(profile_name),
            Cell::new(profile.full_name()),
            Cell::new(&profile.basic_info.email),
            Cell::new(profile.skills.len()),
            Cell::new(
                profile
                    .last_updated
                    .as_ref()
                    .map(utils::format_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} profiles found", profiles.len()));
    output
}
