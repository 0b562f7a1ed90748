//! Update command - Replace a stored profile by id

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils::{self, StoreOptions};

/// Execute the update command
///
/// The whole record is replaced; there is no field-level merge.
pub fn execute(options: &StoreOptions, source: &str) -> Result<()> {
    let profile = utils::read_profile(source)?;
    let id = profile.id.clone();

    let mut repo = utils::open_repository(options)?;
    repo.update_profile(profile)
        .with_context(|| format!("Failed to update profile '{}'", id))?;

    println!("{} {}", "Updated:".green(), id);
    Ok(())
}
