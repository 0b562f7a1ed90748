//! Add command - Store a new profile read from JSON

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils::{self, StoreOptions};

/// Execute the add command
pub fn execute(options: &StoreOptions, source: &str) -> Result<()> {
    let profile = utils::read_profile(source)?;
    let id = profile.id.clone();
    let name = profile.full_name();

    let mut repo = utils::open_repository(options)?;
    repo.add_profile(profile)
        .with_context(|| format!("Failed to add profile '{}'", id))?;

    println!("{} {} ({})", "Added:".green(), id, name);
    Ok(())
}
