//! Sample command - Add the built-in demonstration profile

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use uuid::Uuid;

use profile_store::profile::sample::sample_profile;

use super::utils::{self, StoreOptions};

/// Execute the sample command, returning the id that was used
pub fn execute(options: &StoreOptions, id: Option<String>) -> Result<String> {
    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut repo = utils::open_repository(options)?;
    repo.add_profile(sample_profile(id.clone()))
        .with_context(|| format!("Failed to add sample profile '{}'", id))?;

    println!("{} sample profile {}", "Added:".green(), id);
    Ok(id)
}
