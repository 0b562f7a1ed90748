//! Show command - Print one profile as JSON

use anyhow::{bail, Result};

use super::utils::{self, StoreOptions};

/// Execute the show command and return the pretty-printed profile
pub fn execute(options: &StoreOptions, id: &str) -> Result<String> {
    let repo = utils::open_repository(options)?;

    let Some(profile) = repo.get_profile_by_id(id) else {
        bail!("No profile with id '{}'", id);
    };

    Ok(serde_json::to_string_pretty(profile)?)
}
