//! Delete command - Remove profiles by id

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use super::utils::{self, StoreOptions};

/// Execute the delete command
pub fn execute(options: &StoreOptions, id: &str) -> Result<()> {
    let mut repo = utils::open_repository(options)?;
    let removed = repo
        .delete_profile(id)
        .with_context(|| format!("Failed to delete profile '{}'", id))?;

    match removed {
        0 => println!("{} no profile with id '{}'", "Warning:".yellow(), id),
        1 => println!("{} {}", "Deleted:".green(), id),
        n => println!("{} {} ({} records shared this id)", "Deleted:".green(), id, n),
    }

    Ok(())
}
