//! Platform-specific paths and repository configuration

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Storage key the profile collection lives under unless overridden
pub const DEFAULT_KEY: &str = "profiles";

/// Get the profile-store data directory
/// - macOS: ~/Library/Application Support/profile-store/
/// - Linux: ~/.local/share/profile-store/
/// - Windows: %APPDATA%/profile-store/
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    Ok(base.join("profile-store"))
}

/// Get the default storage file (<data dir>/storage.json)
pub fn default_store_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("storage.json"))
}

/// How the collection is written under its key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Compact,
    Pretty,
}

/// Settings injected into a `ProfileRepository`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryConfig {
    /// Key holding the serialized collection
    pub key: String,

    /// Serialization style for writes
    pub format: Format,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY.to_string(),
            format: Format::Compact,
        }
    }
}
