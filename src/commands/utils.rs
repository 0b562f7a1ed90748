//! Shared utilities for commands

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use profile_store::config::{self, RepositoryConfig};
use profile_store::profile::Profile;
use profile_store::repository::ProfileRepository;
use profile_store::storage::JsonFileStore;

/// Where and how the collection is stored, from global CLI options
#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    /// Storage file (defaults to the platform data dir)
    pub store: Option<PathBuf>,
    pub config: RepositoryConfig,
}

/// Open the repository backed by the storage file
pub fn open_repository(options: &StoreOptions) -> Result<ProfileRepository<JsonFileStore>> {
    let path = match &options.store {
        Some(p) => p.clone(),
        None => config::default_store_path()?,
    };

    ProfileRepository::open(JsonFileStore::new(&path), options.config.clone())
        .with_context(|| format!("Failed to load profiles from: {}", path.display()))
}

/// Read a profile as JSON from a file, or from stdin when `source` is "-"
pub fn read_profile(source: &str) -> Result<Profile> {
    let content = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read: {}", source))?
    };

    parse_profile(&content).with_context(|| format!("Failed to parse profile from: {}", source))
}

fn parse_profile(content: &str) -> Result<Profile> {
    Ok(serde_json::from_str(content)?)
}

/// Format a timestamp for table display
pub fn format_timestamp(ts: &chrono::DateTime<chrono::Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_profile_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
    "id": "1",
    "basicInfo": {{ "firstName": "Alice", "lastName": "Smith", "email": "a@x.com" }},
    "skills": [{{ "id": "s1", "name": "Rust" }}]
}}"#
        )
        .unwrap();

        let profile = read_profile(file.path().to_str().unwrap()).unwrap();
        assert_eq!(profile.id, "1");
        assert_eq!(profile.full_name(), "Alice Smith");
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn test_read_profile_missing_file() {
        let result = read_profile("/nonexistent/profile.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_profile_requires_basic_info() {
        let result = parse_profile(r#"{ "id": "1" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_timestamp() {
        let ts = chrono::DateTime::from_timestamp(0, 0).unwrap();
        assert_eq!(format_timestamp(&ts), "1970-01-01 00:00");
    }

    #[test]
    fn test_open_repository_empty_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let options = StoreOptions {
            store: Some(dir.path().join("storage.json")),
            config: RepositoryConfig::default(),
        };

        let repo = open_repository(&options).unwrap();
        assert!(repo.get_all_profiles().is_empty());
    }
}
