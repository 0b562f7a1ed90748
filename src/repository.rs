//! Profile repository
//!
//! Owns the loaded profile collection and persists it, whole, under a single
//! storage key after every mutation. Concurrent writers are not coordinated:
//! the last write wins.

use chrono::Utc;
use thiserror::Error;

use crate::config::{Format, RepositoryConfig};
use crate::profile::{validate, Profile, ValidationError};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to serialize profiles")]
    Serialize(#[source] serde_json::Error),

    #[error("value under key '{key}' is not a list of profiles")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid profile")]
    Invalid(#[from] ValidationError),

    #[error("a profile with id '{0}' already exists")]
    DuplicateId(String),

    #[error("no profile with id '{0}'")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// CRUD access to the profile collection
#[derive(Debug)]
pub struct ProfileRepository<S> {
    store: S,
    config: RepositoryConfig,
    profiles: Vec<Profile>,
}

impl<S: KeyValueStore> ProfileRepository<S> {
    /// Load the collection under `config.key`; an unset key is an empty collection
    pub fn open(store: S, config: RepositoryConfig) -> Result<Self> {
        let profiles = load(&store, &config.key)?;
        Ok(Self {
            store,
            config,
            profiles,
        })
    }

    /// Discard the in-memory collection and read it again from storage
    pub fn reload(&mut self) -> Result<()> {
        self.profiles = load(&self.store, &self.config.key)?;
        Ok(())
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Give back the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Append a new profile. Ids must be unique within the collection.
    pub fn add_profile(&mut self, mut profile: Profile) -> Result<()> {
        validate(&profile)?;

        if self.profiles.iter().any(|p| p.id == profile.id) {
            return Err(StoreError::DuplicateId(profile.id));
        }

        profile.last_updated = Some(Utc::now());
        let id = profile.id.clone();

        let mut next = self.profiles.clone();
        next.push(profile);
        self.commit(next)?;

        tracing::info!(id = %id, "added profile");
        Ok(())
    }

    /// Every profile, in insertion order
    pub fn get_all_profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// First profile with a matching id
    pub fn get_profile_by_id(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    /// Replace every profile sharing `updated.id`, keeping positions
    pub fn update_profile(&mut self, mut updated: Profile) -> Result<()> {
        validate(&updated)?;

        if !self.profiles.iter().any(|p| p.id == updated.id) {
            return Err(StoreError::NotFound(updated.id));
        }

        updated.last_updated = Some(Utc::now());

        let next: Vec<Profile> = self
            .profiles
            .iter()
            .map(|p| {
                if p.id == updated.id {
                    updated.clone()
                } else {
                    p.clone()
                }
            })
            .collect();
        self.commit(next)?;

        tracing::info!(id = %updated.id, "updated profile");
        Ok(())
    }

    /// Remove every profile with a matching id. Returns how many were removed.
    pub fn delete_profile(&mut self, id: &str) -> Result<usize> {
        let next: Vec<Profile> = self
            .profiles
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();

        let removed = self.profiles.len() - next.len();
        if removed == 0 {
            return Ok(0);
        }

        self.commit(next)?;

        tracing::info!(id, removed, "deleted profile");
        Ok(removed)
    }

    /// Write `next` in full, then adopt it. A failed write changes nothing.
    fn commit(&mut self, next: Vec<Profile>) -> Result<()> {
        let encoded = match self.config.format {
            Format::Compact => serde_json::to_string(&next),
            Format::Pretty => serde_json::to_string_pretty(&next),
        }
        .map_err(StoreError::Serialize)?;

        self.store.set(&self.config.key, encoded)?;
        tracing::debug!(key = %self.config.key, count = next.len(), "persisted profiles");

        self.profiles = next;
        Ok(())
    }
}

fn load<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<Profile>> {
    let profiles = match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })?,
        None => Vec::new(),
    };

    tracing::debug!(key, count = profiles.len(), "loaded profiles");
    Ok(profiles)
}
