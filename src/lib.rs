//! profile-store library
//!
//! Keeps personal resume profiles (contact details, skills, experience,
//! education) as one collection under a single key of a key-value store.
//!
//! ```no_run
//! use profile_store::config::RepositoryConfig;
//! use profile_store::profile::Profile;
//! use profile_store::repository::ProfileRepository;
//! use profile_store::storage::JsonFileStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = JsonFileStore::new("storage.json");
//! let mut repo = ProfileRepository::open(store, RepositoryConfig::default())?;
//! repo.add_profile(Profile::new("1", "Alice", "Smith", "alice@example.com"))?;
//! assert!(repo.get_profile_by_id("1").is_some());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod profile;
pub mod repository;
pub mod storage;
