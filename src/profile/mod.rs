//! Profile records and their invariants

pub mod model;
pub mod sample;
pub mod validate;

// Re-exports for library consumers
pub use model::{
    BasicInfo, Certification, Education, Experience, Preferences, Profile, Project, Skill,
    SocialLinks,
};
pub use validate::{validate, ValidationError};
