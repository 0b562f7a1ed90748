//! CLI commands

pub mod add;
pub mod delete;
pub mod list;
pub mod sample;
pub mod show;
pub mod update;
pub mod utils;
