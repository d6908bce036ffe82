//! Plant care tracking service library
//!
//! This library provides a plant catalog persisted as a single JSON document,
//! a personal garden of saved plants, and morning/evening watering tracking,
//! all exposed over a small HTTP API.

mod api;
mod catalog;
mod cli;
mod clock;
mod config;
mod errors;
mod helper;
mod plant;
mod seed;
mod storage;
mod types;

// Re-export key components
pub use api::*;
pub use catalog::*;
pub use cli::*;
pub use clock::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use plant::*;
pub use seed::*;
pub use storage::*;
pub use types::*;
