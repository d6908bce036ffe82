//! Error types for the ecobloom service.
//!
//! This module defines the error kinds that can surface while loading the
//! plant collection, mutating it, or serving it over HTTP.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the ecobloom service.
#[derive(Error, Debug)]
pub enum GardenError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No plant with the requested id exists in the collection.
    #[error("Plant not found: {id}")]
    PlantNotFound { id: u64 },

    /// The persisted plant document is missing, corrupt or unwritable.
    #[error("Plant store unavailable at {}: {message}", path.display())]
    StoreUnavailable { path: PathBuf, message: String },

    /// A request carried a value the catalog refuses to act on.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The store lock was poisoned by a panicking writer.
    #[error("{message}")]
    LockAcquisitionFailed { message: String },

    /// Generic application error with a custom message.
    #[error("{message}")]
    ApplicationError { message: String },

    /// Errors related to configuration.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl GardenError {
    pub(crate) fn store_unavailable(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        GardenError::StoreUnavailable {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        GardenError::InvalidInput {
            message: message.into(),
        }
    }
}
