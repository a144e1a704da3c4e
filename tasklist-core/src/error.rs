//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::TaskId;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The backing medium could not be opened, created or migrated
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A read or write failed after the store was opened
    #[error("Storage error: {0}")]
    StorageError(String),

    /// The entry is not owned by the task list
    #[error("Invalid entry: {0}")]
    InvalidEntry(TaskId),

    /// The task text already exists and duplicates are rejected
    #[error("Duplicate task: {0}")]
    DuplicateTask(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, misconfiguration, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DuplicateTask(_) | Self::ValidationError(_) | Self::ConfigError(_) => true,
            Self::StorageUnavailable(_) | Self::StorageError(_) | Self::InvalidEntry(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
