//! Application layer errors.
//!
//! These errors represent failures while building and writing a document,
//! not validation failures. Validation errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A requirement's default configuration could not be read.
    #[error("could not get default config for {id}: {reason}")]
    ConfigUnavailable { id: String, reason: String },

    /// A requirement's default configuration is not YAML-like text.
    #[error("default config for {id} is malformed: {reason}")]
    Malformed { id: String, reason: String },

    /// Serializing the document into the output buffer failed.
    #[error("rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("filesystem state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigUnavailable { id, .. } => vec![
                format!("The resources for '{id}' could not be read"),
                "Set SORSPEC_RESOURCE_DIR to the directory holding requirement/".into(),
                "Or set resources.dir in the sorspec config file".into(),
            ],
            Self::Malformed { id, .. } => vec![
                format!("Check the default config file of '{id}'"),
                "It must be non-empty UTF-8 text".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "A partially initialised directory may remain; remove it before retrying".into(),
            ],
            Self::LockPoisoned | Self::RenderingFailed { .. } => vec![
                "This appears to be a bug in sorspec".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigUnavailable { .. } | Self::Malformed { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::RenderingFailed { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }

    /// Identifier of the requirement a build-time failure belongs to.
    pub fn requirement(&self) -> Option<&str> {
        match self {
            Self::ConfigUnavailable { id, .. } | Self::Malformed { id, .. } => Some(id),
            _ => None,
        }
    }
}
