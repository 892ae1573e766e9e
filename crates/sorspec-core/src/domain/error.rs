// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant except `DocumentOrder` is a validation failure: it is
/// reported before the filesystem is touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid mode: {mode}, available modes are: {available}")]
    InvalidMode { mode: String, available: String },

    #[error("invalid project path '{path}': {reason}")]
    InvalidProjectPath { path: String, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("no requirement named: '{id}'")]
    UnknownRequirement { id: String, available: Vec<String> },

    #[error("no core '{core}' available for layer '{layer}'")]
    UnknownCore { layer: String, core: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("config document order violated: {0}")]
    DocumentOrder(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidMode { available, .. } => vec![
                format!("Valid modes: {available}"),
                "Example: sorspec init my-app --mode dir".into(),
            ],
            Self::InvalidProjectPath { path, .. } => vec![
                format!("'{path}' does not name a directory"),
                "Pass a directory path such as ./my-app".into(),
            ],
            Self::UnknownRequirement { available, .. } => {
                let mut suggestions = vec!["Available requirements:".to_string()];
                for id in available {
                    suggestions.push(format!("  • {id}"));
                }
                suggestions.push("Try: sorspec list requirements".into());
                suggestions
            }
            Self::UnknownCore { layer, .. } => vec![
                format!("Pass a non-empty core name to --{layer}"),
                format!("Example: sorspec init my-app --{layer} <core>"),
            ],
            Self::DocumentOrder(_) => vec![
                "This appears to be a bug in sorspec".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidMode { .. } | Self::InvalidProjectPath { .. } => ErrorCategory::Validation,
            Self::UnknownRequirement { .. } | Self::UnknownCore { .. } => ErrorCategory::NotFound,
            Self::DocumentOrder(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
