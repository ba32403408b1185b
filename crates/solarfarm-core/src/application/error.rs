//! Application layer errors.
//!
//! These errors represent failures in orchestration and storage access, not
//! business rules. Rule violations are `PanelViolation`s from
//! `crate::domain`.

use thiserror::Error;

use crate::domain::PanelKey;
use crate::error::ErrorCategory;

/// Errors that occur while talking to the storage collaborator.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The repository could not complete a lookup or a write.
    #[error("Data access failed during {operation}: {reason}")]
    DataAccess {
        operation: &'static str,
        reason: String,
    },

    /// Store access failed (lock poisoned, etc.).
    #[error("Panel store error")]
    StoreLockError,

    /// The store refused a write that would break key uniqueness.
    #[error("Storage rejected duplicate key: {key}")]
    DuplicateKey { key: PanelKey },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DataAccess { operation, .. } => vec![
                format!("The panel store failed during '{}'", operation),
                "Check the store is reachable and try again".into(),
            ],
            Self::StoreLockError => vec![
                "The panel store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::DuplicateKey { key } => vec![
                format!("A panel already occupies {}", key),
                "Another writer may have added it concurrently".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DataAccess { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::DuplicateKey { .. } => ErrorCategory::Conflict,
        }
    }
}
