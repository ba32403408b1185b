//! Unified error handling for SolarFarm Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with a category and user-actionable suggestions.
//!
//! Rule violations on a candidate panel are *not* errors. They travel inside
//! [`crate::application::PanelResult`]. Everything here is a fault the caller
//! has to handle separately.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for SolarFarm Core operations.
#[derive(Debug, Error, Clone)]
pub enum SolarFarmError {
    /// Errors from the domain layer (parsing, malformed models).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage access, orchestration).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl SolarFarmError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    ///
    /// The service itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StoreLockError)
                | Self::Application(ApplicationError::DataAccess { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type SolarFarmResult<T> = Result<T, SolarFarmError>;
