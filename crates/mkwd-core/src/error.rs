//! Unified error handling for mkwd Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for mkwd Core operations.
///
/// Every variant is terminal for the invocation that produced it; nothing in
/// the core retries.
#[derive(Debug, Error, Clone)]
pub enum MkwdError {
    /// Errors from the domain layer (validation, unknown project type).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pre-flight, filesystem).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl MkwdError {
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
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` when the project root was already present at pre-flight.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::ProjectExists { .. }))
    }

    /// `true` when a filesystem call failed mid-materialization.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::FilesystemError { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Configuration,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type MkwdResult<T> = Result<T, MkwdError>;
