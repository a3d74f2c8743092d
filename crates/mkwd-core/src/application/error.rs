//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Business rule violations are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ProjectType;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The project root was already present at pre-flight.
    #[error("Project directory already exists: {path}")]
    ProjectExists { path: PathBuf },

    /// A filesystem primitive failed.
    #[error("Failed to {operation} {path}: {reason}")]
    FilesystemError {
        path: PathBuf,
        operation: &'static str,
        kind: io::ErrorKind,
        reason: String,
    },

    /// The catalog has no definition registered for this type.
    #[error("No template registered for project type '{project_type}'")]
    TemplateNotFound { project_type: ProjectType },

    /// Catalog access failed (lock poisoned).
    #[error("Template catalog error")]
    StoreLockError,
}

impl ApplicationError {
    /// Build a `FilesystemError` from an I/O error.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, err: &io::Error) -> Self {
        Self::FilesystemError {
            path: path.into(),
            operation,
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::FilesystemError { path, kind, .. } => {
                let mut out = vec![format!("Failed to access: {}", path.display())];
                match kind {
                    io::ErrorKind::PermissionDenied => {
                        out.push("Check that you have write permissions".into());
                    }
                    io::ErrorKind::StorageFull => out.push("Free up disk space".into()),
                    _ => out.push("Check that the parent directory is writable".into()),
                }
                out.push("Entries created before the failure were left in place".into());
                out
            }
            Self::TemplateNotFound { .. } => vec![
                "The template catalog is missing a built-in definition".into(),
                "This is a bug, please report it".into(),
            ],
            Self::StoreLockError => vec![
                "The template catalog is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::Conflict,
            Self::FilesystemError { .. } => ErrorCategory::Io,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
