// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::value_objects::ProjectType;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Unknown project type '{value}'")]
    UnknownProjectType { value: String },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Project root must be absolute: {path}")]
    RelativeRoot { path: String },

    // ========================================================================
    // Malformed tree definitions
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Template '{project_type}' has no content")]
    EmptyTemplate { project_type: ProjectType },

    #[error("Duplicate entry in tree: {path}")]
    DuplicateEntry { path: String },

    #[error("Invalid entry name '{name}': {reason}")]
    InvalidEntryName { name: String, reason: String },

    #[error("Tree root must be a directory")]
    RootNotDirectory,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownProjectType { value } => {
                let mut out = vec![
                    format!("'{}' is not a supported project type", value),
                    "Supported types:".into(),
                ];
                out.extend(
                    ProjectType::ALL
                        .iter()
                        .map(|t| format!("  • {:<10} - {}", t.as_str(), t.summary())),
                );
                out.push("Example: mkwd my_api --type=api".into());
                out
            }
            Self::InvalidProjectName { .. } => vec![
                "The project name becomes a directory in the current folder".into(),
                "Do not use path separators, '.' or '..'".into(),
                "Examples: my_portfolio, my-api, \"My App\"".into(),
            ],
            Self::EmptyTemplate { project_type } => vec![
                format!("Template '{}' is corrupted", project_type),
                "Please report this issue or use a different project type".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownProjectType { .. } => ErrorCategory::Configuration,
            Self::InvalidProjectName { .. } | Self::RelativeRoot { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
