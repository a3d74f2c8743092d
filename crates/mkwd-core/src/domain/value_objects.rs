//! Domain value objects: ProjectType and ProjectName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! are validated at construction so everything downstream of a
//! `ProjectName` or `ProjectType` can trust its contents.
//!
//! # Adding New Project Types
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `summary` and `FromStr` arms here
//! 3. Register a template for it in `mkwd-adapters::builtin_templates`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ProjectType ───────────────────────────────────────────────────────────────

/// The kind of project to scaffold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    Portfolio,
    Api,
    Fullstack,
}

impl ProjectType {
    /// Every project type, in display order.
    pub const ALL: [ProjectType; 3] = [Self::Portfolio, Self::Api, Self::Fullstack];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Api => "api",
            Self::Fullstack => "fullstack",
        }
    }

    /// One-line description used in help text and error suggestions.
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Portfolio => "FastAPI web app with pages, static assets and Docker",
            Self::Api => "Minimal FastAPI service with database and tests",
            Self::Fullstack => "Full-stack web app (same layout as portfolio)",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portfolio" => Ok(Self::Portfolio),
            "api" => Ok(Self::Api),
            "fullstack" => Ok(Self::Fullstack),
            _ => Err(DomainError::UnknownProjectType { value: s.into() }),
        }
    }
}

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// The name doubles as the display name and as the root directory name, so it
/// must be exactly one path component. Spaces and non-ASCII characters are
/// kept verbatim; anything that could steer the root outside the working
/// directory is rejected instead of escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a user-supplied name.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        let reject = |reason: &str| DomainError::InvalidProjectName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.trim().is_empty() {
            return Err(reject("name cannot be empty"));
        }
        if name == "." || name == ".." {
            return Err(reject("name cannot be '.' or '..'"));
        }
        if name.starts_with('.') {
            return Err(reject("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(reject("name cannot contain path separators"));
        }
        if name.chars().any(char::is_control) {
            return Err(reject("name cannot contain control characters"));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
