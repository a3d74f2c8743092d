use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{ProjectName, ProjectType},
};

/// What the caller asked for: a name and a project type.
///
/// Immutable once constructed; both halves are validated by their own types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: ProjectName,
    pub project_type: ProjectType,
}

impl ProjectSpec {
    pub fn new(name: ProjectName, project_type: ProjectType) -> Self {
        Self { name, project_type }
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.project_type)
    }
}

/// Absolute location of the project directory: `<base>/<name>`.
///
/// Invariant: always absolute. The directory must not exist when
/// materialization starts; that check belongs to the structure builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot(PathBuf);

impl ProjectRoot {
    pub fn new(base: impl Into<PathBuf>, name: &ProjectName) -> Result<Self, DomainError> {
        let base = base.into();
        if !base.is_absolute() {
            return Err(DomainError::RelativeRoot {
                path: base.display().to_string(),
            });
        }
        Ok(Self(base.join(name.as_str())))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
