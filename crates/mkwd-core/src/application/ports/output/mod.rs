//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mkwd-adapters` crate provides the filesystem and catalog
//! implementations; the CLI provides a terminal progress reporter.

use std::path::Path;

use crate::application::ApplicationError;
use crate::application::services::CreatedEntry;
use crate::domain::{ProjectName, ProjectType, Template, TreeNode};
use crate::error::MkwdResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mkwd_adapters::filesystem::LocalFilesystem` (production)
/// - `mkwd_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Failures are reported as `ApplicationError::FilesystemError` carrying the
/// underlying `io::ErrorKind`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> MkwdResult<()>;

    /// Create or fully replace a file with `content`.
    fn write_file(&self, path: &Path, content: &str) -> MkwdResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the template registry.
///
/// Implemented by:
/// - `mkwd_adapters::catalog::InMemoryCatalog` (built-in templates)
pub trait TemplateCatalog: Send + Sync {
    /// Get the definition registered for a project type.
    fn get(&self, project_type: ProjectType) -> MkwdResult<Template>;

    /// All registered definitions, in `ProjectType::ALL` order.
    fn list(&self) -> MkwdResult<Vec<Template>>;

    /// Insert or replace a definition. The template is validated first.
    fn insert(&self, template: Template) -> MkwdResult<()>;

    /// Render the tree for `project_type` and `name`.
    ///
    /// Pure given the catalog contents: equal inputs give equal trees.
    fn resolve(&self, project_type: ProjectType, name: &ProjectName) -> MkwdResult<TreeNode> {
        let template = self.get(project_type)?;
        if template.project_type != project_type {
            return Err(ApplicationError::TemplateNotFound { project_type }.into());
        }
        Ok(template.render(name))
    }
}

/// Port for progress notifications during materialization.
///
/// Called once per written file, in creation order.
pub trait ProgressReporter {
    fn created(&self, entry: &CreatedEntry);
}

impl<F> ProgressReporter for F
where
    F: Fn(&CreatedEntry),
{
    fn created(&self, entry: &CreatedEntry) {
        self(entry)
    }
}

/// Reporter that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl ProgressReporter for NullReporter {
    fn created(&self, _entry: &CreatedEntry) {}
}
