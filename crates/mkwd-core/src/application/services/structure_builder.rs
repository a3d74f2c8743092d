//! Structure Builder - turns a rendered tree into directories and files.
//!
//! ```text
//! Idle ──preflight()──► PreflightChecked ──materialize()──► Materializing ──► Done
//!   │                                                             │
//!   └─► Aborted(AlreadyExists)                                    └─► Aborted(IOError)
//! ```
//!
//! `PreflightChecked` is the [`PreparedBuild`] value: it can only be obtained
//! from a successful pre-flight and is consumed by `materialize`, so a build
//! runs at most once per check.
//!
//! There is no rollback. If a filesystem call fails, entries created before
//! it stay on disk and the error is returned as-is.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressReporter},
    },
    domain::{DomainValidator as validator, Entry, TreeNode},
    error::MkwdResult,
};

/// A created file, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEntry {
    pub path: PathBuf,
}

/// Outcome of a successful materialization.
///
/// `entries` holds every created file in creation order, which is the order
/// the files appear in `TreeNode::walk`. Directories are only counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub root: PathBuf,
    pub entries: Vec<CreatedEntry>,
    directories: usize,
}

impl MaterializeReport {
    fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: Vec::new(),
            directories: 0,
        }
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Directories created below the root.
    pub fn directory_count(&self) -> usize {
        self.directories
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|e| e.path.as_path())
    }
}

/// Materializes rendered trees through the [`Filesystem`] port.
pub struct StructureBuilder<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> StructureBuilder<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Single existence check of `root`. Performs no mutation.
    ///
    /// # Errors
    ///
    /// `ApplicationError::ProjectExists` if anything is already at `root`.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn preflight(&self, root: impl AsRef<Path>) -> MkwdResult<PreparedBuild<'a>> {
        let root = root.as_ref();

        if self.filesystem.exists(root) {
            debug!(phase = "aborted", reason = "already_exists", "Pre-flight failed");
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        debug!(phase = "preflight_checked", "Root is free");
        Ok(PreparedBuild {
            filesystem: self.filesystem,
            root: root.to_path_buf(),
        })
    }

    /// Validate `tree`, run pre-flight, then materialize.
    ///
    /// The tree is checked before the filesystem is consulted, so a malformed
    /// tree never causes a single call on the port.
    pub fn materialize(
        &self,
        root: impl AsRef<Path>,
        tree: &TreeNode,
        reporter: &dyn ProgressReporter,
    ) -> MkwdResult<MaterializeReport> {
        validator::validate_tree(tree)?;
        self.preflight(root)?.build(tree, reporter)
    }
}

/// A root that passed pre-flight and has not been built yet.
#[must_use = "a prepared build does nothing until `materialize` is called"]
pub struct PreparedBuild<'a> {
    filesystem: &'a dyn Filesystem,
    root: PathBuf,
}

impl std::fmt::Debug for PreparedBuild<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedBuild")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl PreparedBuild<'_> {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root, then every node of `tree` in declaration order.
    ///
    /// Each written file is reported to `reporter` and recorded in the
    /// returned report, in the same order.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    pub fn materialize(
        self,
        tree: &TreeNode,
        reporter: &dyn ProgressReporter,
    ) -> MkwdResult<MaterializeReport> {
        validator::validate_tree(tree)?;
        self.build(tree, reporter)
    }

    fn build(
        self,
        tree: &TreeNode,
        reporter: &dyn ProgressReporter,
    ) -> MkwdResult<MaterializeReport> {
        debug!(phase = "materializing", "Creating project root");
        let mut report = MaterializeReport::new(self.root.clone());

        let result = self.filesystem.create_dir_all(&self.root).and_then(|()| {
            self.build_entries(tree.entries(), Path::new(""), reporter, &mut report)
        });

        match result {
            Ok(()) => {
                debug!(
                    phase = "done",
                    directories = report.directory_count(),
                    files = report.file_count(),
                    "Materialization complete"
                );
                Ok(report)
            }
            Err(e) => {
                warn!(
                    phase = "aborted",
                    files = report.file_count(),
                    directories = report.directory_count(),
                    error = %e,
                    "Materialization aborted; created entries were left in place"
                );
                Err(e)
            }
        }
    }

    fn build_entries(
        &self,
        entries: &[Entry],
        relative: &Path,
        reporter: &dyn ProgressReporter,
        report: &mut MaterializeReport,
    ) -> MkwdResult<()> {
        for entry in entries {
            let relative = relative.join(&entry.name);
            let absolute = self.root.join(&relative);

            match &entry.node {
                TreeNode::Directory(children) => {
                    self.filesystem.create_dir_all(&absolute)?;
                    report.directories += 1;
                    self.build_entries(children, &relative, reporter, report)?;
                }
                TreeNode::File(content) => {
                    if let Some(parent) = absolute.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&absolute, content)?;
                    let entry = CreatedEntry { path: relative };
                    reporter.created(&entry);
                    report.entries.push(entry);
                }
            }
        }
        Ok(())
    }
}
