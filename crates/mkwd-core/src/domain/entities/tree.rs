use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::error::DomainError;

/// A fully rendered project layout, ready for materialization.
///
/// This is the output of resolving a template for a project name. File
/// contents are final text; directory entries keep the order the catalog
/// declared them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(Vec<Entry>),
    File(String),
}

/// A named child of a directory node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub node: TreeNode,
}

impl Entry {
    pub fn new(name: impl Into<String>, node: TreeNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

impl TreeNode {
    /// Empty directory node.
    pub fn dir() -> Self {
        Self::Directory(Vec::new())
    }

    /// File node with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        Self::File(content.into())
    }

    /// Fluent child insertion; no-op on file nodes.
    pub fn with(mut self, name: impl Into<String>, node: TreeNode) -> Self {
        if let Self::Directory(entries) = &mut self {
            entries.push(Entry::new(name, node));
        }
        self
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Children of a directory (empty for files).
    pub fn entries(&self) -> &[Entry] {
        match self {
            Self::Directory(entries) => entries,
            Self::File(_) => &[],
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File(content) => Some(content),
            Self::Directory(_) => None,
        }
    }

    /// Number of file nodes in this subtree.
    pub fn file_count(&self) -> usize {
        match self {
            Self::File(_) => 1,
            Self::Directory(entries) => entries.iter().map(|e| e.node.file_count()).sum(),
        }
    }

    /// Number of directory nodes in this subtree, including `self`.
    pub fn directory_count(&self) -> usize {
        match self {
            Self::File(_) => 0,
            Self::Directory(entries) => {
                1 + entries
                    .iter()
                    .map(|e| e.node.directory_count())
                    .sum::<usize>()
            }
        }
    }

    /// Every descendant with its path relative to this node, pre-order,
    /// in declaration order.
    pub fn walk(&self) -> Vec<(PathBuf, &TreeNode)> {
        let mut out = Vec::new();
        collect_descendants(self, Path::new(""), &mut out);
        out
    }

    /// Look up a descendant by relative path.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&TreeNode> {
        let mut current = self;
        for component in path.as_ref().components() {
            let Component::Normal(name) = component else {
                return None;
            };
            current = current
                .entries()
                .iter()
                .find(|e| std::ffi::OsStr::new(&e.name) == name)
                .map(|e| &e.node)?;
        }
        Some(current)
    }

    /// Check the invariants the structure builder relies on.
    ///
    /// 1. The root is a directory
    /// 2. Every entry name is exactly one normal path component
    /// 3. Sibling names are unique
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.is_dir() {
            return Err(DomainError::RootNotDirectory);
        }
        validate_entries(self.entries(), Path::new(""))
    }
}

fn collect_descendants<'a>(
    node: &'a TreeNode,
    prefix: &Path,
    out: &mut Vec<(PathBuf, &'a TreeNode)>,
) {
    for entry in node.entries() {
        let path = prefix.join(&entry.name);
        out.push((path.clone(), &entry.node));
        collect_descendants(&entry.node, &path, out);
    }
}

fn validate_entries(entries: &[Entry], prefix: &Path) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for entry in entries {
        validate_entry_name(&entry.name)?;

        let path = prefix.join(&entry.name);
        if !seen.insert(entry.name.as_str()) {
            return Err(DomainError::DuplicateEntry {
                path: path.display().to_string(),
            });
        }

        validate_entries(entry.node.entries(), &path)?;
    }
    Ok(())
}

/// An entry name must be a single, normal path component.
pub(crate) fn validate_entry_name(name: &str) -> Result<(), DomainError> {
    let reject = |reason: &str| DomainError::InvalidEntryName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.is_empty() {
        return Err(reject("name cannot be empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(reject("name cannot contain path separators"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(reject("name must be a single relative path component")),
    }
}
