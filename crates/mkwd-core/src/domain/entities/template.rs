//! Template definitions: the declarative layout of one project type.
//!
//! ```text
//! Template
//! ├── project_type   which `--type` this answers to
//! ├── metadata       display name, description, version, tags
//! └── tree           Vec<TemplateNode>
//!      ├── File(FileSpec)            name + TemplateContent
//!      └── Directory(DirectorySpec)  name + children
//! ```
//!
//! A template is inert data. `render` turns it into a [`TreeNode`] for one
//! project name; the only place the name can appear in output is a
//! [`TemplateContent::Generated`] leaf.

use std::collections::HashSet;
use std::fmt;

use super::tree::{Entry, TreeNode, validate_entry_name};
use crate::domain::{
    error::DomainError,
    value_objects::{ProjectName, ProjectType},
};

// ============================================================================
// Template Aggregate
// ============================================================================

/// A registered project layout.
///
/// ## Invariants (enforced by `validate()`)
///
/// 1. `metadata.name` is non-empty
/// 2. `tree` is non-empty
/// 3. Every entry name is a single path component
/// 4. Sibling names are unique at every level
#[derive(Debug, Clone)]
pub struct Template {
    pub project_type: ProjectType,
    pub metadata: TemplateMetadata,
    pub tree: Vec<TemplateNode>,
}

impl Template {
    pub fn new(project_type: ProjectType, metadata: TemplateMetadata) -> Self {
        Self {
            project_type,
            metadata,
            tree: Vec::new(),
        }
    }

    /// Append a top-level node (keeps insertion order).
    pub fn with_node(mut self, node: TemplateNode) -> Self {
        self.tree.push(node);
        self
    }

    /// Replace the whole tree.
    pub fn with_tree(mut self, tree: Vec<TemplateNode>) -> Self {
        self.tree = tree;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.metadata.name.trim().is_empty() {
            return Err(DomainError::InvalidTemplate(
                "Metadata name cannot be empty".into(),
            ));
        }

        if self.tree.is_empty() {
            return Err(DomainError::EmptyTemplate {
                project_type: self.project_type,
            });
        }

        validate_nodes(&self.tree, "")
    }

    /// Produce the concrete tree for `name`.
    ///
    /// Generated leaves run once per call, so two renders with the same name
    /// are equal.
    pub fn render(&self, name: &ProjectName) -> TreeNode {
        TreeNode::Directory(render_nodes(&self.tree, name.as_str()))
    }

    /// Number of files the rendered tree will contain.
    pub fn file_count(&self) -> usize {
        self.tree.iter().map(TemplateNode::file_count).sum()
    }

    /// Number of directories the rendered tree will contain, root excluded.
    pub fn directory_count(&self) -> usize {
        self.tree.iter().map(TemplateNode::directory_count).sum()
    }
}

fn validate_nodes(nodes: &[TemplateNode], prefix: &str) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for node in nodes {
        let name = node.name();
        validate_entry_name(name)?;

        let path = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        };

        if !seen.insert(name) {
            return Err(DomainError::DuplicateEntry { path });
        }

        if let TemplateNode::Directory(dir) = node {
            validate_nodes(&dir.children, &path)?;
        }
    }
    Ok(())
}

fn render_nodes(nodes: &[TemplateNode], project_name: &str) -> Vec<Entry> {
    nodes
        .iter()
        .map(|node| match node {
            TemplateNode::File(file) => {
                Entry::new(&file.name, TreeNode::File(file.content.render(project_name)))
            }
            TemplateNode::Directory(dir) => Entry::new(
                &dir.name,
                TreeNode::Directory(render_nodes(&dir.children, project_name)),
            ),
        })
        .collect()
}

// ============================================================================
// Template Metadata
// ============================================================================

/// Human-readable information about a template.
///
/// - `name`: short display name (e.g., "FastAPI Portfolio")
/// - `description`: one line for listings
/// - `tags`: search keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub tags: Vec<String>,
}

impl TemplateMetadata {
    /// Create metadata with a display name; `version` defaults to "1.0.0".
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            version: "1.0.0".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// Template Nodes
// ============================================================================

/// A single node in a template tree: either a file or a directory.
#[derive(Debug, Clone)]
pub enum TemplateNode {
    File(FileSpec),
    Directory(DirectorySpec),
}

impl TemplateNode {
    /// Directory with children.
    pub fn dir(name: impl Into<String>, children: Vec<TemplateNode>) -> Self {
        Self::Directory(DirectorySpec {
            name: name.into(),
            children,
        })
    }

    /// Directory with no children.
    pub fn empty_dir(name: impl Into<String>) -> Self {
        Self::dir(name, Vec::new())
    }

    pub fn file(name: impl Into<String>, content: TemplateContent) -> Self {
        Self::File(FileSpec {
            name: name.into(),
            content,
        })
    }

    /// Zero-byte file.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::file(name, TemplateContent::Empty)
    }

    pub fn literal(name: impl Into<String>, text: &'static str) -> Self {
        Self::file(name, TemplateContent::Literal(text))
    }

    /// File whose body is computed from the project name.
    pub fn generated(name: impl Into<String>, generator: fn(&str) -> String) -> Self {
        Self::file(name, TemplateContent::Generated(generator))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File(f) => &f.name,
            Self::Directory(d) => &d.name,
        }
    }

    fn file_count(&self) -> usize {
        match self {
            Self::File(_) => 1,
            Self::Directory(d) => d.children.iter().map(Self::file_count).sum(),
        }
    }

    fn directory_count(&self) -> usize {
        match self {
            Self::File(_) => 0,
            Self::Directory(d) => 1 + d.children.iter().map(Self::directory_count).sum::<usize>(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSpec {
    pub name: String,
    pub content: TemplateContent,
}

#[derive(Debug, Clone)]
pub struct DirectorySpec {
    pub name: String,
    pub children: Vec<TemplateNode>,
}

// ============================================================================
// Content Types
// ============================================================================

/// Content specification for a file.
///
/// `Generated` holds a plain function pointer: it cannot capture state, so
/// the output depends on the project name alone.
#[derive(Clone, Copy)]
pub enum TemplateContent {
    Empty,
    Literal(&'static str),
    Generated(fn(&str) -> String),
}

impl TemplateContent {
    pub fn render(&self, project_name: &str) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Literal(text) => (*text).to_string(),
            Self::Generated(generator) => generator(project_name),
        }
    }
}

impl fmt::Debug for TemplateContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Literal(text) => write!(f, "Literal({} bytes)", text.len()),
            Self::Generated(_) => f.write_str("Generated(<fn>)"),
        }
    }
}
