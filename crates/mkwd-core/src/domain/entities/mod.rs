pub mod project;
pub mod template;
pub mod tree;

pub use crate::domain::DomainError;
pub use project::{ProjectRoot, ProjectSpec};
pub use template::{Template, TemplateMetadata, TemplateNode};
pub use tree::{Entry, TreeNode};
