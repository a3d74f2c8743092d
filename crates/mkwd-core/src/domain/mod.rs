//! Core domain layer for mkwd.
//!
//! Pure data and rules: project names and types, template definitions and
//! the rendered tree. No filesystem access happens here; materialization is
//! driven through ports defined in the application layer.
//!
//! - **No I/O**: nothing in this module touches the disk
//! - **Validated at construction**: `ProjectName`, `ProjectRoot`
//! - **Cloneable values**: every entity is `Clone`

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

pub use entities::{
    project::{ProjectRoot, ProjectSpec},
    template::{
        DirectorySpec, FileSpec, Template, TemplateContent, TemplateMetadata, TemplateNode,
    },
    tree::{Entry, TreeNode},
};

pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{ProjectName, ProjectType};
