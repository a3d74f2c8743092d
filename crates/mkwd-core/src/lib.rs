//! mkwd Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `mkwd`
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             mkwd-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, StructureBuilder)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateCatalog, Progress) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mkwd-adapters (Infrastructure)      │
//! │ (InMemoryCatalog, LocalFilesystem, ...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, Template, TreeNode)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mkwd_core::prelude::*;
//!
//! let spec = ProjectSpec::new(ProjectName::parse("demo")?, "api".parse()?);
//! let root = ProjectRoot::new(std::env::current_dir()?, &spec.name)?;
//!
//! // Adapters are injected by the caller.
//! let service = ScaffoldService::new(catalog, filesystem);
//! let report = service.scaffold(&spec, &root, &NullReporter)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CreatedEntry, MaterializeReport, NullReporter, ScaffoldService,
        StructureBuilder, TemplateInfo,
        ports::{Filesystem, ProgressReporter, TemplateCatalog},
    };
    pub use crate::domain::{
        ProjectName, ProjectRoot, ProjectSpec, ProjectType, Template, TemplateContent,
        TemplateMetadata, TemplateNode, TreeNode,
    };
    pub use crate::error::{MkwdError, MkwdResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
