//! Application layer for mkwd.
//!
//! This layer contains:
//! - **Services**: `StructureBuilder` (materialization) and `ScaffoldService`
//!   (resolve a template, then build it)
//! - **Ports**: traits the outside world implements (`Filesystem`,
//!   `TemplateCatalog`, `ProgressReporter`)
//! - **Errors**: orchestration failures
//!
//! Business rules stay in `crate::domain`; this layer sequences them.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CreatedEntry, MaterializeReport, PreparedBuild, ScaffoldService, StructureBuilder,
    TemplateInfo,
};

pub use ports::{Filesystem, NullReporter, ProgressReporter, TemplateCatalog};

pub use error::ApplicationError;
