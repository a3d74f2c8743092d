//! Application ports (traits) for external dependencies.
//!
//! Driven ports only: the application calls them, `mkwd-adapters` and the CLI
//! implement them.
//!
//! - `Filesystem`: the three primitives materialization needs
//! - `TemplateCatalog`: registry of project-type definitions
//! - `ProgressReporter`: per-file creation notifications

pub mod output;

pub use output::{Filesystem, NullReporter, ProgressReporter, TemplateCatalog};

#[cfg(test)]
pub use output::MockFilesystem;
