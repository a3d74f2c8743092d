//! Application services - orchestrate use cases.
//!
//! `StructureBuilder` is the generic materializer; `ScaffoldService` wires a
//! catalog to it for the "create a project" use case.

pub mod scaffold_service;
pub mod structure_builder;

pub use scaffold_service::{ScaffoldService, TemplateInfo};
pub use structure_builder::{
    CreatedEntry, MaterializeReport, PreparedBuild, StructureBuilder,
};
