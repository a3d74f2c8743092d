//! In-memory template catalog with built-in templates.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use tracing::debug;

use mkwd_core::{
    application::{ApplicationError, ports::TemplateCatalog},
    domain::{DomainValidator as validator, ProjectType, Template},
    error::MkwdResult,
};

use crate::builtin_templates;

/// Thread-safe registry of templates keyed by project type.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<HashMap<ProjectType, Template>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in templates loaded.
    pub fn with_builtin() -> MkwdResult<Self> {
        let catalog = Self::new();
        for template in builtin_templates::all_templates() {
            catalog.insert(template)?;
        }
        debug!(count = catalog.len(), "Built-in templates registered");
        Ok(catalog)
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateCatalog for InMemoryCatalog {
    fn get(&self, project_type: ProjectType) -> MkwdResult<Template> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(&project_type)
            .cloned()
            .ok_or_else(|| ApplicationError::TemplateNotFound { project_type }.into())
    }

    fn list(&self) -> MkwdResult<Vec<Template>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(ProjectType::ALL
            .iter()
            .filter_map(|ty| inner.get(ty).cloned())
            .collect())
    }

    fn insert(&self, template: Template) -> MkwdResult<()> {
        // Validate before insertion
        validator::validate_template(&template)?;

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.insert(template.project_type, template);
        Ok(())
    }
}
