//! Scaffold Service - main application orchestrator.
//!
//! Coordinates the scaffolding workflow:
//! 1. Resolve the tree for the requested project type
//! 2. Hand it to the structure builder once
//!
//! It owns the catalog and filesystem ports; everything else is passed per
//! call.

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, ProgressReporter, TemplateCatalog},
        services::structure_builder::{MaterializeReport, StructureBuilder},
    },
    domain::{ProjectRoot, ProjectSpec, ProjectType, TreeNode},
    error::MkwdResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateInfo {
    pub project_type: ProjectType,
    pub name: String,
    pub description: String,
    pub version: String,
    pub files: usize,
    pub directories: usize,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    catalog: Box<dyn TemplateCatalog>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use mkwd_adapters::{InMemoryCatalog, LocalFilesystem};
    /// use mkwd_core::prelude::*;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(InMemoryCatalog::with_builtin()?),
    ///     Box::new(LocalFilesystem::new()),
    /// );
    /// ```
    pub fn new(catalog: Box<dyn TemplateCatalog>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            catalog,
            filesystem,
        }
    }

    /// Scaffold a new project at `root`.
    ///
    /// Exactly one call to the structure builder; pre-flight happens there.
    #[instrument(
        skip_all,
        fields(
            project = %spec.name,
            project_type = %spec.project_type,
            root = %root
        )
    )]
    pub fn scaffold(
        &self,
        spec: &ProjectSpec,
        root: &ProjectRoot,
        reporter: &dyn ProgressReporter,
    ) -> MkwdResult<MaterializeReport> {
        info!("Scaffolding {} project", spec.project_type);

        let tree = self.catalog.resolve(spec.project_type, &spec.name)?;
        info!(
            files = tree.file_count(),
            directories = tree.directory_count(),
            "Template resolved"
        );

        let report =
            StructureBuilder::new(self.filesystem.as_ref()).materialize(root, &tree, reporter)?;

        info!(
            files = report.file_count(),
            directories = report.directory_count(),
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    /// Resolve the tree for `spec` without touching the filesystem.
    pub fn preview(&self, spec: &ProjectSpec) -> MkwdResult<TreeNode> {
        self.catalog.resolve(spec.project_type, &spec.name)
    }

    /// Summaries of every template in the catalog, in catalog order.
    pub fn list_templates(&self) -> MkwdResult<Vec<TemplateInfo>> {
        let templates = self.catalog.list()?;

        Ok(templates
            .into_iter()
            .map(|t| TemplateInfo {
                project_type: t.project_type,
                files: t.file_count(),
                directories: t.directory_count(),
                name: t.metadata.name,
                description: t.metadata.description,
                version: t.metadata.version,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, NullReporter},
    };
    use crate::domain::{ProjectName, Template, TemplateMetadata, TemplateNode};

    fn readme(name: &str) -> String {
        format!("# {name}\n")
    }

    /// Single-entry catalog keyed by project type.
    struct FixedCatalog(Mutex<Vec<Template>>);

    impl FixedCatalog {
        fn new() -> Self {
            let api = Template::new(ProjectType::Api, TemplateMetadata::new("Test API"))
                .with_node(TemplateNode::dir("app", vec![TemplateNode::empty("main.py")]))
                .with_node(TemplateNode::generated("README.md", readme));
            Self(Mutex::new(vec![api]))
        }
    }

    impl TemplateCatalog for FixedCatalog {
        fn get(&self, project_type: ProjectType) -> MkwdResult<Template> {
            self.0
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.project_type == project_type)
                .cloned()
                .ok_or_else(|| ApplicationError::TemplateNotFound { project_type }.into())
        }

        fn list(&self) -> MkwdResult<Vec<Template>> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn insert(&self, template: Template) -> MkwdResult<()> {
            template.validate()?;
            self.0.lock().unwrap().push(template);
            Ok(())
        }
    }

    fn spec(name: &str, project_type: ProjectType) -> ProjectSpec {
        ProjectSpec::new(ProjectName::parse(name).unwrap(), project_type)
    }

    #[test]
    fn scaffold_resolves_then_builds_once() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(1).returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(FixedCatalog::new()), Box::new(fs));
        let spec = spec("demo", ProjectType::Api);
        let root = ProjectRoot::new(std::env::temp_dir(), &spec.name).unwrap();

        let report = service.scaffold(&spec, &root, &NullReporter).unwrap();

        assert_eq!(report.root, root.as_path());
        assert_eq!(report.file_count(), 2);
        assert_eq!(report.directory_count(), 1);
    }

    #[test]
    fn scaffold_missing_template_never_touches_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(FixedCatalog::new()), Box::new(fs));
        let spec = spec("demo", ProjectType::Portfolio);
        let root = ProjectRoot::new(std::env::temp_dir(), &spec.name).unwrap();

        let err = service.scaffold(&spec, &root, &NullReporter).unwrap_err();
        assert!(err.to_string().contains("portfolio"));
    }

    #[test]
    fn preview_renders_without_touching_filesystem() {
        let service = ScaffoldService::new(
            Box::new(FixedCatalog::new()),
            Box::new(MockFilesystem::new()),
        );
        let spec = spec("My App", ProjectType::Api);

        let previewed = service.preview(&spec).unwrap();

        assert_eq!(
            previewed.get("README.md").and_then(TreeNode::content),
            Some("# My App\n")
        );
    }

    #[test]
    fn list_templates_reports_counts() {
        let service = ScaffoldService::new(
            Box::new(FixedCatalog::new()),
            Box::new(MockFilesystem::new()),
        );

        let infos = service.list_templates().unwrap();

        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].project_type, ProjectType::Api);
        assert_eq!(infos[0].name, "Test API");
        assert_eq!(infos[0].version, "1.0.0");
        assert_eq!(infos[0].files, 2);
        assert_eq!(infos[0].directories, 1);
    }
}
