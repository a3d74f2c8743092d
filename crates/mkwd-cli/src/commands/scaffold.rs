//! The `mkwd <PROJECT_NAME>` command.
//!
//! Responsibility: turn arguments and config into a `ProjectSpec` and a
//! `ProjectRoot`, call the core scaffold service, and display results. No
//! business logic lives here.

use std::env;

use tracing::{debug, info, instrument};

use mkwd_adapters::{InMemoryCatalog, LocalFilesystem};
use mkwd_core::prelude::*;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::{OutputManager, TerminalReporter, display_path},
};

/// Execute the command.
///
/// 1. Validate the name and parse the project type
/// 2. Resolve `<cwd>/<name>`
/// 3. Dry run: list what would be created and stop
/// 4. Scaffold with a terminal progress reporter
/// 5. Print the location and next steps
#[instrument(skip_all, fields(project = %cli.name))]
pub fn execute(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let name = ProjectName::parse(cli.name.as_str()).map_err(MkwdError::from)?;
    let project_type: ProjectType = config
        .project_type(cli.project_type.as_deref())
        .parse()
        .map_err(MkwdError::from)?;
    let spec = ProjectSpec::new(name, project_type);

    let cwd = env::current_dir().with_cli_context(|| "cannot determine the current directory")?;
    let root = ProjectRoot::new(cwd, &spec.name).map_err(MkwdError::from)?;
    debug!(%spec, %root, "Project resolved");

    let service = ScaffoldService::new(
        Box::new(InMemoryCatalog::with_builtin()?),
        Box::new(LocalFilesystem::new()),
    );

    if cli.dry_run {
        return dry_run(&service, &LocalFilesystem::new(), &spec, &root, output);
    }

    output.header(&format!(
        "🚀 Creating {} project: {}",
        spec.project_type, spec.name
    ))?;

    let reporter = TerminalReporter::new(output);
    let report = service.scaffold(&spec, &root, &reporter)?;
    info!(
        files = report.file_count(),
        directories = report.directory_count(),
        "Project created"
    );

    output.print("")?;
    output.success(&format!("Project '{}' created successfully!", spec.name))?;
    output.print("")?;
    output.print(&format!("📂 Location: {root}"))?;
    print_next_steps(&spec.name, output)?;

    Ok(())
}

fn dry_run(
    service: &ScaffoldService,
    filesystem: &dyn Filesystem,
    spec: &ProjectSpec,
    root: &ProjectRoot,
    output: &OutputManager,
) -> CliResult<()> {
    let tree = service.preview(spec)?;

    output.header(&format!(
        "🔍 Dry run: {} project '{}' at {}",
        spec.project_type, spec.name, root
    ))?;
    if let Some(info) = service
        .list_templates()?
        .into_iter()
        .find(|info| info.project_type == spec.project_type)
    {
        output.print(&format!(
            "  Template: {} v{} ({})",
            info.name, info.version, info.description
        ))?;
        output.print("")?;
    }
    for (path, node) in tree.walk() {
        output.print(&format!("  {}", display_path(&path, node.is_dir())))?;
    }
    output.print("")?;
    output.info(&format!(
        "Would create {} files and {} directories",
        tree.file_count(),
        tree.directory_count()
    ))?;

    // Same check pre-flight uses, so dangling symlinks count as present.
    if filesystem.exists(root.as_path()) {
        output.error(&format!(
            "Directory '{}' already exists; a real run would fail",
            spec.name
        ))?;
    }

    Ok(())
}

fn print_next_steps(name: &ProjectName, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.print("🎯 Next steps:")?;
    output.print(&format!("   cd {name}"))?;
    output.print("   python -m venv venv")?;
    output.print("   source venv/bin/activate  # On Windows: venv\\Scripts\\activate")?;
    output.print("   pip install -r requirements.txt")?;
    output.print("   python app/main.py")?;
    Ok(())
}
