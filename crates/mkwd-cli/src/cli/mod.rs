//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names and help
//! text. The project type stays a plain string here; the core parses it so
//! an unknown value surfaces as a configuration error rather than a usage
//! error.

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "mkwd",
    bin_name = "mkwd",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Make Web Development Project - Scaffold professional web projects",
    long_about = "mkwd creates a ready-to-edit FastAPI project skeleton \
                  (packages, static assets, HTML templates, Docker files) \
                  in a new directory under the current working directory.",
    after_help = "PROJECT TYPES:\n\
        \x20 portfolio   FastAPI web app with pages, static assets and Docker (default)\n\
        \x20 api         Minimal FastAPI service with database and tests\n\
        \x20 fullstack   Full-stack web app (same layout as portfolio)\n\n\
        EXAMPLES:\n\
        \x20 mkwd my-site\n\
        \x20 mkwd my-api --type api\n\
        \x20 mkwd my-app --type fullstack --dry-run",
)]
pub struct Cli {
    /// Name of the project to create; also the new directory's name.
    #[arg(value_name = "PROJECT_NAME", help = "Name of the project to create")]
    pub name: String,

    /// Project type. Falls back to the config file, then `portfolio`.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        help = "Type of project to create: portfolio, api or fullstack (default: portfolio)"
    )]
    pub project_type: Option<String>,

    /// Preview what would be created without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[command(flatten)]
    pub global: GlobalArgs,
}
