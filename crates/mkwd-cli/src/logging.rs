//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `mkwd-core` and
//! `mkwd-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::GlobalArgs, config::AppConfig};

/// Initialise the global tracing subscriber. Logs go to stderr so stdout
/// stays reserved for the progress listing.
pub fn init_logging(args: &GlobalArgs, config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args.verbose))));

    let use_ansi = use_ansi(args, config, std::io::stderr().is_terminal());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// ANSI only on a terminal, and never once colour is disabled by flag or
/// config.
fn use_ansi(args: &GlobalArgs, config: &AppConfig, stderr_is_terminal: bool) -> bool {
    !args.no_color && !config.output.no_color && stderr_is_terminal
}

/// Translate the verbosity counter to a level string.
fn derive_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Same level for the binary and both library crates.
fn filter_directives(level: &str) -> String {
    format!("mkwd={level},mkwd_core={level},mkwd_adapters={level}")
}
