//! Terminal output.
//!
//! Everything the user is meant to read goes to stdout through
//! [`OutputManager`]; logs and errors go to stderr.

use std::io::{self, IsTerminal};
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;

use mkwd_core::prelude::{CreatedEntry, ProgressReporter};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Writes styled lines to stdout.
pub struct OutputManager {
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Colour is off when asked for by flag or config, or when stdout is not
    /// a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// `✅ <msg>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("✅ {msg}")
        } else {
            format!("✅ {}", msg.green().bold())
        };
        self.term.write_line(&line)
    }

    /// `❌ <msg>`
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("❌ {msg}")
        } else {
            format!("❌ {}", msg.red())
        };
        self.term.write_line(&line)
    }

    /// `ℹ <msg>`
    pub fn info(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// `  ✓ Created: <path>` for one file written by a running scaffold.
    pub fn created(&self, path: &Path) -> io::Result<()> {
        let shown = display_path(path, false);
        let line = if self.no_color {
            format!("  \u{2713} Created: {shown}")
        } else {
            format!("  {} Created: {}", "\u{2713}".green().bold(), shown)
        };
        self.term.write_line(&line)
    }
}

/// Relative path with forward slashes; directories get a trailing `/`.
pub fn display_path(path: &Path, is_dir: bool) -> String {
    let mut shown = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    if is_dir {
        shown.push('/');
    }
    shown
}

/// Prints each file as it lands on disk.
pub struct TerminalReporter<'a> {
    output: &'a OutputManager,
}

impl<'a> TerminalReporter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self { output }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn created(&self, entry: &CreatedEntry) {
        // Progress is informational; a closed stdout must not abort the build.
        if let Err(e) = self.output.created(&entry.path) {
            tracing::debug!(error = %e, "progress line dropped");
        }
    }
}
