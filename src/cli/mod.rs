//! CLI module for nextname
//!
//! ## Commands
//!
//! - `next <TEMPLATE>` - Print the next available name for a template
//! - `check <TEMPLATE>` - Show how a template is read and report rejected directives
//! - `schemes` - List numbering selectors
//! - `encode <SELECTOR> <ORDINAL>` / `decode <SELECTOR> <TEXT>` - Convert through a single scheme
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::RenameConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Pick the next available name in a numbered series
#[derive(Parser, Debug)]
#[command(name = "nextname")]
#[command(version = VERSION)]
#[command(about = "Pick the next available name in a numbered series", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the next available name for a template
    Next {
        /// Template such as "Probe %R" or "Relay %03d"
        #[arg(value_name = "TEMPLATE", allow_hyphen_values = true)]
        template: String,
        /// An existing name (repeatable)
        #[arg(short = 'n', long = "name", value_name = "NAME")]
        names: Vec<String>,
        /// File with one existing name per line
        #[arg(long = "names", value_name = "FILE")]
        names_file: Option<PathBuf>,
        /// Description text searched for a `[template]` when TEMPLATE yields no change
        #[arg(long, value_name = "FILE")]
        description: Option<PathBuf>,
        /// Keep whitespace around TEMPLATE
        #[arg(long = "no-trim")]
        no_trim: bool,
        /// Never fall back to a template from the description
        #[arg(long = "no-description-fallback")]
        no_description_fallback: bool,
    },

    /// Show how a template is read and report rejected directives
    Check {
        #[arg(value_name = "TEMPLATE", allow_hyphen_values = true)]
        template: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List numbering selectors
    Schemes {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Encode an ordinal with a selector's scheme
    Encode {
        #[arg(value_name = "SELECTOR")]
        selector: String,
        #[arg(value_name = "ORDINAL", allow_negative_numbers = true)]
        ordinal: i16,
        /// Minimum digit count (decimal, hex and padded binary only)
        #[arg(long, value_name = "N")]
        width: Option<u16>,
    },

    /// Decode text with a selector's scheme
    Decode {
        #[arg(value_name = "SELECTOR")]
        selector: String,
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Next {
            template,
            names,
            names_file,
            description,
            no_trim,
            no_description_fallback,
        } => {
            let config = RenameConfig::new()
                .with_trim_template(!no_trim)
                .with_description_fallback(!no_description_fallback);
            commands::next(&template, names, names_file.as_deref(), description.as_deref(), config)
        }
        Command::Check { template, json } => commands::check(&template, json),
        Command::Schemes { json } => commands::schemes(json),
        Command::Encode {
            selector,
            ordinal,
            width,
        } => commands::encode(&selector, ordinal, width),
        Command::Decode { selector, text } => commands::decode(&selector, &text),
    }
}

// ============================================================================
// Tests
// ============================================================================
