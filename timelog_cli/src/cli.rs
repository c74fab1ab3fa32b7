//! CLI argument definitions and shared statics.

use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;
use timelog_config::LOG_LEVELS;
use timelog_core::Composition;

/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "timelog", version, about = "Append date-stamped lines to a file")]
pub struct Cli {
    /// Path to config TOML (optional; defaults apply when absent)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log and report errors as JSON instead of pretty text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (off|error|warn|info|debug|trace); overrides [logging] level
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        value_parser = PossibleValuesParser::new(LOG_LEVELS),
        ignore_case = true
    )]
    pub log_level: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Composition shape used to build the logger.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum VariantArg {
    /// One object formats and writes
    Monolithic,
    /// Caller holds a line formatter and a file writer
    Horizontal,
    /// Caller holds a timestamp decorator over the file writer
    Vertical,
}

impl From<VariantArg> for Composition {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Monolithic => Composition::Monolithic,
            VariantArg::Horizontal => Composition::Horizontal,
            VariantArg::Vertical => Composition::Vertical,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append one date-stamped line
    Put {
        /// Text to append
        text: String,
        /// Destination file (takes precedence over config)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
        /// Composition to use (takes precedence over config)
        #[arg(long, value_enum, value_name = "VARIANT")]
        variant: Option<VariantArg>,
        /// Do not append a trailing newline to TEXT
        #[arg(long, action = ArgAction::SetTrue)]
        no_newline: bool,
    },
    /// Write "Message" once with each composition, in order
    Demo {
        /// Destination file (takes precedence over config)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,
    },
}

#[inline]
pub fn json_mode() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}
