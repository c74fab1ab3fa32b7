#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the timestamped logger.
//!
//! Every section is optional; a missing file and an empty file both produce
//! `Config::default()`. Call `validate()` after loading.
use eyre::WrapErr;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Destination used when neither the config nor the command line names one.
pub const DEFAULT_PATH: &str = "/tmp/log.txt";

/// Console log levels accepted in `[logging] level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Destination {
    /// File lines are appended to. Its parent directory must already exist.
    pub path: PathBuf,
}

impl Default for Destination {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

/// How the formatting and writing responsibilities are composed.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// One object formats and writes.
    Monolithic,
    /// Caller holds a line formatter and a file writer side by side.
    Horizontal,
    /// Caller holds a timestamp decorator wrapping the file writer.
    #[default]
    Vertical,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CompositionCfg {
    pub variant: Variant,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Logging {
    pub level: Option<String>, // "info","debug"
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub destination: Destination,
    pub composition: CompositionCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read and parse a config file. Does not validate.
pub fn load_file(path: impl AsRef<Path>) -> eyre::Result<Config> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
    load_toml(&text).wrap_err_with(|| format!("invalid TOML in {}", path.display()))
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Destination
        let path = &self.destination.path;
        if path.as_os_str().is_empty() {
            eyre::bail!("destination.path must not be empty");
        }
        let raw = path.to_string_lossy();
        if raw.ends_with('/') || raw.ends_with(std::path::MAIN_SEPARATOR) {
            eyre::bail!("destination.path must name a file, not a directory: {raw}");
        }

        // Logging
        if let Some(level) = &self.logging.level
            && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        {
            eyre::bail!(
                "logging.level must be one of {}, got {level:?}",
                LOG_LEVELS.join("|")
            );
        }

        Ok(())
    }
}
