mod cli;
mod commands;
mod error_fmt;
mod logging;

use clap::Parser;
use cli::{Cli, Commands, JSON_MODE};
use eyre::Result;
use std::process::ExitCode;
use timelog_config::Config;
use timelog_core::SystemClock;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);
    let _ = color_eyre::install();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli::json_mode() {
                eprintln!("{}", error_fmt::json_error(&e));
            } else {
                eprintln!("{}", error_fmt::humanize(&e));
            }
            tracing::debug!(error = ?e, "command failed");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let Some(path) = &cli.config else {
        return Ok(Config::default());
    };
    let cfg = timelog_config::load_file(path)?;
    cfg.validate()?;
    Ok(cfg)
}

fn run(cli: Cli) -> Result<()> {
    let cfg = load_config(&cli)?;

    let level = cli
        .log_level
        .clone()
        .or_else(|| cfg.logging.level.clone())
        .unwrap_or_else(|| "info".to_string());
    logging::init(cli.json, &level);
    tracing::debug!(config = ?cli.config, "configuration loaded");

    let clock = SystemClock::new();
    match cli.cmd {
        Commands::Put {
            text,
            path,
            variant,
            no_newline,
        } => commands::put(&cfg, text, path, variant, no_newline, clock),
        Commands::Demo { path } => commands::demo(&cfg, path, clock),
    }
}
