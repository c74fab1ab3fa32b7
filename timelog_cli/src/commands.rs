//! Command handlers: resolve path and composition, then append.

use crate::cli::{VariantArg, json_mode};
use eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use timelog_config::Config;
use timelog_core::{Clock, Composition, run};

/// Text written once per composition by `demo`.
pub const DEMO_TEXT: &str = "Message\n";

fn resolve_path(cfg: &Config, path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(|| cfg.destination.path.clone())
}

fn append(composition: Composition, text: &str, path: &Path, clock: impl Clock) -> Result<()> {
    run(composition, text, path, clock)
        .wrap_err_with(|| format!("failed to append to {}", path.display()))
}

fn report(composition: Composition, path: &Path) {
    if json_mode() {
        println!(
            "{}",
            serde_json::json!({
                "status": "ok",
                "variant": composition.as_str(),
                "path": path.display().to_string(),
            })
        );
    } else {
        println!("Appended to {} ({composition})", path.display());
    }
}

pub fn put(
    cfg: &Config,
    text: String,
    path: Option<PathBuf>,
    variant: Option<VariantArg>,
    no_newline: bool,
    clock: impl Clock,
) -> Result<()> {
    let path = resolve_path(cfg, path);
    let composition = variant.map_or_else(|| Composition::from(cfg), Composition::from);
    let mut line = text;
    if !no_newline {
        line.push('\n');
    }
    append(composition, &line, &path, clock)?;
    report(composition, &path);
    Ok(())
}

pub fn demo(cfg: &Config, path: Option<PathBuf>, clock: impl Clock) -> Result<()> {
    let path = resolve_path(cfg, path);
    for composition in Composition::ALL {
        append(composition, DEMO_TEXT, &path, &clock)?;
        report(composition, &path);
    }
    Ok(())
}
