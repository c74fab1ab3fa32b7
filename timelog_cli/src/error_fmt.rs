//! Human-readable error descriptions and structured JSON error formatting.

use std::io::ErrorKind;
use timelog_core::LogError;

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    if let Some(le) = err.downcast_ref::<LogError>() {
        let path = le.path().display();
        return match le.kind() {
            ErrorKind::NotFound => format!(
                "What happened: Could not open {path} for append.\nLikely causes: The path is empty, or the path or its parent directory does not exist; directories are never created automatically.\nHow to fix: Create the directory first or pass a different --path."
            ),
            ErrorKind::PermissionDenied => format!(
                "What happened: Permission denied on {path}.\nLikely causes: The file or its directory is not writable by this user.\nHow to fix: Adjust permissions or choose a writable --path."
            ),
            ErrorKind::IsADirectory => format!(
                "What happened: {path} is a directory.\nLikely causes: The destination names a folder instead of a file.\nHow to fix: Point --path (or destination.path) at a file."
            ),
            _ => format!(
                "What happened: {le}.\nLikely causes: Disk full, read-only filesystem, or an invalid path.\nHow to fix: Check the destination and re-run with --log-level=debug."
            ),
        };
    }

    let msg = err.to_string();
    let lower = msg.to_ascii_lowercase();

    if lower.contains("config file") || lower.contains("invalid toml") {
        let cause = err
            .chain()
            .nth(1)
            .map(|c| format!(" Cause: {c}"))
            .unwrap_or_default();
        return format!(
            "What happened: {msg}.{cause}\nHow to fix: Check the --config path and its TOML syntax."
        );
    }

    if lower.contains("destination.path") || lower.contains("logging.level") {
        return format!(
            "What happened: Invalid configuration ({msg}).\nHow to fix: Edit the config file, then rerun."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Stable machine-readable name for the error class.
pub fn error_kind(err: &eyre::Report) -> &'static str {
    if err.downcast_ref::<LogError>().is_some() {
        return "io";
    }
    let lower = err.to_string().to_ascii_lowercase();
    if lower.contains("config")
        || lower.contains("toml")
        || lower.contains("destination.path")
        || lower.contains("logging.level")
    {
        return "config";
    }
    "other"
}

/// One JSON object describing the failure, for `--json` mode.
pub fn json_error(err: &eyre::Report) -> String {
    let path = err
        .downcast_ref::<LogError>()
        .map(|le| le.path().display().to_string());
    let causes: Vec<String> = err.chain().skip(1).map(|c| c.to_string()).collect();
    let obj = serde_json::json!({
        "status": "error",
        "error": error_kind(err),
        "message": err.to_string(),
        "path": path,
        "causes": causes,
    });
    obj.to_string()
}
