//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::Config;

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;
    let types: Vec<&str> = config
        .query
        .shipment_types
        .iter()
        .map(|t| t.code())
        .collect();

    if output::is_json() {
        output::json_output(&json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    if !path.exists() {
        output::note(&format!("{} not found, showing defaults", path.display()));
    }
    output::field("Database", &config.database);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    output::section("Query");
    if types.is_empty() {
        output::field("Shipments", output::muted("(none looked up)"));
    } else {
        output::field("Shipments", types.join(", "));
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;

    if output::is_json() {
        output::json_output(&json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::success(&format!("{} is valid", path.display()));
    Ok(())
}
