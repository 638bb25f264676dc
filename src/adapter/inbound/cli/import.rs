//! Handler for the `import` command.

use serde_json::json;

use super::command::ImportArgs;
use super::{init_logging, output};
use crate::adapter::outbound::memory::Dataset;
use crate::error::Result;
use crate::infrastructure::bootstrap::open_database;
use crate::infrastructure::config::Config;

/// Execute `import`.
pub fn execute(args: &ImportArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    init_logging(&config);

    let dataset = Dataset::load(&args.dataset)?;
    let summary = open_database(&config)?.import(&dataset)?;

    if output::is_json() {
        output::json_output(&json!({
            "command": "import",
            "database": config.database,
            "orders": summary.orders,
            "tracking_events": summary.tracking_events,
            "shipments": summary.shipments,
        }));
        return Ok(());
    }

    output::success(&format!("Imported {}", args.dataset.display()));
    output::field("Database", &config.database);
    output::field("Orders", summary.orders);
    output::field("Events", summary.tracking_events);
    output::field("Shipments", summary.shipments);
    Ok(())
}
