//! Composition root: wires repositories into the query service.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::memory::{Dataset, MemoryRepository};
use crate::adapter::outbound::sqlite::SqliteRepository;
use crate::application::tracking::MarineTrackingsService;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::outbound::{OrderRepository, ShipmentRepository, TrackingEventRepository};

/// Query service over the configured SQLite database.
pub type SqliteTrackingsService =
    MarineTrackingsService<SqliteRepository, SqliteRepository, SqliteRepository>;

/// Query service over an in-memory dataset.
pub type MemoryTrackingsService =
    MarineTrackingsService<MemoryRepository, MemoryRepository, MemoryRepository>;

/// Open the configured database, running migrations first.
///
/// # Errors
/// Returns an error if the database cannot be opened or migrated.
pub fn open_database(config: &Config) -> Result<Arc<SqliteRepository>> {
    let repo = SqliteRepository::open(&config.database)?;
    info!(database = %config.database, "Database ready");
    Ok(Arc::new(repo))
}

/// Build the query service over the configured database.
///
/// # Errors
/// Returns an error if the database cannot be opened.
pub fn sqlite_service(config: &Config) -> Result<SqliteTrackingsService> {
    let repo = open_database(config)?;
    Ok(service(repo, config))
}

/// Build the query service over a JSON dataset file.
///
/// # Errors
/// Returns an error if the dataset cannot be read or is invalid.
pub fn dataset_service(path: &Path, config: &Config) -> Result<MemoryTrackingsService> {
    let dataset = Dataset::load(path)?;
    info!(path = %path.display(), orders = dataset.orders.len(), "Dataset loaded");
    Ok(service(Arc::new(MemoryRepository::new(dataset)), config))
}

fn service<R>(repo: Arc<R>, config: &Config) -> MarineTrackingsService<R, R, R>
where
    R: OrderRepository + TrackingEventRepository + ShipmentRepository,
{
    MarineTrackingsService::new(Arc::clone(&repo), Arc::clone(&repo), repo)
        .with_shipment_types(config.query.shipment_types.clone())
}
