//! Marinetrack - consolidated marine-shipment tracking for sales orders.
//!
//! Given the locations a caller may see, the crate resolves their orders,
//! picks canonical departure and arrival milestones for each booking from
//! raw carrier tracking events, attaches marine and truck shipments, and
//! rolls everything up into per-order earliest ETD and ETA.
//!
//! # Architecture
//!
//! - [`domain`] - records and the pure selection and rollup passes
//! - [`port`] - the query surface and the repository contracts
//! - [`application`] - the query service that drives the fetches
//! - [`adapter`] - CLI, in-memory, and SQLite implementations
//! - [`infrastructure`] - configuration, logging, and wiring
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marinetrack::adapter::outbound::memory::{Dataset, MemoryRepository};
//! use marinetrack::application::tracking::MarineTrackingsService;
//! use marinetrack::domain::LocationId;
//! use marinetrack::port::inbound::{MarineTrackingsQuery, MarineTrackingsRequest, RequestContext};
//!
//! # async fn example() -> marinetrack::error::Result<()> {
//! let repo = Arc::new(MemoryRepository::new(Dataset::load("dataset.json")?));
//! let service = MarineTrackingsService::new(repo.clone(), repo.clone(), repo);
//!
//! let context = RequestContext::new([LocationId::new("ST-1")]);
//! let trackings = service
//!     .marine_trackings(&context, &MarineTrackingsRequest::all().with_recent_activity(true))
//!     .await?;
//! println!("{}", serde_json::to_string_pretty(&trackings)?);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
