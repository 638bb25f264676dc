//! SQLite persistence for orders, tracking events, and shipments.

pub mod database;
mod repository;

pub use repository::{ImportSummary, SqliteRepository};
