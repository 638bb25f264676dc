//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound`] - the command line
//! - [`outbound`] - in-memory and SQLite repositories

pub mod inbound;
pub mod outbound;
