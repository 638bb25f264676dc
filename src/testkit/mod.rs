//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! - [`domain`] - Builders for timestamps, tracking events, and shipments.
//! - [`dataset`] - A small, realistic dataset covering the common cases.

pub mod dataset;
pub mod domain;
