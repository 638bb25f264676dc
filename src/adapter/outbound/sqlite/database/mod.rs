//! Diesel schema, row models, and connection management.

pub mod connection;
pub mod model;
pub mod schema;
