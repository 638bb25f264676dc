//! Marine-trackings use case.

mod service;

pub use service::MarineTrackingsService;
