//! Tracking domain: records, milestone selection, and rollups.
//!
//! Everything in here is synchronous and free of I/O. Records are validated
//! where they enter the system (see [`error`]); the passes below assume
//! well-formed input.
//!
//! - [`correlate`] - departure, arrival, and recent-activity selection
//! - [`milestone`] - milestone shape and representative-time coalescing
//! - [`join`] - shipment lookups attached to bookings
//! - [`aggregate`] - booking views and order rollups

pub mod aggregate;
pub mod correlate;
pub mod error;
pub mod event;
pub mod id;
pub mod join;
pub mod milestone;
pub mod shipment;
pub mod tracking;

pub use aggregate::{consolidate, BookingAggregator, BookingAssignments, OrderAggregator, TrackingInputs};
pub use correlate::EventCorrelator;
pub use event::{Timestamp, TrackingEvent};
pub use id::{BookingNumber, LocationId, OrderId};
pub use join::ShipmentJoiner;
pub use milestone::Milestone;
pub use shipment::{MarineShipment, ShipmentLookup, ShipmentRecord, ShipmentType, TruckShipment};
pub use tracking::{BookingView, MarineTrackings, MostRecentActivity, OrderView};
