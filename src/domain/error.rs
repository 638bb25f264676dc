//! Domain validation errors for tracking records.
//!
//! Upstream records are validated when they cross the data-fetch boundary.
//! The correlation and aggregation passes assume well-formed input and have
//! no failure modes of their own.
//!
//! # Examples
//!
//! ```
//! use marinetrack::domain::error::DomainError;
//! use marinetrack::domain::event::TrackingEvent;
//!
//! let event = TrackingEvent::new("SO-1", "", "vessel_depart_origin");
//! assert!(matches!(event.validate(), Err(DomainError::EmptyBookingNumber)));
//! ```

use thiserror::Error;

/// Errors raised when upstream data violates record invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Every tracking and shipment record must name its booking.
    #[error("booking number cannot be empty")]
    EmptyBookingNumber,

    /// Tracking events are correlated by their action-type tag.
    #[error("tracking event for booking {booking_number} has no action type")]
    EmptyActionType {
        /// Booking the offending event belongs to.
        booking_number: String,
    },

    /// Tracking events must belong to a sales order.
    #[error("tracking event for booking {booking_number} has no order id")]
    EmptyOrderId {
        /// Booking the offending event belongs to.
        booking_number: String,
    },

    /// A stored timestamp could not be parsed as RFC 3339.
    #[error("invalid timestamp for {field}: {value:?}")]
    InvalidTimestamp {
        /// Column or field holding the value.
        field: &'static str,
        /// The raw value that failed to parse.
        value: String,
    },

    /// The shipment type code is not one the system understands.
    #[error("unknown shipment type: {0:?}")]
    UnknownShipmentType(String),
}
