//! Raw tracking events as delivered by the tracking feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::id::{BookingNumber, OrderId};

/// Point in time carried by tracking events and shipments.
pub type Timestamp = DateTime<Utc>;

/// Event action-type tags with fixed meaning for milestone selection.
pub mod action {
    /// Vessel left the origin port.
    pub const VESSEL_DEPART_ORIGIN: &str = "vessel_depart_origin";
    /// Cargo loaded onto the vessel at origin.
    pub const VESSEL_LOAD_ORIGIN: &str = "vessel_load_origin";
    /// Vessel reached the destination port.
    pub const VESSEL_ARRIVE_DESTINATION: &str = "vessel_arrive_destination";
    /// Cargo discharged at destination.
    pub const VESSEL_DISCHARGE_DESTINATION: &str = "vessel_discharge_destination";
    /// Export drayage truck arrived at the pickup.
    pub const EXPORT_DRAYAGE_ARRIVE: &str = "export_drayage_arrive";

    /// Departure candidates, highest priority first.
    pub const DEPARTURE: [&str; 2] = [VESSEL_DEPART_ORIGIN, VESSEL_LOAD_ORIGIN];

    /// Arrival candidates, highest priority first.
    pub const ARRIVAL: [&str; 2] = [VESSEL_ARRIVE_DESTINATION, VESSEL_DISCHARGE_DESTINATION];

    /// Tags that are never considered in-transit activity.
    pub const MILESTONE_TAGS: [&str; 5] = [
        VESSEL_DEPART_ORIGIN,
        VESSEL_LOAD_ORIGIN,
        VESSEL_ARRIVE_DESTINATION,
        VESSEL_DISCHARGE_DESTINATION,
        EXPORT_DRAYAGE_ARRIVE,
    ];
}

/// A single tracking event for a booking.
///
/// Many events share a booking number; an event is identified by its
/// booking, action type, and timestamp set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// Sales order the booking was placed for.
    pub order_id: OrderId,
    pub booking_number: BookingNumber,
    /// Action-type tag, e.g. `vessel_depart_origin`.
    pub action_type: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub actual_time: Option<Timestamp>,
    #[serde(default)]
    pub predicted_time: Option<Timestamp>,
    #[serde(default)]
    pub carrier_planned_time: Option<Timestamp>,
    #[serde(default)]
    pub last_processed_time: Option<Timestamp>,
}

impl TrackingEvent {
    /// Create an event with no names and no timestamps.
    pub fn new(
        order_id: impl Into<OrderId>,
        booking_number: impl Into<BookingNumber>,
        action_type: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            booking_number: booking_number.into(),
            action_type: action_type.into(),
            event_name: String::new(),
            location_name: String::new(),
            actual_time: None,
            predicted_time: None,
            carrier_planned_time: None,
            last_processed_time: None,
        }
    }

    #[must_use]
    pub fn with_event_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = name.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_name = location.into();
        self
    }

    #[must_use]
    pub fn with_actual_time(mut self, at: Timestamp) -> Self {
        self.actual_time = Some(at);
        self
    }

    #[must_use]
    pub fn with_predicted_time(mut self, at: Timestamp) -> Self {
        self.predicted_time = Some(at);
        self
    }

    #[must_use]
    pub fn with_carrier_planned_time(mut self, at: Timestamp) -> Self {
        self.carrier_planned_time = Some(at);
        self
    }

    /// True when the event carries the given action-type tag.
    #[must_use]
    pub fn is_action(&self, tag: &str) -> bool {
        self.action_type == tag
    }

    /// Check the invariants the correlator relies on.
    ///
    /// # Errors
    /// Returns a [`DomainError`] when the booking number, order id, or
    /// action type is empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.booking_number.as_str().trim().is_empty() {
            return Err(DomainError::EmptyBookingNumber);
        }
        if self.order_id.as_str().trim().is_empty() {
            return Err(DomainError::EmptyOrderId {
                booking_number: self.booking_number.to_string(),
            });
        }
        if self.action_type.trim().is_empty() {
            return Err(DomainError::EmptyActionType {
                booking_number: self.booking_number.to_string(),
            });
        }
        Ok(())
    }
}

/// Parse an RFC 3339 timestamp read from storage.
///
/// # Errors
/// Returns [`DomainError::InvalidTimestamp`] naming `field` on failure.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<Timestamp, DomainError> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| DomainError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

/// Parse an optional stored timestamp, keeping `None` as `None`.
///
/// # Errors
/// Returns [`DomainError::InvalidTimestamp`] if a present value is malformed.
pub fn parse_optional_timestamp(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Timestamp>, DomainError> {
    value.map(|raw| parse_timestamp(field, raw)).transpose()
}
