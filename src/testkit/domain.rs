//! Builders for domain records used across tests.

use crate::domain::{ShipmentRecord, ShipmentType, Timestamp, TrackingEvent};

/// Parse an RFC 3339 timestamp, panicking on bad input.
pub fn ts(value: &str) -> Timestamp {
    crate::domain::event::parse_timestamp("test", value)
        .unwrap_or_else(|e| panic!("bad test timestamp {value:?}: {e}"))
}

/// A tracking event for order `SO-1`.
pub fn event(booking: &str, action_type: &str) -> TrackingEvent {
    order_event("SO-1", booking, action_type)
}

/// A tracking event for the given order and booking.
pub fn order_event(order: &str, booking: &str, action_type: &str) -> TrackingEvent {
    TrackingEvent::new(order, booking, action_type)
}

/// A marine shipment on `vessel`.
pub fn marine_shipment(booking: &str, number: &str, vessel: &str) -> ShipmentRecord {
    let mut record = ShipmentRecord::new(booking, number, ShipmentType::Marine);
    record.shipment_type_description = "Marine".into();
    record.vessel_name = Some(vessel.to_string());
    record
}

/// A code-30 truck shipment.
pub fn truck_shipment(booking: &str, number: &str) -> ShipmentRecord {
    let mut record = ShipmentRecord::new(booking, number, ShipmentType::Truck30);
    record.shipment_type_description = "Truck".into();
    record
}
