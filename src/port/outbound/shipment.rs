//! Shipment retrieval port.

use std::future::Future;

use crate::domain::{BookingNumber, ShipmentRecord, ShipmentType};
use crate::error::Result;

/// Reads carrier shipments by booking.
pub trait ShipmentRepository: Send + Sync {
    /// Shipments of `shipment_type` belonging to any of the given bookings.
    fn shipments_for_bookings(
        &self,
        booking_numbers: &[BookingNumber],
        shipment_type: ShipmentType,
    ) -> impl Future<Output = Result<Vec<ShipmentRecord>>> + Send;
}
