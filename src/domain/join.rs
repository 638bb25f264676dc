//! Attach marine and truck shipments to bookings.

use std::collections::HashMap;

use super::id::BookingNumber;
use super::shipment::{MarineShipment, ShipmentLookup, ShipmentRecord, TruckShipment};
use super::tracking::BookingShipments;

/// Joins shipment lookups onto booking numbers.
///
/// Matching is by booking number only; record order is kept and duplicates
/// are passed through.
#[derive(Debug, Clone, Default)]
pub struct ShipmentJoiner {
    marine: ShipmentLookup,
    truck: ShipmentLookup,
}

impl ShipmentJoiner {
    /// Create a joiner over the marine and truck lookups.
    #[must_use]
    pub fn new(marine: ShipmentLookup, truck: ShipmentLookup) -> Self {
        Self { marine, truck }
    }

    /// Shipments for every booking in `booking_numbers`.
    #[must_use]
    pub fn join(&self, booking_numbers: &[BookingNumber]) -> HashMap<BookingNumber, BookingShipments> {
        booking_numbers
            .iter()
            .map(|booking| (booking.clone(), self.join_booking(booking)))
            .collect()
    }

    /// Shipments for a single booking.
    #[must_use]
    pub fn join_booking(&self, booking: &BookingNumber) -> BookingShipments {
        BookingShipments {
            marine: matching(&self.marine, booking, |r| MarineShipment::from(r)),
            truck: matching(&self.truck, booking, |r| TruckShipment::from(r)),
        }
    }
}

fn matching<T>(
    lookup: &ShipmentLookup,
    booking: &BookingNumber,
    summarize: impl Fn(&ShipmentRecord) -> T,
) -> Option<Vec<T>> {
    lookup.records().map(|records| {
        records
            .iter()
            .filter(|r| &r.booking_number == booking)
            .map(summarize)
            .collect()
    })
}
