//! In-memory repository backed by a [`Dataset`].
//!
//! Used for JSON datasets on the command line and as the test double for
//! the outbound ports. Records are validated as they are fetched, the same
//! as rows read from SQLite.

mod dataset;

pub use dataset::{Dataset, OrderRecord};

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::domain::{
    BookingNumber, LocationId, OrderId, ShipmentRecord, ShipmentType, TrackingEvent,
};
use crate::error::Result;
use crate::port::outbound::{OrderRepository, ShipmentRepository, TrackingEventRepository};

/// In-memory implementation of every outbound port.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    data: RwLock<Dataset>,
}

impl MemoryRepository {
    /// Create a repository over `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            data: RwLock::new(dataset),
        }
    }
}

impl OrderRepository for MemoryRepository {
    async fn resolve_authorized_order_ids(
        &self,
        authorized_location_ids: &[LocationId],
        requested: Option<&[OrderId]>,
    ) -> Result<Vec<OrderId>> {
        let data = self.data.read();
        let mut seen: HashSet<&OrderId> = HashSet::new();
        let mut order_ids = Vec::new();

        for order in &data.orders {
            if !authorized_location_ids.contains(&order.ship_to_id) {
                continue;
            }
            if requested.is_some_and(|ids| !ids.contains(&order.order_id)) {
                continue;
            }
            if seen.insert(&order.order_id) {
                order_ids.push(order.order_id.clone());
            }
        }

        Ok(order_ids)
    }
}

impl TrackingEventRepository for MemoryRepository {
    async fn events_for_orders(&self, order_ids: &[OrderId]) -> Result<Vec<TrackingEvent>> {
        let events: Vec<TrackingEvent> = self
            .data
            .read()
            .tracking_events
            .iter()
            .filter(|e| order_ids.contains(&e.order_id))
            .cloned()
            .collect();
        validated(events)
    }

    async fn events_for_bookings(
        &self,
        booking_numbers: &[BookingNumber],
    ) -> Result<Vec<TrackingEvent>> {
        let events: Vec<TrackingEvent> = self
            .data
            .read()
            .tracking_events
            .iter()
            .filter(|e| booking_numbers.contains(&e.booking_number))
            .cloned()
            .collect();
        validated(events)
    }
}

fn validated(events: Vec<TrackingEvent>) -> Result<Vec<TrackingEvent>> {
    for event in &events {
        event.validate()?;
    }
    Ok(events)
}

impl ShipmentRepository for MemoryRepository {
    async fn shipments_for_bookings(
        &self,
        booking_numbers: &[BookingNumber],
        shipment_type: ShipmentType,
    ) -> Result<Vec<ShipmentRecord>> {
        let records: Vec<ShipmentRecord> = self
            .data
            .read()
            .shipments
            .iter()
            .filter(|s| s.shipment_type == shipment_type)
            .filter(|s| booking_numbers.contains(&s.booking_number))
            .cloned()
            .collect();
        for record in &records {
            record.validate()?;
        }
        Ok(records)
    }
}
