//! Marine-trackings query service.
//!
//! Orchestrates the data fetches around the pure rollup in
//! [`crate::domain::aggregate`]:
//!
//! ```text
//! resolve authorized orders
//!        │
//!        ▼
//! events for those orders ──▶ booking numbers
//!                                  │
//!        ┌─────────────────────────┼─────────────────────────┐
//!        ▼                         ▼                         ▼
//! events for bookings      marine shipments          truck shipments
//!        └─────────────────────────┼─────────────────────────┘
//!                                  ▼
//!                             consolidate
//! ```
//!
//! The three fetches after the booking numbers are known run concurrently.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{
    consolidate, BookingAssignments, BookingNumber, MarineTrackings, ShipmentLookup, ShipmentType,
    TrackingInputs,
};
use crate::error::Result;
use crate::port::inbound::{MarineTrackingsQuery, MarineTrackingsRequest, RequestContext};
use crate::port::outbound::{OrderRepository, ShipmentRepository, TrackingEventRepository};

/// Answers marine-trackings queries from the three outbound repositories.
pub struct MarineTrackingsService<O, T, S> {
    orders: Arc<O>,
    tracking: Arc<T>,
    shipments: Arc<S>,
    /// Shipment types that are looked up; the others are reported as absent.
    shipment_types: Vec<ShipmentType>,
}

impl<O, T, S> MarineTrackingsService<O, T, S>
where
    O: OrderRepository,
    T: TrackingEventRepository,
    S: ShipmentRepository,
{
    /// Create a service that looks up every shipment type.
    pub fn new(orders: Arc<O>, tracking: Arc<T>, shipments: Arc<S>) -> Self {
        Self {
            orders,
            tracking,
            shipments,
            shipment_types: ShipmentType::ALL.to_vec(),
        }
    }

    /// Restrict which shipment types are looked up.
    #[must_use]
    pub fn with_shipment_types(mut self, shipment_types: Vec<ShipmentType>) -> Self {
        self.shipment_types = shipment_types;
        self
    }

    async fn lookup(
        &self,
        booking_numbers: &[BookingNumber],
        shipment_type: ShipmentType,
    ) -> Result<ShipmentLookup> {
        if !self.shipment_types.contains(&shipment_type) {
            debug!(shipment_type = %shipment_type, "Shipment type not queried");
            return Ok(ShipmentLookup::NotQueried);
        }

        let records = self
            .shipments
            .shipments_for_bookings(booking_numbers, shipment_type)
            .await?;
        debug!(
            shipment_type = %shipment_type,
            count = records.len(),
            "Fetched shipments"
        );
        Ok(ShipmentLookup::Fetched(records))
    }
}

impl<O, T, S> MarineTrackingsQuery for MarineTrackingsService<O, T, S>
where
    O: OrderRepository,
    T: TrackingEventRepository,
    S: ShipmentRepository,
{
    async fn marine_trackings(
        &self,
        context: &RequestContext,
        request: &MarineTrackingsRequest,
    ) -> Result<MarineTrackings> {
        let order_ids = self
            .orders
            .resolve_authorized_order_ids(
                &context.authorized_location_ids,
                request.order_ids.as_deref(),
            )
            .await?;
        debug!(
            locations = context.authorized_location_ids.len(),
            authorized_orders = order_ids.len(),
            "Resolved authorized orders"
        );
        if let Some(requested) = request.order_ids.as_deref() {
            let dropped = requested.iter().filter(|id| !order_ids.contains(id)).count();
            if dropped > 0 {
                warn!(
                    requested = requested.len(),
                    dropped,
                    "Skipping requested orders outside authorized locations"
                );
            }
        }

        if order_ids.is_empty() {
            info!("No authorized orders for caller");
            return Ok(MarineTrackings::empty());
        }

        let order_events = self.tracking.events_for_orders(&order_ids).await?;
        if order_events.is_empty() {
            info!(orders = order_ids.len(), "No tracking events for authorized orders");
            return Ok(MarineTrackings::empty());
        }

        let booking_numbers = BookingAssignments::from_events(&order_events).booking_numbers();
        debug!(bookings = booking_numbers.len(), "Derived booking numbers");

        let (booking_events, marine, truck) = tokio::try_join!(
            self.tracking.events_for_bookings(&booking_numbers),
            self.lookup(&booking_numbers, ShipmentType::Marine),
            self.lookup(&booking_numbers, ShipmentType::Truck30),
        )?;

        let inputs = TrackingInputs {
            order_ids,
            order_events,
            booking_events,
            marine,
            truck,
        };
        let trackings = consolidate(&inputs, request.include_recent_activity);

        info!(
            orders = trackings.marine_trackings.len(),
            bookings = trackings.booking_count(),
            recent_activity = request.include_recent_activity,
            "Marine trackings resolved"
        );
        Ok(trackings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::memory::{Dataset, MemoryRepository, OrderRecord};
    use crate::domain::event::action;
    use crate::domain::{LocationId, OrderId, ShipmentRecord};
    use crate::testkit::domain::{order_event, ts};

    fn service(
        dataset: Dataset,
    ) -> MarineTrackingsService<MemoryRepository, MemoryRepository, MemoryRepository> {
        let repo = Arc::new(MemoryRepository::new(dataset));
        MarineTrackingsService::new(repo.clone(), repo.clone(), repo)
    }

    fn context() -> RequestContext {
        RequestContext::new([LocationId::new("ST-1")])
    }

    fn dataset() -> Dataset {
        Dataset {
            orders: vec![
                OrderRecord::new("SO-1", "ST-1"),
                OrderRecord::new("SO-2", "ST-2"),
            ],
            tracking_events: vec![
                order_event("SO-1", "BK-1", action::VESSEL_DEPART_ORIGIN)
                    .with_predicted_time(ts("2024-03-01T00:00:00Z")),
                order_event("SO-2", "BK-2", action::VESSEL_DEPART_ORIGIN),
            ],
            shipments: vec![
                ShipmentRecord::new("BK-1", "M-1", ShipmentType::Marine),
                ShipmentRecord::new("BK-1", "T-1", ShipmentType::Truck30),
            ],
        }
    }

    #[tokio::test]
    async fn returns_only_authorized_orders() {
        let result = service(dataset())
            .marine_trackings(&context(), &MarineTrackingsRequest::all())
            .await
            .unwrap();

        assert_eq!(result.marine_trackings.len(), 1);
        let order = &result.marine_trackings[0];
        assert_eq!(order.order_id, OrderId::new("SO-1"));
        assert_eq!(order.earliest_etd, Some(ts("2024-03-01T00:00:00Z")));
    }

    #[tokio::test]
    async fn unqueried_shipment_types_are_absent() {
        let result = service(dataset())
            .with_shipment_types(vec![ShipmentType::Marine])
            .marine_trackings(&context(), &MarineTrackingsRequest::all())
            .await
            .unwrap();

        let booking = &result.marine_trackings[0].bookings[0];
        assert_eq!(booking.marine_shipments.as_ref().map(Vec::len), Some(1));
        assert!(booking.truck_shipments.is_none());
    }

    #[tokio::test]
    async fn empty_location_set_short_circuits() {
        let result = service(dataset())
            .marine_trackings(&RequestContext::default(), &MarineTrackingsRequest::all())
            .await
            .unwrap();
        assert_eq!(result, MarineTrackings::empty());
    }
}
