//! Per-booking and per-order tracking views returned to callers.

use serde::Serialize;

use super::event::Timestamp;
use super::id::{BookingNumber, OrderId};
use super::milestone::Milestone;
use super::shipment::{MarineShipment, TruckShipment};

/// Latest activity on a booking outside the vessel milestones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MostRecentActivity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_transit: Option<Milestone>,
}

/// Milestones selected for one booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrelatedMilestones {
    pub departure: Option<Milestone>,
    pub arrival: Option<Milestone>,
    /// `None` when recent activity was not requested.
    pub most_recent_activity: Option<MostRecentActivity>,
}

/// Shipments joined onto one booking.
///
/// A list is `None` only when its shipment type was not looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingShipments {
    pub marine: Option<Vec<MarineShipment>>,
    pub truck: Option<Vec<TruckShipment>>,
}

/// Consolidated tracking status of one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub booking_number: BookingNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<Milestone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_recent_activity: Option<MostRecentActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marine_shipments: Option<Vec<MarineShipment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truck_shipments: Option<Vec<TruckShipment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_etd: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_eta: Option<Timestamp>,
}

/// Tracking rollup for one authorized sales order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub order_id: OrderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_etd: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_eta: Option<Timestamp>,
    pub bookings: Vec<BookingView>,
}

/// Response of a marine-trackings query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineTrackings {
    pub marine_trackings: Vec<OrderView>,
}

impl MarineTrackings {
    /// The empty response.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of bookings across all orders.
    #[must_use]
    pub fn booking_count(&self) -> usize {
        self.marine_trackings.iter().map(|o| o.bookings.len()).sum()
    }
}
