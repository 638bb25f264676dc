//! Tracking event retrieval port.

use std::future::Future;

use crate::domain::{BookingNumber, OrderId, TrackingEvent};
use crate::error::Result;

/// Reads tracking events from the tracking feed store.
///
/// Implementations validate every event before returning it and fail
/// with a domain error on malformed records.
pub trait TrackingEventRepository: Send + Sync {
    /// Events recorded for any of the given orders.
    fn events_for_orders(
        &self,
        order_ids: &[OrderId],
    ) -> impl Future<Output = Result<Vec<TrackingEvent>>> + Send;

    /// Events recorded for any of the given bookings.
    fn events_for_bookings(
        &self,
        booking_numbers: &[BookingNumber],
    ) -> impl Future<Output = Result<Vec<TrackingEvent>>> + Send;
}
