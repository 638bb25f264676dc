//! Marine-trackings query surface for inbound adapters.

use std::future::Future;

use crate::domain::{LocationId, MarineTrackings, OrderId};
use crate::error::Result;

/// Caller identity needed for permission checks.
///
/// Passed explicitly with every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub authorized_location_ids: Vec<LocationId>,
}

impl RequestContext {
    #[must_use]
    pub fn new(authorized_location_ids: impl IntoIterator<Item = LocationId>) -> Self {
        Self {
            authorized_location_ids: authorized_location_ids.into_iter().collect(),
        }
    }
}

/// A marine-trackings query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarineTrackingsRequest {
    /// Restrict the result to these orders; `None` means every authorized order.
    pub order_ids: Option<Vec<OrderId>>,
    /// Select preparation and in-transit activity per booking.
    pub include_recent_activity: bool,
}

impl MarineTrackingsRequest {
    /// Request every authorized order.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Request only the given orders.
    #[must_use]
    pub fn for_orders(order_ids: impl IntoIterator<Item = OrderId>) -> Self {
        Self {
            order_ids: Some(order_ids.into_iter().collect()),
            include_recent_activity: false,
        }
    }

    #[must_use]
    pub fn with_recent_activity(mut self, include: bool) -> Self {
        self.include_recent_activity = include;
        self
    }
}

/// Answers marine-trackings queries.
pub trait MarineTrackingsQuery: Send + Sync {
    /// Consolidated tracking for the orders the caller may see.
    fn marine_trackings(
        &self,
        context: &RequestContext,
        request: &MarineTrackingsRequest,
    ) -> impl Future<Output = Result<MarineTrackings>> + Send;
}
