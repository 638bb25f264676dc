//! Permission resolution port for sales orders.

use std::future::Future;

use crate::domain::{LocationId, OrderId};
use crate::error::Result;

/// Resolves which orders a caller may see.
pub trait OrderRepository: Send + Sync {
    /// Orders shipped to any of `authorized_location_ids`.
    ///
    /// When `requested` is given, only the requested orders that are also
    /// authorized are returned. An empty location set authorizes nothing.
    fn resolve_authorized_order_ids(
        &self,
        authorized_location_ids: &[LocationId],
        requested: Option<&[OrderId]>,
    ) -> impl Future<Output = Result<Vec<OrderId>>> + Send;
}
