//! Serializable snapshot of orders, tracking events, and shipments.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{LocationId, OrderId, ShipmentRecord, TrackingEvent};
use crate::error::Result;

/// A sales order and the location it ships to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub ship_to_id: LocationId,
}

impl OrderRecord {
    pub fn new(order_id: impl Into<OrderId>, ship_to_id: &str) -> Self {
        Self {
            order_id: order_id.into(),
            ship_to_id: LocationId::new(ship_to_id),
        }
    }
}

/// Everything the tracking query reads, in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub orders: Vec<OrderRecord>,
    #[serde(default)]
    pub tracking_events: Vec<TrackingEvent>,
    #[serde(default)]
    pub shipments: Vec<ShipmentRecord>,
}

impl Dataset {
    /// Read and validate a JSON dataset file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains a malformed record.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parse and validate a JSON dataset.
    ///
    /// # Errors
    /// Returns an error on invalid JSON or a malformed record.
    pub fn parse_json(content: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(content)?;
        dataset.validate()?;
        debug!(
            orders = dataset.orders.len(),
            events = dataset.tracking_events.len(),
            shipments = dataset.shipments.len(),
            "Parsed dataset"
        );
        Ok(dataset)
    }

    /// Validate every tracking event and shipment.
    ///
    /// # Errors
    /// Returns the first domain error found.
    pub fn validate(&self) -> Result<()> {
        for event in &self.tracking_events {
            event.validate()?;
        }
        for shipment in &self.shipments {
            shipment.validate()?;
        }
        Ok(())
    }
}
