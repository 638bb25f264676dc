//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the data stores the tracking query reads from:
//! order permissions, tracking events, and carrier shipments.

pub mod order;
pub mod shipment;
pub mod tracking;

pub use order::OrderRepository;
pub use shipment::ShipmentRepository;
pub use tracking::TrackingEventRepository;
