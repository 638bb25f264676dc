//! A small dataset shared by service and adapter tests.
//!
//! - `SO-100` ships to `ST-1` with bookings `BK-1` and `BK-2`.
//! - `SO-200` ships to `ST-1` with booking `BK-3`, which `SO-100` does not use.
//! - `SO-300` ships to `ST-2` with booking `BK-4`.
//! - `SO-400` ships to `ST-1` and has no tracking events at all.

use crate::adapter::outbound::memory::{Dataset, OrderRecord};
use crate::domain::event::action;

use super::domain::{marine_shipment, order_event, truck_shipment, ts};

pub fn sample() -> Dataset {
    Dataset {
        orders: vec![
            OrderRecord::new("SO-100", "ST-1"),
            OrderRecord::new("SO-200", "ST-1"),
            OrderRecord::new("SO-300", "ST-2"),
            OrderRecord::new("SO-400", "ST-1"),
        ],
        tracking_events: vec![
            order_event("SO-100", "BK-1", action::EXPORT_DRAYAGE_ARRIVE)
                .with_event_name("Empty container picked up")
                .with_location("Ningbo")
                .with_actual_time(ts("2024-02-26T09:00:00Z")),
            order_event("SO-100", "BK-1", action::VESSEL_LOAD_ORIGIN)
                .with_event_name("Loaded on vessel")
                .with_location("Ningbo")
                .with_actual_time(ts("2024-02-28T14:00:00Z")),
            order_event("SO-100", "BK-1", action::VESSEL_DEPART_ORIGIN)
                .with_event_name("Vessel departed")
                .with_location("Ningbo")
                .with_predicted_time(ts("2024-03-01T06:00:00Z")),
            order_event("SO-100", "BK-1", "transshipment_arrive")
                .with_event_name("Transshipment arrival")
                .with_location("Singapore")
                .with_actual_time(ts("2024-03-08T11:00:00Z")),
            order_event("SO-100", "BK-1", action::VESSEL_ARRIVE_DESTINATION)
                .with_event_name("Vessel arrival")
                .with_location("Rotterdam")
                .with_carrier_planned_time(ts("2024-03-30T00:00:00Z")),
            order_event("SO-100", "BK-2", action::VESSEL_DEPART_ORIGIN)
                .with_event_name("Vessel departed")
                .with_location("Shanghai")
                .with_actual_time(ts("2024-02-25T22:00:00Z")),
            order_event("SO-100", "BK-2", action::VESSEL_DISCHARGE_DESTINATION)
                .with_event_name("Discharged")
                .with_location("Hamburg")
                .with_predicted_time(ts("2024-04-02T08:00:00Z")),
            order_event("SO-200", "BK-3", action::VESSEL_LOAD_ORIGIN)
                .with_event_name("Loaded on vessel")
                .with_location("Busan")
                .with_predicted_time(ts("2024-03-10T00:00:00Z")),
            order_event("SO-300", "BK-4", action::VESSEL_DEPART_ORIGIN)
                .with_event_name("Vessel departed")
                .with_location("Qingdao")
                .with_actual_time(ts("2024-03-03T00:00:00Z")),
        ],
        shipments: vec![
            marine_shipment("BK-1", "MS-1", "Ever Given"),
            truck_shipment("BK-1", "TR-1"),
            truck_shipment("BK-1", "TR-2"),
            marine_shipment("BK-2", "MS-2", "Maersk Alabama"),
            marine_shipment("BK-4", "MS-4", "MSC Oscar"),
        ],
    }
}
