//! Row types for Diesel and their conversions to domain records.
//!
//! Timestamps are stored as RFC 3339 text and parsed on the way out, so a
//! malformed row surfaces as a [`DomainError`] instead of a silent `None`.

use chrono::SecondsFormat;
use diesel::prelude::*;

use super::schema::{orders, shipments, tracking_events};
use crate::adapter::outbound::memory::OrderRecord;
use crate::domain::error::DomainError;
use crate::domain::event::parse_optional_timestamp;
use crate::domain::{BookingNumber, OrderId, ShipmentRecord, Timestamp, TrackingEvent};

fn to_text(at: Option<Timestamp>) -> Option<String> {
    at.map(|t| t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
    pub id: i32,
    pub order_id: String,
    pub ship_to_id: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub order_id: String,
    pub ship_to_id: String,
}

impl From<&OrderRecord> for NewOrderRow {
    fn from(order: &OrderRecord) -> Self {
        Self {
            order_id: order.order_id.to_string(),
            ship_to_id: order.ship_to_id.to_string(),
        }
    }
}

/// Database row for a tracking event (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = tracking_events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TrackingEventRow {
    pub id: i32,
    pub order_id: String,
    pub booking_number: String,
    pub action_type: String,
    pub event_name: String,
    pub location_name: String,
    pub actual_time: Option<String>,
    pub predicted_time: Option<String>,
    pub carrier_planned_time: Option<String>,
    pub last_processed_time: Option<String>,
}

/// Database row for a tracking event (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = tracking_events)]
pub struct NewTrackingEventRow {
    pub order_id: String,
    pub booking_number: String,
    pub action_type: String,
    pub event_name: String,
    pub location_name: String,
    pub actual_time: Option<String>,
    pub predicted_time: Option<String>,
    pub carrier_planned_time: Option<String>,
    pub last_processed_time: Option<String>,
}

impl From<&TrackingEvent> for NewTrackingEventRow {
    fn from(event: &TrackingEvent) -> Self {
        Self {
            order_id: event.order_id.to_string(),
            booking_number: event.booking_number.to_string(),
            action_type: event.action_type.clone(),
            event_name: event.event_name.clone(),
            location_name: event.location_name.clone(),
            actual_time: to_text(event.actual_time),
            predicted_time: to_text(event.predicted_time),
            carrier_planned_time: to_text(event.carrier_planned_time),
            last_processed_time: to_text(event.last_processed_time),
        }
    }
}

impl TryFrom<TrackingEventRow> for TrackingEvent {
    type Error = DomainError;

    fn try_from(row: TrackingEventRow) -> Result<Self, Self::Error> {
        let event = TrackingEvent {
            order_id: OrderId::new(row.order_id),
            booking_number: BookingNumber::new(row.booking_number),
            action_type: row.action_type,
            event_name: row.event_name,
            location_name: row.location_name,
            actual_time: parse_optional_timestamp("actual_time", row.actual_time.as_deref())?,
            predicted_time: parse_optional_timestamp(
                "predicted_time",
                row.predicted_time.as_deref(),
            )?,
            carrier_planned_time: parse_optional_timestamp(
                "carrier_planned_time",
                row.carrier_planned_time.as_deref(),
            )?,
            last_processed_time: parse_optional_timestamp(
                "last_processed_time",
                row.last_processed_time.as_deref(),
            )?,
        };
        event.validate()?;
        Ok(event)
    }
}

/// Database row for a shipment (queryable).
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = shipments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShipmentRow {
    pub id: i32,
    pub booking_number: String,
    pub shipment_number: String,
    pub shipment_type: String,
    pub shipment_type_description: String,
    pub container_id: Option<String>,
    pub executing_carrier_name: Option<String>,
    pub vessel_name: Option<String>,
    pub voyage_number: Option<String>,
    pub planned_start: Option<String>,
    pub planned_end: Option<String>,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
}

/// Database row for a shipment (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = shipments)]
pub struct NewShipmentRow {
    pub booking_number: String,
    pub shipment_number: String,
    pub shipment_type: String,
    pub shipment_type_description: String,
    pub container_id: Option<String>,
    pub executing_carrier_name: Option<String>,
    pub vessel_name: Option<String>,
    pub voyage_number: Option<String>,
    pub planned_start: Option<String>,
    pub planned_end: Option<String>,
    pub actual_start: Option<String>,
    pub actual_end: Option<String>,
}

impl From<&ShipmentRecord> for NewShipmentRow {
    fn from(record: &ShipmentRecord) -> Self {
        Self {
            booking_number: record.booking_number.to_string(),
            shipment_number: record.shipment_number.clone(),
            shipment_type: record.shipment_type.code().to_string(),
            shipment_type_description: record.shipment_type_description.clone(),
            container_id: record.container_id.clone(),
            executing_carrier_name: record.executing_carrier_name.clone(),
            vessel_name: record.vessel_name.clone(),
            voyage_number: record.voyage_number.clone(),
            planned_start: to_text(record.planned_start),
            planned_end: to_text(record.planned_end),
            actual_start: to_text(record.actual_start),
            actual_end: to_text(record.actual_end),
        }
    }
}

impl TryFrom<ShipmentRow> for ShipmentRecord {
    type Error = DomainError;

    fn try_from(row: ShipmentRow) -> Result<Self, Self::Error> {
        let record = ShipmentRecord {
            booking_number: BookingNumber::new(row.booking_number),
            shipment_number: row.shipment_number,
            shipment_type: row.shipment_type.parse()?,
            shipment_type_description: row.shipment_type_description,
            container_id: row.container_id,
            executing_carrier_name: row.executing_carrier_name,
            vessel_name: row.vessel_name,
            voyage_number: row.voyage_number,
            planned_start: parse_optional_timestamp("planned_start", row.planned_start.as_deref())?,
            planned_end: parse_optional_timestamp("planned_end", row.planned_end.as_deref())?,
            actual_start: parse_optional_timestamp("actual_start", row.actual_start.as_deref())?,
            actual_end: parse_optional_timestamp("actual_end", row.actual_end.as_deref())?,
        };
        record.validate()?;
        Ok(record)
    }
}
