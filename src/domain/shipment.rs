//! Carrier shipment records and the summaries attached to bookings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::event::Timestamp;
use super::id::BookingNumber;

/// Transport type of a shipment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentType {
    /// Ocean leg on a vessel.
    Marine,
    /// Truck leg, transport code 30.
    Truck30,
}

impl ShipmentType {
    /// All shipment types in lookup order.
    pub const ALL: [ShipmentType; 2] = [ShipmentType::Marine, ShipmentType::Truck30];

    /// Storage code for this shipment type.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Marine => "marine",
            Self::Truck30 => "truck30",
        }
    }
}

impl fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ShipmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "marine" => Ok(Self::Marine),
            "truck30" => Ok(Self::Truck30),
            _ => Err(DomainError::UnknownShipmentType(s.to_string())),
        }
    }
}

/// A carrier shipment belonging to one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub booking_number: BookingNumber,
    pub shipment_number: String,
    pub shipment_type: ShipmentType,
    #[serde(default)]
    pub shipment_type_description: String,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub executing_carrier_name: Option<String>,
    #[serde(default)]
    pub vessel_name: Option<String>,
    #[serde(default)]
    pub voyage_number: Option<String>,
    #[serde(default)]
    pub planned_start: Option<Timestamp>,
    #[serde(default)]
    pub planned_end: Option<Timestamp>,
    #[serde(default)]
    pub actual_start: Option<Timestamp>,
    #[serde(default)]
    pub actual_end: Option<Timestamp>,
}

impl ShipmentRecord {
    /// Create a shipment with only identifying fields set.
    pub fn new(
        booking_number: impl Into<BookingNumber>,
        shipment_number: impl Into<String>,
        shipment_type: ShipmentType,
    ) -> Self {
        Self {
            booking_number: booking_number.into(),
            shipment_number: shipment_number.into(),
            shipment_type,
            shipment_type_description: String::new(),
            container_id: None,
            executing_carrier_name: None,
            vessel_name: None,
            voyage_number: None,
            planned_start: None,
            planned_end: None,
            actual_start: None,
            actual_end: None,
        }
    }

    /// Check the invariants the joiner relies on.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyBookingNumber`] for a blank booking.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.booking_number.as_str().trim().is_empty() {
            return Err(DomainError::EmptyBookingNumber);
        }
        Ok(())
    }
}

/// Vessel details surfaced for marine shipments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarineShipment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executing_carrier_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voyage_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_start: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_end: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_start: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned_end: Option<Timestamp>,
}

impl From<&ShipmentRecord> for MarineShipment {
    fn from(record: &ShipmentRecord) -> Self {
        Self {
            executing_carrier_name: record.executing_carrier_name.clone(),
            vessel_name: record.vessel_name.clone(),
            voyage_number: record.voyage_number.clone(),
            actual_start: record.actual_start,
            actual_end: record.actual_end,
            planned_start: record.planned_start,
            planned_end: record.planned_end,
        }
    }
}

/// Container details surfaced for truck shipments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruckShipment {
    pub shipment_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    pub shipment_type_description: String,
}

impl From<&ShipmentRecord> for TruckShipment {
    fn from(record: &ShipmentRecord) -> Self {
        Self {
            shipment_number: record.shipment_number.clone(),
            container_id: record.container_id.clone(),
            shipment_type_description: record.shipment_type_description.clone(),
        }
    }
}

/// Result of looking up one shipment type.
///
/// Keeps "this type was never looked up" apart from "looked up, nothing
/// found": the first leaves every booking's list absent, the second gives
/// each booking an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShipmentLookup {
    #[default]
    NotQueried,
    Fetched(Vec<ShipmentRecord>),
}

impl ShipmentLookup {
    /// Fetched records, or `None` when not queried.
    #[must_use]
    pub fn records(&self) -> Option<&[ShipmentRecord]> {
        match self {
            Self::NotQueried => None,
            Self::Fetched(records) => Some(records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipment_type_parses_case_insensitively() {
        assert_eq!("Marine".parse::<ShipmentType>(), Ok(ShipmentType::Marine));
        assert_eq!(" TRUCK30 ".parse::<ShipmentType>(), Ok(ShipmentType::Truck30));
    }

    #[test]
    fn shipment_type_rejects_unknown_codes() {
        assert_eq!(
            "rail".parse::<ShipmentType>(),
            Err(DomainError::UnknownShipmentType("rail".into()))
        );
    }

    #[test]
    fn lookup_keeps_absence_apart_from_empty() {
        assert_eq!(ShipmentLookup::default().records(), None);
        let fetched = ShipmentLookup::Fetched(Vec::new());
        assert_eq!(fetched.records(), Some(&[][..]));
    }

    #[test]
    fn truck_summary_copies_container_fields() {
        let mut record = ShipmentRecord::new("BK-1", "SH-9", ShipmentType::Truck30);
        record.container_id = Some("MSCU1234567".into());
        record.shipment_type_description = "Truck 30".into();

        let summary = TruckShipment::from(&record);
        assert_eq!(summary.shipment_number, "SH-9");
        assert_eq!(summary.container_id.as_deref(), Some("MSCU1234567"));
        assert_eq!(summary.shipment_type_description, "Truck 30");
    }

    #[test]
    fn validate_rejects_blank_booking() {
        let record = ShipmentRecord::new("", "SH-1", ShipmentType::Marine);
        assert_eq!(record.validate(), Err(DomainError::EmptyBookingNumber));
    }
}
