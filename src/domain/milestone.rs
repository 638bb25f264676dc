//! Milestones derived from tracking events and their representative time.

use serde::Serialize;

use super::event::{Timestamp, TrackingEvent};

/// A tracking event promoted to a booking milestone.
///
/// Departure, arrival, preparation, and in-transit milestones share this
/// shape; which role a milestone plays is decided by where it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub event_name: String,
    pub location_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_planned_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_processed_time: Option<Timestamp>,
}

impl Milestone {
    /// The single timestamp that stands for this milestone.
    ///
    /// See [`coalesce`] for the fallback order.
    #[must_use]
    pub fn representative_time(&self) -> Option<Timestamp> {
        coalesce(
            self.actual_time,
            self.predicted_time,
            self.carrier_planned_time,
        )
    }
}

impl From<&TrackingEvent> for Milestone {
    fn from(event: &TrackingEvent) -> Self {
        Self {
            event_name: event.event_name.clone(),
            location_name: event.location_name.clone(),
            actual_time: event.actual_time,
            predicted_time: event.predicted_time,
            carrier_planned_time: event.carrier_planned_time,
            last_processed_time: event.last_processed_time,
        }
    }
}

/// Resolve actual, then predicted, then carrier-planned time.
#[must_use]
pub fn coalesce(
    actual: Option<Timestamp>,
    predicted: Option<Timestamp>,
    carrier_planned: Option<Timestamp>,
) -> Option<Timestamp> {
    actual.or(predicted).or(carrier_planned)
}

/// Representative time of an optional milestone; absent milestones have none.
#[must_use]
pub fn milestone_time(milestone: Option<&Milestone>) -> Option<Timestamp> {
    milestone.and_then(Milestone::representative_time)
}
