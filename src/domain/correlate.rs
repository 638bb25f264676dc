//! Milestone selection over a booking's tracking events.
//!
//! Rules, applied per booking and independent of every other booking:
//!
//! - **Departure**: `vessel_depart_origin`, else `vessel_load_origin`.
//!   Tag priority decides, never the timestamps.
//! - **Arrival**: `vessel_arrive_destination`, else
//!   `vessel_discharge_destination`.
//! - **Preparation**: the first `export_drayage_arrive` event.
//! - **In transit**: the event with the latest actual time among events whose
//!   tag is none of the five above. Events without an actual time never
//!   qualify.
//!
//! Whenever several events tie, the one that came first in the input wins.

use std::collections::HashMap;

use super::event::{action, TrackingEvent};
use super::id::BookingNumber;
use super::milestone::Milestone;
use super::tracking::{CorrelatedMilestones, MostRecentActivity};

/// Selects canonical milestones per booking.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCorrelator {
    include_recent_activity: bool,
}

impl EventCorrelator {
    /// Create a correlator; recent activity is only selected when asked for.
    #[must_use]
    pub const fn new(include_recent_activity: bool) -> Self {
        Self {
            include_recent_activity,
        }
    }

    /// Correlate milestones for every booking in `booking_numbers`.
    ///
    /// Bookings without any events get empty milestones.
    #[must_use]
    pub fn correlate(
        &self,
        events: &[TrackingEvent],
        booking_numbers: &[BookingNumber],
    ) -> HashMap<BookingNumber, CorrelatedMilestones> {
        let grouped = group_by_booking(events);

        booking_numbers
            .iter()
            .map(|booking| {
                let booking_events = grouped.get(booking).map_or(&[][..], Vec::as_slice);
                (booking.clone(), self.correlate_booking(booking_events))
            })
            .collect()
    }

    /// Correlate the events of a single booking, given in input order.
    #[must_use]
    pub fn correlate_booking(&self, events: &[&TrackingEvent]) -> CorrelatedMilestones {
        let most_recent_activity = self.include_recent_activity.then(|| MostRecentActivity {
            preparation: select_preparation(events).map(Milestone::from),
            in_transit: select_in_transit(events).map(Milestone::from),
        });

        CorrelatedMilestones {
            departure: select_by_priority(events, &action::DEPARTURE).map(Milestone::from),
            arrival: select_by_priority(events, &action::ARRIVAL).map(Milestone::from),
            most_recent_activity,
        }
    }
}

/// Group events by booking, keeping input order inside each group.
fn group_by_booking(events: &[TrackingEvent]) -> HashMap<&BookingNumber, Vec<&TrackingEvent>> {
    let mut grouped: HashMap<&BookingNumber, Vec<&TrackingEvent>> = HashMap::new();
    for event in events {
        grouped.entry(&event.booking_number).or_default().push(event);
    }
    grouped
}

/// First event carrying the highest-priority tag present.
fn select_by_priority<'a>(
    events: &[&'a TrackingEvent],
    tags_by_priority: &[&str],
) -> Option<&'a TrackingEvent> {
    tags_by_priority
        .iter()
        .find_map(|tag| events.iter().copied().find(|e| e.is_action(tag)))
}

fn select_preparation<'a>(events: &[&'a TrackingEvent]) -> Option<&'a TrackingEvent> {
    events
        .iter()
        .copied()
        .find(|e| e.is_action(action::EXPORT_DRAYAGE_ARRIVE))
}

fn select_in_transit<'a>(events: &[&'a TrackingEvent]) -> Option<&'a TrackingEvent> {
    let mut latest: Option<&'a TrackingEvent> = None;

    for event in events.iter().copied() {
        if action::MILESTONE_TAGS.contains(&event.action_type.as_str()) {
            continue;
        }
        let Some(at) = event.actual_time else {
            continue;
        };
        // strictly later only, so the earlier event keeps a tie
        if latest.and_then(|l| l.actual_time).map_or(true, |best| at > best) {
            latest = Some(event);
        }
    }

    latest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::{event, ts};

    fn booking(n: &str) -> BookingNumber {
        BookingNumber::new(n)
    }

    fn correlate_one(events: &[TrackingEvent], recent: bool) -> CorrelatedMilestones {
        let refs: Vec<&TrackingEvent> = events.iter().collect();
        EventCorrelator::new(recent).correlate_booking(&refs)
    }

    #[test]
    fn departure_prefers_depart_origin_even_when_load_is_earlier() {
        let events = vec![
            event("BK-1", action::VESSEL_LOAD_ORIGIN)
                .with_event_name("Loaded")
                .with_predicted_time(ts("2024-01-01T00:00:00Z")),
            event("BK-1", action::VESSEL_DEPART_ORIGIN)
                .with_event_name("Departed")
                .with_predicted_time(ts("2024-01-09T00:00:00Z")),
        ];

        let milestones = correlate_one(&events, false);
        let departure = milestones.departure.unwrap();
        assert_eq!(departure.event_name, "Departed");
        assert_eq!(departure.predicted_time, Some(ts("2024-01-09T00:00:00Z")));
    }

    #[test]
    fn departure_falls_back_to_load_origin() {
        let events = vec![event("BK-1", action::VESSEL_LOAD_ORIGIN).with_event_name("Loaded")];
        let milestones = correlate_one(&events, false);
        assert_eq!(milestones.departure.unwrap().event_name, "Loaded");
    }

    #[test]
    fn departure_absent_without_candidates() {
        let events = vec![event("BK-1", "gate_in")];
        assert!(correlate_one(&events, false).departure.is_none());
    }

    #[test]
    fn duplicate_tags_keep_first_in_input_order() {
        let events = vec![
            event("BK-1", action::VESSEL_DEPART_ORIGIN).with_event_name("first"),
            event("BK-1", action::VESSEL_DEPART_ORIGIN).with_event_name("second"),
        ];
        assert_eq!(correlate_one(&events, false).departure.unwrap().event_name, "first");
    }

    #[test]
    fn arrival_prefers_arrive_destination() {
        let events = vec![
            event("BK-1", action::VESSEL_DISCHARGE_DESTINATION).with_event_name("Discharged"),
            event("BK-1", action::VESSEL_ARRIVE_DESTINATION).with_event_name("Arrived"),
        ];
        assert_eq!(correlate_one(&events, false).arrival.unwrap().event_name, "Arrived");
    }

    #[test]
    fn recent_activity_omitted_when_not_requested() {
        let events = vec![
            event("BK-1", action::EXPORT_DRAYAGE_ARRIVE),
            event("BK-1", "gate_in").with_actual_time(ts("2024-01-02T00:00:00Z")),
        ];
        assert!(correlate_one(&events, false).most_recent_activity.is_none());
    }

    #[test]
    fn preparation_picks_first_drayage_event() {
        let events = vec![
            event("BK-1", action::EXPORT_DRAYAGE_ARRIVE).with_event_name("first"),
            event("BK-1", action::EXPORT_DRAYAGE_ARRIVE).with_event_name("second"),
        ];
        let activity = correlate_one(&events, true).most_recent_activity.unwrap();
        assert_eq!(activity.preparation.unwrap().event_name, "first");
    }

    #[test]
    fn in_transit_picks_latest_actual_time() {
        let events = vec![
            event("BK-1", "gate_in")
                .with_event_name("older")
                .with_actual_time(ts("2024-01-02T00:00:00Z")),
            event("BK-1", "transshipment")
                .with_event_name("newer")
                .with_actual_time(ts("2024-01-05T00:00:00Z")),
        ];
        let activity = correlate_one(&events, true).most_recent_activity.unwrap();
        assert_eq!(activity.in_transit.unwrap().event_name, "newer");
    }

    #[test]
    fn in_transit_ignores_milestone_tags() {
        let events = vec![
            event("BK-1", action::VESSEL_ARRIVE_DESTINATION)
                .with_actual_time(ts("2024-02-01T00:00:00Z")),
            event("BK-1", "gate_in")
                .with_event_name("gate")
                .with_actual_time(ts("2024-01-01T00:00:00Z")),
        ];
        let activity = correlate_one(&events, true).most_recent_activity.unwrap();
        assert_eq!(activity.in_transit.unwrap().event_name, "gate");
    }

    #[test]
    fn in_transit_requires_actual_time() {
        let events = vec![event("BK-1", "gate_in").with_predicted_time(ts("2024-01-01T00:00:00Z"))];
        let activity = correlate_one(&events, true).most_recent_activity.unwrap();
        assert!(activity.in_transit.is_none());
        assert!(activity.preparation.is_none());
    }

    #[test]
    fn in_transit_tie_keeps_earlier_input() {
        let at = ts("2024-01-03T00:00:00Z");
        let events = vec![
            event("BK-1", "gate_in").with_event_name("first").with_actual_time(at),
            event("BK-1", "gate_out").with_event_name("second").with_actual_time(at),
        ];
        let activity = correlate_one(&events, true).most_recent_activity.unwrap();
        assert_eq!(activity.in_transit.unwrap().event_name, "first");
    }

    #[test]
    fn correlate_keeps_bookings_independent() {
        let events = vec![
            event("BK-1", action::VESSEL_LOAD_ORIGIN).with_event_name("bk1 load"),
            event("BK-2", action::VESSEL_DEPART_ORIGIN).with_event_name("bk2 depart"),
        ];
        let result =
            EventCorrelator::new(false).correlate(&events, &[booking("BK-1"), booking("BK-2")]);

        assert_eq!(
            result[&booking("BK-1")].departure.as_ref().unwrap().event_name,
            "bk1 load"
        );
        assert_eq!(
            result[&booking("BK-2")].departure.as_ref().unwrap().event_name,
            "bk2 depart"
        );
    }

    #[test]
    fn correlate_yields_empty_milestones_for_unknown_booking() {
        let result = EventCorrelator::new(true).correlate(&[], &[booking("BK-404")]);
        let milestones = &result[&booking("BK-404")];
        assert!(milestones.departure.is_none());
        assert_eq!(
            milestones.most_recent_activity,
            Some(MostRecentActivity::default())
        );
    }
}
