//! Booking- and order-level rollups.
//!
//! [`consolidate`] is the whole pipeline: derive bookings from the order
//! events, correlate milestones, join shipments, build one [`BookingView`]
//! per booking, and reduce bookings to one [`OrderView`] per authorized
//! order. It performs no I/O and depends only on its inputs.

use std::collections::{HashMap, HashSet};

use super::correlate::EventCorrelator;
use super::event::{Timestamp, TrackingEvent};
use super::id::{BookingNumber, OrderId};
use super::join::ShipmentJoiner;
use super::milestone::milestone_time;
use super::shipment::ShipmentLookup;
use super::tracking::{BookingShipments, BookingView, CorrelatedMilestones, MarineTrackings, OrderView};

/// Which bookings belong to which order, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingAssignments {
    pairs: Vec<(OrderId, BookingNumber)>,
}

impl BookingAssignments {
    /// Derive assignments from tracking events fetched for orders.
    ///
    /// Repeated (order, booking) pairs collapse to their first occurrence.
    #[must_use]
    pub fn from_events(events: &[TrackingEvent]) -> Self {
        let mut seen: HashSet<(&OrderId, &BookingNumber)> = HashSet::new();
        let mut pairs = Vec::new();
        for event in events {
            if seen.insert((&event.order_id, &event.booking_number)) {
                pairs.push((event.order_id.clone(), event.booking_number.clone()));
            }
        }
        Self { pairs }
    }

    /// Distinct booking numbers across all orders.
    #[must_use]
    pub fn booking_numbers(&self) -> Vec<BookingNumber> {
        let mut seen: HashSet<&BookingNumber> = HashSet::new();
        let mut numbers = Vec::new();
        for (_, booking) in &self.pairs {
            if seen.insert(booking) {
                numbers.push(booking.clone());
            }
        }
        numbers
    }

    /// Bookings assigned to `order`.
    pub fn bookings_for<'a>(&'a self, order: &'a OrderId) -> impl Iterator<Item = &'a BookingNumber> {
        self.pairs
            .iter()
            .filter(move |(o, _)| o == order)
            .map(|(_, booking)| booking)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Merges correlated milestones and joined shipments into booking views.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingAggregator;

impl BookingAggregator {
    /// Build the view of one booking.
    #[must_use]
    pub fn aggregate(
        booking_number: BookingNumber,
        milestones: CorrelatedMilestones,
        shipments: BookingShipments,
    ) -> BookingView {
        let earliest_etd = milestone_time(milestones.departure.as_ref());
        let earliest_eta = milestone_time(milestones.arrival.as_ref());

        BookingView {
            booking_number,
            departure: milestones.departure,
            arrival: milestones.arrival,
            most_recent_activity: milestones.most_recent_activity,
            marine_shipments: shipments.marine,
            truck_shipments: shipments.truck,
            earliest_etd,
            earliest_eta,
        }
    }

    /// Build views for every booking in `booking_numbers`.
    ///
    /// A booking missing from either map gets empty milestones or shipments.
    #[must_use]
    pub fn aggregate_all(
        booking_numbers: &[BookingNumber],
        mut milestones: HashMap<BookingNumber, CorrelatedMilestones>,
        mut shipments: HashMap<BookingNumber, BookingShipments>,
    ) -> HashMap<BookingNumber, BookingView> {
        booking_numbers
            .iter()
            .map(|booking| {
                let view = Self::aggregate(
                    booking.clone(),
                    milestones.remove(booking).unwrap_or_default(),
                    shipments.remove(booking).unwrap_or_default(),
                );
                (booking.clone(), view)
            })
            .collect()
    }
}

/// Rolls booking views up to authorized orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderAggregator;

impl OrderAggregator {
    /// One view per order in `order_ids`, in that order.
    ///
    /// Orders without bookings are kept with an empty booking list.
    #[must_use]
    pub fn aggregate(
        order_ids: &[OrderId],
        assignments: &BookingAssignments,
        bookings: &HashMap<BookingNumber, BookingView>,
    ) -> Vec<OrderView> {
        order_ids
            .iter()
            .map(|order_id| {
                let order_bookings: Vec<BookingView> = assignments
                    .bookings_for(order_id)
                    .filter_map(|booking| bookings.get(booking).cloned())
                    .collect();
                Self::roll_up(order_id.clone(), order_bookings)
            })
            .collect()
    }

    /// Compute order-level earliest times over `bookings`.
    #[must_use]
    pub fn roll_up(order_id: OrderId, bookings: Vec<BookingView>) -> OrderView {
        OrderView {
            order_id,
            earliest_etd: earliest(bookings.iter().map(|b| b.earliest_etd)),
            earliest_eta: earliest(bookings.iter().map(|b| b.earliest_eta)),
            bookings,
        }
    }
}

/// Chronological minimum of the present values.
fn earliest(times: impl Iterator<Item = Option<Timestamp>>) -> Option<Timestamp> {
    times.flatten().min()
}

/// Already-fetched collections for one marine-trackings query.
#[derive(Debug, Clone, Default)]
pub struct TrackingInputs {
    /// Authorized orders, in the order they should be reported.
    pub order_ids: Vec<OrderId>,
    /// Tracking events fetched for the authorized orders.
    pub order_events: Vec<TrackingEvent>,
    /// Tracking events fetched for the bookings of those orders.
    pub booking_events: Vec<TrackingEvent>,
    pub marine: ShipmentLookup,
    pub truck: ShipmentLookup,
}

/// Produce the marine-trackings response from fetched collections.
///
/// With no order events at all the response is empty.
#[must_use]
pub fn consolidate(inputs: &TrackingInputs, include_recent_activity: bool) -> MarineTrackings {
    if inputs.order_events.is_empty() {
        return MarineTrackings::empty();
    }

    let assignments = BookingAssignments::from_events(&inputs.order_events);
    let booking_numbers = assignments.booking_numbers();

    let milestones =
        EventCorrelator::new(include_recent_activity).correlate(&inputs.booking_events, &booking_numbers);
    let shipments =
        ShipmentJoiner::new(inputs.marine.clone(), inputs.truck.clone()).join(&booking_numbers);
    let bookings = BookingAggregator::aggregate_all(&booking_numbers, milestones, shipments);

    MarineTrackings {
        marine_trackings: OrderAggregator::aggregate(&inputs.order_ids, &assignments, &bookings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::action;
    use crate::domain::shipment::{ShipmentRecord, ShipmentType};
    use crate::testkit::domain::{event, order_event, ts};

    fn booking_view(number: &str, etd: Option<&str>, eta: Option<&str>) -> BookingView {
        BookingView {
            booking_number: BookingNumber::new(number),
            departure: None,
            arrival: None,
            most_recent_activity: None,
            marine_shipments: Some(Vec::new()),
            truck_shipments: Some(Vec::new()),
            earliest_etd: etd.map(ts),
            earliest_eta: eta.map(ts),
        }
    }

    #[test]
    fn assignments_dedupe_pairs_in_first_seen_order() {
        let events = vec![
            order_event("SO-1", "BK-2", "gate_in"),
            order_event("SO-1", "BK-1", "gate_in"),
            order_event("SO-1", "BK-2", "gate_out"),
            order_event("SO-2", "BK-1", "gate_in"),
        ];
        let assignments = BookingAssignments::from_events(&events);

        assert_eq!(
            assignments.booking_numbers(),
            vec![BookingNumber::new("BK-2"), BookingNumber::new("BK-1")]
        );
        let so1 = OrderId::new("SO-1");
        assert_eq!(assignments.bookings_for(&so1).count(), 2);
    }

    #[test]
    fn booking_times_come_from_coalesced_milestones() {
        let events = vec![
            event("BK-1", action::VESSEL_DEPART_ORIGIN)
                .with_predicted_time(ts("2024-03-01T00:00:00Z")),
            event("BK-1", action::VESSEL_DISCHARGE_DESTINATION)
                .with_carrier_planned_time(ts("2024-03-20T00:00:00Z")),
        ];
        let refs: Vec<&TrackingEvent> = events.iter().collect();
        let milestones = EventCorrelator::new(false).correlate_booking(&refs);

        let view = BookingAggregator::aggregate(
            BookingNumber::new("BK-1"),
            milestones,
            BookingShipments::default(),
        );
        assert_eq!(view.earliest_etd, Some(ts("2024-03-01T00:00:00Z")));
        assert_eq!(view.earliest_eta, Some(ts("2024-03-20T00:00:00Z")));
    }

    #[test]
    fn order_takes_minimum_of_present_values() {
        let view = OrderAggregator::roll_up(
            OrderId::new("SO-1"),
            vec![
                booking_view("BK-1", Some("2024-02-10T00:00:00Z"), None),
                booking_view("BK-2", None, None),
                booking_view("BK-3", Some("2024-02-01T00:00:00Z"), Some("2024-03-01T00:00:00Z")),
            ],
        );
        assert_eq!(view.earliest_etd, Some(ts("2024-02-01T00:00:00Z")));
        assert_eq!(view.earliest_eta, Some(ts("2024-03-01T00:00:00Z")));
    }

    #[test]
    fn order_without_values_has_no_rollup() {
        let view = OrderAggregator::roll_up(OrderId::new("SO-1"), vec![booking_view("BK-1", None, None)]);
        assert_eq!(view.earliest_etd, None);
        assert_eq!(view.earliest_eta, None);
    }

    #[test]
    fn order_without_bookings_is_kept() {
        let orders = vec![OrderId::new("SO-1"), OrderId::new("SO-2")];
        let assignments = BookingAssignments::from_events(&[order_event("SO-1", "BK-1", "gate_in")]);
        let mut bookings = HashMap::new();
        bookings.insert(BookingNumber::new("BK-1"), booking_view("BK-1", None, None));

        let views = OrderAggregator::aggregate(&orders, &assignments, &bookings);
        assert_eq!(views.len(), 2);
        assert_eq!(views[1].order_id, OrderId::new("SO-2"));
        assert!(views[1].bookings.is_empty());
        assert!(views[1].earliest_etd.is_none());
    }

    #[test]
    fn consolidate_without_order_events_is_empty() {
        let inputs = TrackingInputs {
            order_ids: vec![OrderId::new("SO-1")],
            ..TrackingInputs::default()
        };
        assert_eq!(consolidate(&inputs, true), MarineTrackings::empty());
    }

    #[test]
    fn consolidate_joins_everything_per_order() {
        let order_events = vec![
            order_event("SO-1", "BK-1", action::VESSEL_DEPART_ORIGIN),
            order_event("SO-1", "BK-2", action::VESSEL_DEPART_ORIGIN),
        ];
        let booking_events = vec![
            order_event("SO-1", "BK-1", action::VESSEL_DEPART_ORIGIN)
                .with_actual_time(ts("2024-02-10T00:00:00Z")),
            order_event("SO-1", "BK-2", action::VESSEL_LOAD_ORIGIN)
                .with_predicted_time(ts("2024-02-01T00:00:00Z")),
        ];
        let inputs = TrackingInputs {
            order_ids: vec![OrderId::new("SO-1"), OrderId::new("SO-9")],
            order_events,
            booking_events,
            marine: ShipmentLookup::Fetched(vec![ShipmentRecord::new("BK-2", "M-1", ShipmentType::Marine)]),
            truck: ShipmentLookup::NotQueried,
        };

        let result = consolidate(&inputs, false);
        assert_eq!(result.marine_trackings.len(), 2);

        let so1 = &result.marine_trackings[0];
        assert_eq!(so1.earliest_etd, Some(ts("2024-02-01T00:00:00Z")));
        assert_eq!(so1.bookings.len(), 2);
        assert_eq!(so1.bookings[1].marine_shipments.as_ref().map(Vec::len), Some(1));
        assert_eq!(so1.bookings[0].marine_shipments, Some(Vec::new()));
        assert!(so1.bookings[0].truck_shipments.is_none());

        assert!(result.marine_trackings[1].bookings.is_empty());
    }
}
