//! Handler for the `query` command.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::command::QueryArgs;
use super::{init_logging, output};
use crate::domain::{BookingView, LocationId, MarineTrackings, Milestone, OrderId, Timestamp};
use crate::error::Result;
use crate::infrastructure::bootstrap::{dataset_service, sqlite_service};
use crate::infrastructure::config::Config;
use crate::port::inbound::{MarineTrackingsQuery, MarineTrackingsRequest, RequestContext};

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "Booking")]
    booking: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "ETD")]
    etd: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "ETA")]
    eta: String,
    #[tabled(rename = "Marine")]
    marine: String,
    #[tabled(rename = "Truck")]
    truck: String,
}

#[derive(Tabled)]
struct ActivityRow {
    #[tabled(rename = "Booking")]
    booking: String,
    #[tabled(rename = "Preparation")]
    preparation: String,
    #[tabled(rename = "In transit")]
    in_transit: String,
}

/// Execute `query`.
pub async fn execute(args: &QueryArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    init_logging(&config);

    let context = request_context(args);
    let request = build_request(args);

    let trackings = match &args.dataset {
        Some(path) => {
            dataset_service(path, &config)?
                .marine_trackings(&context, &request)
                .await?
        }
        None => {
            sqlite_service(&config)?
                .marine_trackings(&context, &request)
                .await?
        }
    };

    if output::is_json() {
        output::json_output(&serde_json::to_value(&trackings)?);
        return Ok(());
    }
    for order_id in missing_orders(&request, &trackings) {
        output::warning(&format!(
            "Order {order_id} has no tracking for the authorized locations"
        ));
    }
    render(&trackings, request.include_recent_activity);
    Ok(())
}

fn request_context(args: &QueryArgs) -> RequestContext {
    RequestContext::new(
        args.locations
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(LocationId::new),
    )
}

fn build_request(args: &QueryArgs) -> MarineTrackingsRequest {
    let request = if args.orders.is_empty() {
        MarineTrackingsRequest::all()
    } else {
        MarineTrackingsRequest::for_orders(args.orders.iter().map(|o| OrderId::new(o.trim())))
    };
    request.with_recent_activity(args.recent_activity)
}

// Requested orders that did not make it into the response.
fn missing_orders<'a>(
    request: &'a MarineTrackingsRequest,
    trackings: &MarineTrackings,
) -> Vec<&'a OrderId> {
    request
        .order_ids
        .iter()
        .flatten()
        .filter(|id| !trackings.marine_trackings.iter().any(|o| &o.order_id == *id))
        .collect()
}

fn render(trackings: &MarineTrackings, include_recent_activity: bool) {
    if trackings.marine_trackings.is_empty() {
        output::note("No marine trackings for the authorized locations");
        return;
    }

    for order in &trackings.marine_trackings {
        output::section(&format!("Order {}", order.order_id));
        output::field("Earliest ETD", time_cell(order.earliest_etd));
        output::field("Earliest ETA", time_cell(order.earliest_eta));

        if order.bookings.is_empty() {
            output::note("(no bookings)");
            continue;
        }

        let rows: Vec<BookingRow> = order.bookings.iter().map(booking_row).collect();
        output::lines(&Table::new(rows).with(Style::rounded()).to_string());

        if include_recent_activity {
            let rows: Vec<ActivityRow> = order.bookings.iter().map(activity_row).collect();
            output::lines(&Table::new(rows).with(Style::rounded()).to_string());
        }
    }

    output::section("Summary");
    output::field("Orders", output::highlight(trackings.marine_trackings.len()));
    output::field("Bookings", output::highlight(trackings.booking_count()));
}

fn booking_row(booking: &BookingView) -> BookingRow {
    BookingRow {
        booking: booking.booking_number.to_string(),
        departure: milestone_cell(booking.departure.as_ref()),
        etd: time_cell(booking.earliest_etd),
        arrival: milestone_cell(booking.arrival.as_ref()),
        eta: time_cell(booking.earliest_eta),
        marine: count_cell(booking.marine_shipments.as_ref().map(Vec::len)),
        truck: count_cell(booking.truck_shipments.as_ref().map(Vec::len)),
    }
}

fn activity_row(booking: &BookingView) -> ActivityRow {
    let activity = booking.most_recent_activity.as_ref();
    ActivityRow {
        booking: booking.booking_number.to_string(),
        preparation: milestone_cell(activity.and_then(|a| a.preparation.as_ref())),
        in_transit: milestone_cell(activity.and_then(|a| a.in_transit.as_ref())),
    }
}

fn milestone_cell(milestone: Option<&Milestone>) -> String {
    match milestone {
        Some(m) if m.location_name.is_empty() => m.event_name.clone(),
        Some(m) => format!("{} @ {}", m.event_name, m.location_name),
        None => "-".to_string(),
    }
}

fn time_cell(at: Option<Timestamp>) -> String {
    at.map_or_else(|| "-".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}

// "-" when the type was not looked up, a count otherwise
fn count_cell(count: Option<usize>) -> String {
    count.map_or_else(|| "-".to_string(), |n| n.to_string())
}
