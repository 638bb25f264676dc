//! SQLite-backed implementation of the outbound tracking ports.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;
use tracing::{debug, info};

use super::database::connection::{create_pool, run_migrations, DbPool};
use super::database::model::{
    NewOrderRow, NewShipmentRow, NewTrackingEventRow, ShipmentRow, TrackingEventRow,
};
use super::database::schema::{orders, shipments, tracking_events};
use crate::adapter::outbound::memory::Dataset;
use crate::domain::error::DomainError;
use crate::domain::{
    BookingNumber, LocationId, OrderId, ShipmentRecord, ShipmentType, TrackingEvent,
};
use crate::error::{Error, Result};
use crate::port::outbound::{OrderRepository, ShipmentRepository, TrackingEventRepository};

type PooledConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Row counts written by [`SqliteRepository::import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub orders: usize,
    pub tracking_events: usize,
    pub shipments: usize,
}

/// Orders, tracking events, and shipments stored in SQLite.
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Wrap an existing pool. Migrations are assumed to have run.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open `database_url` and bring its schema up to date.
    ///
    /// # Errors
    /// Returns an error if the pool cannot be built or migrations fail.
    pub fn open(database_url: &str) -> Result<Self> {
        let pool = create_pool(database_url)?;
        run_migrations(&pool)?;
        debug!(database = %database_url, "Opened tracking database");
        Ok(Self::new(pool))
    }

    fn connection(&self) -> Result<PooledConn> {
        self.pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// Load a dataset in one transaction.
    ///
    /// Orders are upserted by order id and keep their original position.
    /// Stored events of every order in the
    /// dataset, and stored shipments of every booking in it, are replaced,
    /// so importing the same dataset twice leaves one copy.
    ///
    /// # Errors
    /// Returns an error if the dataset is invalid or a write fails.
    pub fn import(&self, dataset: &Dataset) -> Result<ImportSummary> {
        dataset.validate()?;
        let mut conn = self.connection()?;

        let event_orders: Vec<String> = distinct(
            dataset
                .tracking_events
                .iter()
                .map(|e| e.order_id.to_string()),
        );
        let shipment_bookings: Vec<String> = distinct(
            dataset
                .shipments
                .iter()
                .map(|s| s.booking_number.to_string()),
        );

        let summary = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                let mut summary = ImportSummary::default();

                for order in &dataset.orders {
                    let row = NewOrderRow::from(order);
                    summary.orders += diesel::insert_into(orders::table)
                        .values(&row)
                        .on_conflict(orders::order_id)
                        .do_update()
                        .set(orders::ship_to_id.eq(&row.ship_to_id))
                        .execute(conn)?;
                }

                diesel::delete(
                    tracking_events::table.filter(tracking_events::order_id.eq_any(&event_orders)),
                )
                .execute(conn)?;
                for event in &dataset.tracking_events {
                    summary.tracking_events += diesel::insert_into(tracking_events::table)
                        .values(&NewTrackingEventRow::from(event))
                        .execute(conn)?;
                }

                diesel::delete(
                    shipments::table.filter(shipments::booking_number.eq_any(&shipment_bookings)),
                )
                .execute(conn)?;
                for shipment in &dataset.shipments {
                    summary.shipments += diesel::insert_into(shipments::table)
                        .values(&NewShipmentRow::from(shipment))
                        .execute(conn)?;
                }

                Ok(summary)
            })
            .map_err(|e| Error::Database(e.to_string()))?;

        info!(
            orders = summary.orders,
            tracking_events = summary.tracking_events,
            shipments = summary.shipments,
            "Imported dataset"
        );
        Ok(summary)
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

fn to_strings<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

impl OrderRepository for SqliteRepository {
    async fn resolve_authorized_order_ids(
        &self,
        authorized_location_ids: &[LocationId],
        requested: Option<&[OrderId]>,
    ) -> Result<Vec<OrderId>> {
        if authorized_location_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.connection()?;

        let mut query = orders::table
            .filter(orders::ship_to_id.eq_any(to_strings(authorized_location_ids)))
            .order(orders::id.asc())
            .select(orders::order_id)
            .into_boxed();
        if let Some(requested) = requested {
            query = query.filter(orders::order_id.eq_any(to_strings(requested)));
        }

        let ids: Vec<String> = query
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        debug!(count = ids.len(), "Resolved authorized orders");
        Ok(ids.into_iter().map(OrderId::new).collect())
    }
}

impl TrackingEventRepository for SqliteRepository {
    async fn events_for_orders(&self, order_ids: &[OrderId]) -> Result<Vec<TrackingEvent>> {
        let mut conn = self.connection()?;

        let rows: Vec<TrackingEventRow> = tracking_events::table
            .filter(tracking_events::order_id.eq_any(to_strings(order_ids)))
            .order(tracking_events::id.asc())
            .select(TrackingEventRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        to_events(rows)
    }

    async fn events_for_bookings(
        &self,
        booking_numbers: &[BookingNumber],
    ) -> Result<Vec<TrackingEvent>> {
        let mut conn = self.connection()?;

        let rows: Vec<TrackingEventRow> = tracking_events::table
            .filter(tracking_events::booking_number.eq_any(to_strings(booking_numbers)))
            .order(tracking_events::id.asc())
            .select(TrackingEventRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        to_events(rows)
    }
}

fn to_events(rows: Vec<TrackingEventRow>) -> Result<Vec<TrackingEvent>> {
    let events = rows
        .into_iter()
        .map(TrackingEvent::try_from)
        .collect::<std::result::Result<Vec<_>, DomainError>>()?;
    Ok(events)
}

impl ShipmentRepository for SqliteRepository {
    async fn shipments_for_bookings(
        &self,
        booking_numbers: &[BookingNumber],
        shipment_type: ShipmentType,
    ) -> Result<Vec<ShipmentRecord>> {
        let mut conn = self.connection()?;

        let rows: Vec<ShipmentRow> = shipments::table
            .filter(shipments::booking_number.eq_any(to_strings(booking_numbers)))
            .filter(shipments::shipment_type.eq(shipment_type.code()))
            .order(shipments::id.asc())
            .select(ShipmentRow::as_select())
            .load(&mut conn)
            .map_err(|e| Error::Database(e.to_string()))?;

        let records = rows
            .into_iter()
            .map(ShipmentRecord::try_from)
            .collect::<std::result::Result<Vec<_>, DomainError>>()?;
        Ok(records)
    }
}
