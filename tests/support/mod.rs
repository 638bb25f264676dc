#![allow(dead_code)]

use std::sync::Arc;

use marinetrack::adapter::outbound::memory::{Dataset, MemoryRepository};
use marinetrack::application::tracking::MarineTrackingsService;
use marinetrack::domain::{LocationId, MarineTrackings, OrderId, OrderView};
use marinetrack::port::inbound::{MarineTrackingsQuery, MarineTrackingsRequest, RequestContext};

pub type MemoryService = MarineTrackingsService<MemoryRepository, MemoryRepository, MemoryRepository>;

pub fn memory_service(dataset: Dataset) -> MemoryService {
    let repo = Arc::new(MemoryRepository::new(dataset));
    MarineTrackingsService::new(repo.clone(), repo.clone(), repo)
}

pub fn context(locations: &[&str]) -> RequestContext {
    RequestContext::new(locations.iter().map(|l| LocationId::new(*l)))
}

pub async fn query<Q: MarineTrackingsQuery>(
    service: &Q,
    locations: &[&str],
    request: MarineTrackingsRequest,
) -> MarineTrackings {
    service
        .marine_trackings(&context(locations), &request)
        .await
        .expect("query succeeds")
}

pub fn order<'a>(trackings: &'a MarineTrackings, id: &str) -> &'a OrderView {
    trackings
        .marine_trackings
        .iter()
        .find(|o| o.order_id == OrderId::new(id))
        .unwrap_or_else(|| panic!("order {id} missing from response"))
}

pub fn order_ids(trackings: &MarineTrackings) -> Vec<String> {
    trackings
        .marine_trackings
        .iter()
        .map(|o| o.order_id.to_string())
        .collect()
}

pub fn booking_numbers(order: &OrderView) -> Vec<String> {
    order
        .bookings
        .iter()
        .map(|b| b.booking_number.to_string())
        .collect()
}
