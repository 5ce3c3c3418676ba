#![allow(dead_code)]

use axum_test::TestServer;
use chrono::NaiveDate;
use shortlink::application::services::LinkService;
use shortlink::domain::entities::UrlRecord;
use shortlink::domain::repositories::RecordStore;
use shortlink::infrastructure::persistence::InMemoryStore;
use shortlink::routes::app_router;
use shortlink::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_record(id: u64, code: &str, url: &str, created_at: &str) -> UrlRecord {
    UrlRecord::new(
        id,
        url.to_string(),
        code.to_string(),
        BASE_URL,
        NaiveDate::parse_from_str(created_at, "%Y-%m-%d").unwrap(),
    )
}

pub fn create_test_state_with_store(store: Arc<dyn RecordStore>) -> AppState {
    let link_service = LinkService::new(store, BASE_URL);
    AppState::new(Arc::new(link_service))
}

pub fn create_test_state(records: Vec<UrlRecord>) -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::with_records(records));
    let state = create_test_state_with_store(store.clone());
    (state, store)
}

/// Full application router over an in-memory store seeded with `records`.
pub fn create_test_server(records: Vec<UrlRecord>) -> (TestServer, Arc<InMemoryStore>) {
    let (state, store) = create_test_state(records);
    let server = TestServer::new(app_router(state)).unwrap();
    (server, store)
}
