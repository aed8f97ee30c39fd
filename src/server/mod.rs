pub mod form;
pub mod page;
pub mod routes;

use crate::state::AppState;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the HTTP surface: the pricing form, the JSON API, and static assets.
pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(routes::index).post(routes::submit))
        .route("/api/price", post(routes::price_json))
        .route("/api/counters", get(routes::get_counters))
        .nest_service("/static", tower_http::services::ServeDir::new(static_dir))
        .with_state(state)
}
