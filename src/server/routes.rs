use crate::errors::{PricerError, PricerResult};
use crate::server::form::PriceForm;
use crate::server::page::{self, PageView};
use crate::state::{AppState, CountersSnapshot, PricingRequest, Quote};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, Json};
use portable_atomic::Ordering;
use std::sync::Arc;

/// GET / -- empty form, no price
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    state.counters.pages_served.fetch_add(1, Ordering::Relaxed);
    Html(page::render(&PageView::default()))
}

/// POST / -- price the submitted form, or re-prompt with the reason
pub async fn submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<PriceForm>,
) -> (StatusCode, Html<String>) {
    state.counters.pages_served.fetch_add(1, Ordering::Relaxed);

    let (status, view) = match state.quote(form.to_request()) {
        Ok(quote) => (
            StatusCode::OK,
            PageView { form: Some(&form), quote: Some(quote), message: None },
        ),
        Err(e) => (
            e.status(),
            PageView { form: Some(&form), quote: None, message: Some(e.to_string()) },
        ),
    };
    (status, Html(page::render(&view)))
}

/// POST /api/price -- JSON in, JSON quote out; body errors answer as `{"error": ..}`
pub async fn price_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> PricerResult<Json<Quote>> {
    let request = payload
        .map(|Json(req)| req)
        .map_err(|e| PricerError::InvalidInput(e.body_text()));
    state.quote(request).map(Json)
}

/// GET /api/counters -- request counters (lock-free reads)
pub async fn get_counters(State(state): State<Arc<AppState>>) -> Json<CountersSnapshot> {
    Json(state.counters.snapshot())
}
