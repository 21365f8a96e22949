use axum::{Json, extract::State};
use std::sync::Arc;

use super::validation::validate_url;
use super::{ApiError, AppState, ScrapeRequest};
use crate::clients::amazon::ProductPage;

/// POST /scrape-amazon
///
/// Scrape failures (invalid source, non-200 fetch, transport) all surface
/// as 400 with the error message in the body.
pub async fn scrape_amazon(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScrapeRequest>,
) -> Result<Json<ProductPage>, ApiError> {
    validate_url(&payload.url)?;

    let page = state.amazon.scrape(&payload.url).await?;
    Ok(Json(page))
}
