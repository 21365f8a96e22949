use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState, StoredReviewDto};

/// GET /fetch-reviews/{product_name}
///
/// Exact-match lookup; 404 when no rows exist for the name.
pub async fn fetch_reviews(
    State(state): State<Arc<AppState>>,
    Path(product_name): Path<String>,
) -> Result<Json<Vec<StoredReviewDto>>, ApiError> {
    let rows = state.store.reviews_for_product(&product_name).await?;

    if rows.is_empty() {
        return Err(ApiError::no_reviews_found());
    }

    let dtos: Vec<StoredReviewDto> = rows.into_iter().map(StoredReviewDto::from).collect();
    Ok(Json(dtos))
}
