use axum::{Json, extract::State};
use std::sync::Arc;

use super::validation::{validate_prompt, validate_reviews};
use super::{ApiError, AppState};
use super::{GenerateReviewRequest, GenerateReviewResponse, OverviewRequest, OverviewResponse};
use crate::constants::AI_PRODUCT_NAME;

/// POST /generate-review
///
/// Generates a review from the prompt and persists it under the constant
/// AI product name. Provider-side failures still come back as 200 with the
/// failure text in the `review` field (original wire behavior).
pub async fn generate_review(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateReviewRequest>,
) -> Result<Json<GenerateReviewResponse>, ApiError> {
    validate_prompt(&payload.prompt)?;

    let review = state.gemini.generate_review(&payload.prompt).await?;
    state.store.insert_review(AI_PRODUCT_NAME, &review).await?;

    Ok(Json(GenerateReviewResponse { review }))
}

/// POST /generate-gemini-overview
pub async fn generate_overview(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<OverviewRequest>,
) -> Result<Json<OverviewResponse>, ApiError> {
    validate_reviews(&payload.reviews)?;

    let overview = state.gemini.generate_summary(&payload.reviews).await?;

    Ok(Json(OverviewResponse { overview }))
}
