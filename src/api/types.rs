use serde::{Deserialize, Serialize};

use crate::clients::gemini::ReviewText;
use crate::db::StoredReview;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateReviewRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateReviewResponse {
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct OverviewRequest {
    #[serde(default)]
    pub reviews: Vec<ReviewText>,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub overview: String,
}

/// Stored row as served by `/fetch-reviews`, with the original wire keys.
#[derive(Debug, Serialize)]
pub struct StoredReviewDto {
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Overall Rating")]
    pub overall_rating: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Review")]
    pub review: String,
}

impl From<StoredReview> for StoredReviewDto {
    fn from(row: StoredReview) -> Self {
        Self {
            product: row.product_name,
            overall_rating: row.overall_rating,
            title: row.review_title,
            author: row.author,
            date: row.review_date,
            rating: row.rating,
            review: row.review,
        }
    }
}
