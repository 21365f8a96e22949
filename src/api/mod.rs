use axum::{
    Json, Router,
    http::HeaderValue,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::amazon::AmazonClient;
use crate::clients::gemini::GeminiClient;
use crate::config::Config;
use crate::constants::HOME_MESSAGE;
use crate::db::Store;

mod error;
mod generate;
mod reviews;
mod scrape;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

pub struct AppState {
    pub config: Config,

    pub store: Store,

    pub gemini: GeminiClient,

    pub amazon: AmazonClient,
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let gemini = GeminiClient::new(config.gemini.clone());
    let amazon = AmazonClient::new(config.amazon.clone())?;

    Ok(Arc::new(AppState {
        config,
        store,
        gemini,
        amazon,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = &state.config.server.cors_allowed_origins;

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/", get(home))
        .route("/generate-review", post(generate::generate_review))
        .route("/fetch-reviews/{product_name}", get(reviews::fetch_reviews))
        .route("/scrape-amazon", post(scrape::scrape_amazon))
        .route(
            "/generate-gemini-overview",
            post(generate::generate_overview),
        )
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE.to_string(),
    })
}
