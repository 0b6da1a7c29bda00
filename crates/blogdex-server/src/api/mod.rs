mod analyze;
mod competitor;
mod seo;
mod suggest;
mod trends;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use blogdex_core::AppConfig;
use blogdex_scraper::Analyzer;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub config: Arc<AppConfig>,
    /// Short-timeout client for the suggestion/competitor/trend proxies.
    pub proxy: reqwest::Client,
}

impl AppState {
    /// Build the shared state: one analyzer and one proxy client, reused
    /// across requests.
    ///
    /// # Errors
    ///
    /// Returns an error when either HTTP client cannot be constructed.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let analyzer = Arc::new(Analyzer::new(&config)?);
        let proxy = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .build()?;
        Ok(Self {
            analyzer,
            config,
            proxy,
        })
    }
}

/// Flat error body, matching what the frontend expects: `{"error": msg}`.
pub(super) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", get(analyze::analyze_blog))
        .route("/api/seo-score", get(seo::seo_score))
        .route("/api/suggest", get(suggest::keyword_suggest))
        .route("/api/competitor", get(competitor::analyze_competitor))
        .route("/api/trends", get(trends::trending_keywords))
        .route("/api/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": now_iso(),
    }))
}

/// Local wall-clock timestamp in the ISO shape the frontend renders.
pub(super) fn now_iso() -> String {
    chrono::Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
