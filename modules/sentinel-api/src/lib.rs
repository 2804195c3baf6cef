use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use sentinel_engine::Sentinel;

pub mod rest;

pub struct AppState {
    pub sentinel: Arc<Sentinel>,
}

impl AppState {
    pub fn new(sentinel: Sentinel) -> Self {
        Self {
            sentinel: Arc::new(sentinel),
        }
    }
}

/// All routes plus the CORS, cache and request-logging layers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Service info
        .route("/", get(rest::api_banner))
        .route("/health", get(rest::api_health))
        // Analysis
        .route("/analyze", post(rest::analyze::api_analyze))
        .route("/simulate-crisis", post(rest::analyze::api_simulate_crisis))
        .route("/batch-analyze", post(rest::analyze::api_batch_analyze))
        // Alert lifecycle
        .route("/active-alerts", get(rest::alerts::api_active_alerts))
        .route("/analysis-history", get(rest::alerts::api_analysis_history))
        .route("/approve-alert/{id}", post(rest::alerts::api_approve_alert))
        .route("/reject-alert/{id}", post(rest::alerts::api_reject_alert))
        .route("/clear-history", delete(rest::alerts::api_clear_history))
        // Dashboards and reference data
        .route("/stats", get(rest::api_stats))
        .route("/config/thresholds", get(rest::api_thresholds))
        .route("/trusted-sources", get(rest::api_trusted_sources))
        .route("/time-comparison", get(rest::api_time_comparison))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Alert state changes constantly; never cache
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only, claim text never reaches the span
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
