pub mod alerts;
pub mod analyze;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::warn;

use sentinel_common::config::{
    FALSEHOOD_THRESHOLD, INFORMATIONAL_ALERT_BANDS, TRUSTED_SOURCES, TRUSTED_SOURCE_CATEGORIES,
    VERIFICATION_CONFIDENCE_MIN, VIRAL_PREDICTION_THRESHOLD,
};
use sentinel_common::SentinelError;
use sentinel_engine::classify::tier_bands;
use sentinel_engine::crisis::time_comparison;

use crate::AppState;

// --- Helpers ---

/// Map a domain error onto a status code and `{"error": ...}` body.
pub fn error_response(err: &SentinelError) -> Response {
    let status = match err {
        SentinelError::NotFound(_) => StatusCode::NOT_FOUND,
        SentinelError::CapacityExceeded { .. } => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if !err.is_client_error() {
        warn!(error = %err, "Request failed");
    }
    (status, Json(json!({"error": err.to_string()}))).into_response()
}

// --- Service info ---

pub async fn api_banner() -> impl IntoResponse {
    Json(json!({
        "service": "Sentinel",
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "tagline": "Misinformation risk scoring with human-approved response",
    }))
}

pub async fn api_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "components": {
            "verification_oracle": "operational",
            "coverage_oracle": "operational",
            "viral_model": "operational",
            "orchestrator": "operational",
        }
    }))
}

// --- Dashboards ---

pub async fn api_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.sentinel.store().stats().await)
}

pub async fn api_time_comparison() -> impl IntoResponse {
    Json(time_comparison())
}

// --- Reference data ---

pub async fn api_thresholds() -> impl IntoResponse {
    let informational: serde_json::Map<String, serde_json::Value> = INFORMATIONAL_ALERT_BANDS
        .iter()
        .map(|band| {
            (
                band.tier.to_string(),
                json!({"range": [band.range.0, band.range.1], "action": band.action}),
            )
        })
        .collect();

    Json(json!({
        "falsehood_threshold": FALSEHOOD_THRESHOLD,
        "verification_confidence_min": VERIFICATION_CONFIDENCE_MIN,
        "viral_prediction_threshold": VIRAL_PREDICTION_THRESHOLD,
        "classification_bands": tier_bands(),
        "alert_levels": informational,
        "alert_levels_note": "Informational only. Alerts are classified with classification_bands.",
    }))
}

pub async fn api_trusted_sources() -> impl IntoResponse {
    let categories: serde_json::Map<String, serde_json::Value> = TRUSTED_SOURCE_CATEGORIES
        .iter()
        .map(|(name, domains)| (name.to_string(), json!(domains)))
        .collect();

    Json(json!({
        "sources": TRUSTED_SOURCES,
        "count": TRUSTED_SOURCES.len(),
        "categories": categories,
    }))
}
