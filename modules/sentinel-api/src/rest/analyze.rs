use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use tracing::{info, warn};

use sentinel_common::Claim;
use sentinel_engine::{AnalysisOptions, Sentinel};

use super::error_response;
use crate::AppState;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    headline: String,
    #[serde(default)]
    content: String,
    source_url: Option<String>,
    news_id: Option<String>,
    #[serde(default = "default_true")]
    enable_counter_narrative: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize)]
pub struct CrisisRequest {
    scenario: String,
    custom_headline: Option<String>,
    custom_content: Option<String>,
}

pub async fn api_analyze(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    if body.headline.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "headline must not be empty"})),
        )
            .into_response();
    }

    let mut claim = Claim::new(body.headline, body.content);
    if let Some(url) = body.source_url {
        claim = claim.with_source_url(url);
    }
    if let Some(id) = body.news_id {
        claim = claim.with_id(id);
    }
    let options = AnalysisOptions {
        enable_counter_narrative: body.enable_counter_narrative,
    };

    let result = state.sentinel.submit(&claim, &options).await;
    Json(result).into_response()
}

pub async fn api_simulate_crisis(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CrisisRequest>,
) -> impl IntoResponse {
    let result = state
        .sentinel
        .simulate_crisis(
            &body.scenario,
            body.custom_headline.as_deref(),
            body.custom_content.as_deref(),
        )
        .await;
    Json(result)
}

/// Accepts a JSON array of headlines. Oversized batches are refused up front;
/// accepted ones run in the background and land in the analysis history.
pub async fn api_batch_analyze(
    State(state): State<Arc<AppState>>,
    Json(headlines): Json<Vec<String>>,
) -> impl IntoResponse {
    if let Err(e) = Sentinel::check_batch(headlines.len()) {
        return error_response(&e);
    }

    let batch_size = headlines.len();
    let sentinel = state.sentinel.clone();
    tokio::spawn(async move {
        match sentinel.analyze_batch(headlines).await {
            Ok(results) => info!(items = results.len(), "Background batch complete"),
            Err(e) => warn!(error = %e, "Background batch failed"),
        }
    });

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({
            "status": "processing",
            "batch_size": batch_size,
            "message": "Batch analysis initiated. Results will be available in /analysis-history",
        })),
    )
        .into_response()
}
