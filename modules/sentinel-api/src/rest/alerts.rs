use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use super::error_response;
use crate::AppState;

pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Deserialize)]
pub struct HistoryQuery {
    limit: Option<usize>,
}

#[derive(Deserialize)]
pub struct ApproveRequest {
    approved_by: String,
}

#[derive(Deserialize)]
pub struct RejectRequest {
    rejected_by: String,
    reason: String,
}

pub async fn api_active_alerts(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.sentinel.store().active().await)
}

pub async fn api_analysis_history(
    State(state): State<Arc<AppState>>,
    Query(q): Query<HistoryQuery>,
) -> impl IntoResponse {
    let limit = q.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Json(state.sentinel.store().history(limit).await)
}

pub async fn api_approve_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<ApproveRequest>,
) -> impl IntoResponse {
    match state.sentinel.store().approve(&id, &body.approved_by).await {
        Ok(receipt) => Json(json!({
            "status": "approved",
            "message": format!("Alert deployed to {} platforms", receipt.platforms_deployed.len()),
            "news_id": receipt.news_id,
            "approved_by": receipt.approved_by,
            "deployed_at": receipt.deployed_at,
            "platforms_deployed": receipt.platforms_deployed,
        }))
        .into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn api_reject_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<RejectRequest>,
) -> impl IntoResponse {
    match state
        .sentinel
        .store()
        .reject(&id, &body.rejected_by, &body.reason)
        .await
    {
        Ok(receipt) => Json(json!({
            "status": "rejected",
            "news_id": receipt.news_id,
            "rejected_by": receipt.rejected_by,
            "reason": receipt.reason,
            "rejected_at": receipt.rejected_at,
        }))
        .into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn api_clear_history(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let counts = state.sentinel.store().clear().await;
    Json(json!({
        "status": "cleared",
        "message": "All history and active alerts cleared",
        "active_cleared": counts.active_cleared,
        "history_cleared": counts.history_cleared,
    }))
}
