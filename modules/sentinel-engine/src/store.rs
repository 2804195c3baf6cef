use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use sentinel_common::{
    ActionLogEntry, ActionStatus, AnalysisResult, SentinelError, Stage,
};

use crate::stats::SystemStats;

#[derive(Debug, Default)]
struct Registry {
    active: HashMap<String, AnalysisResult>,
    history: Vec<AnalysisResult>,
}

/// Registry of active alerts plus the append-only analysis history.
///
/// A single lock guards both collections so a transition on one alert is
/// never observed half-applied. History holds the snapshot taken at publish
/// time; approvals and rejections only touch the active record.
#[derive(Debug, Default)]
pub struct AlertStore {
    inner: RwLock<Registry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApprovalReceipt {
    pub news_id: String,
    pub approved_by: String,
    pub deployed_at: DateTime<Utc>,
    pub platforms_deployed: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectionReceipt {
    pub news_id: String,
    pub rejected_by: String,
    pub reason: String,
    pub rejected_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClearedCounts {
    pub active_cleared: usize,
    pub history_cleared: usize,
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished analysis. HIGH and CRITICAL results also enter the
    /// active set, replacing any earlier record with the same id.
    ///
    /// Returns true when an active record was replaced.
    pub async fn publish(&self, result: AnalysisResult) -> bool {
        let mut reg = self.inner.write().await;
        let mut replaced = false;
        if result.alert_level.requires_approval() {
            info!(
                news_id = result.news_id.as_str(),
                tier = %result.alert_level,
                "Alert awaiting approval"
            );
            if let Some(previous) = reg.active.insert(result.news_id.clone(), result.clone()) {
                warn!(
                    news_id = result.news_id.as_str(),
                    previously_deployed = previous.deployed,
                    "Active alert replaced by a newer analysis with the same id"
                );
                replaced = true;
            }
        }
        reg.history.push(result);
        replaced
    }

    /// Mark an active alert approved and deployed. Approving twice is allowed
    /// and appends a second deployment entry.
    pub async fn approve(
        &self,
        news_id: &str,
        approver: &str,
    ) -> Result<ApprovalReceipt, SentinelError> {
        let mut reg = self.inner.write().await;
        let alert = reg
            .active
            .get_mut(news_id)
            .ok_or_else(|| SentinelError::NotFound(news_id.to_string()))?;

        alert.approved_by = Some(approver.to_string());
        alert.deployed = true;
        let platforms = alert
            .counter_narrative
            .as_ref()
            .map(|cn| cn.target_platforms.clone())
            .unwrap_or_default();
        alert.actions_taken.push(ActionLogEntry::new(
            Stage::AlertDeployed,
            format!(
                "Approved by {approver} - Deployed to {} platforms",
                platforms.len()
            ),
            ActionStatus::Completed,
        ));

        info!(news_id, approver, platforms = platforms.len(), "Alert approved");

        Ok(ApprovalReceipt {
            news_id: news_id.to_string(),
            approved_by: approver.to_string(),
            deployed_at: Utc::now(),
            platforms_deployed: platforms,
        })
    }

    /// Drop an alert from the active set. Its history snapshot is kept.
    pub async fn reject(
        &self,
        news_id: &str,
        rejector: &str,
        reason: &str,
    ) -> Result<RejectionReceipt, SentinelError> {
        let mut reg = self.inner.write().await;
        let mut alert = reg
            .active
            .remove(news_id)
            .ok_or_else(|| SentinelError::NotFound(news_id.to_string()))?;

        alert.actions_taken.push(ActionLogEntry::new(
            Stage::AlertRejected,
            format!("Rejected by {rejector}: {reason}"),
            ActionStatus::Completed,
        ));

        info!(news_id, rejector, reason, "Alert rejected");

        Ok(RejectionReceipt {
            news_id: news_id.to_string(),
            rejected_by: rejector.to_string(),
            reason: reason.to_string(),
            rejected_at: Utc::now(),
        })
    }

    pub async fn clear(&self) -> ClearedCounts {
        let mut reg = self.inner.write().await;
        let counts = ClearedCounts {
            active_cleared: reg.active.len(),
            history_cleared: reg.history.len(),
        };
        reg.active.clear();
        reg.history.clear();
        info!(
            active = counts.active_cleared,
            history = counts.history_cleared,
            "Store cleared"
        );
        counts
    }

    /// Active alerts, most recently analyzed first.
    pub async fn active(&self) -> Vec<AnalysisResult> {
        let reg = self.inner.read().await;
        let mut alerts: Vec<AnalysisResult> = reg.active.values().cloned().collect();
        alerts.sort_by(|a, b| b.analyzed_at.cmp(&a.analyzed_at));
        alerts
    }

    pub async fn get_active(&self, news_id: &str) -> Option<AnalysisResult> {
        self.inner.read().await.active.get(news_id).cloned()
    }

    /// The last `limit` published results, most recent first.
    pub async fn history(&self, limit: usize) -> Vec<AnalysisResult> {
        let reg = self.inner.read().await;
        reg.history.iter().rev().take(limit).cloned().collect()
    }

    pub async fn history_len(&self) -> usize {
        self.inner.read().await.history.len()
    }

    pub async fn active_len(&self) -> usize {
        self.inner.read().await.active.len()
    }

    pub async fn stats(&self) -> SystemStats {
        let reg = self.inner.read().await;
        SystemStats::from_history(&reg.history, reg.active.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_result;
    use sentinel_common::AlertTier;

    #[tokio::test]
    async fn only_high_and_critical_become_active() {
        let store = AlertStore::new();
        store.publish(sample_result("low", AlertTier::Low)).await;
        store.publish(sample_result("med", AlertTier::Medium)).await;
        store.publish(sample_result("high", AlertTier::High)).await;
        store.publish(sample_result("crit", AlertTier::Critical)).await;

        assert_eq!(store.history_len().await, 4);
        assert_eq!(store.active_len().await, 2);
        assert!(store.get_active("high").await.is_some());
        assert!(store.get_active("low").await.is_none());
    }

    #[tokio::test]
    async fn history_is_most_recent_first_and_limited() {
        let store = AlertStore::new();
        for id in ["a", "b", "c"] {
            store.publish(sample_result(id, AlertTier::Low)).await;
        }
        let ids: Vec<String> = store.history(2).await.into_iter().map(|r| r.news_id).collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert!(store.history(0).await.is_empty());
    }

    #[tokio::test]
    async fn approve_keeps_history_snapshot_unchanged() {
        let store = AlertStore::new();
        store.publish(sample_result("x", AlertTier::High)).await;
        store.approve("x", "ops").await.unwrap();

        let active = store.get_active("x").await.unwrap();
        assert!(active.deployed);
        assert_eq!(active.approved_by.as_deref(), Some("ops"));

        let snapshot = &store.history(1).await[0];
        assert!(!snapshot.deployed);
        assert!(snapshot.approved_by.is_none());
    }

    #[tokio::test]
    async fn republishing_an_approved_id_replaces_the_active_record() {
        let store = AlertStore::new();
        assert!(!store.publish(sample_result("dup", AlertTier::High)).await);
        store.approve("dup", "ops").await.unwrap();

        assert!(store.publish(sample_result("dup", AlertTier::High)).await);

        assert_eq!(store.active_len().await, 1);
        let active = store.get_active("dup").await.unwrap();
        assert!(!active.deployed);
        assert!(active.approved_by.is_none());
        assert_eq!(store.history_len().await, 2);
    }

    #[tokio::test]
    async fn clear_reports_what_was_removed() {
        let store = AlertStore::new();
        store.publish(sample_result("x", AlertTier::Critical)).await;
        store.publish(sample_result("y", AlertTier::Low)).await;
        let counts = store.clear().await;
        assert_eq!(
            counts,
            ClearedCounts {
                active_cleared: 1,
                history_cleared: 2
            }
        );
        assert_eq!(store.history_len().await, 0);
        assert!(store.active().await.is_empty());
    }
}
