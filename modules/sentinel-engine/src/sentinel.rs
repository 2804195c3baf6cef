use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use sentinel_common::config::MAX_BATCH_SIZE;
use sentinel_common::{AnalysisResult, Claim, SentinelError};

use crate::crisis::{self, Scenario};
use crate::orchestrator::{AnalysisOptions, Orchestrator};
use crate::store::AlertStore;

/// The running system: one orchestrator and the store its results land in.
/// Built once at startup and shared behind an `Arc`.
pub struct Sentinel {
    orchestrator: Orchestrator,
    store: Arc<AlertStore>,
}

impl Sentinel {
    pub fn new(orchestrator: Orchestrator, store: Arc<AlertStore>) -> Self {
        Self {
            orchestrator,
            store,
        }
    }

    pub fn store(&self) -> &Arc<AlertStore> {
        &self.store
    }

    /// Analyze a claim and publish the result.
    pub async fn submit(&self, claim: &Claim, options: &AnalysisOptions) -> AnalysisResult {
        let result = self.orchestrator.analyze(claim, options).await;
        self.store.publish(result.clone()).await;
        result
    }

    /// Run a crisis scenario end to end and publish it for approval.
    pub async fn simulate_crisis(
        &self,
        requested: &str,
        custom_headline: Option<&str>,
        custom_content: Option<&str>,
    ) -> AnalysisResult {
        let scenario: Scenario =
            crisis::resolve_scenario(requested, custom_headline, custom_content);
        info!(
            requested,
            scenario = scenario.name.as_str(),
            declared_score = scenario.declared_score,
            "Simulating crisis"
        );

        let claim = Claim::new(scenario.headline.clone(), scenario.content.clone())
            .with_id(crisis::crisis_id(requested, Utc::now()));
        let options = AnalysisOptions {
            enable_counter_narrative: false,
        };
        let computed = self.orchestrator.analyze(&claim, &options).await;
        let result = crisis::apply_declared_score(computed, &scenario);

        self.store.publish(result.clone()).await;
        result
    }

    /// Reject batches over the cap before any work is done.
    pub fn check_batch(size: usize) -> Result<(), SentinelError> {
        if size > MAX_BATCH_SIZE {
            return Err(SentinelError::CapacityExceeded {
                submitted: size,
                max: MAX_BATCH_SIZE,
            });
        }
        Ok(())
    }

    /// Analyze headlines one after another with no body text and no
    /// counter-narratives. Each result is published as it completes.
    pub async fn analyze_batch(
        &self,
        headlines: Vec<String>,
    ) -> Result<Vec<AnalysisResult>, SentinelError> {
        Self::check_batch(headlines.len())?;

        let batch_ts = Utc::now().timestamp();
        let options = AnalysisOptions {
            enable_counter_narrative: false,
        };
        info!(items = headlines.len(), "Batch analysis started");

        let mut results = Vec::with_capacity(headlines.len());
        for (i, headline) in headlines.into_iter().enumerate() {
            let claim = Claim::new(headline, "").with_id(format!("batch_{batch_ts}_{i}"));
            results.push(self.submit(&claim, &options).await);
        }

        info!(items = results.len(), "Batch analysis finished");
        Ok(results)
    }
}
