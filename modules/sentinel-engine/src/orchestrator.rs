use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{info, warn};

use sentinel_common::{AnalysisResult, Claim, CoverageOutcome, Stage, VerificationOutcome};

use crate::action_log::ActionLog;
use crate::classify::classify;
use crate::narrative::{self, NarrativeStyle};
use crate::oracle::{
    coverage_or_fallback, verification_or_fallback, with_timeout, CoverageOracle,
    VerificationOracle,
};
use crate::scoring::falsehood_score;
use crate::viral::{self, ViralSignals};

/// Score fed to the viral model before the real score exists. The real score
/// then consumes the viral probability derived from this placeholder.
pub const PLACEHOLDER_FALSEHOOD_SCORE: f64 = 0.5;

/// Reach assumed for a freshly submitted claim.
pub const DEFAULT_CURRENT_REACH: u64 = 100;

const VERIFIED_CREDIBILITY: f64 = 0.7;
const UNVERIFIED_CREDIBILITY: f64 = 0.3;

pub const DEFAULT_ORACLE_TIMEOUT: Duration = Duration::from_secs(15);

/// Characters of the headline echoed in the start entry.
const HEADLINE_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub enable_counter_narrative: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            enable_counter_narrative: true,
        }
    }
}

/// Runs one claim through verify → coverage → viral → score → classify →
/// counter-narrative. Stages run strictly in order; the only awaits are the
/// two oracle calls, each bounded by `oracle_timeout`. Oracle failures are
/// replaced by fallback values, so analysis always produces a result.
pub struct Orchestrator {
    verifier: Arc<dyn VerificationOracle>,
    coverage: Arc<dyn CoverageOracle>,
    oracle_timeout: Duration,
}

impl Orchestrator {
    pub fn new(verifier: Arc<dyn VerificationOracle>, coverage: Arc<dyn CoverageOracle>) -> Self {
        Self {
            verifier,
            coverage,
            oracle_timeout: DEFAULT_ORACLE_TIMEOUT,
        }
    }

    pub fn with_oracle_timeout(mut self, timeout: Duration) -> Self {
        self.oracle_timeout = timeout;
        self
    }

    /// Analyze a claim. The returned result is complete; nothing is published here.
    pub async fn analyze(&self, claim: &Claim, options: &AnalysisOptions) -> AnalysisResult {
        let started = Instant::now();
        let analyzed_at = Utc::now();
        let news_id = claim.resolve_id(analyzed_at);
        let mut log = ActionLog::new();

        let preview: String = claim.headline.chars().take(HEADLINE_PREVIEW_CHARS).collect();
        log.begin(Stage::AnalysisStart, format!("Analyzing: {preview}..."));

        let verification = self.verify_stage(&news_id, claim, &mut log).await;
        let coverage = self.coverage_stage(&news_id, claim, &mut log).await;

        // Viral prediction
        log.begin(Stage::ViralPrediction, "Analyzing viral potential...");
        let trigger_words =
            viral::extract_trigger_words(&format!("{} {}", claim.headline, claim.content));
        let credibility = if verification.is_verified {
            VERIFIED_CREDIBILITY
        } else {
            UNVERIFIED_CREDIBILITY
        };
        let viral_prediction = viral::assess(&ViralSignals {
            falsehood_score: PLACEHOLDER_FALSEHOOD_SCORE,
            current_reach: DEFAULT_CURRENT_REACH,
            trigger_words: &trigger_words,
            has_multimedia: false,
            source_credibility: credibility,
        });
        log.complete(
            Stage::ViralPrediction,
            format!(
                "Viral probability: {:.2}%",
                viral_prediction.probability * 100.0
            ),
        );

        // Scoring
        log.begin(Stage::FalsehoodScoring, "Computing threat score...");
        let score = falsehood_score(&verification, &viral_prediction, &coverage);
        log.complete(Stage::FalsehoodScoring, format!("Score: {score:.3}"));

        // Classification
        log.begin(Stage::AlertClassification, "Classifying threat level...");
        let tier = classify(score);
        log.complete(Stage::AlertClassification, format!("Level: {tier}"));

        // Counter-narrative
        let counter_narrative = if options.enable_counter_narrative && tier.requires_approval() {
            log.begin(Stage::CounterNarrative, "Generating response...");
            let cn = narrative::generate(
                &claim.headline,
                &verification,
                tier,
                NarrativeStyle::Organic,
            );
            let platforms = cn.as_ref().map(|c| c.target_platforms.len()).unwrap_or(0);
            log.complete(
                Stage::CounterNarrative,
                format!("Response prepared for {platforms} platforms"),
            );
            cn
        } else {
            None
        };

        let processing_time = started.elapsed().as_secs_f64();
        log.complete(
            Stage::AnalysisComplete,
            format!("Processing time: {processing_time:.2}s"),
        );

        info!(
            news_id = news_id.as_str(),
            score = format!("{score:.3}").as_str(),
            tier = %tier,
            elapsed_ms = (processing_time * 1000.0) as u64,
            "Analysis complete"
        );

        AnalysisResult {
            news_id,
            headline: claim.headline.clone(),
            content: claim.content.clone(),
            source_url: claim.source_url.clone(),
            falsehood_score: score,
            alert_level: tier,
            verification,
            viral_prediction,
            actions_taken: log.into_entries(),
            counter_narrative,
            analyzed_at,
            processing_time,
            requires_approval: tier.requires_approval(),
            approved_by: None,
            deployed: false,
        }
    }

    async fn verify_stage(
        &self,
        news_id: &str,
        claim: &Claim,
        log: &mut ActionLog,
    ) -> VerificationOutcome {
        log.begin(Stage::SemanticVerification, "Initiating verification...");
        let call = self.verifier.verify(&claim.headline, &claim.content);
        let (verification, failure) =
            verification_or_fallback(with_timeout(self.oracle_timeout, call).await);

        match failure {
            None => log.complete(
                Stage::SemanticVerification,
                format!("Complete: {}", verification.summary),
            ),
            Some(failure) => {
                warn!(news_id, error = %failure, "Verification oracle failed, using fallback");
                log.fail(
                    Stage::SemanticVerification,
                    format!("Verification oracle failed ({failure}); proceeding as unverified"),
                );
            }
        }
        verification
    }

    async fn coverage_stage(
        &self,
        news_id: &str,
        claim: &Claim,
        log: &mut ActionLog,
    ) -> CoverageOutcome {
        log.begin(Stage::CoverageCheck, "Querying global news coverage...");
        let call = self.coverage.check_coverage(&claim.headline);
        let (coverage, failure) =
            coverage_or_fallback(with_timeout(self.oracle_timeout, call).await);

        match failure {
            None => log.complete(
                Stage::CoverageCheck,
                format!(
                    "Found {} articles ({} trusted)",
                    coverage.total_articles, coverage.trusted_articles
                ),
            ),
            Some(failure) => {
                warn!(news_id, error = %failure, "Coverage oracle failed, using fallback");
                log.fail(
                    Stage::CoverageCheck,
                    format!("Coverage oracle failed ({failure}); proceeding with no coverage"),
                );
            }
        }
        coverage
    }
}
