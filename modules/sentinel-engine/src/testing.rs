// Test mocks for the analysis pipeline.
//
// Two mocks matching the two oracle boundaries:
// - MockVerifier (VerificationOracle): fixed verdict or fixed failure
// - MockCoverage (CoverageOracle): fixed coverage or fixed failure
//
// Both count calls and can be slowed down to exercise the oracle timeout.
// Plus helpers for building verdicts and finished AnalysisResults.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use sentinel_common::config::TRUSTED_SOURCES;
use sentinel_common::{
    AlertTier, AnalysisResult, CoverageOutcome, EvidenceSource, VerificationOutcome,
    ViralAssessment,
};

use crate::narrative::{self, NarrativeStyle};
use crate::oracle::{CoverageOracle, OracleFailure, VerificationOracle};
use crate::orchestrator::Orchestrator;

// ---------------------------------------------------------------------------
// MockVerifier
// ---------------------------------------------------------------------------

pub struct MockVerifier {
    response: Result<VerificationOutcome, OracleFailure>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockVerifier {
    pub fn returning(outcome: VerificationOutcome) -> Self {
        Self {
            response: Ok(outcome),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: OracleFailure) -> Self {
        Self {
            response: Err(failure),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VerificationOracle for MockVerifier {
    async fn verify(
        &self,
        _headline: &str,
        _content: &str,
    ) -> Result<VerificationOutcome, OracleFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// MockCoverage
// ---------------------------------------------------------------------------

pub struct MockCoverage {
    response: Result<CoverageOutcome, OracleFailure>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockCoverage {
    pub fn returning(outcome: CoverageOutcome) -> Self {
        Self {
            response: Ok(outcome),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(failure: OracleFailure) -> Self {
        Self {
            response: Err(failure),
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoverageOracle for MockCoverage {
    async fn check_coverage(&self, _headline: &str) -> Result<CoverageOutcome, OracleFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// A trusted evidence source on the given domain.
pub fn source(domain: &str, title: &str) -> EvidenceSource {
    let url = format!("https://{domain}/story");
    EvidenceSource::from_url(&url, title, &TRUSTED_SOURCES)
        .unwrap_or_else(|| panic!("test url should parse: {url}"))
}

/// Verified with `supporting` trusted sources.
pub fn verified(confidence: f64, supporting: usize) -> VerificationOutcome {
    VerificationOutcome {
        is_verified: true,
        confidence_score: confidence,
        sources: (0..supporting)
            .map(|i| source("www.reuters.com", &format!("Report {i}")))
            .collect(),
        contradicting_sources: vec![],
        summary: format!("Found {supporting} trusted sources corroborating this story."),
        verification_time: 0.2,
    }
}

/// Not verified, no evidence either way.
pub fn unverified() -> VerificationOutcome {
    VerificationOutcome {
        is_verified: false,
        confidence_score: 0.0,
        sources: vec![],
        contradicting_sources: vec![],
        summary: "No trusted sources found for this claim.".to_string(),
        verification_time: 0.2,
    }
}

/// Not verified and contradicted by one trusted source.
pub fn contradicted(confidence: f64) -> VerificationOutcome {
    VerificationOutcome {
        confidence_score: confidence,
        contradicting_sources: vec![source("apnews.com", "AP Fact Check")],
        summary: "Contradicted by AP Fact Check.".to_string(),
        ..unverified()
    }
}

/// Orchestrator over the two mocks, with a short oracle timeout.
pub fn orchestrator(verifier: MockVerifier, coverage: MockCoverage) -> Orchestrator {
    Orchestrator::new(Arc::new(verifier), Arc::new(coverage))
        .with_oracle_timeout(Duration::from_millis(250))
}

/// A finished result at the given tier, with an organic counter-narrative
/// when the tier calls for one.
pub fn sample_result(news_id: &str, tier: AlertTier) -> AnalysisResult {
    let verification = unverified();
    let score = match tier {
        AlertTier::Low => 0.3,
        AlertTier::Medium => 0.6,
        AlertTier::High => 0.8,
        AlertTier::Critical => 0.95,
    };
    AnalysisResult {
        news_id: news_id.to_string(),
        headline: format!("Headline for {news_id}"),
        content: String::new(),
        source_url: None,
        falsehood_score: score,
        alert_level: tier,
        counter_narrative: narrative::generate(
            "sample",
            &verification,
            tier,
            NarrativeStyle::Organic,
        ),
        verification,
        viral_prediction: ViralAssessment {
            will_go_viral: false,
            probability: 0.5,
            estimated_reach: 1_000,
            time_to_viral: None,
            risk_factors: vec![],
        },
        actions_taken: vec![],
        analyzed_at: Utc::now(),
        processing_time: 0.01,
        requires_approval: tier.requires_approval(),
        approved_by: None,
        deployed: false,
    }
}
