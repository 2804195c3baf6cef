// Oracle contracts for the analysis pipeline.
//
// VerificationOracle answers "is this claim supported by trusted sources".
// CoverageOracle answers "has the open web covered this story".
//
// Both may fail. Failures are typed (OracleFailure) and turned into
// conservative fallback values by `verification_or_fallback` and
// `coverage_or_fallback`, so the policy can be tested without the pipeline.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use gdelt_client::{GdeltClient, GdeltError};
use sentinel_common::config::TRUSTED_SOURCES;
use sentinel_common::{CoverageOutcome, EvidenceSource, VerificationOutcome};
use verifier_client::{VerifierClient, VerifierError, VerifyResponse, WireSource};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OracleFailure {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait VerificationOracle: Send + Sync {
    async fn verify(
        &self,
        headline: &str,
        content: &str,
    ) -> Result<VerificationOutcome, OracleFailure>;
}

#[async_trait]
pub trait CoverageOracle: Send + Sync {
    async fn check_coverage(&self, headline: &str) -> Result<CoverageOutcome, OracleFailure>;
}

// ---------------------------------------------------------------------------
// Fallback policy
// ---------------------------------------------------------------------------

pub const VERIFICATION_FAILED_SUMMARY: &str = "Verification failed";

/// Substituted when verification fails: unverified, zero confidence, no sources.
pub fn fallback_verification() -> VerificationOutcome {
    VerificationOutcome {
        is_verified: false,
        confidence_score: 0.0,
        sources: vec![],
        contradicting_sources: vec![],
        summary: VERIFICATION_FAILED_SUMMARY.to_string(),
        verification_time: 0.0,
    }
}

/// Substituted when the coverage check fails: no coverage at all.
pub fn fallback_coverage() -> CoverageOutcome {
    CoverageOutcome::none()
}

pub fn verification_or_fallback(
    result: Result<VerificationOutcome, OracleFailure>,
) -> (VerificationOutcome, Option<OracleFailure>) {
    match result {
        Ok(outcome) => (outcome, None),
        Err(failure) => (fallback_verification(), Some(failure)),
    }
}

pub fn coverage_or_fallback(
    result: Result<CoverageOutcome, OracleFailure>,
) -> (CoverageOutcome, Option<OracleFailure>) {
    match result {
        Ok(outcome) => (outcome, None),
        Err(failure) => (fallback_coverage(), Some(failure)),
    }
}

/// Await an oracle call, converting an elapsed deadline into [`OracleFailure::Timeout`].
pub async fn with_timeout<T, F>(limit: Duration, call: F) -> Result<T, OracleFailure>
where
    F: Future<Output = Result<T, OracleFailure>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(OracleFailure::Timeout(limit)),
    }
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

/// Verification oracle used when no verification service is configured.
/// Every call fails, so every analysis takes the fallback path.
pub struct UnavailableVerifier;

#[async_trait]
impl VerificationOracle for UnavailableVerifier {
    async fn verify(
        &self,
        _headline: &str,
        _content: &str,
    ) -> Result<VerificationOutcome, OracleFailure> {
        Err(OracleFailure::Unavailable(
            "no verification service configured".to_string(),
        ))
    }
}

#[async_trait]
impl VerificationOracle for VerifierClient {
    async fn verify(
        &self,
        headline: &str,
        content: &str,
    ) -> Result<VerificationOutcome, OracleFailure> {
        let resp = VerifierClient::verify(self, headline, content)
            .await
            .map_err(verifier_failure)?;
        into_outcome(resp)
    }
}

#[async_trait]
impl CoverageOracle for GdeltClient {
    async fn check_coverage(&self, headline: &str) -> Result<CoverageOutcome, OracleFailure> {
        let report = self.coverage(headline).await.map_err(gdelt_failure)?;
        Ok(CoverageOutcome::from_counts(
            report.total_articles,
            report.trusted_articles,
        ))
    }
}

fn verifier_failure(err: VerifierError) -> OracleFailure {
    match err {
        VerifierError::Network(msg) => OracleFailure::Transport(msg),
        VerifierError::Api { status, message } => {
            OracleFailure::Transport(format!("status {status}: {message}"))
        }
        VerifierError::Parse(msg) | VerifierError::Invalid(msg) => {
            OracleFailure::InvalidResponse(msg)
        }
    }
}

fn gdelt_failure(err: GdeltError) -> OracleFailure {
    match err {
        GdeltError::Network(msg) => OracleFailure::Transport(msg),
        GdeltError::Api { status, message } => {
            OracleFailure::Transport(format!("status {status}: {message}"))
        }
        GdeltError::Parse(msg) => OracleFailure::InvalidResponse(msg),
    }
}

/// Map a validated wire verdict into the domain type, resolving each
/// source's domain and trusted flag.
pub fn into_outcome(resp: VerifyResponse) -> Result<VerificationOutcome, OracleFailure> {
    let sources = resolve_sources(&resp.sources)?;
    let contradicting_sources = resolve_sources(&resp.contradicting_sources)?;
    Ok(VerificationOutcome {
        is_verified: resp.is_verified,
        confidence_score: resp.confidence_score,
        sources,
        contradicting_sources,
        summary: resp.summary,
        verification_time: resp.verification_time,
    })
}

fn resolve_sources(wire: &[WireSource]) -> Result<Vec<EvidenceSource>, OracleFailure> {
    wire.iter()
        .map(|w| {
            let mut source = EvidenceSource::from_url(&w.url, &w.title, &TRUSTED_SOURCES)
                .ok_or_else(|| {
                    OracleFailure::InvalidResponse(format!("unparseable source url '{}'", w.url))
                })?;
            source.published_date = w.published_date.clone();
            Ok(source)
        })
        .collect()
}
