use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Alert tiers ---

/// Ordinal risk classification. The derived `Ord` follows declaration order,
/// so `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertTier {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertTier {
    pub const ALL: [AlertTier; 4] = [
        AlertTier::Low,
        AlertTier::Medium,
        AlertTier::High,
        AlertTier::Critical,
    ];

    /// HIGH and CRITICAL results need a human decision before deployment.
    pub fn requires_approval(self) -> bool {
        self >= AlertTier::High
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for AlertTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Claim ---

/// A news statement submitted for risk assessment. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub headline: String,
    pub content: String,
    pub source_url: Option<String>,
    pub news_id: Option<String>,
}

impl Claim {
    pub fn new(headline: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            content: content.into(),
            source_url: None,
            news_id: None,
        }
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.news_id = Some(id.into());
        self
    }

    /// Caller-supplied id, or `news_<unix seconds>`. Two claims submitted in
    /// the same second without an id collide; uniqueness is best-effort.
    pub fn resolve_id(&self, now: DateTime<Utc>) -> String {
        match &self.news_id {
            Some(id) if !id.trim().is_empty() => id.clone(),
            _ => format!("news_{}", now.timestamp()),
        }
    }
}

// --- Oracle outcomes ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    pub url: String,
    pub title: String,
    pub domain: String,
    pub is_trusted: bool,
    pub published_date: Option<String>,
}

impl EvidenceSource {
    /// Build a source from a raw URL, resolving the host and checking it
    /// against the trusted-domain set. Returns None for unparseable URLs or
    /// URLs without a host.
    pub fn from_url(url: &str, title: &str, trusted_domains: &[&str]) -> Option<Self> {
        let domain = resolve_domain(url)?;
        let is_trusted = is_trusted_domain(&domain, trusted_domains);
        Some(Self {
            url: url.to_string(),
            title: title.to_string(),
            domain,
            is_trusted,
            published_date: None,
        })
    }
}

/// Extract the lower-cased host of a URL.
pub fn resolve_domain(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw.trim()).ok()?;
    parsed.host_str().map(|h| h.to_lowercase())
}

/// Substring match against the trusted set, so `www.bbc.co.uk` matches `bbc.co.uk`.
pub fn is_trusted_domain(domain: &str, trusted_domains: &[&str]) -> bool {
    trusted_domains.iter().any(|t| domain.contains(t))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub is_verified: bool,
    /// In [0, 1].
    pub confidence_score: f64,
    pub sources: Vec<EvidenceSource>,
    pub contradicting_sources: Vec<EvidenceSource>,
    pub summary: String,
    /// Seconds spent by the oracle.
    pub verification_time: f64,
}

impl VerificationOutcome {
    pub fn has_support(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn is_contradicted(&self) -> bool {
        !self.contradicting_sources.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageOutcome {
    pub has_coverage: bool,
    pub total_articles: u32,
    pub trusted_articles: u32,
    /// trusted / total, 0 when total is 0.
    pub coverage_ratio: f64,
}

impl CoverageOutcome {
    /// Derive the outcome from article counts. `trusted` is capped at `total`
    /// so the ratio stays in [0, 1].
    pub fn from_counts(total: u32, trusted: u32) -> Self {
        let trusted = trusted.min(total);
        let coverage_ratio = if total == 0 {
            0.0
        } else {
            trusted as f64 / total as f64
        };
        Self {
            has_coverage: total > 0,
            total_articles: total,
            trusted_articles: trusted,
            coverage_ratio,
        }
    }

    pub fn none() -> Self {
        Self::from_counts(0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralAssessment {
    /// Exactly `probability > 0.7`.
    pub will_go_viral: bool,
    pub probability: f64,
    pub estimated_reach: u64,
    /// Hours until the claim is expected to go viral.
    pub time_to_viral: Option<f64>,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterNarrative {
    pub narrative: String,
    pub citations: Vec<String>,
    pub target_platforms: Vec<String>,
    pub urgency: AlertTier,
}

// --- Action log ---

/// Pipeline stage or lifecycle transition named in an action log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    AnalysisStart,
    SemanticVerification,
    CoverageCheck,
    ViralPrediction,
    FalsehoodScoring,
    AlertClassification,
    CounterNarrative,
    AnalysisComplete,
    AlertProtocol,
    AlertDeployed,
    AlertRejected,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::AnalysisStart => "ANALYSIS_START",
            Self::SemanticVerification => "SEMANTIC_VERIFICATION",
            Self::CoverageCheck => "COVERAGE_CHECK",
            Self::ViralPrediction => "VIRAL_PREDICTION",
            Self::FalsehoodScoring => "FALSEHOOD_SCORING",
            Self::AlertClassification => "ALERT_CLASSIFICATION",
            Self::CounterNarrative => "COUNTER_NARRATIVE",
            Self::AnalysisComplete => "ANALYSIS_COMPLETE",
            Self::AlertProtocol => "ALERT_PROTOCOL",
            Self::AlertDeployed => "ALERT_DEPLOYED",
            Self::AlertRejected => "ALERT_REJECTED",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    InProgress,
    Completed,
    Failed,
    AwaitingApproval,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::AwaitingApproval => "AWAITING_APPROVAL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLogEntry {
    pub action_type: Stage,
    pub details: String,
    pub status: ActionStatus,
    pub timestamp: DateTime<Utc>,
}

impl ActionLogEntry {
    pub fn new(action_type: Stage, details: impl Into<String>, status: ActionStatus) -> Self {
        Self {
            action_type,
            details: details.into(),
            status,
            timestamp: Utc::now(),
        }
    }
}

// --- Analysis result ---

/// The published outcome of one analysis. Score, tier and verification are
/// fixed at publication; only approval metadata and the action log change
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub news_id: String,
    pub headline: String,
    pub content: String,
    pub source_url: Option<String>,

    pub falsehood_score: f64,
    pub alert_level: AlertTier,
    pub verification: VerificationOutcome,
    pub viral_prediction: ViralAssessment,

    pub actions_taken: Vec<ActionLogEntry>,
    pub counter_narrative: Option<CounterNarrative>,

    pub analyzed_at: DateTime<Utc>,
    /// Wall-clock seconds for the whole pipeline.
    pub processing_time: f64,

    pub requires_approval: bool,
    pub approved_by: Option<String>,
    pub deployed: bool,
}

impl AnalysisResult {
    /// Number of platforms the attached counter-narrative targets, 0 if none.
    pub fn platform_count(&self) -> usize {
        self.counter_narrative
            .as_ref()
            .map(|cn| cn.target_platforms.len())
            .unwrap_or(0)
    }
}
