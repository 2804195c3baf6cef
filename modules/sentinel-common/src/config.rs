use std::env;
use std::time::Duration;

use crate::error::SentinelError;
use crate::types::AlertTier;

pub const DEFAULT_GDELT_BASE_URL: &str = "https://api.gdeltproject.org/api/v2/doc/doc";

/// Application configuration loaded from environment variables.
/// Only deployment-specific values live here; scoring constants and the
/// trusted-domain list are compiled in below.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub api_host: String,
    pub api_port: u16,

    // Oracles
    pub verifier_url: Option<String>,
    pub gdelt_base_url: String,
    pub oracle_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, SentinelError> {
        dotenvy::dotenv().ok();

        let api_port = parse_env("API_PORT", 8000u16)?;
        let timeout_secs = parse_env("ORACLE_TIMEOUT_SECS", 15u64)?;
        if timeout_secs == 0 {
            return Err(SentinelError::Config(
                "ORACLE_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port,
            verifier_url: env::var("VERIFIER_URL").ok().filter(|v| !v.trim().is_empty()),
            gdelt_base_url: env::var("GDELT_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GDELT_BASE_URL.to_string()),
            oracle_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn log_redacted(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  API_HOST: {}", self.api_host);
        tracing::info!("  API_PORT: {}", self.api_port);
        tracing::info!(
            "  VERIFIER_URL: {}",
            self.verifier_url.as_deref().unwrap_or("<not set>")
        );
        tracing::info!("  GDELT_BASE_URL: {}", self.gdelt_base_url);
        tracing::info!("  ORACLE_TIMEOUT_SECS: {}", self.oracle_timeout.as_secs());
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, SentinelError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| SentinelError::Config(format!("{key} must be a number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

// --- Detection thresholds ---

/// Score at or above which a claim is treated as a threat (start of the HIGH band).
pub const FALSEHOOD_THRESHOLD: f64 = 0.75;

/// Minimum verification confidence the operator UI treats as meaningful.
pub const VERIFICATION_CONFIDENCE_MIN: f64 = 0.6;

/// Viral probability above which a claim is predicted to go viral.
pub const VIRAL_PREDICTION_THRESHOLD: f64 = 0.7;

/// Maximum number of headlines accepted by one batch submission.
pub const MAX_BATCH_SIZE: usize = 100;

/// A band in the informational alert table.
#[derive(Debug, Clone, Copy)]
pub struct InformationalBand {
    pub tier: AlertTier,
    pub range: (f64, f64),
    pub action: &'static str,
}

/// Informational score bands shown to operators. NOT used for classification:
/// the cut points differ from the classifier's bands and are kept only so the
/// thresholds endpoint can display both side by side.
pub const INFORMATIONAL_ALERT_BANDS: [InformationalBand; 4] = [
    InformationalBand {
        tier: AlertTier::Low,
        range: (0.0, 0.2),
        action: "monitor",
    },
    InformationalBand {
        tier: AlertTier::Medium,
        range: (0.2, 0.4),
        action: "analyze",
    },
    InformationalBand {
        tier: AlertTier::High,
        range: (0.4, 0.6),
        action: "alert",
    },
    InformationalBand {
        tier: AlertTier::Critical,
        range: (0.6, 1.0),
        action: "intervene",
    },
];

// --- Trusted sources ---

pub const TRUSTED_SOURCES: [&str; 15] = [
    "reuters.com",
    "bbc.com",
    "bbc.co.uk",
    "apnews.com",
    "theguardian.com",
    "nytimes.com",
    "bloomberg.com",
    "timesofindia.com",
    "hindustantimes.com",
    "thehindu.com",
    "ndtv.com",
    "indianexpress.com",
    "who.int",
    "cdc.gov",
    "pib.gov.in", // Press Information Bureau India
];

pub const TRUSTED_SOURCE_CATEGORIES: [(&str, [&str; 3]); 3] = [
    ("international_news", ["reuters.com", "bbc.com", "apnews.com"]),
    ("indian_news", ["timesofindia.com", "hindustantimes.com", "thehindu.com"]),
    ("official", ["who.int", "cdc.gov", "pib.gov.in"]),
];

// --- Crisis scenarios ---

/// A canned crisis used by demo mode. `true_falsehood_score` replaces the
/// pipeline's computed score before classification.
#[derive(Debug, Clone, Copy)]
pub struct CrisisScenario {
    pub name: &'static str,
    pub headline: &'static str,
    pub content: &'static str,
    pub true_falsehood_score: f64,
}

pub const CRISIS_SCENARIOS: [CrisisScenario; 3] = [
    CrisisScenario {
        name: "cyberattack",
        headline: "BREAKING: Major cyberattack shuts down Mumbai power grid",
        content: "Unverified reports claim nationwide infrastructure breach by foreign actors",
        true_falsehood_score: 0.95,
    },
    CrisisScenario {
        name: "riot",
        headline: "URGENT: Violent riots erupt in South Mumbai, 50+ casualties",
        content: "Social media posts claim communal violence spreading across city",
        true_falsehood_score: 0.92,
    },
    CrisisScenario {
        name: "earthquake",
        headline: "ALERT: 7.8 magnitude earthquake hits Mumbai, tsunami warning issued",
        content: "Multiple sources reporting major seismic activity",
        true_falsehood_score: 0.88,
    },
];

/// Declared score for operator-supplied custom scenarios.
pub const CUSTOM_SCENARIO_SCORE: f64 = 0.85;

// --- Response time benchmarks ---

/// Manual verification workflow, in seconds (48 hours).
pub const TRADITIONAL_RESPONSE_TIME_SECS: f64 = 48.0 * 3600.0;

/// Automated pipeline target, in seconds.
pub const SENTINEL_RESPONSE_TIME_SECS: f64 = 1.5;
