use serde::Serialize;

use sentinel_common::AlertTier;

/// Lower bound of each tier's band. Bands are closed-open except CRITICAL,
/// which runs to 1.0 inclusive.
pub const MEDIUM_FROM: f64 = 0.5;
pub const HIGH_FROM: f64 = 0.75;
pub const CRITICAL_FROM: f64 = 0.9;

/// Map a falsehood score to its alert tier.
pub fn classify(score: f64) -> AlertTier {
    if score >= CRITICAL_FROM {
        AlertTier::Critical
    } else if score >= HIGH_FROM {
        AlertTier::High
    } else if score >= MEDIUM_FROM {
        AlertTier::Medium
    } else {
        AlertTier::Low
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TierBand {
    pub tier: AlertTier,
    pub min: f64,
    pub max: f64,
    pub max_inclusive: bool,
}

/// The bands [`classify`] applies, for display.
pub fn tier_bands() -> Vec<TierBand> {
    vec![
        TierBand {
            tier: AlertTier::Low,
            min: 0.0,
            max: MEDIUM_FROM,
            max_inclusive: false,
        },
        TierBand {
            tier: AlertTier::Medium,
            min: MEDIUM_FROM,
            max: HIGH_FROM,
            max_inclusive: false,
        },
        TierBand {
            tier: AlertTier::High,
            min: HIGH_FROM,
            max: CRITICAL_FROM,
            max_inclusive: false,
        },
        TierBand {
            tier: AlertTier::Critical,
            min: CRITICAL_FROM,
            max: 1.0,
            max_inclusive: true,
        },
    ]
}
