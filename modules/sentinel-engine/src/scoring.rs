use sentinel_common::{CoverageOutcome, VerificationOutcome, ViralAssessment};

/// Score when the verifier found nothing either way.
const NO_SIGNAL_BASE: f64 = 0.75;

const HIGH_COVERAGE_RATIO: f64 = 0.7;
const LOW_COVERAGE_RATIO: f64 = 0.3;

const HIGH_COVERAGE_ADJ: f64 = -0.15;
const LOW_COVERAGE_ADJ: f64 = 0.10;
const UNCOVERED_BREAKING_ADJ: f64 = 0.20;

const VIRAL_WEIGHT: f64 = 0.15;

/// Combine verification, coverage and virality into one falsehood score in [0, 1].
///
/// score = clamp01(base(verification) + coverage_adjustment + 0.15 · viral_probability)
pub fn falsehood_score(
    verification: &VerificationOutcome,
    viral: &ViralAssessment,
    coverage: &CoverageOutcome,
) -> f64 {
    let total = base_score(verification)
        + coverage_adjustment(verification, coverage)
        + viral.probability * VIRAL_WEIGHT;
    total.clamp(0.0, 1.0)
}

/// Well-verified claims start low and weaker confidence nudges them up.
/// Contradicted claims start high and stronger confidence pushes them higher.
pub fn base_score(verification: &VerificationOutcome) -> f64 {
    if verification.is_verified && verification.has_support() {
        0.1 + 0.3 * (1.0 - verification.confidence_score)
    } else if verification.is_contradicted() {
        0.7 + 0.2 * verification.confidence_score
    } else {
        NO_SIGNAL_BASE
    }
}

/// Broad trusted coverage lowers the score, thin trusted coverage raises it.
/// With no coverage at all only a "breaking" claim is penalized.
pub fn coverage_adjustment(verification: &VerificationOutcome, coverage: &CoverageOutcome) -> f64 {
    if coverage.has_coverage {
        if coverage.coverage_ratio > HIGH_COVERAGE_RATIO {
            HIGH_COVERAGE_ADJ
        } else if coverage.coverage_ratio < LOW_COVERAGE_RATIO {
            LOW_COVERAGE_ADJ
        } else {
            0.0
        }
    } else if first_source_is_breaking(verification) {
        UNCOVERED_BREAKING_ADJ
    } else {
        0.0
    }
}

fn first_source_is_breaking(verification: &VerificationOutcome) -> bool {
    verification
        .sources
        .first()
        .map(|s| s.title.to_lowercase().contains("breaking"))
        .unwrap_or(false)
}
