use sentinel_common::config::VIRAL_PREDICTION_THRESHOLD;
use sentinel_common::ViralAssessment;

/// Words the model treats as high-emotion triggers.
pub const HIGH_EMOTION_WORDS: [&str; 14] = [
    "urgent", "breaking", "shocking", "alert", "warning", "crisis", "attack", "death", "riot",
    "emergency", "exclusive", "leaked", "revealed", "exposed",
];

/// Words the orchestrator scans claim text for before calling the model.
/// Narrower than [`HIGH_EMOTION_WORDS`].
pub const TRIGGER_VOCABULARY: [&str; 10] = [
    "urgent", "breaking", "shocking", "alert", "warning", "crisis", "attack", "death", "riot",
    "emergency",
];

const MAX_EMOTIONAL_BONUS: f64 = 0.2;
const BONUS_PER_TRIGGER: f64 = 0.05;
const MULTIMEDIA_BONUS: f64 = 0.1;

/// Inputs to the propagation model.
#[derive(Debug, Clone)]
pub struct ViralSignals<'a> {
    pub falsehood_score: f64,
    pub current_reach: u64,
    pub trigger_words: &'a [String],
    pub has_multimedia: bool,
    /// In [0, 1].
    pub source_credibility: f64,
}

/// Predict how likely a claim is to spread and how far.
///
///   p = clamp01((0.7·score + emotional + multimedia) · (1 − 0.2·credibility))
///
/// Higher credibility damps the probability: low-credibility sensational
/// content is modeled as spreading faster.
pub fn assess(signals: &ViralSignals<'_>) -> ViralAssessment {
    let base = signals.falsehood_score * 0.7;

    let matches = signals
        .trigger_words
        .iter()
        .filter(|w| {
            let lower = w.to_lowercase();
            HIGH_EMOTION_WORDS.contains(&lower.as_str())
        })
        .count();
    let emotional_bonus = (matches as f64 * BONUS_PER_TRIGGER).min(MAX_EMOTIONAL_BONUS);

    let multimedia_bonus = if signals.has_multimedia {
        MULTIMEDIA_BONUS
    } else {
        0.0
    };

    let credibility_factor = 1.0 - signals.source_credibility * 0.2;

    let probability =
        ((base + emotional_bonus + multimedia_bonus) * credibility_factor).clamp(0.0, 1.0);

    let reach = signals.current_reach as f64;
    let (estimated_reach, time_to_viral) = if probability > 0.7 {
        (((reach * (probability * 5.0).exp()) as u64).max(10_000), Some(2.0))
    } else if probability > 0.5 {
        (((reach * (probability * 3.0).exp()) as u64).max(5_000), Some(6.0))
    } else {
        ((reach * 1.5) as u64, None)
    };

    let mut risk_factors = Vec::new();
    if signals.falsehood_score > 0.8 {
        risk_factors.push("High misinformation score".to_string());
    }
    if emotional_bonus > 0.1 {
        risk_factors.push("Strong emotional triggers detected".to_string());
    }
    if signals.has_multimedia {
        risk_factors.push("Contains multimedia (faster spread)".to_string());
    }
    if signals.source_credibility < 0.3 {
        risk_factors.push("Low-credibility source".to_string());
    }

    ViralAssessment {
        will_go_viral: probability > VIRAL_PREDICTION_THRESHOLD,
        probability,
        estimated_reach,
        time_to_viral,
        risk_factors,
    }
}

/// Lower-case the text, split on whitespace and keep tokens from
/// [`TRIGGER_VOCABULARY`]. Duplicates are kept; punctuation is not stripped,
/// so `"breaking:"` does not count.
pub fn extract_trigger_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| TRIGGER_VOCABULARY.contains(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(score: f64, reach: u64, words: &[String], media: bool, cred: f64) -> ViralSignals<'_> {
        ViralSignals {
            falsehood_score: score,
            current_reach: reach,
            trigger_words: words,
            has_multimedia: media,
            source_credibility: cred,
        }
    }

    #[test]
    fn placeholder_score_low_credibility_stays_below_viral() {
        let a = assess(&signals(0.5, 100, &[], false, 0.3));
        // 0.35 * 0.94
        assert!((a.probability - 0.329).abs() < 1e-9);
        assert!(!a.will_go_viral);
        assert_eq!(a.estimated_reach, 150);
        assert_eq!(a.time_to_viral, None);
        assert_eq!(a.risk_factors, Vec::<String>::new());
    }

    #[test]
    fn emotional_bonus_caps_at_point_two() {
        let words: Vec<String> = ["urgent", "BREAKING", "riot", "death", "attack", "leaked"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let a = assess(&signals(0.0, 0, &words, false, 0.0));
        assert!((a.probability - 0.2).abs() < 1e-9);
        assert_eq!(
            a.risk_factors,
            vec!["Strong emotional triggers detected", "Low-credibility source"]
        );
    }

    #[test]
    fn high_probability_uses_exponential_reach_floor() {
        let words: Vec<String> = vec!["urgent".into(), "crisis".into(), "riot".into()];
        let a = assess(&signals(1.0, 100, &words, true, 0.0));
        // (0.7 + 0.15 + 0.1) * 1.0
        assert!((a.probability - 0.95).abs() < 1e-9);
        assert!(a.will_go_viral);
        assert_eq!(a.time_to_viral, Some(2.0));
        assert_eq!(a.estimated_reach, (100.0 * (a.probability * 5.0).exp()) as u64);
        assert!(a.estimated_reach > 10_000);
        assert_eq!(
            a.risk_factors,
            vec![
                "High misinformation score",
                "Strong emotional triggers detected",
                "Contains multimedia (faster spread)",
                "Low-credibility source",
            ]
        );
    }

    #[test]
    fn mid_probability_has_five_thousand_floor() {
        // 0.8 * 0.7 = 0.56, credibility 0 leaves it unchanged
        let a = assess(&signals(0.8, 10, &[], false, 0.0));
        assert!(a.probability > 0.5 && a.probability <= 0.7);
        assert_eq!(a.estimated_reach, 5_000);
        assert_eq!(a.time_to_viral, Some(6.0));
        assert!(!a.will_go_viral);
    }

    #[test]
    fn exactly_point_seven_is_not_viral() {
        // 1.0 * 0.7 with zero credibility damping
        let a = assess(&signals(1.0, 0, &[], false, 0.0));
        assert!((a.probability - 0.7).abs() < 1e-12);
        assert_eq!(a.will_go_viral, a.probability > 0.7);
    }

    #[test]
    fn trigger_extraction_is_case_folded_whitespace_split() {
        let words = extract_trigger_words("URGENT update: Crisis deepens, breaking: riot riot");
        assert_eq!(words, vec!["urgent", "crisis", "riot", "riot"]);
    }
}
