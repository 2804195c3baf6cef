use proptest::prelude::*;

use sentinel_common::{AlertTier, CoverageOutcome, EvidenceSource, VerificationOutcome, ViralAssessment};
use sentinel_engine::classify::classify;
use sentinel_engine::scoring::falsehood_score;
use sentinel_engine::viral::{assess, ViralSignals};

fn evidence(title: &str) -> EvidenceSource {
    EvidenceSource {
        url: "https://www.bbc.com/news/1".to_string(),
        title: title.to_string(),
        domain: "www.bbc.com".to_string(),
        is_trusted: true,
        published_date: None,
    }
}

fn arb_verification() -> impl Strategy<Value = VerificationOutcome> {
    (any::<bool>(), 0.0f64..=1.0, 0usize..4, 0usize..3, any::<bool>()).prop_map(
        |(verified, confidence, supporting, contradicting, breaking)| {
            let title = if breaking { "Breaking update" } else { "Update" };
            VerificationOutcome {
                is_verified: verified,
                confidence_score: confidence,
                sources: (0..supporting).map(|_| evidence(title)).collect(),
                contradicting_sources: (0..contradicting).map(|_| evidence("Debunk")).collect(),
                summary: String::new(),
                verification_time: 0.0,
            }
        },
    )
}

fn arb_coverage() -> impl Strategy<Value = CoverageOutcome> {
    prop_oneof![
        Just(CoverageOutcome::none()),
        (0u32..30, 0u32..30).prop_map(|(total, trusted)| CoverageOutcome::from_counts(total, trusted)),
    ]
}

fn viral(probability: f64) -> ViralAssessment {
    ViralAssessment {
        will_go_viral: probability > 0.7,
        probability,
        estimated_reach: 0,
        time_to_viral: None,
        risk_factors: vec![],
    }
}

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("urgent".to_string()),
            Just("LEAKED".to_string()),
            Just("riot".to_string()),
            Just("weather".to_string()),
        ],
        0..8,
    )
}

proptest! {
    #[test]
    fn score_is_always_in_unit_interval(
        v in arb_verification(),
        c in arb_coverage(),
        p in 0.0f64..=1.0,
    ) {
        let score = falsehood_score(&v, &viral(p), &c);
        prop_assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn classifier_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo) <= classify(hi));
    }

    #[test]
    fn approval_required_exactly_from_high(s in 0.0f64..=1.0) {
        prop_assert_eq!(classify(s).requires_approval(), s >= 0.75);
        prop_assert_eq!(classify(s) == AlertTier::Critical, s >= 0.9);
    }

    #[test]
    fn viral_outputs_are_bounded_and_consistent(
        score in 0.0f64..=1.0,
        reach in 0u64..1_000_000,
        words in arb_words(),
        media in any::<bool>(),
        cred in 0.0f64..=1.0,
    ) {
        let a = assess(&ViralSignals {
            falsehood_score: score,
            current_reach: reach,
            trigger_words: &words,
            has_multimedia: media,
            source_credibility: cred,
        });
        prop_assert!((0.0..=1.0).contains(&a.probability));
        prop_assert_eq!(a.will_go_viral, a.probability > 0.7);
        prop_assert_eq!(a.time_to_viral.is_some(), a.probability > 0.5);
        if a.probability > 0.7 {
            prop_assert!(a.estimated_reach >= 10_000);
        }
    }
}
