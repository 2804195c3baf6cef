use std::sync::Arc;
use std::time::Duration;

use sentinel_common::{ActionStatus, AlertTier, Claim, CoverageOutcome, Stage};
use sentinel_engine::oracle::OracleFailure;
use sentinel_engine::testing::{
    contradicted, orchestrator, unverified, verified, MockCoverage, MockVerifier,
};
use sentinel_engine::{AnalysisOptions, Orchestrator};

fn stages(result: &sentinel_common::AnalysisResult) -> Vec<(Stage, ActionStatus)> {
    result
        .actions_taken
        .iter()
        .map(|e| (e.action_type, e.status))
        .collect()
}

#[tokio::test]
async fn well_verified_story_with_broad_coverage_is_low() {
    let orch = orchestrator(
        MockVerifier::returning(verified(0.9, 2)),
        MockCoverage::returning(CoverageOutcome::from_counts(10, 9)),
    );
    let claim = Claim::new("Budget passed by parliament", "Vote held on Tuesday");

    let r = orch.analyze(&claim, &AnalysisOptions::default()).await;

    assert!(r.falsehood_score < 0.1, "got {}", r.falsehood_score);
    assert_eq!(r.alert_level, AlertTier::Low);
    assert!(!r.requires_approval);
    assert!(r.counter_narrative.is_none());
}

#[tokio::test]
async fn unverified_uncovered_story_is_high_with_organic_response() {
    let orch = orchestrator(
        MockVerifier::returning(unverified()),
        MockCoverage::returning(CoverageOutcome::none()),
    );
    let claim = Claim::new("Aliens land in Mumbai", "Seen near the harbour");

    let r = orch.analyze(&claim, &AnalysisOptions::default()).await;

    // 0.75 base + 0.15 * 0.329 viral
    assert!((r.falsehood_score - 0.79935).abs() < 1e-6, "got {}", r.falsehood_score);
    assert_eq!(r.alert_level, AlertTier::High);
    assert!(r.requires_approval);
    let cn = r.counter_narrative.as_ref().expect("HIGH gets a counter-narrative");
    assert!(cn.narrative.starts_with("ADVISORY"));
    assert_eq!(r.platform_count(), 3);
}

#[tokio::test]
async fn contradicted_sensational_story_is_critical() {
    let orch = orchestrator(
        MockVerifier::returning(contradicted(0.9)),
        MockCoverage::returning(CoverageOutcome::from_counts(10, 2)),
    );
    let claim = Claim::new("URGENT riot and attack downtown", "crisis everywhere");

    let r = orch.analyze(&claim, &AnalysisOptions::default()).await;

    assert_eq!(r.falsehood_score, 1.0);
    assert_eq!(r.alert_level, AlertTier::Critical);
    let cn = r.counter_narrative.expect("CRITICAL gets a counter-narrative");
    assert!(cn.narrative.starts_with("OFFICIAL STATEMENT"));
    assert_eq!(cn.urgency, AlertTier::Critical);
    assert!(r
        .viral_prediction
        .risk_factors
        .contains(&"Strong emotional triggers detected".to_string()));
}

#[tokio::test]
async fn stage_log_follows_pipeline_order() {
    let orch = orchestrator(
        MockVerifier::returning(unverified()),
        MockCoverage::returning(CoverageOutcome::none()),
    );
    let r = orch
        .analyze(&Claim::new("Aliens land", ""), &AnalysisOptions::default())
        .await;

    use ActionStatus::{Completed, InProgress};
    assert_eq!(
        stages(&r),
        vec![
            (Stage::AnalysisStart, InProgress),
            (Stage::SemanticVerification, InProgress),
            (Stage::SemanticVerification, Completed),
            (Stage::CoverageCheck, InProgress),
            (Stage::CoverageCheck, Completed),
            (Stage::ViralPrediction, InProgress),
            (Stage::ViralPrediction, Completed),
            (Stage::FalsehoodScoring, InProgress),
            (Stage::FalsehoodScoring, Completed),
            (Stage::AlertClassification, InProgress),
            (Stage::AlertClassification, Completed),
            (Stage::CounterNarrative, InProgress),
            (Stage::CounterNarrative, Completed),
            (Stage::AnalysisComplete, Completed),
        ]
    );
    let last = r.actions_taken.last().unwrap();
    assert!(last.details.starts_with("Processing time: "));
}

#[tokio::test]
async fn disabled_counter_narrative_is_skipped() {
    let orch = orchestrator(
        MockVerifier::returning(unverified()),
        MockCoverage::returning(CoverageOutcome::none()),
    );
    let options = AnalysisOptions {
        enable_counter_narrative: false,
    };
    let r = orch.analyze(&Claim::new("Aliens land", ""), &options).await;

    assert_eq!(r.alert_level, AlertTier::High);
    assert!(r.counter_narrative.is_none());
    assert!(r.requires_approval);
    assert!(!r
        .actions_taken
        .iter()
        .any(|e| e.action_type == Stage::CounterNarrative));
}

#[tokio::test]
async fn oracle_failures_fall_back_and_are_logged() {
    let orch = orchestrator(
        MockVerifier::failing(OracleFailure::Transport("connection reset".to_string())),
        MockCoverage::failing(OracleFailure::InvalidResponse("not json".to_string())),
    );
    let r = orch
        .analyze(&Claim::new("Aliens land", ""), &AnalysisOptions::default())
        .await;

    assert!(!r.verification.is_verified);
    assert_eq!(r.verification.summary, "Verification failed");
    assert_eq!(r.verification.confidence_score, 0.0);
    assert_eq!(r.alert_level, AlertTier::High);

    let failed: Vec<Stage> = r
        .actions_taken
        .iter()
        .filter(|e| e.status == ActionStatus::Failed)
        .map(|e| e.action_type)
        .collect();
    assert_eq!(failed, vec![Stage::SemanticVerification, Stage::CoverageCheck]);
    assert!(r.actions_taken[2].details.contains("connection reset"));
}

#[tokio::test]
async fn slow_verifier_times_out_into_fallback() {
    let orch = orchestrator(
        MockVerifier::returning(verified(0.9, 2)).with_delay(Duration::from_secs(5)),
        MockCoverage::returning(CoverageOutcome::from_counts(10, 9)),
    );
    let r = orch
        .analyze(&Claim::new("Budget passed", ""), &AnalysisOptions::default())
        .await;

    assert!(!r.verification.is_verified, "timed-out verdict must not be used");
    let entry = &r.actions_taken[2];
    assert_eq!(entry.action_type, Stage::SemanticVerification);
    assert_eq!(entry.status, ActionStatus::Failed);
    assert!(entry.details.contains("timed out"), "got {}", entry.details);
    assert!(r.processing_time < 5.0);
}

#[tokio::test]
async fn each_oracle_is_called_once_per_analysis() {
    let verifier = Arc::new(MockVerifier::returning(unverified()));
    let coverage = Arc::new(MockCoverage::returning(CoverageOutcome::none()));
    let orch = Orchestrator::new(verifier.clone(), coverage.clone());

    orch.analyze(&Claim::new("a", "b"), &AnalysisOptions::default())
        .await;
    orch.analyze(&Claim::new("c", "d"), &AnalysisOptions::default())
        .await;

    assert_eq!(verifier.calls(), 2);
    assert_eq!(coverage.calls(), 2);
}

#[tokio::test]
async fn caller_supplied_id_is_kept() {
    let orch = orchestrator(
        MockVerifier::returning(unverified()),
        MockCoverage::returning(CoverageOutcome::none()),
    );
    let claim = Claim::new("x", "y").with_id("news_custom_1");
    let r = orch.analyze(&claim, &AnalysisOptions::default()).await;
    assert_eq!(r.news_id, "news_custom_1");

    let r = orch
        .analyze(&Claim::new("x", "y"), &AnalysisOptions::default())
        .await;
    assert!(r.news_id.starts_with("news_"));
}
