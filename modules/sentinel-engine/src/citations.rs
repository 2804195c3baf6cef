use sentinel_common::VerificationOutcome;

/// One line per source: supporting sources first (`✓`), then contradicting ones (`✗`).
pub fn format_citations(verification: &VerificationOutcome) -> Vec<String> {
    let supporting = verification
        .sources
        .iter()
        .map(|s| format!("✓ {} - {}", s.title, s.url));
    let contradicting = verification
        .contradicting_sources
        .iter()
        .map(|s| format!("✗ Contradicted by: {} - {}", s.title, s.url));
    supporting.chain(contradicting).collect()
}
