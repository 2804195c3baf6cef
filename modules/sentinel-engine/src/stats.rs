use std::collections::BTreeMap;

use serde::Serialize;

use sentinel_common::config::TRADITIONAL_RESPONSE_TIME_SECS;
use sentinel_common::{AlertTier, AnalysisResult};

/// Hours of manual verification each prevented threat is credited with.
pub const HOURS_SAVED_PER_THREAT: f64 = TRADITIONAL_RESPONSE_TIME_SECS / 3600.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemStats {
    pub total_analyzed: usize,
    pub active_alerts: usize,
    /// Seconds, rounded to two decimals.
    pub average_processing_time: f64,
    pub alert_distribution: BTreeMap<AlertTier, usize>,
    pub threats_prevented: usize,
    pub time_saved_hours: f64,
    pub system_uptime: &'static str,
}

const SYSTEM_UPTIME: &str = "operational";

impl SystemStats {
    pub fn from_history(history: &[AnalysisResult], active_alerts: usize) -> Self {
        if history.is_empty() {
            return Self {
                total_analyzed: 0,
                active_alerts,
                average_processing_time: 0.0,
                alert_distribution: BTreeMap::new(),
                threats_prevented: 0,
                time_saved_hours: 0.0,
                system_uptime: SYSTEM_UPTIME,
            };
        }

        let mut distribution: BTreeMap<AlertTier, usize> =
            AlertTier::ALL.iter().map(|t| (*t, 0)).collect();
        for r in history {
            *distribution.entry(r.alert_level).or_insert(0) += 1;
        }

        let total_time: f64 = history.iter().map(|r| r.processing_time).sum();
        let average = total_time / history.len() as f64;

        let threats_prevented = distribution[&AlertTier::High] + distribution[&AlertTier::Critical];

        Self {
            total_analyzed: history.len(),
            active_alerts,
            average_processing_time: (average * 100.0).round() / 100.0,
            alert_distribution: distribution,
            threats_prevented,
            time_saved_hours: threats_prevented as f64 * HOURS_SAVED_PER_THREAT,
            system_uptime: SYSTEM_UPTIME,
        }
    }
}
