use tracing::debug;

use sentinel_common::{ActionLogEntry, ActionStatus, Stage};

/// Append-only audit trail for a single analysis. Each analysis starts with
/// an empty log; entries are never edited or removed.
#[derive(Debug, Default, Clone)]
pub struct ActionLog {
    entries: Vec<ActionLogEntry>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stage: Stage, details: impl Into<String>, status: ActionStatus) {
        let entry = ActionLogEntry::new(stage, details, status);
        debug!(
            stage = %entry.action_type,
            status = %entry.status,
            details = entry.details.as_str(),
            "Action recorded"
        );
        self.entries.push(entry);
    }

    pub fn begin(&mut self, stage: Stage, details: impl Into<String>) {
        self.record(stage, details, ActionStatus::InProgress);
    }

    pub fn complete(&mut self, stage: Stage, details: impl Into<String>) {
        self.record(stage, details, ActionStatus::Completed);
    }

    pub fn fail(&mut self, stage: Stage, details: impl Into<String>) {
        self.record(stage, details, ActionStatus::Failed);
    }

    pub fn entries(&self) -> &[ActionLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<ActionLogEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_insertion_order() {
        let mut log = ActionLog::new();
        assert!(log.is_empty());
        log.begin(Stage::SemanticVerification, "Initiating verification...");
        log.fail(Stage::SemanticVerification, "timed out");
        log.complete(Stage::CoverageCheck, "Found 3 articles");

        let statuses: Vec<ActionStatus> = log.entries().iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![
                ActionStatus::InProgress,
                ActionStatus::Failed,
                ActionStatus::Completed
            ]
        );
        assert_eq!(log.len(), 3);
        assert!(log.entries()[0].timestamp <= log.entries()[2].timestamp);
    }
}
