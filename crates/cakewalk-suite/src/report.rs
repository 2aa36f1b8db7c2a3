use crate::registry::Marker;
use serde::Serialize;

/// Outcome of one executed check.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CaseOutcome {
    Passed,
    Failed { reason: String },
}

impl CaseOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CaseOutcome::Passed)
    }
}

/// Result of one check within a run.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub marker: Marker,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
    pub duration_ms: u64,
}

/// One full suite run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub started_at: String,
    pub base_url: String,
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            base_url: base_url.into(),
            cases: Vec::new(),
        }
    }

    pub fn record(&mut self, case: CaseReport) {
        self.cases.push(case);
    }

    pub fn passed(&self) -> usize {
        self.cases
            .iter()
            .filter(|case| case.outcome.is_passed())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.cases.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
