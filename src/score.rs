//! Running totals for a grading run.

/// Counts and failures accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scorecard {
    total: usize,
    failed: usize,
    failed_traces: Vec<String>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_pass(&mut self) {
        self.total += 1;
    }

    pub fn record_failure(&mut self, identity: impl Into<String>) {
        self.total += 1;
        self.failed += 1;
        self.failed_traces.push(identity.into());
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn passed(&self) -> usize {
        self.total - self.failed
    }

    /// Failed trace identities in grading order.
    pub fn failed_traces(&self) -> &[String] {
        &self.failed_traces
    }

    /// Percentage of passing traces, or `None` when nothing was graded.
    pub fn percentage(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.passed() as f64 / self.total as f64 * 100.0)
    }

    /// `"50.00%"`, or `"N/A (no trace files found)"` for an empty run.
    pub fn score_line(&self) -> String {
        match self.percentage() {
            Some(pct) => format!("{:.2}%", pct),
            None => "N/A (no trace files found)".to_string(),
        }
    }
}
