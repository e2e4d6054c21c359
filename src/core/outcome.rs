//! Result summary of a conversion run

use serde::Serialize;

/// Counters plus the ordered list of per-file failure messages.
///
/// Mutated once per processed file by the conversion loop; at completion
/// `total == succeeded + failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionOutcome {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl ConversionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome for a run that found `total` candidate files
    pub fn with_total(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.failed += 1;
        self.errors.push(message.into());
    }

    pub fn is_complete(&self) -> bool {
        self.total == self.succeeded + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
