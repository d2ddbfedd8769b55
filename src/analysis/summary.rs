use crate::analysis::audit::CallAudit;
use crate::type_system::Typecheck;
use serde::Serialize;
use std::collections::HashMap;

/// Tallies of check outcomes across many audited calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypecheckSummary {
    pub calls: usize,
    pub counts: HashMap<Typecheck, usize>,
}

impl TypecheckSummary {
    pub fn analyze(audits: &[CallAudit]) -> Self {
        let mut summary = Self::default();
        for audit in audits {
            summary.calls += 1;
            for result in audit.results() {
                summary.record(result);
            }
        }
        summary
    }

    pub fn record(&mut self, result: Typecheck) {
        *self.counts.entry(result).or_insert(0) += 1;
    }

    pub fn count(&self, result: Typecheck) -> usize {
        self.counts.get(&result).copied().unwrap_or(0)
    }

    /// Number of arguments checked.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Share of definitive results that were matches. `None` until at least
    /// one argument was definitively decided.
    pub fn match_rate(&self) -> Option<f64> {
        let matched = self.count(Typecheck::Match);
        let decided = matched + self.count(Typecheck::Mismatch);
        (decided > 0).then(|| matched as f64 / decided as f64)
    }
}
