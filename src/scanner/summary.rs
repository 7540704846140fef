//! Per-scan counters, printed by `--summary`

use std::fmt;

use super::{EntryOutcome, Payload};

/// Counters over the outcomes of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Entries the traversal reached (emitted + skipped)
    pub visited: usize,
    pub emitted: usize,
    pub skipped: usize,
    pub decoded: usize,
    pub undecodable: usize,
    /// Traversal errors
    pub failed: usize,
}

impl ScanSummary {
    pub fn record(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Emitted { payload, .. } => {
                self.visited += 1;
                self.emitted += 1;
                match payload {
                    Payload::PathOnly => {}
                    Payload::Decoded(_) => self.decoded += 1,
                    Payload::Undecodable(_) => self.undecodable += 1,
                }
            }
            EntryOutcome::Skipped { .. } => {
                self.visited += 1;
                self.skipped += 1;
            }
            EntryOutcome::Failed { .. } => self.failed += 1,
        }
    }

    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a EntryOutcome>) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }

    /// Failures of any kind: traversal errors and undecodable files
    pub fn error_count(&self) -> usize {
        self.failed + self.undecodable
    }
}

impl fmt::Display for ScanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries visited: {} emitted, {} skipped, {} decoded, {} undecodable, {} traversal errors",
            self.visited, self.emitted, self.skipped, self.decoded, self.undecodable, self.failed
        )
    }
}
