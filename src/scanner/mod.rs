//! Tree scanner
//!
//! Walks a root directory depth-first (root included) and yields one
//! [`EntryOutcome`] per entry. Traversal, read and decode failures are
//! outcomes too: nothing aborts the scan, and the caller decides whether to
//! log, count or ignore them.

pub mod config;
pub mod entry;
pub mod summary;

pub use config::{ScanConfig, ScanMode};
pub use entry::{EntryKind, TreeEntry};
pub use summary::ScanSummary;

use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::parser::{decode_file, JsonValue};

/// Content attached to an emitted entry
#[derive(Debug)]
pub enum Payload {
    /// Only the path is emitted
    PathOnly,
    /// The file decoded as relaxed JSON
    Decoded(JsonValue),
    /// The file matched but could not be read or decoded
    Undecodable(ScanError),
}

/// Result of visiting one traversal item
#[derive(Debug)]
pub enum EntryOutcome {
    /// The entry passed the mode's predicate
    Emitted { entry: TreeEntry, payload: Payload },
    /// The entry did not pass the predicate
    Skipped { entry: TreeEntry },
    /// The traversal itself failed (missing root, permission denied, loop)
    Failed {
        path: Option<PathBuf>,
        error: ScanError,
    },
}

impl EntryOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            EntryOutcome::Emitted { entry, .. } | EntryOutcome::Skipped { entry } => {
                Some(entry.path.as_path())
            }
            EntryOutcome::Failed { path, .. } => path.as_deref(),
        }
    }

    /// The failure carried by this outcome, if any
    pub fn error(&self) -> Option<&ScanError> {
        match self {
            EntryOutcome::Emitted {
                payload: Payload::Undecodable(error),
                ..
            }
            | EntryOutcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_emitted(&self) -> bool {
        matches!(self, EntryOutcome::Emitted { .. })
    }

    /// Decoded value of an emitted entry
    pub fn value(&self) -> Option<&JsonValue> {
        match self {
            EntryOutcome::Emitted {
                payload: Payload::Decoded(value),
                ..
            } => Some(value),
            _ => None,
        }
    }
}

/// Recursive file-system scanner
#[derive(Debug, Clone)]
pub struct TreeScanner {
    config: ScanConfig,
}

impl TreeScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Lazily walk the tree, one outcome per item
    pub fn scan(&self) -> Scan<'_> {
        let mut walk = WalkDir::new(&self.config.root)
            .follow_links(self.config.follow_links)
            .follow_root_links(true);
        if self.config.sort_entries {
            walk = walk.sort_by_file_name();
        }

        debug!(
            root = %self.config.root.display(),
            mode = ?self.config.mode,
            "starting scan"
        );

        Scan {
            scanner: self,
            walker: walk.into_iter(),
        }
    }

    /// Invoke `callback` once per outcome, in traversal order
    pub fn scan_with<F>(&self, mut callback: F)
    where
        F: FnMut(EntryOutcome),
    {
        for outcome in self.scan() {
            callback(outcome);
        }
    }

    /// Walk the whole tree and collect outcomes with their summary
    pub fn run(&self) -> (Vec<EntryOutcome>, ScanSummary) {
        let outcomes: Vec<EntryOutcome> = self.scan().collect();
        let summary = ScanSummary::from_outcomes(&outcomes);
        (outcomes, summary)
    }

    fn classify(&self, dir_entry: &walkdir::DirEntry) -> EntryOutcome {
        let entry = TreeEntry::from_dir_entry(dir_entry);
        debug!(path = %entry.path.display(), kind = ?entry.kind, "visiting entry");

        if self.config.mode == ScanMode::All {
            return EntryOutcome::Emitted {
                entry,
                payload: Payload::PathOnly,
            };
        }

        if entry.is_dir() || !entry.matches_extension(&self.config.extension) {
            trace!(path = %entry.path.display(), "skipping entry");
            return EntryOutcome::Skipped { entry };
        }

        let payload = match self.config.mode {
            ScanMode::Decode => match decode_file(&entry.path, self.config.max_file_size) {
                Ok(value) => Payload::Decoded(value),
                Err(error) => {
                    debug!(path = %entry.path.display(), %error, "could not decode entry");
                    Payload::Undecodable(error)
                }
            },
            _ => Payload::PathOnly,
        };

        EntryOutcome::Emitted { entry, payload }
    }
}

/// Iterator over the outcomes of a scan
pub struct Scan<'a> {
    scanner: &'a TreeScanner,
    walker: walkdir::IntoIter,
}

impl Iterator for Scan<'_> {
    type Item = EntryOutcome;

    fn next(&mut self) -> Option<Self::Item> {
        let outcome = match self.walker.next()? {
            Ok(dir_entry) => self.scanner.classify(&dir_entry),
            Err(err) => {
                let error = ScanError::from(err);
                debug!(%error, "traversal error");
                EntryOutcome::Failed {
                    path: error.path().map(Path::to_path_buf),
                    error,
                }
            }
        };
        Some(outcome)
    }
}
