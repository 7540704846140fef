//! treescan
//!
//! Walks a content directory depth-first and reports its entries, optionally
//! filtering by extension and decoding matching files as relaxed JSON (JSON
//! with `//` and `/* */` comments and trailing commas).

pub mod cli;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod scanner;

// Re-export commonly used types
pub use error::{ParseError, ScanError, ScanResult};
pub use formatter::{OutcomeFormatter, ValueStyle};
pub use parser::{decode_file, decode_relaxed, strip_comments, JsonValue, ValueKind};
pub use scanner::{
    EntryKind, EntryOutcome, Payload, ScanConfig, ScanMode, ScanSummary, TreeEntry, TreeScanner,
};

/// Scan `root` with the given mode and default settings
pub fn scan_root(root: impl Into<std::path::PathBuf>, mode: ScanMode) -> Vec<EntryOutcome> {
    let config = ScanConfig::new().with_root(root).with_mode(mode);
    TreeScanner::new(config).scan().collect()
}
