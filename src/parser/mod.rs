//! Relaxed JSON decoding module

pub mod comments;
pub mod value;

pub use comments::strip_comments;
pub use value::{JsonValue, ValueKind};

use crate::error::{ParseError, ParseResult, ScanError, ScanResult};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Decode relaxed JSON (comments and trailing commas allowed)
pub fn decode_relaxed(content: &str) -> ParseResult<JsonValue> {
    let stripped = strip_comments(content);
    if stripped.trim().is_empty() {
        return Err(ParseError::new("Empty JSON document".to_string(), None));
    }

    // Parse the untrimmed text so error positions match the file
    serde_json::from_str::<serde_json::Value>(&stripped)
        .map(JsonValue::from)
        .map_err(|e| ParseError::new(format!("Invalid JSON: {}", e), error_location(&e)))
}

/// Read and decode a relaxed JSON file
///
/// Only regular files are opened; symlinks are resolved first, so a link to a
/// device or FIFO is rejected without blocking. At most `max_size` bytes are
/// read, whatever size the metadata reports. The file handle is dropped on
/// every return path.
pub fn decode_file(path: &Path, max_size: Option<u64>) -> ScanResult<JsonValue> {
    let metadata = fs::metadata(path).map_err(|e| ScanError::io(path, e))?;
    if !metadata.is_file() {
        return Err(ScanError::NotRegularFile {
            path: path.to_path_buf(),
        });
    }

    if let Some(limit) = max_size {
        if metadata.len() > limit {
            return Err(ScanError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                limit,
            });
        }
    }

    let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
    let limit = max_size.unwrap_or(u64::MAX);
    let mut bytes = Vec::new();
    file.take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(|e| ScanError::io(path, e))?;

    // Metadata under-reported the size (procfs) or the file grew after stat
    if bytes.len() as u64 > limit {
        return Err(ScanError::FileTooLarge {
            path: path.to_path_buf(),
            size: bytes.len() as u64,
            limit,
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| {
        ScanError::io(path, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    decode_relaxed(&content).map_err(|e| ScanError::decode(path, e))
}

/// Line and column of a serde_json error, when it points into the input
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    if error.line() == 0 {
        None
    } else {
        Some((error.line(), error.column()))
    }
}
