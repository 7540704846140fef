//! Error types for tree scanning and relaxed JSON decoding

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors produced while scanning a tree or decoding a matching file
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Traversal error: {message}")]
    Walk {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Not a regular file: {}", .path.display())]
    NotRegularFile { path: PathBuf },

    #[error("JSON decode error in {}: {}", .path.display(), .error)]
    Decode { path: PathBuf, error: ParseError },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ScanError {
    pub fn walk(message: String, path: Option<PathBuf>) -> Self {
        Self::Walk { message, path }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn decode(path: &Path, error: ParseError) -> Self {
        Self::Decode {
            path: path.to_path_buf(),
            error,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Path the error refers to, when one is known
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Walk { path, .. } => path.as_deref(),
            Self::Io { path, .. }
            | Self::FileTooLarge { path, .. }
            | Self::NotRegularFile { path }
            | Self::Decode { path, .. } => Some(path.as_path()),
            Self::Configuration { .. } => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Walk { message, path } => match path {
                Some(path) => format!("Cannot traverse {}: {}", path.display(), message),
                None => format!("Cannot traverse: {}", message),
            },
            Self::Io { path, source } => {
                format!("Cannot read {}: {}", path.display(), source)
            }
            Self::FileTooLarge { path, size, limit } => format!(
                "Skipped {}: {} bytes exceeds the {} byte limit",
                path.display(),
                size,
                limit
            ),
            Self::NotRegularFile { path } => {
                format!("Skipped {}: not a regular file", path.display())
            }
            Self::Decode { path, error } => {
                if let Some((line, col)) = error.location {
                    format!(
                        "JSON decode error in {} at line {}, column {}: {}",
                        path.display(),
                        line,
                        col,
                        error.message
                    )
                } else {
                    format!("JSON decode error in {}: {}", path.display(), error.message)
                }
            }
            Self::Configuration { .. } => self.to_string(),
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(Path::to_path_buf);
        let message = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        Self::Walk { message, path }
    }
}

/// Relaxed JSON parsing errors
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// One-based line and column
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
