//! Configuration options for tree scanning

use std::path::PathBuf;

/// Directory scanned when no root is given
pub const DEFAULT_ROOT: &str = "content";

/// Extension matched by the filter and decode modes
pub const DEFAULT_EXTENSION: &str = "json";

/// Largest file the decode mode will read (100MB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// What the scanner does with each entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Emit every entry, directories and the root included
    All,
    /// Emit non-directory entries with the configured extension
    Filter,
    /// Like `Filter`, and decode each emitted file as relaxed JSON
    #[default]
    Decode,
}

/// Scan configuration options
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Directory the traversal starts from
    pub root: PathBuf,
    pub mode: ScanMode,
    /// Extension without its leading dot
    pub extension: String,
    /// Follow symbolic links while walking
    pub follow_links: bool,
    /// Visit directory children in file-name order
    pub sort_entries: bool,
    /// Maximum size of a file read in decode mode
    pub max_file_size: Option<u64>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            mode: ScanMode::default(),
            extension: DEFAULT_EXTENSION.to_string(),
            follow_links: false,
            sort_entries: true,
            max_file_size: Some(DEFAULT_MAX_FILE_SIZE),
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the matched extension; a leading dot is dropped
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension
            .strip_prefix('.')
            .unwrap_or(extension)
            .to_string();
        self
    }

    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn with_sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = sort;
        self
    }

    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("Root directory must not be empty".to_string());
        }

        if self.extension.is_empty() {
            return Err("Extension must not be empty".to_string());
        }

        if self.extension.contains(['/', '\\']) {
            return Err(format!(
                "Extension '{}' must not contain a path separator",
                self.extension
            ));
        }

        if self.max_file_size == Some(0) {
            return Err("Maximum file size must be greater than 0".to_string());
        }

        Ok(())
    }
}
