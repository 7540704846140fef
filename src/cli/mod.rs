//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::{ScanError, ScanResult};
use crate::formatter::ValueStyle;
use crate::scanner::config::{ScanConfig, ScanMode, DEFAULT_EXTENSION, DEFAULT_ROOT};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "treescan")]
#[command(about = "Walk a content directory and print matching paths and decoded JSON")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// What to print for each entry
    #[arg(long, value_enum, default_value_t = Mode::Decode)]
    pub mode: Mode,

    /// Extension matched by the filter and decode modes
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Keep the platform's directory order instead of sorting by name
    #[arg(long)]
    pub unsorted: bool,

    /// Largest file to decode (e.g., 100MB, 512KB; default: 100MB)
    #[arg(long)]
    pub max_file_size: Option<String>,

    /// Pretty-print decoded values
    #[arg(long)]
    pub pretty: bool,

    /// Log traversal, read and decode failures to stderr
    #[arg(long)]
    pub report_errors: bool,

    /// Print a count summary to stderr when the scan ends
    #[arg(long)]
    pub summary: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}

/// Scan modes for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print every entry
    #[value(name = "all")]
    All,
    /// Print files with the configured extension
    #[value(name = "filter")]
    Filter,
    /// Print matching files and their decoded JSON
    #[value(name = "decode")]
    Decode,
}

impl From<Mode> for ScanMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::All => ScanMode::All,
            Mode::Filter => ScanMode::Filter,
            Mode::Decode => ScanMode::Decode,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub scan_config: ScanConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ScanResult<Self> {
        let scan_config = Self::create_scan_config(&args)?;

        Ok(Self { args, scan_config })
    }

    /// Create scan configuration from CLI arguments
    fn create_scan_config(args: &Args) -> ScanResult<ScanConfig> {
        let max_file_size = match &args.max_file_size {
            Some(limit) => Some(parse_size(limit)?),
            None => ScanConfig::default().max_file_size,
        };

        let config = ScanConfig::new()
            .with_root(&args.root)
            .with_mode(args.mode.into())
            .with_extension(&args.extension)
            .with_follow_links(args.follow_links)
            .with_sort_entries(!args.unsorted)
            .with_max_file_size(max_file_size);

        config.validate().map_err(ScanError::configuration)?;

        Ok(config)
    }

    pub fn report_errors(&self) -> bool {
        self.args.report_errors
    }

    pub fn want_summary(&self) -> bool {
        self.args.summary
    }

    pub fn value_style(&self) -> ValueStyle {
        if self.args.pretty {
            ValueStyle::Pretty
        } else {
            ValueStyle::Compact
        }
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.args.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Parse a size string (e.g., "100MB", "1GB", "500KB", "2048")
pub fn parse_size(limit: &str) -> ScanResult<u64> {
    let limit_str = limit.trim().to_uppercase();
    let invalid = || ScanError::configuration(format!("Invalid size: {}", limit));

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        (size, 1.0)
    } else {
        // Assume bytes
        (limit_str.as_str(), 1.0)
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as u64)
}
