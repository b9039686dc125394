//! Runtime configuration for the query tools.
//!
//! There is no configuration file. Settings come from command-line flags:
//! - `--data-dir` - Optional. Directory holding the JSON data files. Without
//!   it the copies embedded in the binary at build time are used.
//! - `--verbose` - Optional. Log loading and filtering at debug level.
//!
//! `RUST_LOG` overrides the log filter when set.

use std::path::PathBuf;

/// Default log directive: only warnings, so stderr stays reserved for errors.
pub const DEFAULT_LOG_FILTER: &str = "competenties=warn";

/// Log directive used with `--verbose`.
pub const VERBOSE_LOG_FILTER: &str = "competenties=debug";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing `hboi-nl.json` and `vaardigheden-nl.json`;
    /// `None` selects the embedded data
    pub data_dir: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>, verbose: bool) -> Self {
        let log_filter = if verbose {
            VERBOSE_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        };
        Self {
            data_dir,
            log_filter: log_filter.to_string(),
        }
    }

    /// Path of `file` in the configured data directory, if one was given.
    pub fn data_path(&self, file: &str) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join(file))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, false)
    }
}
