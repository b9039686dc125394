//! Error types for competency queries.
//!
//! Every variant is terminal for an invocation. The binaries turn them into
//! stderr lines and a non-zero exit status; nothing below `main` exits.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Data file not found: {}", path.display())]
    DataSourceMissing { path: PathBuf },

    #[error("Invalid JSON in data file: {source}")]
    DataSourceMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{source}")]
    DataSourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {label}: {value}")]
    InvalidFilterValue {
        label: &'static str,
        plural: &'static str,
        value: String,
        valid: Vec<String>,
    },

    #[error("{} '{}' not found", capitalize(.label), .value)]
    UnknownKey {
        label: &'static str,
        plural: &'static str,
        value: String,
        valid: Vec<String>,
    },

    #[error("No {subject} found with the specified filters")]
    NoMatch { subject: &'static str },
}

impl QueryError {
    /// Guidance line listing the accepted values, for vocabulary-class errors.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::InvalidFilterValue { plural, valid, .. }
            | Self::UnknownKey { plural, valid, .. } => {
                Some(format!("Valid {}: {}", plural, valid.join(", ")))
            }
            _ => None,
        }
    }

    /// Lines written to stderr when this error ends an invocation.
    ///
    /// An empty result is reported as a plain notice rather than an `Error:` line.
    pub fn report_lines(&self) -> Vec<String> {
        let headline = match self {
            Self::NoMatch { .. } => self.to_string(),
            _ => format!("Error: {}", self),
        };
        let mut lines = vec![headline];
        lines.extend(self.hint());
        lines
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
