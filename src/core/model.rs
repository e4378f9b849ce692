//! Report Model
//!
//! Every command maps its outcome to a [`FormatReport`] before rendering output.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// The command that produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Format,
    Check,
}

/// Warning codes recorded while reading or writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// Invalid UTF-8 was replaced with U+FFFD
    LossyConversion,
    /// The output path is the input path
    InPlace,
}

/// A structured warning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportWarning {
    pub code: WarningCode,
    pub message: String,
}

impl ReportWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Counters collected during a single formatting pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStats {
    /// Lines read from the input
    pub lines_read: usize,
    /// Lines that contained the marker
    pub markers_stripped: usize,
    /// Lines emitted, blank separators included
    pub lines_emitted: usize,
    /// Non-blank lines emitted
    pub non_blank: usize,
    /// Blank lines dropped because they continued a run
    pub blank_lines_dropped: usize,
}

/// Summary of one run over a file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatReport {
    pub mode: Mode,

    /// Input path as given on the command line
    pub input: String,

    /// Output path (absent in check mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    pub stats: PassStats,

    /// Size of the formatted text in bytes
    pub bytes: u64,

    /// XXH3 hash of the formatted text
    pub hash: String,

    /// Whether formatting changes the input text
    pub changed: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ReportWarning>,
}

impl FormatReport {
    pub fn new(mode: Mode, input: impl Into<String>, stats: PassStats) -> Self {
        Self {
            mode,
            input: input.into(),
            output: None,
            stats,
            bytes: 0,
            hash: String::new(),
            changed: false,
            warnings: Vec::new(),
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_content(mut self, bytes: u64, hash: impl Into<String>) -> Self {
        self.bytes = bytes;
        self.hash = hash.into();
        self
    }

    pub fn with_changed(mut self, changed: bool) -> Self {
        self.changed = changed;
        self
    }

    pub fn with_warnings(mut self, warnings: impl IntoIterator<Item = ReportWarning>) -> Self {
        self.warnings.extend(warnings);
        self
    }
}

/// Failures of the formatting pass
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot read input {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input {} is not valid UTF-8", path.display())]
    InputUndecodable {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("cannot write output {}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("marker must not be empty")]
    InvalidMarker,
}
