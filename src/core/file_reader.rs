//! Unified file reading and writing
//!
//! Provides consistent handling for:
//! - Non-UTF-8 input (strict or lossy)
//! - Universal newlines (`\n`, `\r\n`, `\r`)
//! - Whole-file output replacement

use std::fs;
use std::path::Path;

use crate::core::model::{FormatError, ReportWarning, WarningCode};

/// Strategy for handling non-UTF-8 content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingStrategy {
    /// Fail on invalid UTF-8
    #[default]
    Strict,
    /// Use lossy conversion (replace invalid bytes with U+FFFD)
    Lossy,
}

/// Result of reading a file
#[derive(Debug, Clone, Default)]
pub struct FileReadResult {
    /// The decoded file content
    pub content: String,

    /// Warnings generated during reading
    pub warnings: Vec<ReportWarning>,
}

impl FileReadResult {
    /// Create a successful read result
    pub fn success(content: String) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    /// Add a warning
    pub fn with_warning(mut self, warning: ReportWarning) -> Self {
        self.warnings.push(warning);
        self
    }
}

/// Read a whole file into memory and decode it as text
pub fn read_text(path: &Path, strategy: EncodingStrategy) -> Result<FileReadResult, FormatError> {
    let bytes = fs::read(path).map_err(|source| FormatError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Read {} bytes from {:?}", bytes.len(), path);

    decode(path, bytes, strategy)
}

/// Decode raw bytes according to the encoding strategy
pub fn decode(
    path: &Path,
    bytes: Vec<u8>,
    strategy: EncodingStrategy,
) -> Result<FileReadResult, FormatError> {
    match String::from_utf8(bytes) {
        Ok(content) => Ok(FileReadResult::success(content)),
        Err(err) => match strategy {
            EncodingStrategy::Strict => Err(FormatError::InputUndecodable {
                path: path.to_path_buf(),
                source: err,
            }),
            EncodingStrategy::Lossy => {
                let valid_up_to = err.utf8_error().valid_up_to();
                let content = String::from_utf8_lossy(err.as_bytes()).into_owned();
                tracing::warn!(
                    "Invalid UTF-8 in {:?} at byte {}, decoding lossily",
                    path,
                    valid_up_to
                );

                Ok(FileReadResult::success(content).with_warning(ReportWarning::new(
                    WarningCode::LossyConversion,
                    format!("invalid UTF-8 at byte {} replaced with U+FFFD", valid_up_to),
                )))
            }
        },
    }
}

/// Split text into lines using universal newlines
///
/// `\n`, `\r\n` and a lone `\r` all terminate a line. Terminators are not
/// included. A trailing unterminated line is kept; empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if i < bytes.len() && bytes[i] == b'\n' {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Replace the file at `path` with `content`
///
/// The file is created if missing and truncated otherwise. Parent
/// directories are not created.
pub fn write_text(path: &Path, content: &str) -> Result<(), FormatError> {
    fs::write(path, content).map_err(|source| FormatError::OutputUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote {} bytes to {:?}", content.len(), path);
    Ok(())
}
