//! Line-number marker stripping
//!
//! Annotated input carries a `<line-number>→<content>` prefix. Any line that
//! contains the marker keeps only the text after its first occurrence,
//! whatever precedes it.

use crate::core::model::FormatError;

/// Default marker separating a line-number prefix from content (U+2192)
pub const DEFAULT_MARKER: &str = "→";

/// A validated, non-empty marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker(String);

impl Marker {
    pub fn new(marker: impl Into<String>) -> Result<Self, FormatError> {
        let marker = marker.into();
        if marker.is_empty() {
            return Err(FormatError::InvalidMarker);
        }
        Ok(Self(marker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the line contains the marker
    pub fn found_in(&self, line: &str) -> bool {
        line.contains(self.0.as_str())
    }

    /// Strip the prefix up to and including the first marker.
    ///
    /// Returns the remaining text and whether the marker was found.
    pub fn strip<'a>(&self, line: &'a str) -> (&'a str, bool) {
        match line.split_once(self.0.as_str()) {
            Some((_, rest)) => (rest, true),
            None => (line, false),
        }
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self(DEFAULT_MARKER.to_string())
    }
}

/// Strip the marker prefix from a line, returning it unchanged if absent
pub fn strip_marker<'a>(line: &'a str, marker: &Marker) -> &'a str {
    marker.strip(line).0
}
