//! Common utilities

use xxhash_rust::xxh3::xxh3_64;

/// Compute the XXH3 hash of bytes as 16 hex characters
pub fn hash_bytes(data: &[u8]) -> String {
    format!("{:016x}", xxh3_64(data))
}

/// Whitespace as stripped from line ends: Unicode White_Space plus the
/// information separators U+001C..=U+001F
#[inline]
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Remove trailing whitespace
pub fn trim_end_space(line: &str) -> &str {
    line.trim_end_matches(is_space)
}

/// Returns true when the line is empty after trimming whitespace
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim_matches(is_space).is_empty()
}
