//! Path helpers
//!
//! Derives default output locations and compares input/output paths.

use std::path::{Path, PathBuf};

/// Suffix appended to the file stem of a derived output path
pub const PRETTY_SUFFIX: &str = "-pretty";

/// Derive the default output path: `dir/example.txt` becomes `dir/example-pretty.txt`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, PRETTY_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, PRETTY_SUFFIX),
    };

    input.with_file_name(file_name)
}

/// Display a path using '/' as separator (for cross-platform consistent reports)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check whether two paths refer to the same file
///
/// Falls back to a plain comparison when either path cannot be canonicalized
/// (for example an output that does not exist yet).
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => a == b,
    }
}
