//! Paragraph formatter - marker stripping followed by blank-run collapsing
//!
//! The whole input is read into memory before any output is produced.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::file_reader::{read_text, split_lines, write_text, EncodingStrategy};
use crate::core::model::{FormatReport, Mode, PassStats, ReportWarning, WarningCode};
use crate::core::paths::{default_output_path, display_path, same_file};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{hash_bytes, is_blank};
use crate::formatter::collapse::collapse_blank_runs;
use crate::formatter::marker::{strip_marker, Marker};

/// Output of one formatting pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    /// Emitted lines, each ending with `\n`
    pub lines: Vec<String>,
    pub stats: PassStats,
}

impl Formatted {
    /// Number of emitted lines that are not blank separators
    pub fn non_blank_count(&self) -> usize {
        self.lines.iter().filter(|l| !is_blank(l)).count()
    }

    /// Concatenate the emitted lines into the output text
    pub fn to_text(&self) -> String {
        self.lines.concat()
    }
}

/// Run the formatting pass over lines
pub fn format_lines<'a, I>(lines: I, marker: &Marker) -> Formatted
where
    I: IntoIterator<Item = &'a str>,
{
    let mut stats = PassStats::default();

    let stripped: Vec<&str> = lines
        .into_iter()
        .map(|line| {
            if marker.found_in(line) {
                stats.markers_stripped += 1;
            }
            strip_marker(line, marker)
        })
        .collect();
    stats.lines_read = stripped.len();

    let lines = collapse_blank_runs(stripped);
    stats.lines_emitted = lines.len();
    stats.blank_lines_dropped = stats.lines_read - lines.len();

    let mut formatted = Formatted { lines, stats };
    formatted.stats.non_blank = formatted.non_blank_count();
    formatted
}

/// Format a whole text
pub fn format_text(text: &str, marker: &Marker) -> Formatted {
    format_lines(split_lines(text), marker)
}

/// Read `input`, run the pass and report on it, without writing anything
fn prepare(
    input: &Path,
    marker: &str,
    encoding: EncodingStrategy,
    mode: Mode,
) -> Result<(Formatted, FormatReport)> {
    let marker = Marker::new(marker)?;
    tracing::debug!("Using marker {:?}", marker.as_str());
    let read = read_text(input, encoding)?;

    let formatted = format_text(&read.content, &marker);
    let text = formatted.to_text();
    tracing::info!(
        "Formatted {:?}: {} lines read, {} markers stripped, {} blank lines dropped",
        input,
        formatted.stats.lines_read,
        formatted.stats.markers_stripped,
        formatted.stats.blank_lines_dropped
    );

    let report = FormatReport::new(mode, display_path(input), formatted.stats)
        .with_content(text.len() as u64, hash_bytes(text.as_bytes()))
        .with_changed(text != read.content)
        .with_warnings(read.warnings);

    Ok((formatted, report))
}

/// Run the format command: rewrite `output` (or the derived default path)
pub fn run_format(
    input: &Path,
    output: Option<&Path>,
    marker: &str,
    encoding: EncodingStrategy,
    config: RenderConfig,
) -> Result<FormatReport> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    let (formatted, mut report) = prepare(input, marker, encoding, Mode::Format)
        .with_context(|| format!("Failed to format {}", input.display()))?;

    if same_file(input, &output) {
        tracing::warn!("Rewriting {:?} in place", output);
        report = report.with_warnings([ReportWarning::new(
            WarningCode::InPlace,
            "output overwrites the input file",
        )]);
    }

    write_text(&output, &formatted.to_text())
        .with_context(|| format!("Failed to format {}", input.display()))?;

    let report = report.with_output(display_path(&output));
    Renderer::with_config(config).print(&report);

    Ok(report)
}

/// Run the check command; returns true when formatting would change the input
pub fn run_check(
    input: &Path,
    marker: &str,
    encoding: EncodingStrategy,
    config: RenderConfig,
) -> Result<bool> {
    let (_, report) = prepare(input, marker, encoding, Mode::Check)
        .with_context(|| format!("Failed to check {}", input.display()))?;

    if report.changed {
        tracing::info!("{:?} needs formatting", input);
    }
    Renderer::with_config(config).print(&report);

    Ok(report.changed)
}
