//! Renderer module
//!
//! Renders a FormatReport to different output formats: text, json, jsonl

use colored::Colorize;

use crate::core::model::{FormatReport, Mode};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
    pub color: bool,
    pub quiet: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty: false,
            color: true,
            quiet: false,
        }
    }
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Disable ANSI colors
    pub fn plain(mut self) -> Self {
        self.color = false;
        self
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string; `None` when nothing should be printed
    pub fn render(&self, report: &FormatReport) -> Option<String> {
        match self.config.format {
            OutputFormat::Text if self.config.quiet => None,
            OutputFormat::Text => Some(self.render_text(report)),
            OutputFormat::Json | OutputFormat::Jsonl => Some(self.render_json(report)),
        }
    }

    /// Render the report and print it to stdout
    pub fn print(&self, report: &FormatReport) {
        if let Some(output) = self.render(report) {
            println!("{}", output);
        }
    }

    /// Render as JSON (one line unless pretty)
    fn render_json(&self, report: &FormatReport) -> String {
        let rendered = if self.config.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// Render as two human-readable status lines
    fn render_text(&self, report: &FormatReport) -> String {
        let (status, target) = match report.mode {
            Mode::Format => (
                "Done:",
                format!(
                    "{} → {}",
                    report.input,
                    report.output.as_deref().unwrap_or(&report.input)
                ),
            ),
            Mode::Check if report.changed => ("Would reformat:", report.input.clone()),
            Mode::Check => ("Already formatted:", report.input.clone()),
        };

        let status = if !self.config.color {
            status.to_string()
        } else if report.mode == Mode::Check && report.changed {
            status.yellow().bold().to_string()
        } else {
            status.green().bold().to_string()
        };

        let verb = match report.mode {
            Mode::Format => "written",
            Mode::Check => "checked",
        };
        let count = format!("{} {}", line_count(report.stats.non_blank), verb);

        format!("{} {}\n{}", status, target, count)
    }
}

fn line_count(n: usize) -> String {
    if n == 1 {
        "1 line".to_string()
    } else {
        format!("{} lines", n)
    }
}
