//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::file_reader::EncodingStrategy;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::formatter::marker::DEFAULT_MARKER;

/// parafmt - strip line-number markers and collapse blank lines into paragraphs.
#[derive(Parser, Debug)]
#[command(name = "parafmt")]
#[command(
    author,
    version,
    about,
    long_about = r#"parafmt reformats a text file in a single pass:

1. Lines containing the marker (default "→") keep only the text after it,
   so "12→Hello." becomes "Hello.".
2. Each run of blank lines collapses into exactly one blank line.
3. Every non-blank line loses its trailing whitespace.

Every command prints a report in the selected format (default: text).

Exit status: 0 on success, 1 when `check` finds a file that needs formatting,
2 on any error.

Examples:
    parafmt format notes.txt
    parafmt format notes.txt notes-clean.txt
    parafmt check notes-pretty.txt
    parafmt --format json format notes.txt
"#
)]
pub struct Cli {
    /// Report format (text/json/jsonl).
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the output format for the report.\n\n\
Supported values:\n\
- text (default): two human-readable status lines\n\
- json\n\
- jsonl\n\n\
Unknown values fall back to text."
    )]
    pub format: String,

    /// Disable colored output (when applicable).
    #[arg(
        long,
        global = true,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(
        short,
        long,
        global = true,
        long_help = "Suppress the text status lines and all diagnostics below error level.\n\
JSON reports are still printed when --format json/jsonl is selected."
    )]
    pub quiet: bool,

    /// Verbose mode (repeat for more diagnostics).
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        long_help = "Increase diagnostic output on stderr.\n\n\
-v shows info, -vv shows debug, -vvv shows trace."
    )]
    pub verbose: u8,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(
        long,
        global = true,
        long_help = "Pretty-print JSON and JSONL reports with indentation. Has no effect on text."
    )]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reformat INPUT and write the result to OUTPUT.
    #[command(
        long_about = "Read INPUT, strip line-number markers, collapse blank-line runs and\n\
write the result to OUTPUT, overwriting it.\n\n\
If OUTPUT is omitted, the result is written next to INPUT as <stem>-pretty.<ext>.\n\
OUTPUT may equal INPUT; the input is fully read before the output is opened.\n\n\
Examples:\n\
  parafmt format example.txt\n\
  parafmt format example.txt out.txt --marker '|'\n"
    )]
    Format {
        /// Input text file.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output text file (defaults to <stem>-pretty.<ext>).
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        opts: PassOptions,
    },

    /// Report whether INPUT is already formatted, without writing anything.
    #[command(
        long_about = "Run the formatting pass on INPUT in memory and compare the result with\n\
the input.\n\n\
Exit status:\n\
  0  already formatted\n\
  1  formatting would change the file\n\
  2  error (unreadable or undecodable input, invalid marker)\n\n\
Example:\n\
  parafmt check example-pretty.txt\n"
    )]
    Check {
        /// Input text file.
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[command(flatten)]
        opts: PassOptions,
    },
}

/// Options shared by every command that runs the formatting pass
#[derive(clap::Args, Debug, Clone)]
pub struct PassOptions {
    /// Marker separating a line-number prefix from content.
    #[arg(
        long,
        env = "PARAFMT_MARKER",
        default_value = DEFAULT_MARKER,
        value_name = "MARKER",
        long_help = "Marker separating a line-number prefix from the line content.\n\n\
Any line containing the marker keeps only the text after its first occurrence.\n\
Defaults to the arrow character (U+2192)."
    )]
    pub marker: String,

    /// Decode invalid UTF-8 lossily instead of failing.
    #[arg(
        long,
        long_help = "Replace invalid UTF-8 sequences with U+FFFD instead of failing.\n\n\
A LOSSY_CONVERSION warning is recorded in the report."
    )]
    pub lossy: bool,
}

impl PassOptions {
    fn encoding(&self) -> EncodingStrategy {
        if self.lossy {
            EncodingStrategy::Lossy
        } else {
            EncodingStrategy::Strict
        }
    }
}

/// Install the stderr tracing subscriber for the requested verbosity
pub fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Exit status for a `check` that found changes
pub const EXIT_NEEDS_FORMAT: i32 = 1;

/// Exit status for any error
pub const EXIT_ERROR: i32 = 2;

/// Run the CLI with parsed arguments, returning the process exit code
pub fn run(cli: Cli) -> Result<i32> {
    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let mut render_config = RenderConfig::new(format);
    render_config.pretty = cli.pretty;
    render_config.quiet = cli.quiet;

    if cli.no_color {
        render_config = render_config.plain();
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Format {
            input,
            output,
            opts,
        } => {
            crate::formatter::paragraph::run_format(
                &input,
                output.as_deref(),
                &opts.marker,
                opts.encoding(),
                render_config,
            )?;
            Ok(0)
        }

        Commands::Check { input, opts } => {
            let changed = crate::formatter::paragraph::run_check(
                &input,
                &opts.marker,
                opts.encoding(),
                render_config,
            )?;
            Ok(if changed { EXIT_NEEDS_FORMAT } else { 0 })
        }
    }
}
