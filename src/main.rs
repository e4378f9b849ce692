//! parafmt - Reformat annotated text into clean paragraphs
//!
//! parafmt provides:
//! - Line-number marker stripping (`12→text` becomes `text`)
//! - Blank-line run collapsing into single paragraph breaks
//! - A check mode for CI gating
//! - Unified report output (text/json/jsonl)

use clap::Parser;

mod cli;
mod core;
mod formatter;

fn main() {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbose, cli.quiet);

    let code = match cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            cli::EXIT_ERROR
        }
    };
    std::process::exit(code);
}
