#![forbid(unsafe_code)]

//! Argument parsing and command dispatch.

use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{CliError, Result};
use crate::examples::{self, print_examples};

#[derive(Debug, Parser)]
#[command(
    name = "unispect",
    about = "Grapheme-accurate Unicode text analysis",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze text and print a report, summary, or the JSON result.
    Analyze(AnalyzeArgs),

    /// List the built-in example texts.
    Examples,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Literal text to analyze. Reads stdin when neither this nor
    /// --file/--example is given.
    pub text: Option<String>,

    /// Read the text to analyze from a file.
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Analyze a built-in example (see `unispect examples`).
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub example: Option<String>,

    /// Emit the full analysis result as pretty-printed JSON.
    #[arg(long, conflicts_with = "summary")]
    pub json: bool,

    /// Emit only the one-line summary.
    #[arg(long)]
    pub summary: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Examples => {
            print_examples();
            Ok(())
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let text = resolve_input(&args)?;
    tracing::debug!(bytes = text.len(), "analyzing input");

    let result = unispect::analyze(&text);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if args.summary {
        println!("{}", unispect::analysis_summary(&result));
    } else {
        println!("{}", unispect::export_report(&result));
    }
    Ok(())
}

/// The text to analyze, in source priority order: --example, --file,
/// literal argument, stdin. Input is passed to the engine verbatim; no
/// trailing-newline trimming.
fn resolve_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(name) = &args.example {
        return examples::find(name)
            .map(|e| e.text.to_string())
            .ok_or_else(|| CliError::UnknownExample(name.clone()));
    }
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
            path: path.clone(),
            source,
        });
    }
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(CliError::ReadStdin)?;
    Ok(buffer)
}
