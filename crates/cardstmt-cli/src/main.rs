//! CLI application for credit-card statement field extraction.

mod output;
mod pdf;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use console::style;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use cardstmt_core::{CardStatementParser, StatementParser};

/// Extract structured fields from credit-card statement PDFs
#[derive(Parser)]
#[command(name = "cardstmt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Statement file (PDF, or already-extracted plain text)
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON record
    Json,
    /// Field table
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if !cli.input.exists() {
        anyhow::bail!("input file not found: {}", cli.input.display());
    }

    let extension = cli
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let parser = CardStatementParser::new();
    let outcome = match extension.as_str() {
        "pdf" => {
            let pages = pdf::extract_pages(&cli.input)?;
            parser.parse_pages(&pages)?
        }
        _ => {
            let text = fs::read_to_string(&cli.input)
                .with_context(|| format!("failed to read {}", cli.input.display()))?;
            parser.parse(&text)?
        }
    };

    debug!("parsed in {}ms", outcome.processing_time_ms);

    for warning in &outcome.warnings {
        eprintln!("{} {}", style("warning:").yellow(), warning);
    }

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string_pretty(&outcome.data)?,
        OutputFormat::Text => output::field_table(&outcome),
    };

    if let Some(path) = &cli.output {
        fs::write(path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", rendered);
    }

    Ok(())
}
