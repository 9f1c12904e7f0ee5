//! # datadebunk
//!
//! Command-line interface for the baseline page generator.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use baseline_api::DatasetKind;
use clap::{Parser, Subcommand};
use report::{analyze_dataset, DatasetConfig, ReportBuilder, ReportConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "datadebunk")]
#[command(about = "Put the latest change of a time series in historical context", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full page from every configured dataset
    Page {
        /// TOML configuration file (defaults to the built-in datasets)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output HTML file (overrides the configured output)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render one dataset as a standalone HTML page
    Preview {
        /// Dataset kind (temperature, house-price, crime)
        kind: DatasetKind,

        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,

        /// Output HTML file (default: <kind>.html)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print summary statistics, trend and verdict as JSON
    Verdict {
        /// Dataset kind (temperature, house-price, crime)
        kind: DatasetKind,

        /// Input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn run_page(config: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let mut config = match config {
        Some(path) => ReportConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    if let Some(output) = output {
        config.output = output;
    }

    let report = ReportBuilder::new().build(&config);
    if report.failed_count() > 0 {
        warn!(
            failed = report.failed_count(),
            "some charts could not be generated"
        );
    }

    report
        .write_to(&config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    info!(path = %config.output.display(), "page written");
    println!("Page written to {}", config.output.display());
    Ok(())
}

fn run_preview(kind: DatasetKind, input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let dataset = DatasetConfig {
        path: input,
        ..DatasetConfig::preset(kind)
    };
    let page = ReportBuilder::new()
        .render_preview(&dataset)
        .with_context(|| format!("Failed to build {} chart", kind))?;

    let output = output.unwrap_or_else(|| PathBuf::from(format!("{}.html", kind)));
    fs::write(&output, page).with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Preview written to {}", output.display());
    Ok(())
}

fn run_verdict(kind: DatasetKind, input: PathBuf) -> Result<()> {
    let stdout = io::stdout();
    write_verdict(kind, input, &mut stdout.lock())
}

/// Writes the verdict JSON, and nothing else, to `out`.
fn write_verdict<W: Write>(kind: DatasetKind, input: PathBuf, out: &mut W) -> Result<()> {
    let dataset = DatasetConfig::new(kind, input);
    let output = analyze_dataset(&dataset)
        .with_context(|| format!("Failed to analyze {}", dataset.path.display()))?;

    let json = serde_json::json!({
        "dataset": kind,
        "stats": output.stats,
        "trend": output.trend,
        "verdict": output.verdict,
        "sentence": report::verdict_sentence(&output.verdict),
    });
    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "datadebunk=info,report=info,dataset=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Page { config, output } => run_page(config, output),
        Commands::Preview {
            kind,
            input,
            output,
        } => run_preview(kind, input, output),
        Commands::Verdict { kind, input } => run_verdict(kind, input),
    }
}
