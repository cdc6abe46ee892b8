//! IVPF-WISP ranking CLI
//!
//! Reads a decision workbook, ranks its alternatives, and prints the result
//! with a one-line commentary on the winner.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ivpf_wisp::adapters::{WorkbookLayout, YamlWorkbookReader};
use ivpf_wisp::application::{RankAlternativesCommand, RankAlternativesHandler, RankingReport};
use ivpf_wisp::config::{AppConfig, LoggingConfig};
use ivpf_wisp::domain::analysis::ValidationMode;

/// Output format for the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Command-line arguments for ivpf-wisp
#[derive(Parser, Debug)]
#[command(name = "ivpf-wisp")]
#[command(about = "Rank commuting alternatives using interval-valued Pythagorean fuzzy WISP")]
#[command(version)]
struct Args {
    /// Workbook file (YAML or JSON) with the decision matrix and weights sheets
    workbook: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", env = "IVPF_WISP_FORMAT")]
    format: OutputFormat,

    /// Score judgments that violate the fuzzy constraints instead of failing
    #[arg(long, env = "IVPF_WISP_PERMISSIVE")]
    permissive: bool,

    /// Override the decision matrix sheet name
    #[arg(long)]
    matrix_sheet: Option<String>,

    /// Override the weights sheet name
    #[arg(long)]
    weights_sheet: Option<String>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if args.permissive {
        config.ranking.validation = ValidationMode::Permissive;
    }
    if let Some(sheet) = args.matrix_sheet {
        config.workbook.matrix_sheet = sheet;
    }
    if let Some(sheet) = args.weights_sheet {
        config.workbook.weights_sheet = sheet;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);
    info!(
        workbook = %args.workbook.display(),
        validation = ?config.ranking.validation,
        "Starting IVPF-WISP ranking"
    );

    let reader = Arc::new(YamlWorkbookReader::new(WorkbookLayout::from(&config.workbook)));
    let handler = RankAlternativesHandler::new(reader, config.ranking);

    match handler.handle(RankAlternativesCommand {
        workbook_path: args.workbook,
    }) {
        Ok(report) => {
            match args.format {
                OutputFormat::Table => print_table(&report),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?
                ),
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            error!(error = %err, "Ranking failed");
            eprintln!("{}", err.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            logging
                .json
                .then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!logging.json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
        .init();
}

fn print_table(report: &RankingReport) {
    let width = column_width(
        "Alternative",
        report.ranking.iter().map(|entry| entry.alternative.as_str()),
    );

    println!("{:>4}  {:<width$}  {:>10}", "Rank", "Alternative", "Score", width = width);
    for entry in report.ranking.iter() {
        println!(
            "{:>4}  {:<width$}  {:>10.6}",
            entry.rank,
            entry.alternative.as_str(),
            entry.score,
            width = width
        );
    }

    if let Some(winner) = &report.winner {
        println!();
        println!("{}", winner.commentary);
    }
}

/// Display width of a column in characters; `{:<width$}` pads by characters too.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .max()
        .unwrap_or(0)
        .max(header.chars().count())
}
