mod engine;
mod export;
mod ingest;
mod models;
mod session;
mod stats;
mod types;

use std::fs::{create_dir_all, File};
use std::io::{stderr, stdout, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::PricingConfig;
use crate::export::{import_file_name, report_file_name, write_import, write_report};
use crate::ingest::{ColumnMapping, CsvOptions};
use crate::models::{Dataset, PricingMethod};
use crate::session::Session;
use crate::stats::Stats;

/// Recalculates catalog prices from cost for a target margin or markup.
#[derive(Debug, Parser)]
#[command(name = "catalog-repricer", version)]
struct Cli {
    /// Product catalog CSV with at least `Variant SKU` and `Variant Price` columns
    input: PathBuf,

    /// How the target percentage is applied
    #[arg(long, short = 'm', value_enum, default_value_t = PricingMethod::Margin)]
    method: PricingMethod,

    /// Target margin or markup, in percent
    #[arg(long, short = 't', default_value = "40", allow_hyphen_values = true)]
    target: Decimal,

    /// Directory the report and import files are written to
    #[arg(long, short = 'o', default_value = ".")]
    out_dir: PathBuf,

    /// Field delimiter of the input file
    #[arg(long, short = 'd', default_value_t = ',')]
    delimiter: char,

    /// One of: error, warn, info, debug, trace
    #[arg(long, default_value = "error")]
    log_level: String
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let options = CsvOptions {
        delimiter: parse_delimiter(cli.delimiter)?,
        ..CsvOptions::default()
    };
    let config = PricingConfig::new(cli.method, cli.target)?;
    let mut session = Session::new(options, ColumnMapping::default());

    let file = File::open(&cli.input)
        .with_context(|| format!("Could not open input file [{}]", cli.input.display()))?;

    session.load(&source_label(&cli.input), BufReader::new(file))?;

    let timer = Instant::now();
    session.calculate(config)?;
    let duration = timer.elapsed();

    info!("Priced rows in: {duration:?}");
    debug!("Session stage: {:?}", session.stage());

    let dataset = session.dataset().context("Dataset missing after calculation")?;

    write_exports(dataset, session.columns(), &cli.out_dir, Local::now().date_naive())?;

    if let Some(stats) = session.summary() {
        write_summary_to_stdout(&stats)?;
    }

    session.reset();
    debug!("Session stage: {:?}", session.stage());

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the summary, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn parse_delimiter(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("Delimiter '{delimiter}' must be a single ASCII character");
    }

    Ok(delimiter as u8)
}

fn source_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "catalog".to_string())
}

fn write_exports(dataset: &Dataset, columns: &ColumnMapping, out_dir: &Path, date: NaiveDate) -> Result<()> {
    create_dir_all(out_dir)
        .with_context(|| format!("Could not create output directory [{}]", out_dir.display()))?;

    let report_path = out_dir.join(report_file_name(&dataset.source_label, date));
    let report_file = File::create(&report_path)
        .with_context(|| format!("Could not create [{}]", report_path.display()))?;

    write_report(dataset, BufWriter::new(report_file))?;
    info!("Report written to [{}]", report_path.display());

    let import_path = out_dir.join(import_file_name(date));
    let import_file = File::create(&import_path)
        .with_context(|| format!("Could not create [{}]", import_path.display()))?;

    write_import(dataset, columns, BufWriter::new(import_file))?;
    info!("Import file written to [{}]", import_path.display());

    Ok(())
}

fn write_summary_to_stdout(stats: &Stats) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    writeln!(output, "{stats}")?;
    output.flush()?;

    Ok(())
}
