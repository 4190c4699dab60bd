mod config;
mod engine;
mod ingest;
mod models;
mod report;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::config::Settings;
use crate::engine::TransactionQueries;
use crate::ingest::{JsonFileSource, TransactionSource};
use crate::report::write_report;

const DEFAULT_CONFIG_PATH: &str = "application.properties";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|arg| arg == "-h" || arg == "--help") {
        eprintln!("Usage: transaction-insights [config_path:optional] [log_level:optional] > [report].txt");
        eprintln!("Default config path: {DEFAULT_CONFIG_PATH}");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        return Ok(());
    }

    let config_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CONFIG_PATH);
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();

    let settings = Settings::load(config_path)?;
    let source = JsonFileSource::new(settings.json_file_path()?);
    let queries = TransactionQueries::new(source.load()?)
        .with_duplicate_policy(settings.duplicate_policy()?);

    if queries.is_empty() {
        warn!("No transactions found, every query answers with an empty result");
    }

    let mut output = BufWriter::new(stdout().lock());
    write_report(&queries, &mut output)?;

    info!("Answered queries over [{}] transactions in: {:?}", queries.len(), timer.elapsed());

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
    // stdout carries the report, logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
