use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use cnab_engine::engine::IngestEngine;
use cnab_engine::models::TypeCatalog;
use cnab_engine::storage::{MemoryStorage, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    //NOTE: If I was making a much more sophisticated CLI application, I would have used the clap crate
    //      to handle the CLI parsing and execution.
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cnab-engine [input].cnab [log_level:optional] > [summary].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let catalog = Arc::new(TypeCatalog::standard());
    let storage = Arc::new(MemoryStorage::new(catalog.clone()));
    let engine = IngestEngine::new(storage.clone(), catalog);

    let timer = Instant::now();
    let file_id = engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Ingested file upload [{file_id}] in: {duration:?}");

    write_summaries_to_stdout(storage.as_ref())?;

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
    //NOTE: Because we are doing stdout redirection, we will need to utilize stderr to display logging
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_summaries_to_stdout<S: Storage>(storage: &S) -> Result<()> {
    let mut writer = csv::Writer::from_writer(BufWriter::new(stdout().lock()));

    for summary in storage.summarize() {
        writer.serialize(summary)?;
    }

    writer.flush()?;

    Ok(())
}
