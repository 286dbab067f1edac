use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use volbyscraper::{config::Args, pipeline, table::write_csv_file, Config};

const EXIT_MESSAGE: &str = "Exiting program!...";

#[tokio::main]
async fn main() -> ExitCode {
    // ─── 1) init logging (stderr; stdout is for progress) ────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) validate arguments before touching the network ──────────
    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}\n{}", e, EXIT_MESSAGE);
            return ExitCode::from(2);
        }
    };
    println!("Fetching data from: {}", config.listing_url);
    info!(
        endpoint = config.endpoint.base(),
        concurrency = config.concurrency,
        "startup"
    );

    // ─── 3) scrape; any failure ends the run with no output ──────────
    let table = match pipeline::scrape_with_config(&config)
        .await
        .with_context(|| format!("scraping {}", config.listing_url))
    {
        Ok(table) => table,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    // ─── 4) write CSV; a write failure is reported, not fatal ────────
    println!("Loading...");
    match write_csv_file(&table, &config.csv_file) {
        Ok(()) => {
            info!(rows = table.row_count(), path = %config.csv_file.display(), "wrote CSV");
            println!("Data was saved into file: {}", config.csv_file.display());
        }
        Err(e) => {
            error!("{:#}", e);
            println!("Error saving data to CSV: {:#}", e);
        }
    }

    ExitCode::SUCCESS
}
