use std::process::ExitCode;

use aq_stations::domain::Station;
use aq_stations::fetch::StationFetcher;
use aq_stations::gios::{
    ClientConfig, DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_PAGES, DEFAULT_MAX_RETRIES,
    DEFAULT_PAGE_SIZE,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "aq-stations")]
#[command(about = "Fetch air-quality monitoring stations and their installations")]
struct Cli {
    /// Print every station and its installations once fetched
    #[arg(long)]
    echo: bool,

    /// Print the full dataset as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Records per page (the API allows at most 500)
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..=500))]
    page_size: u32,

    /// Attempts per request while rate limited
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    max_retries: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT)]
    max_concurrent: usize,

    /// Largest page count accepted from one listing
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: u32,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "aq_stations=debug,info"
    } else {
        "aq_stations=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ClientConfig::new()
        .with_base_url(&cli.base_url)
        .with_page_size(cli.page_size)
        .with_max_retries(cli.max_retries)
        .with_max_concurrent(cli.max_concurrent)
        .with_max_pages(cli.max_pages);

    let fetcher = match StationFetcher::from_config(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!(error = %e, "failed to create API client");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stations = match fetcher.get_all_stations(cli.echo).await {
        Ok(stations) => stations,
        Err(e) => {
            tracing::error!(error = %e, "station fetch failed");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&stations) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize stations: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let installations: usize = stations.iter().map(Station::installation_count).sum();
    println!(
        "Fetched {} stations with {} installations",
        stations.len(),
        installations
    );

    ExitCode::SUCCESS
}
