//! Faction scraper CLI - Write one JSON file per parliamentary faction
//!
//! ```bash
//! faction-scraper                              # Scrape into ./factions_details
//! faction-scraper --output-dir data/factions   # Custom output directory
//! faction-scraper --timeout 60 --retries 5     # Slower upstream
//! RUST_LOG=faction_scraper=debug faction-scraper
//! ```
//!
//! Exits with status 1 when the API reports no faction or any error occurs.

use std::error::Error as _;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use faction_scraper::config::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS,
};
use faction_scraper::{logs, scrape_factions, ClientConfig, ScrapeConfig, ScrapeError};
use tracing::error;

#[derive(Parser)]
#[command(name = "faction-scraper")]
#[command(about = "Scrape Swiss parliamentary factions into JSON files", long_about = None)]
struct Cli {
    /// Directory the faction files are written to
    #[arg(short, long, env = "FACTIONS_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// API base URL
    #[arg(long, env = "PARLIAMENT_API_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "PARLIAMENT_API_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Retries per request on connection failure
    #[arg(long, env = "PARLIAMENT_API_RETRIES", default_value_t = DEFAULT_MAX_RETRIES)]
    retries: u32,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> ScrapeConfig {
        ScrapeConfig {
            output_dir: self.output_dir,
            client: ClientConfig {
                base_url: self.base_url,
                timeout: Duration::from_secs(self.timeout),
                max_retries: self.retries,
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logs::init(cli.verbose);

    if let Err(e) = scrape_factions(&cli.into_config()).await {
        report(&e);
        std::process::exit(1);
    }
}

/// Log the error with its whole cause chain.
fn report(err: &ScrapeError) {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }

    error!(error = %err, causes = ?causes, "Scraping failed");
}
