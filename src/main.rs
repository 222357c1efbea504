use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use storefront::core::config::{self, CliOverrides, StorefrontConfig};
use storefront::tui;

#[derive(Parser)]
#[command(name = "storefront", about = "Browse a remote product catalog")]
struct Args {
    /// Catalog endpoint to fetch
    #[arg(short, long)]
    url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(short, long)]
    timeout_ms: Option<u64>,

    /// Where to write the log file
    #[arg(long, default_value = "storefront.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        StorefrontConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            url: args.url.as_deref(),
            timeout_ms: args.timeout_ms,
        },
    );

    log::info!(
        "Storefront starting up: url={} timeout={}ms",
        resolved.catalog_url,
        resolved.timeout.as_millis()
    );

    tui::run(resolved)
}
