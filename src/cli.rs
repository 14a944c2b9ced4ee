//! Command-line interface for the cutline pipeline
//!
//! Loads the service credential from the environment (after a best-effort
//! `.env` read), ensures the output directory exists, and runs one
//! processing pass. All failures are fatal and exit non-zero with a
//! human-readable message.

use crate::{config::ProcessorConfig, output, processor::OutlineProcessor};
use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Environment variable holding the remove.bg credential
const API_KEY_ENV: &str = "REMOVE_BG_API_KEY";

/// Sticker-style cutout tool: remove the background and outline the result
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "cutline")]
pub struct Cli {
    /// Image URL or local file path
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Output name (lands in processed_images/, `.png` appended if missing)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Outline thickness in pixels
    #[arg(long, default_value_t = 10)]
    pub outline_width: u32,

    /// Gaussian blur kernel size in pixels (odd, positive)
    #[arg(long, default_value_t = 5)]
    pub blur_radius: u32,

    /// Enable verbose logging (-v: INFO, -vv: DEBUG, -vvv: TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// CLI entry point, called from the binary shim
pub async fn main() -> Result<()> {
    // Best-effort .env load; a missing file is fine.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(cli.verbose).context("Failed to initialize tracing")?;

    let api_key = std::env::var(API_KEY_ENV).unwrap_or_default();
    if api_key.is_empty() {
        // A missing key surfaces as an authentication failure from the
        // service, not as a config error.
        warn!(
            "{} is not set; the background-removal call will be rejected",
            API_KEY_ENV
        );
    }

    let config = ProcessorConfig::builder()
        .api_key(api_key)
        .outline_width(cli.outline_width)
        .blur_radius(cli.blur_radius)
        .build()
        .context("Invalid outline parameters")?;

    std::fs::create_dir_all(output::OUTPUT_DIR)
        .with_context(|| format!("Failed to create output directory '{}'", output::OUTPUT_DIR))?;

    let processor = OutlineProcessor::new(config).context("Failed to create processor")?;

    info!("Processing {}", cli.location);
    let start = Instant::now();

    let spinner = create_spinner("Removing background and outlining...");
    let result = processor.process(&cli.location).await;
    spinner.finish_and_clear();
    let composite = result.context("Processing failed")?;

    let path = output::resolve_output_path(&cli.name);
    output::write_png(&composite, &path).context("Failed to write output image")?;

    debug!("Completed in {:.2}s", start.elapsed().as_secs_f64());
    println!("Image saved as {}", path.display());

    Ok(())
}

/// Initialize tracing based on verbosity level
fn init_tracing(verbose_count: u8) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match verbose_count {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cutline={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))?;

    debug!(log_level = %level, "Tracing initialized");
    Ok(())
}

/// Create a spinner for the long-running network stages
fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}
