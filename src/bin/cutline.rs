//! Cutline CLI Tool
//!
//! Command-line interface for turning images into sticker-style cutouts:
//! background removal via the remove.bg API plus a soft white outline.

#[cfg(feature = "cli")]
use cutline::cli;

#[cfg(feature = "cli")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::main().await
}

#[cfg(not(feature = "cli"))]
fn main() {
    panic!("CLI feature not enabled. Please rebuild with --features cli");
}
