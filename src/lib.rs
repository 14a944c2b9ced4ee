#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # cutline
//!
//! Turn any image into a sticker-style cutout: fetch it from a URL or a
//! local path, remove the background through the remove.bg API, composite
//! a soft white outline around the foreground silhouette, and write the
//! result as a PNG under `processed_images/`.
//!
//! The pipeline is strictly linear and keeps every intermediate in
//! memory:
//!
//! source → normalize (RGBA) → background removal → outline → PNG
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cutline::{process_image, ProcessorConfig};
//!
//! # async fn example() -> cutline::Result<()> {
//! let config = ProcessorConfig::builder()
//!     .api_key(std::env::var("REMOVE_BG_API_KEY").unwrap_or_default())
//!     .build()?;
//!
//! // Writes processed_images/cat.png (the directory must already exist).
//! let path = process_image("https://example.com/cat.jpg", "cat", config).await?;
//! println!("saved {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Library vs CLI Usage
//!
//! All processing functionality is available by default; enable the `cli`
//! feature for the command-line interface:
//!
//! ```toml
//! [dependencies]
//! cutline = { version = "0.1", default-features = false }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod normalize;
pub mod outline;
pub mod output;
pub mod processor;
pub mod removal;
pub mod source;

// Public API exports
pub use config::{
    OutlineConfig, OutlineConfigBuilder, ProcessorConfig, ProcessorConfigBuilder, DEFAULT_ENDPOINT,
};
pub use error::{CutlineError, Result};
pub use outline::apply_white_outline;
pub use output::{resolve_output_path, write_png, OUTPUT_DIR};
pub use processor::OutlineProcessor;
pub use removal::BackgroundRemover;
pub use source::ImageSource;

/// Process one image location and write the outlined composite
///
/// Convenience wrapper over [`OutlineProcessor`]: runs the full pipeline
/// for `location` and writes the result to
/// `processed_images/<name>.png` (the `.png` suffix is appended when
/// missing, and any path components in `name` are stripped). The output
/// directory must already exist.
///
/// Returns the path the composite was written to.
///
/// # Errors
/// - Invalid configuration
/// - Source retrieval, background removal, or output-write failures
pub async fn process_image(
    location: &str,
    output_name: &str,
    config: ProcessorConfig,
) -> Result<std::path::PathBuf> {
    let processor = OutlineProcessor::new(config)?;
    let composite = processor.process(location).await?;

    let path = resolve_output_path(output_name);
    write_png(&composite, &path)?;
    Ok(path)
}
