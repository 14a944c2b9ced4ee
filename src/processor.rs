//! Unified processing pipeline
//!
//! Drives the stages strictly in sequence: resolve the source, normalize
//! to RGBA, remove the background remotely, synthesize the outline. Every
//! intermediate stays in memory; only the final composite ever touches
//! disk (via [`crate::output`]).

use crate::config::ProcessorConfig;
use crate::error::{CutlineError, Result};
use crate::normalize;
use crate::outline;
use crate::removal::BackgroundRemover;
use crate::source::ImageSource;
use image::RgbaImage;
use reqwest::Client;

/// Pipeline orchestrator for a single processing run
///
/// Holds the run configuration and a single HTTP client shared by the
/// source fetch and the background-removal call. No state survives
/// between runs.
#[derive(Debug, Clone)]
pub struct OutlineProcessor {
    config: ProcessorConfig,
    client: Client,
    remover: BackgroundRemover,
}

impl OutlineProcessor {
    /// Create a processor from a validated configuration
    ///
    /// # Errors
    /// - Invalid configuration parameters
    /// - Failed to create the HTTP client
    pub fn new(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .build()
            .map_err(|e| CutlineError::network_error("failed to create HTTP client", e))?;
        let remover = BackgroundRemover::with_client(
            client.clone(),
            config.endpoint.as_str(),
            config.api_key.as_str(),
        );

        Ok(Self {
            config,
            client,
            remover,
        })
    }

    /// Run the full pipeline for one location
    ///
    /// # Errors
    /// - Source retrieval or decode failures
    /// - Non-success status from the background-removal service
    /// - Invalid outline parameters
    pub async fn process(&self, location: &str) -> Result<RgbaImage> {
        let source = ImageSource::from_location(location);
        tracing::info!(?source, "resolving image source");
        let decoded = source.fetch(&self.client).await?;

        let normalized = normalize::to_rgba(decoded);
        tracing::debug!(
            width = normalized.width(),
            height = normalized.height(),
            "normalized input to RGBA"
        );

        let cutout = self.remover.remove(&normalized).await?;
        tracing::debug!("background removed, synthesizing outline");

        outline::apply_white_outline(&cutout, &self.config.outline)
    }

    /// The configuration this processor runs with
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}
