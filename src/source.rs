//! Image source resolution
//!
//! An input location is either a remote URL or a local path, with a single
//! capability: fetch and decode the image. The `http` prefix check lives
//! here and nowhere else.

use crate::error::{CutlineError, Result};
use image::DynamicImage;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Where the input image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Fetched over HTTP(S) with a single GET, no retries
    Remote(String),
    /// Decoded from the local filesystem
    Local(PathBuf),
}

impl ImageSource {
    /// Classify a location string as remote or local
    ///
    /// Anything starting with `http` (covers `http://` and `https://`) is
    /// remote; everything else is treated as a filesystem path.
    #[must_use]
    pub fn from_location(location: &str) -> Self {
        if location.starts_with("http") {
            Self::Remote(location.to_string())
        } else {
            Self::Local(PathBuf::from(location))
        }
    }

    /// Fetch and decode the image
    ///
    /// # Errors
    /// - Non-success HTTP status ([`CutlineError::Retrieval`] with the code)
    /// - Transport failures ([`CutlineError::Network`])
    /// - Missing local file or undecodable bytes
    pub async fn fetch(&self, client: &Client) -> Result<DynamicImage> {
        match self {
            Self::Remote(url) => fetch_remote(client, url).await,
            Self::Local(path) => load_local(path),
        }
    }
}

/// Download an image over HTTP and decode the body
async fn fetch_remote(client: &Client, url: &str) -> Result<DynamicImage> {
    log::debug!("fetching source image from {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| CutlineError::network_error(format!("failed to request {url}"), e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CutlineError::retrieval_status(status));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| CutlineError::network_error("failed to read response body", e))?;

    image::load_from_memory(&bytes)
        .map_err(|e| CutlineError::retrieval(format!("failed to decode downloaded image: {e}")))
}

/// Decode an image from disk
///
/// Tries extension-based format detection first, then falls back to
/// content-based detection for files with missing or misleading
/// extensions.
fn load_local(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(CutlineError::retrieval(format!(
            "file does not exist: {}",
            path.display()
        )));
    }

    match image::open(path) {
        Ok(img) => Ok(img),
        Err(e) => {
            log::debug!(
                "extension-based loading failed for {}: {}. Attempting content-based detection.",
                path.display(),
                e
            );

            let data = std::fs::read(path)
                .map_err(|io_err| CutlineError::file_io_error("read image data", path, io_err))?;

            image::load_from_memory(&data).map_err(|content_err| {
                CutlineError::retrieval(format!(
                    "failed to decode {} with both extension-based ({e}) and content-based ({content_err}) detection",
                    path.display()
                ))
            })
        },
    }
}
