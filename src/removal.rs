//! Background removal via a remote segmentation service
//!
//! The service is an opaque collaborator: the image goes up as a multipart
//! file upload, the background-removed result comes back as raw image
//! bytes. No segmentation happens locally.

use crate::error::{CutlineError, Result};
use crate::normalize;
use image::RgbaImage;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::io::Cursor;

/// Multipart field name for the uploaded image
const IMAGE_FIELD: &str = "image_file";

/// Header carrying the service credential
const API_KEY_HEADER: &str = "X-Api-Key";

/// Client for the remote background-removal endpoint
#[derive(Debug, Clone)]
pub struct BackgroundRemover {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl BackgroundRemover {
    /// Create a remover with its own HTTP client
    ///
    /// # Errors
    /// - Failed to create the HTTP client
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| CutlineError::network_error("failed to create HTTP client", e))?;

        Ok(Self::with_client(client, endpoint, api_key))
    }

    /// Create a remover sharing an existing HTTP client
    pub fn with_client(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Remove the background from a normalized image
    ///
    /// Encodes the buffer as PNG in memory, submits it with the `size`
    /// mode fixed to `auto`, and decodes the response body as the result
    /// image. Success is exactly `200 OK`.
    ///
    /// # Errors
    /// - Any non-OK status ([`CutlineError::BackgroundRemoval`] carrying
    ///   status code and body text)
    /// - Transport failures ([`CutlineError::Network`])
    /// - Undecodable response body
    pub async fn remove(&self, image: &RgbaImage) -> Result<RgbaImage> {
        let png = encode_png(image)?;
        log::debug!(
            "submitting {}x{} image ({} bytes) for background removal",
            image.width(),
            image.height(),
            png.len()
        );

        let part = Part::bytes(png)
            .file_name("image.png")
            .mime_str("image/png")
            .map_err(|e| CutlineError::network_error("failed to build multipart body", e))?;
        let form = Form::new().part(IMAGE_FIELD, part).text("size", "auto");

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(API_KEY_HEADER, self.api_key.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| CutlineError::network_error("background-removal request failed", e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(CutlineError::background_removal(status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CutlineError::network_error("failed to read removal response", e))?;

        let decoded = image::load_from_memory(&bytes).map_err(|e| {
            CutlineError::processing(format!("failed to decode background-removed image: {e}"))
        })?;

        Ok(normalize::to_rgba(decoded))
    }
}

/// Encode an RGBA buffer as PNG bytes in memory
pub(crate) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
        .map_err(|e| CutlineError::processing(format!("failed to encode PNG: {e}")))?;
    Ok(buffer)
}
