//! Configuration types for the outline pipeline

use serde::{Deserialize, Serialize};

/// Default background-removal endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.remove.bg/v1.0/removebg";

/// Parameters for the white-outline synthesizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Outline thickness in pixels (side of the dilation element)
    pub outline_width: u32,

    /// Gaussian blur kernel size in pixels (must be odd and positive)
    pub blur_radius: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            outline_width: 10,
            blur_radius: 5,
        }
    }
}

impl OutlineConfig {
    /// Create a new configuration builder for fluent API construction
    #[must_use]
    pub fn builder() -> OutlineConfigBuilder {
        OutlineConfigBuilder::default()
    }

    /// Validate all outline parameters
    ///
    /// # Validation Rules
    ///
    /// - `outline_width` must be positive
    /// - `blur_radius` must be odd and positive (the underlying Gaussian
    ///   kernel is defined for odd sizes only)
    ///
    /// # Errors
    /// - Zero outline width
    /// - Even or zero blur radius
    pub fn validate(&self) -> crate::Result<()> {
        if self.outline_width == 0 {
            return Err(crate::error::CutlineError::invalid_config(
                "outline width must be positive",
            ));
        }

        if self.blur_radius == 0 || self.blur_radius % 2 == 0 {
            return Err(crate::error::CutlineError::invalid_config(format!(
                "blur radius must be odd and positive, got {}",
                self.blur_radius
            )));
        }

        Ok(())
    }

    /// Radius of the morphological structuring elements
    ///
    /// Morphology operations are parameterized by radius rather than side
    /// length, so an element of side `outline_width` maps to radius
    /// `outline_width / 2` (minimum 1).
    pub(crate) fn morph_radius(&self) -> u8 {
        (self.outline_width / 2).clamp(1, u8::MAX.into()) as u8
    }

    /// Gaussian sigma equivalent to an odd kernel of size `blur_radius`
    ///
    /// Standard kernel-size-to-sigma mapping:
    /// `sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
    pub(crate) fn blur_sigma(&self) -> f32 {
        0.3 * ((self.blur_radius as f32 - 1.0) * 0.5 - 1.0) + 0.8
    }
}

/// Builder for [`OutlineConfig`]
#[derive(Debug, Default)]
pub struct OutlineConfigBuilder {
    config: OutlineConfig,
}

impl OutlineConfigBuilder {
    /// Set outline thickness in pixels
    #[must_use]
    pub fn outline_width(mut self, width: u32) -> Self {
        self.config.outline_width = width;
        self
    }

    /// Set Gaussian blur kernel size in pixels
    #[must_use]
    pub fn blur_radius(mut self, radius: u32) -> Self {
        self.config.blur_radius = radius;
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    /// - Zero outline width
    /// - Even or zero blur radius
    pub fn build(self) -> crate::Result<OutlineConfig> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration for a full processing run
///
/// The service credential is loaded once per invocation by the caller and
/// passed in explicitly; the library never reads the process environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Background-removal service API key
    ///
    /// An empty key is not rejected here: the service answers with an
    /// authentication failure, which surfaces as a
    /// [`BackgroundRemoval`](crate::CutlineError::BackgroundRemoval) error.
    #[serde(skip)]
    pub api_key: String,

    /// Background-removal service endpoint
    pub endpoint: String,

    /// Outline synthesizer parameters
    pub outline: OutlineConfig,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            outline: OutlineConfig::default(),
        }
    }
}

impl ProcessorConfig {
    /// Create a new configuration builder for fluent API construction
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cutline::ProcessorConfig;
    ///
    /// let config = ProcessorConfig::builder()
    ///     .api_key("secret")
    ///     .outline_width(12)
    ///     .blur_radius(7)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.outline.outline_width, 12);
    /// ```
    #[must_use]
    pub fn builder() -> ProcessorConfigBuilder {
        ProcessorConfigBuilder::default()
    }

    /// Validate all configuration parameters
    ///
    /// # Errors
    /// - Empty endpoint URL
    /// - Invalid outline parameters (see [`OutlineConfig::validate`])
    pub fn validate(&self) -> crate::Result<()> {
        if self.endpoint.is_empty() {
            return Err(crate::error::CutlineError::invalid_config(
                "background-removal endpoint must not be empty",
            ));
        }

        self.outline.validate()
    }
}

/// Builder for [`ProcessorConfig`]
#[derive(Debug, Default)]
pub struct ProcessorConfigBuilder {
    config: ProcessorConfig,
}

impl ProcessorConfigBuilder {
    /// Set the service API key
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Override the background-removal endpoint
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the full outline configuration
    #[must_use]
    pub fn outline(mut self, outline: OutlineConfig) -> Self {
        self.config.outline = outline;
        self
    }

    /// Set outline thickness in pixels (convenience method)
    #[must_use]
    pub fn outline_width(mut self, width: u32) -> Self {
        self.config.outline.outline_width = width;
        self
    }

    /// Set Gaussian blur kernel size in pixels (convenience method)
    #[must_use]
    pub fn blur_radius(mut self, radius: u32) -> Self {
        self.config.outline.blur_radius = radius;
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    /// - Empty endpoint URL
    /// - Invalid outline parameters
    pub fn build(self) -> crate::Result<ProcessorConfig> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_outline_config() {
        let config = OutlineConfig::default();
        assert_eq!(config.outline_width, 10);
        assert_eq!(config.blur_radius, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_outline_config_builder() {
        let config = OutlineConfig::builder()
            .outline_width(20)
            .blur_radius(9)
            .build()
            .unwrap();

        assert_eq!(config.outline_width, 20);
        assert_eq!(config.blur_radius, 9);
    }

    #[test]
    fn test_even_blur_radius_rejected() {
        let result = OutlineConfig::builder().blur_radius(4).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("odd"));
    }

    #[test]
    fn test_zero_blur_radius_rejected() {
        let result = OutlineConfig::builder().blur_radius(0).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_outline_width_rejected() {
        let result = OutlineConfig::builder().outline_width(0).build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("outline width"));
    }

    #[test]
    fn test_morph_radius_is_half_width() {
        let config = OutlineConfig::default();
        assert_eq!(config.morph_radius(), 5);

        let thin = OutlineConfig::builder()
            .outline_width(1)
            .blur_radius(5)
            .build()
            .unwrap();
        assert_eq!(thin.morph_radius(), 1);
    }

    #[test]
    fn test_blur_sigma_for_default_kernel() {
        let config = OutlineConfig::default();
        // ksize 5 -> 0.3 * ((5 - 1) * 0.5 - 1) + 0.8 = 1.1
        assert!((config.blur_sigma() - 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_default_processor_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_processor_builder_chaining() {
        let config = ProcessorConfig::builder()
            .api_key("key")
            .endpoint("https://example.test/removebg")
            .outline_width(14)
            .blur_radius(3)
            .build()
            .unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.endpoint, "https://example.test/removebg");
        assert_eq!(config.outline.outline_width, 14);
        assert_eq!(config.outline.blur_radius, 3);
    }

    #[test]
    fn test_empty_api_key_is_not_rejected() {
        // Absence of the credential surfaces later as an authentication
        // failure from the service, not as a config error.
        let config = ProcessorConfig::builder().build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let result = ProcessorConfig::builder().endpoint("").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_processor_config_serde_skips_api_key() {
        let config = ProcessorConfig::builder()
            .api_key("secret")
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("endpoint"));

        let deserialized: ProcessorConfig = serde_json::from_str(&json).unwrap();
        assert!(deserialized.api_key.is_empty());
        assert_eq!(deserialized.outline, config.outline);
    }
}
