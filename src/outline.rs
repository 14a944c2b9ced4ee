//! White outline synthesis around the foreground silhouette
//!
//! The outline is derived entirely from the alpha channel: edge detection
//! finds the silhouette boundary, dilation thickens it into a band,
//! morphological closing rounds the corners, and a Gaussian blur softens
//! the band into a halo. The halo becomes the alpha of an opaque-white
//! layer composited beneath the foreground, so the foreground always wins
//! where both are opaque.
//!
//! A fully opaque input has no silhouette boundary and yields an empty
//! edge map, so the outline is invisible. That is expected rather than an
//! error.

use crate::config::OutlineConfig;
use crate::error::Result;
use image::{imageops, GrayImage, Luma, Rgba, RgbaImage};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use imageproc::morphology::{close, dilate};

/// Hysteresis thresholds for edge detection over the alpha map
const CANNY_LOW: f32 = 100.0;
const CANNY_HIGH: f32 = 200.0;

/// Composite a soft white outline beneath the foreground
///
/// Produces a new buffer of the same dimensions; the input is not
/// modified.
///
/// # Errors
/// - Invalid outline parameters (see [`OutlineConfig::validate`])
pub fn apply_white_outline(image: &RgbaImage, config: &OutlineConfig) -> Result<RgbaImage> {
    config.validate()?;

    let alpha = alpha_channel(image);
    let mask = outline_mask(&alpha, config);

    let mut composite = outline_layer(&mask);
    imageops::overlay(&mut composite, image, 0, 0);
    Ok(composite)
}

/// Extract the alpha channel as a single-channel map
fn alpha_channel(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y).0[3]])
    })
}

/// Build the outline opacity mask from an alpha map
///
/// Edge detection, square dilation of side `outline_width`, elliptical
/// closing of the same diameter, then Gaussian blur. The result maps each
/// pixel to outline opacity (0 = transparent, 255 = opaque white).
fn outline_mask(alpha: &GrayImage, config: &OutlineConfig) -> GrayImage {
    let edges = canny(alpha, CANNY_LOW, CANNY_HIGH);
    let band = dilate(&edges, Norm::LInf, config.morph_radius());
    let rounded = close(&band, Norm::L2, config.morph_radius());
    gaussian_blur_f32(&rounded, config.blur_sigma())
}

/// Opaque-white layer whose alpha is the outline mask
fn outline_layer(mask: &GrayImage) -> RgbaImage {
    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        Rgba([255, 255, 255, mask.get_pixel(x, y).0[0]])
    })
}
