//! Canonical pixel-format conversion
//!
//! Every buffer flowing through the pipeline past this point carries an
//! alpha channel; the outline synthesizer reads it directly.

use image::{DynamicImage, RgbaImage};

/// Convert any decoded image to 8-bit RGBA
///
/// Sources without an alpha channel get a fully-opaque one. Pure and
/// deterministic; normalizing an already-RGBA image is a byte-identical
/// no-op.
#[must_use]
pub fn to_rgba(image: DynamicImage) -> RgbaImage {
    image.into_rgba8()
}
