//! Final PNG persistence and output-name resolution
//!
//! Every composite lands directly under [`OUTPUT_DIR`], regardless of any
//! path components in the caller-supplied name. The writer creates no
//! directories; the caller ensures [`OUTPUT_DIR`] exists beforehand.

use crate::error::{CutlineError, Result};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Directory all processed images are written into
pub const OUTPUT_DIR: &str = "processed_images";

/// Fallback file stem for names with no usable file-name component
const FALLBACK_NAME: &str = "output";

/// Resolve a caller-supplied name to its final output path
///
/// Only the file-name component of `name` is kept; a `.png` suffix is
/// appended unless already present. The result is always directly under
/// [`OUTPUT_DIR`].
///
/// # Examples
///
/// ```rust
/// use cutline::output::resolve_output_path;
/// use std::path::Path;
///
/// assert_eq!(resolve_output_path("cat"), Path::new("processed_images/cat.png"));
/// assert_eq!(resolve_output_path("cat.png"), Path::new("processed_images/cat.png"));
/// ```
#[must_use]
pub fn resolve_output_path(name: &str) -> PathBuf {
    let file_name = Path::new(name)
        .file_name()
        .map_or_else(|| FALLBACK_NAME.to_string(), |n| n.to_string_lossy().into_owned());

    let file_name = if file_name.ends_with(".png") {
        file_name
    } else {
        format!("{file_name}.png")
    };

    Path::new(OUTPUT_DIR).join(file_name)
}

/// Encode and write the composite as a PNG
///
/// Creates no directories: the destination directory must already exist,
/// and a missing directory propagates as a fatal I/O error.
///
/// # Errors
/// - Write failure (permissions, missing directory) as
///   [`CutlineError::FileIo`]
/// - Encoding failure as [`CutlineError::Processing`]
pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    log::debug!("writing {}x{} PNG to {}", image.width(), image.height(), path.display());

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| match e {
            image::ImageError::IoError(io_err) => {
                CutlineError::file_io_error("write output image", path, io_err)
            },
            other => CutlineError::processing(format!("failed to encode PNG: {other}")),
        })
}
