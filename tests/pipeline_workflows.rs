//! Integration tests for the in-memory processing pipeline
//!
//! Everything up to and after the remote background-removal call is
//! exercised here with synthetic images; the service itself is an opaque
//! collaborator and is not contacted.

use cutline::{
    apply_white_outline, normalize, output, ImageSource, OutlineConfig, ProcessorConfig,
};
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Synthetic background-removed image: transparent canvas, opaque circle
fn circle_cutout(size: u32, radius: u32) -> RgbaImage {
    let center = size as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        if (dx * dx + dy * dy).sqrt() <= radius as f32 {
            Rgba([30, 120, 220, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

#[test]
fn outline_then_write_round_trips_losslessly() {
    let cutout = circle_cutout(96, 30);
    let composite = apply_white_outline(&cutout, &OutlineConfig::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circle.png");
    output::write_png(&composite, &path).unwrap();

    let reloaded = image::open(&path).unwrap().into_rgba8();
    assert_eq!(reloaded.as_raw(), composite.as_raw());
}

#[test]
fn outline_halo_surrounds_circle() {
    let cutout = circle_cutout(96, 30);
    let composite = apply_white_outline(&cutout, &OutlineConfig::default()).unwrap();

    // Inside the circle the foreground is untouched.
    assert_eq!(composite.get_pixel(48, 48), &Rgba([30, 120, 220, 255]));

    // Just past the rim (radius 30, outline band reaches further out):
    // white with visible alpha.
    let halo = composite.get_pixel(48, 48 + 33);
    assert_eq!(&halo.0[0..3], &[255, 255, 255]);
    assert!(halo.0[3] > 0);

    // Image corners stay fully transparent.
    for (x, y) in [(0, 0), (95, 0), (0, 95), (95, 95)] {
        assert_eq!(composite.get_pixel(x, y).0[3], 0);
    }
}

#[test]
fn pipeline_stages_leave_no_files_behind() {
    let workdir = tempfile::tempdir().unwrap();

    let cutout = circle_cutout(64, 20);
    let normalized = normalize::to_rgba(DynamicImage::ImageRgba8(cutout));
    let _composite = apply_white_outline(&normalized, &OutlineConfig::default()).unwrap();

    // All intermediates are in-memory buffers; nothing was written.
    let leftovers: Vec<PathBuf> = std::fs::read_dir(workdir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert!(leftovers.is_empty(), "unexpected files: {leftovers:?}");
}

#[test]
fn output_names_resolve_into_fixed_directory() {
    for name in ["cat", "cat.png", "some/dir/cat", "../cat"] {
        assert_eq!(
            output::resolve_output_path(name),
            Path::new("processed_images/cat.png"),
            "name {name:?} escaped the output directory"
        );
    }
}

#[test]
fn local_locations_never_classify_as_remote() {
    for location in ["cat.png", "./cat.png", "images/cat.jpg", "C:\\cat.png"] {
        assert!(matches!(
            ImageSource::from_location(location),
            ImageSource::Local(_)
        ));
    }

    for location in ["http://host/cat.png", "https://host/cat.png"] {
        assert!(matches!(
            ImageSource::from_location(location),
            ImageSource::Remote(_)
        ));
    }
}

#[test]
fn config_round_trips_without_credential() {
    let config = ProcessorConfig::builder()
        .api_key("super-secret")
        .outline_width(12)
        .blur_radius(7)
        .build()
        .unwrap();

    let json = serde_json::to_string(&config).unwrap();
    assert!(!json.contains("super-secret"));

    let restored: ProcessorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.outline, config.outline);
    assert_eq!(restored.endpoint, config.endpoint);
}
