//! Image decoding and pre-sample resizing.
//!
//! Loads a source image, scales it so the sampled particle layout fits the
//! viewport, and converts it to a [`PixelGrid`]. The two fit policies match
//! the two engines: [`Fit::Contain`] keeps the image box inside the canvas
//! (force field), [`Fit::Ring`] additionally keeps the image's bounding
//! circle inside the canvas (assembly, whose scatter ring circumscribes the
//! image).
//!
//! A missing or undecodable file surfaces as `ImageUnavailable`; whether to
//! substitute a uniform grid or abort is the caller's decision.

use dotfield_core::error::EngineError;
use dotfield_core::layout::{fit_scale, ring_fit_scale, ViewportConfig};
use dotfield_core::sample::PixelGrid;
use dotfield_core::Rgb;
use image::imageops::FilterType;
use std::path::Path;

/// How the source image is scaled to the viewport before sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Largest scale keeping the image box inside the viewport.
    Contain,
    /// Scale for the scatter layout: 80% box fit, bounded so the image's
    /// bounding circle also fits the viewport.
    Ring,
}

/// Loads and scales an image file into a [`PixelGrid`].
///
/// Returns `EngineError::ImageUnavailable` if the file is missing,
/// unreadable, or in an unsupported format.
pub fn load_pixel_grid(
    path: &Path,
    viewport: ViewportConfig,
    fit: Fit,
) -> Result<PixelGrid, EngineError> {
    let decoded = image::open(path)
        .map_err(|e| EngineError::ImageUnavailable(format!("{}: {e}", path.display())))?
        .to_rgb8();
    let (w, h) = decoded.dimensions();
    if w == 0 || h == 0 {
        return Err(EngineError::ImageUnavailable(format!(
            "{}: decoded to zero dimensions",
            path.display()
        )));
    }

    let scale = match fit {
        Fit::Contain => fit_scale(w, h, viewport.width(), viewport.height()),
        Fit::Ring => ring_fit_scale(w, h, viewport.width(), viewport.height()),
    };
    // Truncated, not rounded; a degenerate axis still keeps one pixel.
    let new_w = ((f64::from(w) * scale) as u32).max(1);
    let new_h = ((f64::from(h) * scale) as u32).max(1);
    let resized = image::imageops::resize(&decoded, new_w, new_h, FilterType::Triangle);

    log::info!(
        "loaded {} ({}x{} -> {}x{}, scale {:.3})",
        path.display(),
        w,
        h,
        new_w,
        new_h,
        scale
    );

    let data = resized
        .pixels()
        .map(|p| Rgb {
            r: p[0],
            g: p[1],
            b: p[2],
        })
        .collect();
    PixelGrid::from_raw(new_w, new_h, data)
}
