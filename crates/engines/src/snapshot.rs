//! PNG snapshot of a rendered frame.
//!
//! This module is feature-gated behind `io` (default on) so embedders that
//! bring their own renderer can depend on this crate without pulling in the
//! `image` crate. The pixel conversion itself lives in [`crate::raster`]
//! (always available).

use dotfield_core::error::EngineError;
use dotfield_core::layout::ViewportConfig;
use dotfield_core::{DrawCommand, Rgb};
use std::path::Path;

use crate::raster::render_rgba;

/// Rasterizes the frame's draw commands and writes them as a PNG.
///
/// Returns `EngineError::Io` on buffer mismatch or write failure.
pub fn write_png(
    commands: &[DrawCommand],
    viewport: ViewportConfig,
    background: Rgb,
    path: &Path,
) -> Result<(), EngineError> {
    let rgba = render_rgba(commands, viewport, background);
    let img = image::RgbaImage::from_raw(viewport.width(), viewport.height(), rgba)
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}
