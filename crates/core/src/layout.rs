//! Canvas layout geometry.
//!
//! Pure functions for centering sampled content on a canvas, the bounding
//! radius of the scatter ring, and the scale factors applied to a source
//! image before sampling. [`ViewportConfig`] is the immutable canvas size
//! passed at engine construction; a resize means rebuilding the engine from
//! fresh samples with a new config.

use crate::error::EngineError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Immutable canvas dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportConfig {
    width: u32,
    height: u32,
}

impl ViewportConfig {
    /// Creates a viewport config.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The viewport center, floor-divided per axis to match the integer
    /// centering used throughout the layout math.
    pub fn center(&self) -> DVec2 {
        DVec2::new(f64::from(self.width / 2), f64::from(self.height / 2))
    }

    /// True if an integer point lies inside the viewport.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }
}

/// Offset that centers `content` within `canvas`, floor-divided per axis.
///
/// Negative when the content is larger than the canvas.
pub fn center_offset(
    canvas_w: u32,
    canvas_h: u32,
    content_w: u32,
    content_h: u32,
) -> (i64, i64) {
    (
        (i64::from(canvas_w) - i64::from(content_w)).div_euclid(2),
        (i64::from(canvas_h) - i64::from(content_h)).div_euclid(2),
    )
}

/// Half-diagonal of the content bounding box: the radius of the circle the
/// scatter layout places dots on.
pub fn bounding_radius(content_w: u32, content_h: u32) -> f64 {
    let hw = f64::from(content_w) / 2.0;
    let hh = f64::from(content_h) / 2.0;
    (hw * hw + hh * hh).sqrt()
}

/// Uniform scale that fits `content` inside `target` while preserving the
/// aspect ratio. Content dimensions must be non-zero (guaranteed by
/// [`crate::PixelGrid`]).
pub fn fit_scale(content_w: u32, content_h: u32, target_w: u32, target_h: u32) -> f64 {
    let sw = f64::from(target_w) / f64::from(content_w);
    let sh = f64::from(target_h) / f64::from(content_h);
    sw.min(sh)
}

/// Scale for the scatter/assemble layout: fits the content box into 80% of
/// the canvas per axis AND keeps the content's bounding circle inside the
/// canvas. The three-way minimum decides which constraint binds.
pub fn ring_fit_scale(content_w: u32, content_h: u32, canvas_w: u32, canvas_h: u32) -> f64 {
    let w = f64::from(content_w);
    let h = f64::from(content_h);
    let diagonal = (w * w + h * h).sqrt();
    let max_radius = f64::from(canvas_w.min(canvas_h)) / 2.0;
    (f64::from(canvas_w) * 0.8 / w)
        .min(f64::from(canvas_h) * 0.8 / h)
        .min(max_radius * 2.0 / diagonal)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- ViewportConfig tests ----

    #[test]
    fn viewport_new_accepts_valid_dimensions() {
        let v = ViewportConfig::new(1200, 800).unwrap();
        assert_eq!(v.width(), 1200);
        assert_eq!(v.height(), 800);
    }

    #[test]
    fn viewport_new_rejects_zero_dimensions() {
        assert!(matches!(
            ViewportConfig::new(0, 800),
            Err(EngineError::InvalidDimensions)
        ));
        assert!(matches!(
            ViewportConfig::new(1200, 0),
            Err(EngineError::InvalidDimensions)
        ));
    }

    #[test]
    fn viewport_center_floor_divides() {
        let v = ViewportConfig::new(1001, 801).unwrap();
        assert_eq!(v.center(), DVec2::new(500.0, 400.0));
    }

    #[test]
    fn viewport_contains_edges() {
        let v = ViewportConfig::new(100, 50).unwrap();
        assert!(v.contains(0, 0));
        assert!(v.contains(99, 49));
        assert!(!v.contains(100, 0));
        assert!(!v.contains(0, 50));
        assert!(!v.contains(-1, 10));
    }

    #[test]
    fn viewport_serde_round_trip() {
        let v = ViewportConfig::new(640, 480).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let restored: ViewportConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(v, restored);
    }

    // ---- center_offset tests ----

    #[test]
    fn center_offset_centers_smaller_content() {
        assert_eq!(center_offset(200, 200, 100, 50), (50, 75));
    }

    #[test]
    fn center_offset_floors_odd_differences() {
        // (201 - 100) / 2 floors to 50
        assert_eq!(center_offset(201, 201, 100, 100), (50, 50));
    }

    #[test]
    fn center_offset_is_negative_for_oversized_content() {
        let (ox, oy) = center_offset(100, 100, 150, 101);
        assert_eq!(ox, -25);
        // floor(-1 / 2) = -1, not 0
        assert_eq!(oy, -1);
    }

    // ---- bounding_radius tests ----

    #[test]
    fn bounding_radius_is_half_diagonal() {
        // 3-4-5 triangle scaled: half extents 30 and 40 give radius 50
        let r = bounding_radius(60, 80);
        assert!((r - 50.0).abs() < 1e-12);
    }

    #[test]
    fn bounding_radius_of_square() {
        let r = bounding_radius(100, 100);
        assert!((r - 50.0 * std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    // ---- fit_scale tests ----

    #[test]
    fn fit_scale_never_overflows_target() {
        for (cw, ch) in [(100, 50), (50, 100), (333, 77), (1920, 1080)] {
            let s = fit_scale(cw, ch, 640, 480);
            let new_w = f64::from(cw) * s;
            let new_h = f64::from(ch) * s;
            assert!(new_w <= 640.0 + 1e-9, "{cw}x{ch}: width {new_w}");
            assert!(new_h <= 480.0 + 1e-9, "{cw}x{ch}: height {new_h}");
        }
    }

    #[test]
    fn fit_scale_binds_on_the_tighter_axis() {
        // Wide content: width binds
        assert!((fit_scale(200, 50, 100, 100) - 0.5).abs() < 1e-12);
        // Tall content: height binds
        assert!((fit_scale(50, 200, 100, 100) - 0.5).abs() < 1e-12);
    }

    // ---- ring_fit_scale tests ----

    #[test]
    fn ring_fit_scale_keeps_bounding_circle_inside_canvas() {
        for (cw, ch) in [(100, 100), (400, 100), (120, 350), (1000, 1000)] {
            let s = ring_fit_scale(cw, ch, 1000, 1000);
            let r = bounding_radius(
                (f64::from(cw) * s) as u32,
                (f64::from(ch) * s) as u32,
            );
            assert!(r <= 500.0 + 1e-6, "{cw}x{ch}: radius {r}");
        }
    }

    #[test]
    fn ring_fit_scale_circle_constraint_binds_for_square_content() {
        // A square's diagonal exceeds its side, so the circle term is
        // smaller than the 0.8 box terms on a square canvas.
        let s = ring_fit_scale(100, 100, 1000, 1000);
        let circle = 500.0 * 2.0 / (100.0_f64 * 100.0 * 2.0).sqrt();
        assert!((s - circle).abs() < 1e-12);
        assert!(s < 0.8 * 1000.0 / 100.0);
    }

    #[test]
    fn ring_fit_scale_box_constraint_binds_for_elongated_content() {
        // Very wide content on a wide canvas: the 0.8 width term binds.
        let s = ring_fit_scale(1000, 10, 800, 800);
        assert!((s - 0.8 * 800.0 / 1000.0).abs() < 1e-12);
    }

    // ---- Property-based tests ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fit_scale_result_fits(
                cw in 1_u32..2000,
                ch in 1_u32..2000,
                tw in 1_u32..2000,
                th in 1_u32..2000,
            ) {
                let s = fit_scale(cw, ch, tw, th);
                prop_assert!(f64::from(cw) * s <= f64::from(tw) + 1e-6);
                prop_assert!(f64::from(ch) * s <= f64::from(th) + 1e-6);
            }

            #[test]
            fn ring_fit_scaled_radius_fits(
                cw in 1_u32..2000,
                ch in 1_u32..2000,
                vw in 10_u32..2000,
                vh in 10_u32..2000,
            ) {
                let s = ring_fit_scale(cw, ch, vw, vh);
                let scaled_diag = (f64::from(cw).powi(2) + f64::from(ch).powi(2)).sqrt() * s;
                prop_assert!(scaled_diag / 2.0 <= f64::from(vw.min(vh)) / 2.0 + 1e-6);
            }

            #[test]
            fn center_offset_restores_parity(
                canvas in 1_u32..4000,
                content in 1_u32..4000,
            ) {
                let (off, _) = center_offset(canvas, 1, content, 1);
                // offset*2 differs from canvas-content by at most the floor remainder
                let diff = i64::from(canvas) - i64::from(content) - off * 2;
                prop_assert!(diff == 0 || diff == 1);
            }
        }
    }
}
