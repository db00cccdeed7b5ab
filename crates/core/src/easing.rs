//! Cubic in/out easing curve.
//!
//! Shapes the scatter/assemble motion: slow start, fast middle, slow
//! arrival. Dots ease along their segment with `t` normalized to [0, 1].

/// Cubic in/out easing: `4t³` below the midpoint, `1 - (-2t + 2)³ / 2` above.
///
/// Maps 0 → 0, 0.5 → 0.5, 1 → 1 and is monotone non-decreasing on [0, 1].
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
