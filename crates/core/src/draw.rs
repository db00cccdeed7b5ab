//! Draw primitives emitted by particle engines.
//!
//! The core never renders. Each frame an engine returns a list of
//! primitives and the embedding collaborator (CPU rasterizer, GPU quad
//! batcher, whatever) consumes them. Positions are rounded to integer
//! pixels at emission.

use crate::color::Rgb;
use glam::DVec2;

/// One filled primitive for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Axis-aligned filled rectangle with top-left corner at `(x, y)`.
    Rect {
        x: i32,
        y: i32,
        w: u32,
        h: u32,
        color: Rgb,
    },
    /// Filled circle centered at `(x, y)`.
    Circle {
        x: i32,
        y: i32,
        radius: u32,
        color: Rgb,
    },
}

impl DrawCommand {
    /// Square of side `side` with its top-left corner at the rounded
    /// position, as the force-field engine draws particles.
    pub fn square_at(pos: DVec2, side: f64, color: Rgb) -> Self {
        let side = side.round().max(1.0) as u32;
        DrawCommand::Rect {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
            w: side,
            h: side,
            color,
        }
    }

    /// Circle of radius `radius` centered at the rounded position, as the
    /// assembly engine draws dots.
    pub fn circle_at(pos: DVec2, radius: f64, color: Rgb) -> Self {
        DrawCommand::Circle {
            x: pos.x.round() as i32,
            y: pos.y.round() as i32,
            radius: radius.round().max(1.0) as u32,
            color,
        }
    }

    /// The primitive's fill color.
    pub fn color(&self) -> Rgb {
        match *self {
            DrawCommand::Rect { color, .. } => color,
            DrawCommand::Circle { color, .. } => color,
        }
    }
}
