//! Pure-computation CPU rasterization of draw commands.
//!
//! This module is always available (no feature gate) so that both the PNG
//! snapshot path and any embedding renderer can share the same conversion.
//! Primitives are clipped to the viewport; the output is a row-major RGBA8
//! buffer of `width * height * 4` bytes with opaque alpha.

use dotfield_core::layout::ViewportConfig;
use dotfield_core::{DrawCommand, Rgb};

/// Rasterizes the frame's draw commands over a solid background.
pub fn render_rgba(
    commands: &[DrawCommand],
    viewport: ViewportConfig,
    background: Rgb,
) -> Vec<u8> {
    let w = viewport.width() as i64;
    let h = viewport.height() as i64;
    let mut buf = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..w * h {
        buf.extend_from_slice(&[background.r, background.g, background.b, 255]);
    }

    for cmd in commands {
        match *cmd {
            DrawCommand::Rect {
                x,
                y,
                w: rw,
                h: rh,
                color,
            } => {
                fill_rect(&mut buf, w, h, i64::from(x), i64::from(y), i64::from(rw), i64::from(rh), color);
            }
            DrawCommand::Circle {
                x,
                y,
                radius,
                color,
            } => {
                fill_circle(&mut buf, w, h, i64::from(x), i64::from(y), i64::from(radius), color);
            }
        }
    }

    buf
}

fn put(buf: &mut [u8], w: i64, x: i64, y: i64, color: Rgb) {
    let idx = ((y * w + x) * 4) as usize;
    buf[idx] = color.r;
    buf[idx + 1] = color.g;
    buf[idx + 2] = color.b;
    buf[idx + 3] = 255;
}

fn fill_rect(buf: &mut [u8], w: i64, h: i64, x: i64, y: i64, rw: i64, rh: i64, color: Rgb) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + rw).min(w);
    let y1 = (y + rh).min(h);
    for py in y0..y1 {
        for px in x0..x1 {
            put(buf, w, px, py, color);
        }
    }
}

fn fill_circle(buf: &mut [u8], w: i64, h: i64, cx: i64, cy: i64, r: i64, color: Rgb) {
    let x0 = (cx - r).max(0);
    let y0 = (cy - r).max(0);
    let x1 = (cx + r + 1).min(w);
    let y1 = (cy + r + 1).min(h);
    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px - cx;
            let dy = py - cy;
            if dx * dx + dy * dy <= r * r {
                put(buf, w, px, py, color);
            }
        }
    }
}
