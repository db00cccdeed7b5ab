#![deny(unsafe_code)]
//! Pointer-driven force-field particle engine.
//!
//! Every sampled pixel becomes a particle anchored at its centered image
//! position. Each frame the pointer applies an inverse-square-like pull,
//! friction bleeds velocity, and a spring eases the particle back toward
//! its anchor. With the pointer at rest far away, the cloud settles back
//! into the image.
//!
//! Particle state lives in parallel arrays (origin, position, velocity,
//! color) so the per-frame pass stays cache-friendly at 10³–10⁴ particles;
//! [`ForceField::particle`] exposes an index-based view for inspection.

use dotfield_core::engine::{FrameInput, ParticleEngine};
use dotfield_core::error::EngineError;
use dotfield_core::layout::{center_offset, ViewportConfig};
use dotfield_core::params::{param_f64, param_usize};
use dotfield_core::sample::PixelGrid;
use dotfield_core::{DrawCommand, Rgb};
use glam::DVec2;
use serde_json::{json, Value};

/// Default homing strength toward the anchor, per frame.
const DEFAULT_EASE: f64 = 0.2;
/// Default velocity retained per frame.
const DEFAULT_FRICTION: f64 = 0.95;
/// Default pointer influence constant. Compared against the *squared*
/// pointer distance, so the activation radius is its square root (~31.6 px);
/// the tuned visuals depend on this literal comparison.
const DEFAULT_POINTER_RADIUS: f64 = 1000.0;
/// Default force gain multiplier.
const DEFAULT_GAIN: f64 = 8.0;
/// Default sampling stride in pixels.
const DEFAULT_STRIDE: usize = 5;
/// Default square side in pixels.
const DEFAULT_SIZE: f64 = 2.0;

/// Tunable constants for the force-field engine.
#[derive(Debug, Clone, Copy)]
pub struct ForceFieldParams {
    /// Homing strength in (0, 1]: fraction of the anchor offset recovered
    /// per frame.
    pub ease: f64,
    /// Velocity decay in (0, 1]: fraction of velocity retained per frame.
    pub friction: f64,
    /// Pointer influence constant (gates on squared distance).
    pub pointer_radius: f64,
    /// Force gain multiplier.
    pub gain: f64,
    /// Sampling stride in pixels (both axes).
    pub stride: usize,
    /// Drawn square side in pixels.
    pub size: f64,
}

impl Default for ForceFieldParams {
    fn default() -> Self {
        Self {
            ease: DEFAULT_EASE,
            friction: DEFAULT_FRICTION,
            pointer_radius: DEFAULT_POINTER_RADIUS,
            gain: DEFAULT_GAIN,
            stride: DEFAULT_STRIDE,
            size: DEFAULT_SIZE,
        }
    }
}

impl ForceFieldParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            ease: param_f64(params, "ease", DEFAULT_EASE),
            friction: param_f64(params, "friction", DEFAULT_FRICTION),
            pointer_radius: param_f64(params, "pointer_radius", DEFAULT_POINTER_RADIUS),
            gain: param_f64(params, "gain", DEFAULT_GAIN),
            stride: param_usize(params, "stride", DEFAULT_STRIDE),
            size: param_f64(params, "size", DEFAULT_SIZE),
        }
    }
}

/// Read-only view of one particle, indexed into the parallel arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleRef {
    pub origin: DVec2,
    pub position: DVec2,
    pub velocity: DVec2,
    pub color: Rgb,
}

/// The force-field engine: a particle per sampled pixel, pulled by the
/// pointer and sprung back to its anchor.
pub struct ForceField {
    viewport: ViewportConfig,
    params: ForceFieldParams,
    origins: Vec<DVec2>,
    positions: Vec<DVec2>,
    velocities: Vec<DVec2>,
    colors: Vec<Rgb>,
}

impl ForceField {
    /// Seeds one particle per grid sample, centered on the viewport.
    ///
    /// Samples landing outside the viewport are skipped. Particles start at
    /// their anchor with zero velocity.
    ///
    /// Returns `EngineError::InvalidStride` if `params.stride` is zero.
    pub fn new(
        viewport: ViewportConfig,
        grid: &PixelGrid,
        params: ForceFieldParams,
    ) -> Result<Self, EngineError> {
        let stride = u32::try_from(params.stride).map_err(|_| EngineError::InvalidStride)?;
        let (off_x, off_y) = center_offset(
            viewport.width(),
            viewport.height(),
            grid.width(),
            grid.height(),
        );

        let samples = grid.samples(stride, stride)?;
        let capacity = samples.len();
        let mut origins = Vec::with_capacity(capacity);
        let mut colors = Vec::with_capacity(capacity);
        for sample in samples {
            let x = i64::from(sample.grid_x) + off_x;
            let y = i64::from(sample.grid_y) + off_y;
            if viewport.contains(x, y) {
                origins.push(DVec2::new(x as f64, y as f64));
                colors.push(sample.color);
            }
        }

        log::debug!("seeded {} force-field particles", origins.len());

        Ok(Self {
            viewport,
            params,
            positions: origins.clone(),
            velocities: vec![DVec2::ZERO; origins.len()],
            origins,
            colors,
        })
    }

    /// Constructs from a JSON params object (see [`ForceFieldParams::from_json`]).
    pub fn from_json(
        viewport: ViewportConfig,
        grid: &PixelGrid,
        params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(viewport, grid, ForceFieldParams::from_json(params))
    }

    /// The viewport the engine was built for.
    pub fn viewport(&self) -> ViewportConfig {
        self.viewport
    }

    /// Fixed anchors, one per particle.
    pub fn origins(&self) -> &[DVec2] {
        &self.origins
    }

    /// Current positions.
    pub fn positions(&self) -> &[DVec2] {
        &self.positions
    }

    /// Current velocities.
    pub fn velocities(&self) -> &[DVec2] {
        &self.velocities
    }

    /// Per-particle colors.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// View of the particle at `index`, or `None` past the end.
    pub fn particle(&self, index: usize) -> Option<ParticleRef> {
        (index < self.origins.len()).then(|| ParticleRef {
            origin: self.origins[index],
            position: self.positions[index],
            velocity: self.velocities[index],
            color: self.colors[index],
        })
    }
}

impl ParticleEngine for ForceField {
    fn update(&mut self, frame: &FrameInput) -> Result<(), EngineError> {
        let p = self.params;
        for i in 0..self.positions.len() {
            let d = frame.pointer - self.positions[i];
            let dist_sq = d.length_squared();
            let force = -p.pointer_radius / (dist_sq + 1.0) * p.gain;

            // Squared distance against the unsquared radius, as tuned.
            if dist_sq < p.pointer_radius {
                let angle = d.y.atan2(d.x);
                self.velocities[i] += force * DVec2::new(angle.cos(), angle.sin());
            }

            self.velocities[i] *= p.friction;
            let homing = (self.origins[i] - self.positions[i]) * p.ease;
            self.positions[i] += self.velocities[i] + homing;
        }
        Ok(())
    }

    fn draw(&self) -> Vec<DrawCommand> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(&pos, &color)| DrawCommand::square_at(pos, self.params.size, color))
            .collect()
    }

    fn params(&self) -> Value {
        json!({
            "ease": self.params.ease,
            "friction": self.params.friction,
            "pointer_radius": self.params.pointer_radius,
            "gain": self.params.gain,
            "stride": self.params.stride,
            "size": self.params.size,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "ease": {
                "type": "number",
                "default": DEFAULT_EASE,
                "min": 0.0,
                "max": 1.0,
                "description": "Homing strength toward the anchor per frame"
            },
            "friction": {
                "type": "number",
                "default": DEFAULT_FRICTION,
                "min": 0.0,
                "max": 1.0,
                "description": "Fraction of velocity retained per frame"
            },
            "pointer_radius": {
                "type": "number",
                "default": DEFAULT_POINTER_RADIUS,
                "min": 0.0,
                "max": 10000.0,
                "description": "Pointer influence constant (gates on squared distance)"
            },
            "gain": {
                "type": "number",
                "default": DEFAULT_GAIN,
                "min": 0.0,
                "max": 64.0,
                "description": "Force gain multiplier"
            },
            "stride": {
                "type": "integer",
                "default": DEFAULT_STRIDE,
                "min": 1,
                "max": 64,
                "description": "Sampling stride in pixels"
            },
            "size": {
                "type": "number",
                "default": DEFAULT_SIZE,
                "min": 1.0,
                "max": 32.0,
                "description": "Drawn square side in pixels"
            }
        })
    }

    fn particle_count(&self) -> usize {
        self.origins.len()
    }
}
