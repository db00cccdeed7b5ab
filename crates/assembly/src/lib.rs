#![deny(unsafe_code)]
//! Toggled scatter/assemble easing engine.
//!
//! Every sampled pixel becomes a dot with two target endpoints: its
//! centered image position, and a randomized point on the circle
//! circumscribing the image. Each dot eases between segment endpoints on
//! its own randomized timer; when a segment completes, the next target is
//! chosen by the shared mode flag. A toggle event flips the mode and
//! restarts every dot's segment clock simultaneously.
//!
//! Dot state lives in parallel arrays (current, image endpoint, segment
//! start/target, clock, duration, color), mirroring the force-field
//! engine's cache-friendly layout.

use dotfield_core::easing::ease_in_out_cubic;
use dotfield_core::engine::{FrameInput, ParticleEngine};
use dotfield_core::error::EngineError;
use dotfield_core::layout::{bounding_radius, center_offset, ViewportConfig};
use dotfield_core::params::{param_bool, param_f64, param_usize};
use dotfield_core::sample::PixelGrid;
use dotfield_core::{DrawCommand, Rgb, Xorshift64};
use glam::DVec2;
use serde_json::{json, Value};

/// Default sampling stride in pixels.
const DEFAULT_STRIDE: usize = 5;
/// Default minimum segment duration in seconds.
const DEFAULT_DURATION_BASE: f64 = 1.5;
/// Default uniform jitter added to the base duration.
const DEFAULT_DURATION_JITTER: f64 = 1.0;
/// Default drawn dot radius in pixels.
const DEFAULT_DOT_RADIUS: f64 = 2.0;

/// Which endpoint class dots head for when their segment completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Fresh random points on the bounding ring.
    Scattered,
    /// The fixed image positions.
    Image,
}

impl TargetMode {
    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            TargetMode::Scattered => TargetMode::Image,
            TargetMode::Image => TargetMode::Scattered,
        }
    }
}

/// Tunable constants for the assembly engine.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyParams {
    /// Sampling stride in pixels (both axes).
    pub stride: usize,
    /// Minimum segment duration in seconds.
    pub duration_base: f64,
    /// Uniform jitter in [0, jitter) added per segment.
    pub duration_jitter: f64,
    /// Drawn dot radius in pixels.
    pub dot_radius: f64,
    /// Start in `Image` mode instead of `Scattered`.
    pub start_assembled: bool,
}

impl Default for AssemblyParams {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            duration_base: DEFAULT_DURATION_BASE,
            duration_jitter: DEFAULT_DURATION_JITTER,
            dot_radius: DEFAULT_DOT_RADIUS,
            start_assembled: false,
        }
    }
}

impl AssemblyParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            stride: param_usize(params, "stride", DEFAULT_STRIDE),
            duration_base: param_f64(params, "duration_base", DEFAULT_DURATION_BASE),
            duration_jitter: param_f64(params, "duration_jitter", DEFAULT_DURATION_JITTER),
            dot_radius: param_f64(params, "dot_radius", DEFAULT_DOT_RADIUS),
            start_assembled: param_bool(params, "start_assembled", false),
        }
    }
}

/// The scatter/assemble engine: one eased dot per sampled pixel.
pub struct Assembly {
    viewport: ViewportConfig,
    params: AssemblyParams,
    mode: TargetMode,
    center: DVec2,
    ring_radius: f64,
    rng: Xorshift64,
    image_points: Vec<DVec2>,
    currents: Vec<DVec2>,
    starts: Vec<DVec2>,
    targets: Vec<DVec2>,
    segment_starts: Vec<f64>,
    durations: Vec<f64>,
    colors: Vec<Rgb>,
}

impl Assembly {
    /// Seeds one dot per grid sample.
    ///
    /// Dots spawn on the bounding ring of the centered image; their first
    /// segment targets the image position in `Image` mode or a fresh random
    /// ring point in `Scattered` mode, with a randomized duration starting
    /// at `now`.
    ///
    /// Returns `EngineError::InvalidStride` if `params.stride` is zero.
    pub fn new(
        viewport: ViewportConfig,
        grid: &PixelGrid,
        seed: u64,
        now: f64,
        params: AssemblyParams,
    ) -> Result<Self, EngineError> {
        let stride = u32::try_from(params.stride).map_err(|_| EngineError::InvalidStride)?;
        let (off_x, off_y) = center_offset(
            viewport.width(),
            viewport.height(),
            grid.width(),
            grid.height(),
        );
        let center = viewport.center();
        let ring_radius = bounding_radius(grid.width(), grid.height());
        let mode = if params.start_assembled {
            TargetMode::Image
        } else {
            TargetMode::Scattered
        };
        let mut rng = Xorshift64::new(seed);

        let samples = grid.samples(stride, stride)?;
        let capacity = samples.len();
        let mut image_points = Vec::with_capacity(capacity);
        let mut currents = Vec::with_capacity(capacity);
        let mut targets = Vec::with_capacity(capacity);
        let mut durations = Vec::with_capacity(capacity);
        let mut colors = Vec::with_capacity(capacity);

        for sample in samples {
            let image_point = DVec2::new(
                (i64::from(sample.grid_x) + off_x) as f64,
                (i64::from(sample.grid_y) + off_y) as f64,
            );
            let spawn = ring_point(&mut rng, center, ring_radius);
            let target = match mode {
                TargetMode::Image => image_point,
                TargetMode::Scattered => ring_point(&mut rng, center, ring_radius),
            };
            image_points.push(image_point);
            currents.push(spawn);
            targets.push(target);
            durations.push(params.duration_base + rng.next_f64() * params.duration_jitter);
            colors.push(sample.color);
        }

        log::debug!("seeded {} assembly dots", currents.len());

        let count = currents.len();
        Ok(Self {
            viewport,
            params,
            mode,
            center,
            ring_radius,
            rng,
            image_points,
            starts: currents.clone(),
            currents,
            targets,
            segment_starts: vec![now; count],
            durations,
            colors,
        })
    }

    /// Constructs from a JSON params object with the clock at zero.
    pub fn from_json(
        viewport: ViewportConfig,
        grid: &PixelGrid,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        Self::new(viewport, grid, seed, 0.0, AssemblyParams::from_json(params))
    }

    /// The viewport the engine was built for.
    pub fn viewport(&self) -> ViewportConfig {
        self.viewport
    }

    /// The current target mode.
    pub fn mode(&self) -> TargetMode {
        self.mode
    }

    /// Radius of the scatter ring.
    pub fn ring_radius(&self) -> f64 {
        self.ring_radius
    }

    /// Center of the scatter ring.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Current dot positions.
    pub fn positions(&self) -> &[DVec2] {
        &self.currents
    }

    /// Fixed image endpoints, one per dot.
    pub fn image_points(&self) -> &[DVec2] {
        &self.image_points
    }

    /// Segment start points.
    pub fn starts(&self) -> &[DVec2] {
        &self.starts
    }

    /// In-flight segment targets.
    pub fn targets(&self) -> &[DVec2] {
        &self.targets
    }

    /// Per-dot colors.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }
}

/// Uniformly random point on the circle of `radius` around `center`.
fn ring_point(rng: &mut Xorshift64, center: DVec2, radius: f64) -> DVec2 {
    let angle = rng.next_angle();
    center + radius * DVec2::new(angle.cos(), angle.sin())
}

impl ParticleEngine for Assembly {
    fn update(&mut self, frame: &FrameInput) -> Result<(), EngineError> {
        if frame.toggle {
            // A toggle flips the mode and restarts every segment clock.
            // In-flight start/target points are deliberately left alone;
            // the new mode takes effect at each dot's next completion.
            self.mode = self.mode.flipped();
            for start in &mut self.segment_starts {
                *start = frame.now;
            }
        }

        for i in 0..self.currents.len() {
            let mut t = (frame.now - self.segment_starts[i]) / self.durations[i];
            if t >= 1.0 {
                self.starts[i] = self.currents[i];
                self.targets[i] = match self.mode {
                    TargetMode::Image => self.image_points[i],
                    TargetMode::Scattered => {
                        ring_point(&mut self.rng, self.center, self.ring_radius)
                    }
                };
                self.segment_starts[i] = frame.now;
                self.durations[i] =
                    self.params.duration_base + self.rng.next_f64() * self.params.duration_jitter;
                t = 0.0;
            }
            let eased = ease_in_out_cubic(t);
            self.currents[i] = self.starts[i] + (self.targets[i] - self.starts[i]) * eased;
        }
        Ok(())
    }

    fn draw(&self) -> Vec<DrawCommand> {
        self.currents
            .iter()
            .zip(&self.colors)
            .map(|(&pos, &color)| DrawCommand::circle_at(pos, self.params.dot_radius, color))
            .collect()
    }

    fn params(&self) -> Value {
        json!({
            "stride": self.params.stride,
            "duration_base": self.params.duration_base,
            "duration_jitter": self.params.duration_jitter,
            "dot_radius": self.params.dot_radius,
            "start_assembled": self.params.start_assembled,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "stride": {
                "type": "integer",
                "default": DEFAULT_STRIDE,
                "min": 1,
                "max": 64,
                "description": "Sampling stride in pixels"
            },
            "duration_base": {
                "type": "number",
                "default": DEFAULT_DURATION_BASE,
                "min": 0.1,
                "max": 30.0,
                "description": "Minimum segment duration in seconds"
            },
            "duration_jitter": {
                "type": "number",
                "default": DEFAULT_DURATION_JITTER,
                "min": 0.0,
                "max": 30.0,
                "description": "Uniform jitter added to the base duration per segment"
            },
            "dot_radius": {
                "type": "number",
                "default": DEFAULT_DOT_RADIUS,
                "min": 1.0,
                "max": 32.0,
                "description": "Drawn dot radius in pixels"
            },
            "start_assembled": {
                "type": "boolean",
                "default": false,
                "description": "Start in image mode instead of scattered"
            }
        })
    }

    fn particle_count(&self) -> usize {
        self.currents.len()
    }
}
