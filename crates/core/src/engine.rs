//! The core `ParticleEngine` trait, driven once per frame.
//!
//! The trait is object-safe so the registry and CLI can hold a
//! `Box<dyn ParticleEngine>` and switch engines at runtime.

use crate::draw::DrawCommand;
use crate::error::EngineError;
use glam::DVec2;
use serde_json::Value;

/// Per-frame inputs supplied by the embedding event loop.
///
/// Shared state (pointer position, clock, toggle events) is passed by value
/// here instead of particles holding a reference back to their owning
/// system; within a frame everything in this struct is read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Pointer position in canvas coordinates.
    pub pointer: DVec2,
    /// Monotonic clock in seconds.
    pub now: f64,
    /// True when a discrete toggle event fired since the previous frame.
    pub toggle: bool,
}

impl FrameInput {
    /// A frame at time `now` with the pointer at the origin and no toggle.
    pub fn at(now: f64) -> Self {
        Self {
            pointer: DVec2::ZERO,
            now,
            toggle: false,
        }
    }

    /// Returns the frame with the pointer moved to `pointer`.
    pub fn with_pointer(mut self, pointer: DVec2) -> Self {
        self.pointer = pointer;
        self
    }

    /// Returns the frame with the toggle event set.
    pub fn with_toggle(mut self) -> Self {
        self.toggle = true;
        self
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self::at(0.0)
    }
}

/// A frame-stepped particle animation engine.
///
/// Each engine owns its full particle collection, advances every particle's
/// kinematics in `update`, and emits one draw primitive per particle in
/// `draw`. Engines are rebuilt from fresh samples on viewport resize or
/// image swap.
///
/// This trait is **object-safe**: `Box<dyn ParticleEngine>` works.
pub trait ParticleEngine {
    /// Advance every particle by one frame.
    fn update(&mut self, frame: &FrameInput) -> Result<(), EngineError>;

    /// Emit the current frame's draw primitives, one per particle.
    fn draw(&self) -> Vec<DrawCommand>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;

    /// Number of particles in the collection.
    fn particle_count(&self) -> usize;
}
