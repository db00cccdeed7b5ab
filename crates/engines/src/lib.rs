#![deny(unsafe_code)]
//! Engine registry and frame output plumbing.
//!
//! This crate sits between `dotfield-core` (which defines the
//! `ParticleEngine` trait) and the engine crates (`dotfield-force-field`,
//! `dotfield-assembly`). The CLI depends on this crate for name-based
//! dispatch, CPU rasterization of draw commands, PNG snapshots, and image
//! file loading (the latter two behind the default `io` feature).

pub mod raster;

#[cfg(feature = "io")]
pub mod image_io;

#[cfg(feature = "io")]
pub mod snapshot;

use dotfield_core::engine::{FrameInput, ParticleEngine};
use dotfield_core::error::EngineError;
use dotfield_core::layout::ViewportConfig;
use dotfield_core::sample::PixelGrid;
use dotfield_core::DrawCommand;
use serde_json::Value;

/// All available engine names.
const ENGINE_NAMES: &[&str] = &["force-field", "assembly"];

/// Enumeration of the available particle engines.
///
/// Wraps each engine implementation and delegates `ParticleEngine` methods.
/// Use [`EngineKind::from_name`] for string-based construction (CLI, scene
/// replay).
pub enum EngineKind {
    /// Pointer-driven force field.
    ForceField(dotfield_force_field::ForceField),
    /// Toggled scatter/assemble easing.
    Assembly(dotfield_assembly::Assembly),
}

impl EngineKind {
    /// Constructs an engine by name from a pixel grid and JSON params.
    ///
    /// The `seed` drives the assembly engine's scatter placement; the
    /// force field has no randomness and ignores it.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        viewport: ViewportConfig,
        grid: &PixelGrid,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "force-field" => Ok(EngineKind::ForceField(
                dotfield_force_field::ForceField::from_json(viewport, grid, params)?,
            )),
            "assembly" => Ok(EngineKind::Assembly(
                dotfield_assembly::Assembly::from_json(viewport, grid, seed, params)?,
            )),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    /// Returns a slice of all recognized engine names.
    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }
}

impl ParticleEngine for EngineKind {
    fn update(&mut self, frame: &FrameInput) -> Result<(), EngineError> {
        match self {
            EngineKind::ForceField(e) => e.update(frame),
            EngineKind::Assembly(e) => e.update(frame),
        }
    }

    fn draw(&self) -> Vec<DrawCommand> {
        match self {
            EngineKind::ForceField(e) => e.draw(),
            EngineKind::Assembly(e) => e.draw(),
        }
    }

    fn params(&self) -> Value {
        match self {
            EngineKind::ForceField(e) => e.params(),
            EngineKind::Assembly(e) => e.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            EngineKind::ForceField(e) => e.param_schema(),
            EngineKind::Assembly(e) => e.param_schema(),
        }
    }

    fn particle_count(&self) -> usize {
        match self {
            EngineKind::ForceField(e) => e.particle_count(),
            EngineKind::Assembly(e) => e.particle_count(),
        }
    }
}
