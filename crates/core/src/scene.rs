//! Reproducible specification for an animation run.
//!
//! A [`Scene`] captures everything needed to recreate a frame sequence:
//! engine name, viewport dimensions, parameters, PRNG seed, frame count,
//! and an optional source image path. Two identical scenes fed to the same
//! binary produce bit-identical frames.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reproducible specification for an animation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scene {
    pub engine: String,
    pub width: u32,
    pub height: u32,
    pub params: serde_json::Value,
    pub seed: u64,
    pub frames: u32,
    /// Source image; `None` means the uniform default-colored grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl Scene {
    /// Creates a scene with default params (`{}`), zero frames, and no image.
    pub fn new(engine: &str, width: u32, height: u32, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            frames: 0,
            image: None,
        }
    }

    /// Validates that the scene has non-zero dimensions.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        Ok(())
    }
}
