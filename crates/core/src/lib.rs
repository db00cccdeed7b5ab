#![deny(unsafe_code)]
//! Core types and traits for the dotfield particle animation system.
//!
//! Provides the `ParticleEngine` trait and per-frame `FrameInput`, the
//! `PixelGrid`/`Sample` image-sampling model, layout geometry
//! (`ViewportConfig`, centering, ring fit), the `Rgb` color type,
//! `DrawCommand` output primitives, the cubic easing curve, the
//! `Xorshift64` PRNG, JSON parameter helpers, and the `Scene` replay spec.

pub mod color;
pub mod draw;
pub mod easing;
pub mod engine;
pub mod error;
pub mod layout;
pub mod params;
pub mod prng;
pub mod sample;
pub mod scene;

pub use color::Rgb;
pub use draw::DrawCommand;
pub use engine::{FrameInput, ParticleEngine};
pub use error::EngineError;
pub use layout::ViewportConfig;
pub use prng::Xorshift64;
pub use sample::{PixelGrid, Sample};
pub use scene::Scene;
