//! Deterministic PRNG based on the Xorshift64 algorithm.
//!
//! Scatter placement and segment durations must replay bit-identically for
//! a given scene seed, so all randomness in dotfield flows through this
//! generator rather than a thread-local source. Pure integer state; the
//! same seed produces the same sequence on every platform.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Xorshift64 deterministic PRNG with shift parameters (13, 7, 17).
///
/// A seed of 0 is the all-zeros fixed point of the algorithm and is
/// replaced with a non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Substitute for a zero seed, which xorshift would map to itself forever.
    const FALLBACK_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Creates a new PRNG with the given seed (0 is replaced by a fallback).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1), built from the top 53 bits for full mantissa
    /// precision.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform angle in [0, 2π), for ring placement.
    pub fn next_angle(&mut self) -> f64 {
        self.next_f64() * TAU
    }
}
