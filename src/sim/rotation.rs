//! Discrete rotation of the logo
//!
//! Orientation is an index into a precomputed sine/cosine table, so every
//! tick reads trig values in O(1) and the angle never drifts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{rotate, rotate_inverse};

/// Sine and cosine of the current logo angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub sin: f32,
    pub cos: f32,
}

impl Orientation {
    pub const IDENTITY: Self = Self { sin: 0.0, cos: 1.0 };

    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }

    /// World offset (relative to the logo center) into the logo's local frame
    #[inline]
    pub fn to_local(&self, offset: Vec2) -> Vec2 {
        rotate_inverse(offset, self.sin, self.cos)
    }

    /// Local logo coordinates into a world offset from the logo center
    #[inline]
    pub fn to_world(&self, local: Vec2) -> Vec2 {
        rotate(local, self.sin, self.cos)
    }
}

/// Precomputed rotation table plus the current index into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationModel {
    sin: Vec<f32>,
    cos: Vec<f32>,
    angle_index: usize,
}

impl RotationModel {
    /// Build a table of `steps` entries at `i * step` radians.
    ///
    /// `steps` must be non-zero; `Settings::validate` guarantees that.
    pub fn new(steps: usize, step: f32) -> Self {
        let (sin, cos): (Vec<f32>, Vec<f32>) = (0..steps)
            .map(|i| (i as f32 * step).sin_cos())
            .unzip();
        Self {
            sin,
            cos,
            angle_index: 0,
        }
    }

    /// Table covering exactly one full turn
    pub fn full_turn(steps: usize) -> Self {
        Self::new(steps, std::f32::consts::TAU / steps as f32)
    }

    pub fn steps(&self) -> usize {
        self.sin.len()
    }

    pub fn angle_index(&self) -> usize {
        self.angle_index
    }

    /// Step forward one entry, wrapping at the end of the table
    pub fn advance(&mut self) {
        self.angle_index = (self.angle_index + 1) % self.steps();
    }

    pub fn current(&self) -> Orientation {
        self.at(self.angle_index)
    }

    /// Orientation stored at `index` (taken modulo the table size)
    pub fn at(&self, index: usize) -> Orientation {
        let i = index % self.steps();
        Orientation {
            sin: self.sin[i],
            cos: self.cos[i],
        }
    }

    pub fn reset(&mut self) {
        self.angle_index = 0;
    }
}
