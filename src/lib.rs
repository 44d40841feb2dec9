//! Snowdrift - falling snow piling up on a rotating logo
//!
//! Core modules:
//! - `sim`: Deterministic tick-based simulation (pools, collision, sliding)
//! - `render`: Read-only draw pass against an abstract drawing surface
//! - `platform`: Host capabilities (clock, random source, input events)
//! - `settings`: Run configuration and validation

pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Downward acceleration applied to free flakes every tick
    pub const GRAVITY: f32 = 0.08;
    /// Velocity retained per tick by particles sliding along the logo
    pub const FRICTION: f32 = 0.95;

    /// Free-falling flake pool capacity
    pub const MAX_SNOW: usize = 10;
    /// Logo pile pool capacity
    pub const MAX_PILE: usize = 200;

    /// Number of discrete orientations in the rotation table
    pub const ROT_STEPS: usize = 126;
    /// Ticks between two ground melt passes
    pub const MELT_RATE: u64 = 60;
    /// Per-tick probability of spawning a new flake
    pub const SPAWN_CHANCE: f32 = 0.4;
    /// Dormant period before the simulation starts (milliseconds)
    pub const START_DELAY_MS: u64 = 5000;

    /// Flake edge length in pixels (also the ground column width)
    pub const FLAKE_SIZE: f32 = 4.0;
    /// Width of one ground column in pixels
    pub const COLUMN_WIDTH: i32 = 4;
    /// Height added to a ground column by one landed flake
    pub const PILE_STEP: i32 = 4;

    /// Spawn height above the top of the screen
    pub const SPAWN_Y: f32 = -5.0;
    /// Horizontal spawn velocity range
    pub const SPAWN_VX: (f32, f32) = (-0.3, 0.3);
    /// Vertical spawn velocity range
    pub const SPAWN_VY: (f32, f32) = (0.5, 1.5);
    /// Extra downward velocity given to a particle sliding off the logo
    pub const FALL_OFF_BIAS: f32 = 1.0;

    /// Fallback screen size when the host reports nothing
    pub const DEFAULT_SCREEN_W: u32 = 320;
    pub const DEFAULT_SCREEN_H: u32 = 240;

    /// Logo bounding box (local frame, origin at the logo center)
    pub const LOGO_LEFT: f32 = -45.0;
    pub const LOGO_RIGHT: f32 = 45.0;
    pub const LOGO_TOP: f32 = -12.0;
    pub const LOGO_BOTTOM: f32 = 12.0;
}

/// Rotate `v` by the angle whose sine and cosine are given
#[inline]
pub fn rotate(v: Vec2, sin: f32, cos: f32) -> Vec2 {
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Rotate `v` by the inverse of the angle whose sine and cosine are given
#[inline]
pub fn rotate_inverse(v: Vec2, sin: f32, cos: f32) -> Vec2 {
    Vec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}
