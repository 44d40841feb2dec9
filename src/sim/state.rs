//! Simulation state and core types
//!
//! Everything a tick reads or writes lives in [`SimState`]. Rendering only
//! ever borrows it immutably.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ground::GroundField;
use super::pool::Pool;
use super::rotation::{Orientation, RotationModel};
use crate::consts::*;
use crate::settings::{Settings, SettingsError};

/// Coarse simulation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Start-up delay, nothing moves
    Waiting,
    /// Snow is falling
    Active,
}

/// A free-falling flake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snowflake {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Position before the last integration step
    pub prev_pos: Vec2,
}

impl Snowflake {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            prev_pos: pos,
        }
    }

    /// Semi-implicit Euler step: velocity first, then position
    pub fn integrate(&mut self, gravity: f32) {
        self.prev_pos = self.pos;
        self.vel.y += gravity;
        self.pos += self.vel;
    }

    /// Y coordinate of the flake's bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + FLAKE_SIZE
    }
}

/// Side of the logo a pile particle rests on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// Nearest-edge tie-break order
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Top and bottom edges slide along local X, left and right along local Y
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// A particle stuck to (and sliding along) one edge of the logo
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PileParticle {
    /// Position in the logo's local frame
    pub local: Vec2,
    pub edge: Edge,
    /// Signed speed along the edge
    pub slide_vel: f32,
}

impl PileParticle {
    pub fn new(local: Vec2, edge: Edge) -> Self {
        Self {
            local,
            edge,
            slide_vel: 0.0,
        }
    }

    /// Coordinate that moves while sliding
    #[inline]
    pub fn along(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.local.x
        } else {
            self.local.y
        }
    }
}

/// Axis-aligned logo rectangle in local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogoGeometry {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for LogoGeometry {
    fn default() -> Self {
        Self {
            left: LOGO_LEFT,
            right: LOGO_RIGHT,
            top: LOGO_TOP,
            bottom: LOGO_BOTTOM,
        }
    }
}

impl LogoGeometry {
    /// Closed containment test
    pub fn contains(&self, local: Vec2) -> bool {
        local.x >= self.left && local.x <= self.right && local.y >= self.top && local.y <= self.bottom
    }

    pub fn distance_to_edge(&self, local: Vec2, edge: Edge) -> f32 {
        match edge {
            Edge::Top => (local.y - self.top).abs(),
            Edge::Bottom => (local.y - self.bottom).abs(),
            Edge::Left => (local.x - self.left).abs(),
            Edge::Right => (local.x - self.right).abs(),
        }
    }

    /// Closest edge to `local`; ties go to the earlier entry of [`Edge::ALL`]
    pub fn nearest_edge(&self, local: Vec2) -> Edge {
        let mut best = Edge::Top;
        let mut best_dist = self.distance_to_edge(local, Edge::Top);
        for edge in Edge::ALL.into_iter().skip(1) {
            let d = self.distance_to_edge(local, edge);
            if d < best_dist {
                best = edge;
                best_dist = d;
            }
        }
        best
    }

    /// Project `local` onto `edge`, clamped to the edge's extent
    pub fn snap(&self, local: Vec2, edge: Edge) -> Vec2 {
        let x = local.x.clamp(self.left, self.right);
        let y = local.y.clamp(self.top, self.bottom);
        match edge {
            Edge::Top => Vec2::new(x, self.top),
            Edge::Bottom => Vec2::new(x, self.bottom),
            Edge::Left => Vec2::new(self.left, y),
            Edge::Right => Vec2::new(self.right, y),
        }
    }

    /// Whether a slide coordinate is still on the given edge
    pub fn within_extent(&self, edge: Edge, along: f32) -> bool {
        if edge.is_horizontal() {
            along >= self.left && along <= self.right
        } else {
            along >= self.top && along <= self.bottom
        }
    }
}

/// Per-run particle bookkeeping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub spawned: u64,
    pub landed_on_ground: u64,
    pub stuck_to_logo: u64,
    pub lost_below_floor: u64,
    pub slid_off: u64,
    /// Logo hits lost because the pile pool was full
    pub dropped_pile_full: u64,
    /// Fall-offs lost because the snow pool was full
    pub dropped_snow_full: u64,
    pub melt_passes: u64,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub settings: Settings,
    pub stage: Stage,
    /// Clock reading when the current run started
    pub started_at_ms: u64,
    /// Whether the logo turns each tick
    pub rotating: bool,
    /// Active ticks since the run started
    pub tick_count: u64,
    pub rotation: RotationModel,
    pub ground: GroundField,
    pub snow: Pool<Snowflake>,
    pub pile: Pool<PileParticle>,
    pub logo: LogoGeometry,
    /// Logo center in screen coordinates
    pub center: Vec2,
    pub stats: SimStats,
}

impl SimState {
    /// Create a fresh run from already validated settings.
    ///
    /// Zero rotation steps or a zero melt rate would panic later, so callers
    /// outside the crate go through [`SimState::try_new`].
    pub(crate) fn new(settings: Settings, now_ms: u64) -> Self {
        let rotation = match settings.rotation_step {
            Some(step) => RotationModel::new(settings.rotation_steps, step),
            None => RotationModel::full_turn(settings.rotation_steps),
        };
        let center = Vec2::new(
            (settings.screen_width / 2) as f32,
            (settings.screen_height / 2) as f32,
        );
        Self {
            stage: Stage::Waiting,
            started_at_ms: now_ms,
            rotating: false,
            tick_count: 0,
            rotation,
            ground: GroundField::new(settings.screen_width, settings.screen_height),
            snow: Pool::with_capacity(settings.max_snow),
            pile: Pool::with_capacity(settings.max_pile),
            logo: LogoGeometry::default(),
            center,
            stats: SimStats::default(),
            settings,
        }
    }

    /// Validate `settings` and create a fresh run
    pub fn try_new(settings: Settings, now_ms: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(settings, now_ms))
    }

    /// Return every pool, counter and the ground to start-of-run values
    pub fn reset(&mut self, now_ms: u64) {
        self.stage = Stage::Waiting;
        self.started_at_ms = now_ms;
        self.rotating = false;
        self.tick_count = 0;
        self.rotation.reset();
        self.ground.reset();
        self.snow.clear();
        self.pile.clear();
        self.stats = SimStats::default();
        log::info!("Simulation reset");
    }

    /// Flip logo rotation; ignored until the run is active
    pub fn toggle_rotation(&mut self) {
        if self.stage != Stage::Active {
            return;
        }
        self.rotating = !self.rotating;
        log::info!("Logo rotation {}", if self.rotating { "on" } else { "off" });
    }

    pub fn orientation(&self) -> Orientation {
        self.rotation.current()
    }

    pub fn screen_height(&self) -> f32 {
        self.settings.screen_height as f32
    }
}
