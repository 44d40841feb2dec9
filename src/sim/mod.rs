//! Deterministic simulation module
//!
//! All snow physics lives here. This module must stay pure and deterministic:
//! - One fixed step per tick, no delta time
//! - Randomness and time only through injected sources
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod ground;
pub mod pool;
pub mod rotation;
pub mod slide;
pub mod state;
pub mod tick;

pub use collision::{FlakeOutcome, collide_flake, collision_pass, logo_hit};
pub use ground::GroundField;
pub use pool::Pool;
pub use rotation::{Orientation, RotationModel};
pub use slide::{LocalGravity, release_flake, slide_particle, slide_pass};
pub use state::{Edge, LogoGeometry, PileParticle, SimState, SimStats, Snowflake, Stage};
pub use tick::{TickOutcome, tick, try_spawn};
