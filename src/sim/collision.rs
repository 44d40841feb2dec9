//! Flake collision against the ground and the rotating logo
//!
//! The logo is tested in its own frame: each flake is carried into local
//! coordinates with the inverse rotation, where the logo is a plain
//! axis-aligned box.

use glam::Vec2;

use super::ground::GroundField;
use super::pool::Pool;
use super::rotation::Orientation;
use super::state::{LogoGeometry, PileParticle, SimState, SimStats, Snowflake};

/// What happened to a flake during its collision step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlakeOutcome {
    /// Still falling
    Falling,
    /// Absorbed into a ground column
    Landed { column: i32 },
    /// Stuck to the logo; `pile_slot` is `None` when the pile pool was full
    Stuck { pile_slot: Option<usize> },
    /// Fell past the bottom of the screen
    Lost,
}

impl FlakeOutcome {
    pub fn removes_flake(&self) -> bool {
        !matches!(self, FlakeOutcome::Falling)
    }
}

/// Test a flake position against the logo.
///
/// Returns the snapped pile particle if the point is inside the box.
pub fn logo_hit(
    pos: Vec2,
    center: Vec2,
    orientation: Orientation,
    logo: &LogoGeometry,
) -> Option<PileParticle> {
    let local = orientation.to_local(pos - center);
    if !logo.contains(local) {
        return None;
    }
    let edge = logo.nearest_edge(local);
    Some(PileParticle::new(logo.snap(local, edge), edge))
}

/// Resolve one already-integrated flake against ground, logo and floor
#[allow(clippy::too_many_arguments)]
pub fn collide_flake(
    flake: &Snowflake,
    ground: &mut GroundField,
    pile: &mut Pool<PileParticle>,
    logo: &LogoGeometry,
    center: Vec2,
    orientation: Orientation,
    screen_height: f32,
    stats: &mut SimStats,
) -> FlakeOutcome {
    let column = GroundField::column_for_x(flake.pos.x);
    if ground.try_land(column, flake.bottom()) {
        stats.landed_on_ground += 1;
        return FlakeOutcome::Landed { column };
    }

    if let Some(particle) = logo_hit(flake.pos, center, orientation, logo) {
        let pile_slot = pile.spawn(particle);
        if pile_slot.is_some() {
            stats.stuck_to_logo += 1;
        } else {
            stats.dropped_pile_full += 1;
            log::trace!("Pile pool full, dropping flake at {}", flake.pos);
        }
        return FlakeOutcome::Stuck { pile_slot };
    }

    if flake.pos.y >= screen_height {
        stats.lost_below_floor += 1;
        return FlakeOutcome::Lost;
    }

    FlakeOutcome::Falling
}

/// Integrate every active flake and resolve its collisions, in slot order
pub fn collision_pass(state: &mut SimState, orientation: Orientation) {
    let gravity = state.settings.gravity;
    let screen_height = state.screen_height();

    for i in 0..state.snow.capacity() {
        let Some(flake) = state.snow.get_mut(i) else {
            continue;
        };
        flake.integrate(gravity);
        let flake = *flake;

        let outcome = collide_flake(
            &flake,
            &mut state.ground,
            &mut state.pile,
            &state.logo,
            state.center,
            orientation,
            screen_height,
            &mut state.stats,
        );
        if outcome.removes_flake() {
            state.snow.release(i);
        }
    }
}
