//! Fixed tick simulation step
//!
//! One call per rendered frame. The order inside an active tick is fixed:
//! melt, spawn, rotate, collide, slide.

use glam::Vec2;

use super::collision::collision_pass;
use super::slide::slide_pass;
use super::state::{SimState, Snowflake, Stage};
use crate::consts::{SPAWN_VX, SPAWN_VY, SPAWN_Y};
use crate::platform::{MonotonicClock, RandomSource, TickInput};

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep going
    Continue,
    /// The run was reset this tick
    Reset,
    /// The user asked to leave
    Exit,
}

/// Advance the simulation by one tick
pub fn tick(
    state: &mut SimState,
    input: &TickInput,
    clock: &impl MonotonicClock,
    rng: &mut impl RandomSource,
) -> TickOutcome {
    if input.exit {
        return TickOutcome::Exit;
    }
    if input.toggle_rotation {
        state.toggle_rotation();
    }
    if input.reset {
        state.reset(clock.now_ms());
        return TickOutcome::Reset;
    }

    if state.stage == Stage::Waiting
        && clock.elapsed_ms(state.started_at_ms) > state.settings.start_delay_ms
    {
        state.stage = Stage::Active;
        log::info!("Start delay elapsed, snow is falling");
    }
    if state.stage != Stage::Active {
        return TickOutcome::Continue;
    }

    state.tick_count += 1;

    if state.tick_count % state.settings.melt_rate == 0 {
        state.ground.melt();
        state.stats.melt_passes += 1;
        log::debug!("Melt pass at tick {}", state.tick_count);
    }

    if rng.uniform() < state.settings.spawn_chance {
        try_spawn(state, rng);
    }

    if state.rotating {
        state.rotation.advance();
    }
    let orientation = state.orientation();

    collision_pass(state, orientation);
    slide_pass(state, orientation);

    TickOutcome::Continue
}

/// Drop a new flake in from above the screen if a slot is free.
///
/// Nothing is drawn from `rng` when the pool is full.
pub fn try_spawn(state: &mut SimState, rng: &mut impl RandomSource) -> Option<usize> {
    state.snow.first_free()?;
    let width = i32::try_from(state.settings.screen_width).unwrap_or(i32::MAX);
    let x = rng.uniform_int(0, width) as f32;
    let vx = rng.uniform_range(SPAWN_VX.0, SPAWN_VX.1);
    let vy = rng.uniform_range(SPAWN_VY.0, SPAWN_VY.1);
    let slot = state
        .snow
        .spawn(Snowflake::new(Vec2::new(x, SPAWN_Y), Vec2::new(vx, vy)))?;
    state.stats.spawned += 1;
    Some(slot)
}
