//! Platform abstraction layer
//!
//! Capabilities the host hands to the simulation:
//! - Monotonic millisecond time (only gates the start-up delay)
//! - Uniform random numbers (spawn placement)
//! - Pre-decoded input events

use std::cell::Cell;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Monotonic millisecond clock
pub trait MonotonicClock {
    fn now_ms(&self) -> u64;

    /// Milliseconds since an earlier reading, zero if `since` is in the future
    fn elapsed_ms(&self, since: u64) -> u64 {
        self.now_ms().saturating_sub(since)
    }
}

/// Wall clock backed by [`Instant`], zero at construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl MonotonicClock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Uniform random numbers
pub trait RandomSource {
    /// Value in `[0, 1)`
    fn uniform(&mut self) -> f32;
    /// Integer in `[lo, hi)`; returns `lo` for an empty range
    fn uniform_int(&mut self, lo: i32, hi: i32) -> i32;
    /// Value in `[lo, hi)`; returns `lo` for an empty range
    fn uniform_range(&mut self, lo: f32, hi: f32) -> f32;
}

/// Seeded PCG generator, reproducible per seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn uniform_int(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    fn uniform_range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }
}

/// Input events for a single tick, already decoded by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Start or stop the logo rotating
    pub toggle_rotation: bool,
    /// Discard the run and start over
    pub reset: bool,
    /// Leave the simulation
    pub exit: bool,
}
