//! Snow accumulated on the ground line
//!
//! The ground is split into fixed-width columns. Each column stores the Y
//! coordinate of its topmost snow pixel, so a smaller value means a taller
//! pile and `floor` (the screen height) means bare ground.

use serde::{Deserialize, Serialize};

use crate::consts::{COLUMN_WIDTH, PILE_STEP};
use crate::settings::{MAX_SCREEN_H, MAX_SCREEN_W};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundField {
    heights: Vec<i32>,
    floor: i32,
}

impl GroundField {
    /// Bare ground covering a screen of the given size.
    ///
    /// Dimensions beyond the accepted maximum are clamped to it.
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        let width = i32::try_from(screen_width.min(MAX_SCREEN_W)).unwrap_or(i32::MAX);
        let floor = i32::try_from(screen_height.min(MAX_SCREEN_H)).unwrap_or(i32::MAX);
        let columns = usize::try_from(width / COLUMN_WIDTH).unwrap_or(0) + 1;
        Self {
            heights: vec![floor; columns],
            floor,
        }
    }

    /// Column index for a world X coordinate (may be out of range)
    #[inline]
    pub fn column_for_x(x: f32) -> i32 {
        (x / COLUMN_WIDTH as f32).floor() as i32
    }

    pub fn column_count(&self) -> usize {
        self.heights.len()
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn height(&self, column: usize) -> Option<i32> {
        self.heights.get(column).copied()
    }

    pub fn heights(&self) -> &[i32] {
        &self.heights
    }

    /// Move every raised column one pixel back toward the floor
    pub fn melt(&mut self) {
        for h in self.heights.iter_mut().filter(|h| **h < self.floor) {
            *h += 1;
        }
    }

    /// Absorb a flake whose bottom edge is at `flake_bottom_y`.
    ///
    /// Returns false, leaving the field untouched, if the column is out of
    /// range or the flake has not reached the pile yet.
    pub fn try_land(&mut self, column: i32, flake_bottom_y: f32) -> bool {
        let Some(h) = usize::try_from(column)
            .ok()
            .and_then(|c| self.heights.get_mut(c))
        else {
            return false;
        };
        if flake_bottom_y < *h as f32 {
            return false;
        }
        *h = (*h - PILE_STEP).max(0);
        true
    }

    pub fn reset(&mut self) {
        self.heights.fill(self.floor);
    }

    #[cfg(test)]
    pub(crate) fn set_height(&mut self, column: usize, height: i32) {
        self.heights[column] = height.clamp(0, self.floor);
    }
}
