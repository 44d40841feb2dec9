//! Fixed-capacity particle pools
//!
//! Slots are allocated lowest-index-first, so a run is reproducible for a
//! given seed. A full pool refuses new particles instead of growing.

use serde::{Deserialize, Serialize};

/// Index arena of optional slots with a hard capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<Option<T>>,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.first_free().is_none()
    }

    /// Lowest free slot index
    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Store `item` in the lowest free slot, or hand nothing back if full
    pub fn spawn(&mut self, item: T) -> Option<usize> {
        let index = self.first_free()?;
        self.slots[index] = Some(item);
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).and_then(Option::as_mut)
    }

    /// Free a slot, returning what was in it
    pub fn release(&mut self, index: usize) -> Option<T> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Active particles with their slot index, in slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}
