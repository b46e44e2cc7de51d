//! Pending guess buffer
//!
//! Collects one color at a time into the next empty slot of the current row.
//! Colors picked once the row is full are ignored.

use crate::core::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    slots: Vec<Option<Color>>,
}

impl GuessBuffer {
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    /// Fill the first empty slot with `color`
    ///
    /// Returns `false` (and drops the color) if every slot is already filled.
    pub fn push(&mut self, color: Color) -> bool {
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(color);
                true
            }
            None => false,
        }
    }

    /// Empty the last filled slot
    pub fn pop(&mut self) -> Option<Color> {
        self.slots.iter_mut().rev().find_map(Option::take)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Clear and resize for a code of `length`
    pub fn reset(&mut self, length: usize) {
        self.slots.clear();
        self.slots.resize(length, None);
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Color>] {
        &self.slots
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.slots.len()
    }

    /// Number of filled slots
    #[must_use]
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The filled colors in slot order; `None` until the row is complete
    #[must_use]
    pub fn to_guess(&self) -> Option<Vec<Color>> {
        self.slots.iter().cloned().collect()
    }
}
