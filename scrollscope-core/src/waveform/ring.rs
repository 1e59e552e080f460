//! Fixed-capacity sample ring
//!
//! Storage is sized at compile time; the active length is chosen at
//! runtime from the panel width. `head` is both the next slot to be
//! overwritten and the oldest sample.

use heapless::Vec;

use crate::error::ScopeError;

/// Ring buffer of samples
#[derive(Debug, Clone)]
pub struct RingBuffer<const CAP: usize> {
    slots: Vec<i16, CAP>,
    head: usize,
}

impl<const CAP: usize> RingBuffer<CAP> {
    /// Create a ring of `len` zeroed slots
    pub fn new(len: usize) -> Result<Self, ScopeError> {
        let capacity_error = ScopeError::CapacityExceeded {
            requested: len,
            capacity: CAP,
        };
        if len == 0 {
            return Err(capacity_error);
        }

        let mut slots = Vec::new();
        slots.resize(len, 0).map_err(|_| capacity_error)?;

        Ok(Self { slots, head: 0 })
    }

    /// Number of active slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the slot the next `push` overwrites
    pub fn head(&self) -> usize {
        self.head
    }

    /// Overwrite the oldest slot and advance
    pub fn push(&mut self, value: i16) {
        self.slots[self.head] = value;
        self.head = (self.head + 1) % self.slots.len();
    }

    /// Sample `offset` slots after the oldest one, wrapping
    ///
    /// `at(0)` is the oldest sample, `at(len - 1)` the newest.
    pub fn at(&self, offset: usize) -> i16 {
        self.slots[(self.head + offset) % self.slots.len()]
    }

    /// Sample at an absolute slot index
    pub fn slot(&self, index: usize) -> Option<i16> {
        self.slots.get(index).copied()
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = i16> + '_ {
        (0..self.len()).map(move |offset| self.at(offset))
    }
}
