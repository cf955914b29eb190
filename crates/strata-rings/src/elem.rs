//! Owned elements.

use smallvec::SmallVec;
use std::ops::{Deref, DerefMut};
use strata_core::Slot;

/// An owned element: a run of slots interpreted through a ring.
///
/// Leaf elements and two-slot composites (complex integers, integer
/// fractions) are stored inline without a heap allocation for the
/// container. An element carries no ring; it is meaningless on its own.
#[derive(Clone, Debug, Default)]
pub struct Elem(SmallVec<[Slot; 2]>);

impl Elem {
    /// Creates an element of `size` default slots.
    ///
    /// The slots must be initialised through a ring (`Ring::zero`) before
    /// any arithmetic; `Ring::new_elem` does both.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        let mut slots = SmallVec::with_capacity(size);
        slots.resize_with(size, Slot::default);
        Self(slots)
    }

    /// Creates an element by copying a run of slots.
    #[must_use]
    pub fn from_slots(slots: &[Slot]) -> Self {
        Self(SmallVec::from(slots))
    }

    /// Returns true if the slots are stored without a heap allocation.
    #[must_use]
    pub fn is_inline(&self) -> bool {
        !self.0.spilled()
    }
}

impl Deref for Elem {
    type Target = [Slot];

    fn deref(&self) -> &[Slot] {
        &self.0
    }
}

impl DerefMut for Elem {
    fn deref_mut(&mut self) -> &mut [Slot] {
        &mut self.0
    }
}

impl From<&[Slot]> for Elem {
    fn from(slots: &[Slot]) -> Self {
        Self::from_slots(slots)
    }
}
