//! Element layouts.
//!
//! An element of a ring is a run of consecutive slots. The layout of a
//! ring says how many slots one element takes and, for two-part
//! composites, where the second part starts.

/// The storage layout of one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One inline slot holding a leaf value.
    Scalar,
    /// One slot holding a polynomial header; coefficients live out of line.
    Header,
    /// Two adjacent regions `[0, split)` and `[split, size)`.
    Pair {
        /// Total number of slots.
        size: usize,
        /// Offset of the second region.
        split: usize,
    },
    /// The layout of the wrapped base ring, reinterpreted.
    Wrapped {
        /// Total number of slots.
        size: usize,
    },
}

impl Layout {
    /// Returns the number of slots one element occupies.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Layout::Scalar | Layout::Header => 1,
            Layout::Pair { size, .. } | Layout::Wrapped { size } => size,
        }
    }

    /// Returns the offset of the second region of a pair layout.
    #[must_use]
    pub const fn split(self) -> Option<usize> {
        match self {
            Layout::Pair { split, .. } => Some(split),
            _ => None,
        }
    }

    /// Splits an element into its two regions.
    ///
    /// # Panics
    ///
    /// Panics if this is not a pair layout or `slots` is too short.
    #[must_use]
    pub fn regions<T>(self, slots: &[T]) -> (&[T], &[T]) {
        let (size, split) = self.expect_pair();
        slots[..size].split_at(split)
    }

    /// Splits an element into its two regions, mutably.
    ///
    /// # Panics
    ///
    /// Panics if this is not a pair layout or `slots` is too short.
    pub fn regions_mut<T>(self, slots: &mut [T]) -> (&mut [T], &mut [T]) {
        let (size, split) = self.expect_pair();
        slots[..size].split_at_mut(split)
    }

    fn expect_pair(self) -> (usize, usize) {
        match self {
            Layout::Pair { size, split } => (size, split),
            other => panic!("layout {other:?} has no regions"),
        }
    }
}
