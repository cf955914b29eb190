//! Type-safe ring handles.
//!
//! Handles are 32-bit indices into the ring arena. A composite ring refers
//! to its sub-rings by handle, so the arena alone owns every descriptor.

use std::fmt;

/// A handle to a ring descriptor in the arena.
///
/// This is a lightweight 32-bit index that can be copied freely.
/// Two handles from the same arena are equal if and only if they name
/// structurally identical rings, thanks to hash-consing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingHandle(u32);

impl RingHandle {
    /// Creates a new handle from an index.
    ///
    /// This is primarily for internal use by the arena.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for RingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring({})", self.0)
    }
}

impl fmt::Display for RingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
