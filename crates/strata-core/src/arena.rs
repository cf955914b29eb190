//! Arena storage for ring descriptors.
//!
//! Rings are built once and read many times. The arena owns every
//! descriptor; composites refer to their sub-rings by handle, so a
//! sub-ring lives exactly as long as any ring built from it.

use hashbrown::HashMap;
use std::fmt;
use strata_integers::{Integer, WordModulus};
use tracing::{debug, trace, warn};

use crate::error::{RingError, RingResult};
use crate::handle::RingHandle;
use crate::layout::Layout;
use crate::node::{Modulus, RingKind, RingNode};

/// The arena holding ring descriptors.
///
/// Descriptors are stored contiguously in a `Vec`, with hash-consing
/// ensuring each structurally unique ring is stored exactly once.
#[derive(Debug, Default)]
pub struct RingArena {
    /// Storage for all descriptors.
    nodes: Vec<RingNode>,
    /// Element layout of each descriptor, indexed like `nodes`.
    layouts: Vec<Layout>,
    /// Interning table: maps descriptor content to its handle.
    intern_map: HashMap<RingNode, RingHandle>,
}

impl RingArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            layouts: Vec::with_capacity(capacity),
            intern_map: HashMap::with_capacity(capacity),
        }
    }

    /// Interns a descriptor, returning its handle.
    ///
    /// If an identical descriptor already exists, returns the existing
    /// handle.
    ///
    /// # Panics
    ///
    /// Panics if a child handle does not belong to this arena, or if the
    /// arena is full.
    fn intern(&mut self, node: RingNode) -> RingHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            trace!(%handle, kind = %node.kind(), "ring already interned");
            return handle;
        }

        let layout = self.compute_layout(&node);
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");

        let handle = RingHandle::new(index as u32);
        debug!(%handle, kind = %node.kind(), size = layout.size(), "interned ring");
        self.nodes.push(node.clone());
        self.layouts.push(layout);
        self.intern_map.insert(node, handle);
        handle
    }

    fn compute_layout(&self, node: &RingNode) -> Layout {
        match node {
            RingNode::Integer | RingNode::MachineInteger => Layout::Scalar,
            RingNode::Polynomial { .. } => Layout::Header,
            RingNode::Quotient { base, .. } => Layout::Wrapped {
                size: self.size(*base),
            },
            RingNode::Fraction { numer, denom } => {
                let split = self.size(*numer);
                Layout::Pair {
                    size: split + self.size(*denom),
                    split,
                }
            }
            RingNode::Complex { base } => {
                let split = self.size(*base);
                Layout::Pair {
                    size: 2 * split,
                    split,
                }
            }
        }
    }

    /// Gets the descriptor at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle is invalid.
    #[must_use]
    pub fn get(&self, handle: RingHandle) -> &RingNode {
        &self.nodes[handle.index() as usize]
    }

    /// Returns the element layout of a ring.
    ///
    /// # Panics
    ///
    /// Panics if the handle is invalid.
    #[must_use]
    pub fn layout(&self, handle: RingHandle) -> Layout {
        self.layouts[handle.index() as usize]
    }

    /// Returns the number of slots one element of the ring occupies.
    #[must_use]
    pub fn size(&self, handle: RingHandle) -> usize {
        self.layout(handle).size()
    }

    /// Returns the kind of a ring.
    #[must_use]
    pub fn kind(&self, handle: RingHandle) -> RingKind {
        self.get(handle).kind()
    }

    /// Returns the slot offset of the denominator for a fraction ring.
    #[must_use]
    pub fn denom_offset(&self, handle: RingHandle) -> Option<usize> {
        match self.get(handle) {
            RingNode::Fraction { .. } => self.layout(handle).split(),
            _ => None,
        }
    }

    /// Returns the number of descriptors in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Constructors ===

    /// Creates the ring of arbitrary precision integers.
    pub fn integer(&mut self) -> RingHandle {
        self.intern(RingNode::Integer)
    }

    /// Creates the ring of machine words.
    pub fn machine_integer(&mut self) -> RingHandle {
        self.intern(RingNode::MachineInteger)
    }

    /// Creates the polynomial ring `base[x]`.
    pub fn polynomial(&mut self, base: RingHandle) -> RingHandle {
        self.intern(RingNode::Polynomial { base })
    }

    /// Creates the complex extension `base[i]`.
    pub fn complex(&mut self, base: RingHandle) -> RingHandle {
        self.intern(RingNode::Complex { base })
    }

    /// Creates the ring of formal fractions `numer / denom`.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleFraction` if `denom` does not act on `numer`.
    pub fn fraction(&mut self, numer: RingHandle, denom: RingHandle) -> RingResult<RingHandle> {
        if !self.acts_on(denom, numer) {
            warn!(%numer, %denom, "rejected fraction composition");
            return Err(RingError::IncompatibleFraction { numer, denom });
        }
        Ok(self.intern(RingNode::Fraction { numer, denom }))
    }

    /// Creates the quotient `base / (modulus)`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedQuotientBase` unless `base` is an integer leaf,
    /// and `InvalidModulus` if the modulus is not positive or, over machine
    /// words, does not fit a word.
    pub fn quotient(&mut self, base: RingHandle, modulus: &Integer) -> RingResult<RingHandle> {
        let kind = self.kind(base);
        let invalid = || RingError::InvalidModulus {
            modulus: modulus.clone(),
            base: kind,
        };

        let modulus = match kind {
            RingKind::PlainInteger => {
                if modulus <= &Integer::new(0) {
                    return Err(invalid());
                }
                Modulus::Integer(modulus.clone())
            }
            RingKind::MachineInteger => {
                let word = modulus
                    .to_i64()
                    .and_then(|m| u64::try_from(m).ok())
                    .or_else(|| u64::try_from(modulus.to_big()).ok())
                    .and_then(WordModulus::new)
                    .ok_or_else(invalid)?;
                Modulus::Word(word)
            }
            other => {
                warn!(%base, kind = %other, "rejected quotient base");
                return Err(RingError::UnsupportedQuotientBase(other));
            }
        };

        Ok(self.intern(RingNode::Quotient { base, modulus }))
    }

    /// Returns true if elements of `scalar` can multiply elements of
    /// `target`.
    ///
    /// A ring acts on itself, on polynomials and complex numbers over a
    /// ring it acts on, on fractions whose numerator ring it acts on, and
    /// on quotients of itself. Machine words act on a word quotient only
    /// when the modulus divides 2^64; for any other modulus, reducing a
    /// word is not compatible with wrapping arithmetic.
    #[must_use]
    pub fn acts_on(&self, scalar: RingHandle, target: RingHandle) -> bool {
        if scalar == target {
            return true;
        }
        match self.get(target) {
            RingNode::Polynomial { base } | RingNode::Complex { base } => {
                self.acts_on(scalar, *base)
            }
            RingNode::Fraction { numer, .. } => self.acts_on(scalar, *numer),
            RingNode::Quotient { base, modulus } => {
                *base == scalar
                    && match modulus {
                        Modulus::Integer(_) => true,
                        Modulus::Word(m) => m.value().is_power_of_two(),
                    }
            }
            RingNode::Integer | RingNode::MachineInteger => false,
        }
    }

    /// Returns the nesting depth of a ring; leaves have depth zero.
    #[must_use]
    pub fn depth(&self, handle: RingHandle) -> usize {
        self.get(handle)
            .children()
            .iter()
            .map(|child| self.depth(*child) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns a printable view of a ring.
    #[must_use]
    pub fn display(&self, handle: RingHandle) -> RingDisplay<'_> {
        RingDisplay {
            arena: self,
            handle,
        }
    }
}

/// Display adapter for a ring descriptor.
pub struct RingDisplay<'a> {
    arena: &'a RingArena,
    handle: RingHandle,
}

impl fmt::Display for RingDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let child = |handle| self.arena.display(handle);
        match self.arena.get(self.handle) {
            RingNode::Integer => write!(f, "ZZ"),
            RingNode::MachineInteger => write!(f, "UInt64"),
            RingNode::Quotient { base, modulus } => write!(f, "{}/({modulus})", child(*base)),
            RingNode::Polynomial { base } => write!(f, "{}[x]", child(*base)),
            RingNode::Fraction { numer, denom } => {
                write!(f, "Frac({}, {})", child(*numer), child(*denom))
            }
            RingNode::Complex { base } => write!(f, "{}[i]", child(*base)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_rings() {
        let mut arena = RingArena::with_capacity(2);
        let z = arena.integer();
        let w = arena.machine_integer();

        assert_eq!(arena.size(z), 1);
        assert_eq!(arena.size(w), 1);
        assert!(arena.get(z).is_leaf());
        assert_eq!(arena.depth(z), 0);
    }

    #[test]
    fn test_hash_consing() {
        let mut arena = RingArena::new();

        let z = arena.integer();
        let zx = arena.polynomial(z);
        let z2 = arena.integer();
        let zx2 = arena.polynomial(z2);

        assert_eq!(z, z2);
        assert_eq!(zx, zx2);
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_composite_sizes() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let zi = arena.complex(z);
        let zq = arena.fraction(z, z).unwrap();
        let zxq = arena.fraction(zx, z).unwrap();
        let zqi = arena.complex(zq);

        assert_eq!(arena.size(zx), 1);
        assert_eq!(arena.size(zi), 2);
        assert_eq!(arena.size(zq), 2);
        assert_eq!(arena.denom_offset(zq), Some(1));
        assert_eq!(arena.size(zxq), 2);
        assert_eq!(arena.size(zqi), 4);
        assert_eq!(arena.denom_offset(zqi), None);
        assert_eq!(arena.depth(zqi), 2);
    }

    #[test]
    fn test_fraction_requires_action() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);

        // Z[x] does not act on Z
        let err = arena.fraction(z, zx).unwrap_err();
        assert_eq!(err, RingError::IncompatibleFraction { numer: z, denom: zx });

        let w = arena.machine_integer();
        assert!(arena.fraction(zx, w).is_err());
        assert!(arena.fraction(zx, z).is_ok());
    }

    #[test]
    fn test_word_quotient_fraction_needs_power_of_two() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let w = arena.machine_integer();
        let w7 = arena.quotient(w, &Integer::new(7)).unwrap();
        let w256 = arena.quotient(w, &Integer::new(256)).unwrap();
        let z7 = arena.quotient(z, &Integer::new(7)).unwrap();

        // 2^70 wraps to zero in machine words but not mod 7
        assert_eq!(
            arena.fraction(w7, w),
            Err(RingError::IncompatibleFraction { numer: w7, denom: w })
        );
        assert!(!arena.acts_on(w, w7));

        assert!(arena.acts_on(w, w256));
        assert!(arena.fraction(w256, w).is_ok());
        assert!(arena.fraction(z7, z).is_ok());
        assert!(arena.fraction(w7, w7).is_ok());
    }

    #[test]
    fn test_quotient_validation() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let w = arena.machine_integer();
        let zx = arena.polynomial(z);

        let z7 = arena.quotient(z, &Integer::new(7)).unwrap();
        assert_eq!(arena.size(z7), 1);
        assert_eq!(arena.kind(z7), RingKind::Quotient);

        let w7 = arena.quotient(w, &Integer::new(7)).unwrap();
        assert_ne!(z7, w7);

        let big_word = Integer::from(u64::MAX);
        assert!(arena.quotient(w, &big_word).is_ok());

        assert!(matches!(
            arena.quotient(z, &Integer::new(0)),
            Err(RingError::InvalidModulus { .. })
        ));
        assert!(matches!(
            arena.quotient(w, &Integer::new(-3)),
            Err(RingError::InvalidModulus { .. })
        ));
        assert_eq!(
            arena.quotient(zx, &Integer::new(7)),
            Err(RingError::UnsupportedQuotientBase(RingKind::Polynomial))
        );
    }

    #[test]
    fn test_display() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let zq = arena.fraction(zx, z).unwrap();
        let z5 = arena.quotient(z, &Integer::new(5)).unwrap();
        let z5i = arena.complex(z5);

        assert_eq!(arena.display(zq).to_string(), "Frac(ZZ[x], ZZ)");
        assert_eq!(arena.display(z5i).to_string(), "ZZ/(5)[i]");
    }
}
