//! Ring descriptor types.
//!
//! This module defines the ring descriptors stored in the arena.

use smallvec::SmallVec;
use std::fmt;
use strata_integers::{Integer, WordModulus};

use crate::handle::RingHandle;

/// The kind of algebraic structure a ring descriptor stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RingKind {
    /// Arbitrary precision integers.
    PlainInteger,
    /// Machine words with wrapping arithmetic.
    MachineInteger,
    /// Integers modulo a fixed modulus.
    Quotient,
    /// Univariate polynomials over a base ring.
    Polynomial,
    /// Formal fractions `numer / denom`.
    Fraction,
    /// Complex extension `a + b*i` of a base ring.
    Complex,
}

impl fmt::Display for RingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RingKind::PlainInteger => "integer",
            RingKind::MachineInteger => "machine integer",
            RingKind::Quotient => "quotient",
            RingKind::Polynomial => "polynomial",
            RingKind::Fraction => "fraction",
            RingKind::Complex => "complex",
        };
        f.write_str(name)
    }
}

/// The modulus carried by a quotient ring descriptor.
///
/// It lives on the descriptor, never on the elements, and is released
/// exactly once when the arena drops the descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modulus {
    /// A positive modulus for a quotient of the plain integers.
    Integer(Integer),
    /// A nonzero modulus for a quotient of the machine integers.
    Word(WordModulus),
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modulus::Integer(m) => write!(f, "{m}"),
            Modulus::Word(m) => write!(f, "{m}"),
        }
    }
}

/// A ring descriptor stored in the arena.
///
/// Leaf variants have no children. Composite variants refer to their
/// sub-rings by handle; since a handle can only name a node interned
/// earlier, ring trees are acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RingNode {
    // === Leaves ===
    /// Arbitrary precision integers.
    Integer,

    /// Machine words, arithmetic modulo 2^64.
    MachineInteger,

    // === Composites ===
    /// `base / (modulus)`, with `base` an integer leaf.
    Quotient {
        /// The ring being reduced.
        base: RingHandle,
        /// The modulus, stored once for all elements.
        modulus: Modulus,
    },

    /// `base[x]`.
    Polynomial {
        /// The coefficient ring.
        base: RingHandle,
    },

    /// Formal fractions with numerator in `numer` and denominator in `denom`.
    ///
    /// Invariant: `denom` acts on `numer` (see `RingArena::acts_on`).
    Fraction {
        /// The numerator ring.
        numer: RingHandle,
        /// The denominator ring.
        denom: RingHandle,
    },

    /// `base[i]` with `i^2 = -1`.
    Complex {
        /// The ring of real and imaginary parts.
        base: RingHandle,
    },
}

impl RingNode {
    /// Returns the kind of this node.
    #[must_use]
    pub fn kind(&self) -> RingKind {
        match self {
            RingNode::Integer => RingKind::PlainInteger,
            RingNode::MachineInteger => RingKind::MachineInteger,
            RingNode::Quotient { .. } => RingKind::Quotient,
            RingNode::Polynomial { .. } => RingKind::Polynomial,
            RingNode::Fraction { .. } => RingKind::Fraction,
            RingNode::Complex { .. } => RingKind::Complex,
        }
    }

    /// Returns true if this node is a leaf (no children).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, RingNode::Integer | RingNode::MachineInteger)
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> SmallVec<[RingHandle; 2]> {
        match self {
            RingNode::Integer | RingNode::MachineInteger => SmallVec::new(),
            RingNode::Quotient { base, .. }
            | RingNode::Polynomial { base }
            | RingNode::Complex { base } => smallvec::smallvec![*base],
            RingNode::Fraction { numer, denom } => smallvec::smallvec![*numer, *denom],
        }
    }
}
