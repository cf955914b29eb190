//! # Strata
//!
//! A generic arithmetic kernel over rings composed at runtime.
//!
//! Rings are described once, in an arena, by composing leaves (arbitrary
//! precision integers, machine words) with constructors (quotients,
//! polynomials, fractions, complex extensions). Elements are plain slot
//! runs whose meaning comes entirely from the ring they are used with.
//!
//! ## Features
//!
//! - **Integer Fast Path**: inline `i64` values that promote on overflow
//! - **Hash-Consed Rings**: structurally equal rings share one handle
//! - **Generic Dispatch**: one set of operations for every ring tower
//! - **Polynomials**: dense, normalised, over any ring in the arena
//!
//! ## Quick Start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut arena = RingArena::new();
//! let z = arena.integer();
//! let q = arena.fraction(z, z).unwrap();
//! let qi = arena.complex(q);
//!
//! let ring = Ring::new(&arena, qi);
//! let mut x = ring.elem_si(2);
//! ring.pow_assign(&mut x, 10);
//! assert!(ring.equal(&x, &ring.elem_si(1024)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use strata_core as core;
pub use strata_integers as integers;
pub use strata_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use strata_core::{Layout, RingArena, RingError, RingHandle, RingKind, RingNode, Slot};
    pub use strata_integers::{Integer, WordModulus};
    pub use strata_rings::{Elem, PolyRing, Ring};
}
