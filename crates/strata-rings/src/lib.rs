//! # strata-rings
//!
//! Generic element arithmetic over runtime-composed rings.
//!
//! This crate provides:
//! - `Ring`, a view of a ring descriptor that dispatches every element
//!   operation on the descriptor's kind
//! - Owned element storage (`Elem`)
//! - Generic vector primitives (`vec`)
//! - Dense polynomials over any ring (`PolyRing`)
//! - Seeded random elements for testing and display adapters
//!
//! ## Example
//!
//! ```
//! use strata_core::RingArena;
//! use strata_rings::Ring;
//!
//! let mut arena = RingArena::new();
//! let z = arena.integer();
//! let zx = arena.polynomial(z);
//! let ring = Ring::new(&arena, zx);
//! let pr = ring.as_poly_ring().unwrap();
//!
//! let mut x = ring.new_elem();
//! *x[0].as_poly_mut() = pr.from_coeffs_si(&[1, 1]);
//! ring.pow_assign(&mut x, 2);
//! assert_eq!(ring.display(&x).to_string(), "1 + 2*x + 1*x^2");
//! ```
//!
//! ## Performance Notes
//!
//! - Integer vectors and polynomials over the integers skip per-element
//!   dispatch for addition, subtraction and copies
//! - Leaf and two-part elements are stored inline; only polynomial
//!   coefficients live out of line

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod display;
pub mod elem;
pub mod poly;
pub mod random;
pub mod ring;
pub mod vec;

#[cfg(test)]
mod proptests;

pub use display::ElemDisplay;
pub use elem::Elem;
pub use poly::PolyRing;
pub use random::DEFAULT_LEVEL_SIZE;
pub use ring::Ring;
