//! # strata-core
//!
//! Ring descriptors for the strata arithmetic kernel.
//!
//! This crate provides:
//! - Arena-allocated ring descriptors with hash-consing
//! - Type-safe ring handles
//! - Element layouts and typed slot storage
//!
//! ## Design Principles
//!
//! - **Rings as values**: a ring is a runtime descriptor, composed freely
//!   from sub-rings (polynomials, fractions, complex extensions, quotients)
//! - **Flat elements**: an element is a run of typed slots whose meaning is
//!   given entirely by its ring
//! - **Acyclic by construction**: composites name sub-rings by handle, and a
//!   handle can only refer to a ring built earlier

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod error;
pub mod handle;
pub mod layout;
pub mod node;
pub mod slot;

#[cfg(test)]
mod proptests;

pub use arena::{RingArena, RingDisplay};
pub use error::{RingError, RingResult};
pub use handle::RingHandle;
pub use layout::Layout;
pub use node::{Modulus, RingKind, RingNode};
pub use slot::{Poly, Slot};
