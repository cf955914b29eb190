//! # strata-integers
//!
//! Integer arithmetic for the strata arithmetic kernel.
//!
//! This crate provides:
//! - Arbitrary precision integers (`Integer`) with an inline fast path
//! - Machine-word modular arithmetic (`WordModulus`)
//!
//! ## Performance Notes
//!
//! - Integers fitting in an `i64` are stored inline and never allocate
//! - Overflowing inline operations promote to a `dashu::IBig`, and results
//!   that fit again are demoted immediately

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod limb;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use limb::WordModulus;
