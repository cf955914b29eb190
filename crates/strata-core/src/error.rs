//! Errors raised while building rings.

use strata_integers::Integer;
use thiserror::Error;

use crate::handle::RingHandle;
use crate::node::RingKind;

/// Errors that can occur when composing ring descriptors.
///
/// Arithmetic never fails; every check happens once, when a ring is built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RingError {
    /// Quotients are only defined over the integer leaves.
    #[error("quotient rings are only supported over integer leaves, got a {0} ring")]
    UnsupportedQuotientBase(RingKind),

    /// The modulus is out of range for the base ring.
    #[error("modulus {modulus} is not valid over a {base} ring")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: Integer,
        /// The kind of the base ring.
        base: RingKind,
    },

    /// The denominator ring cannot multiply numerator elements.
    #[error("denominator ring {denom} does not act on numerator ring {numer}")]
    IncompatibleFraction {
        /// The numerator ring.
        numer: RingHandle,
        /// The denominator ring.
        denom: RingHandle,
    },
}

/// A specialized Result type for ring construction.
pub type RingResult<T> = Result<T, RingError>;
