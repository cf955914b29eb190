//! Random test elements.
//!
//! Generation is driven by a list of size levels, one per nesting level of
//! the ring: bits for integer leaves, maximum length for polynomials.
//! Fractions and complex numbers use the same level for both parts.
//! Missing levels fall back to `DEFAULT_LEVEL_SIZE`.

use rand::Rng;
use strata_core::{Modulus, RingNode, Slot};
use strata_integers::Integer;

use crate::poly::PolyRing;
use crate::ring::Ring;

/// Size used for nesting levels not covered by the caller.
pub const DEFAULT_LEVEL_SIZE: u32 = 4;

/// Attempts at drawing a nonzero denominator before settling for one.
const DENOMINATOR_ATTEMPTS: usize = 8;

/// Splits off the size for the current nesting level.
pub(crate) fn split_level(sizes: &[u32]) -> (u32, &[u32]) {
    match sizes.split_first() {
        Some((level, rest)) => (*level, rest),
        None => (DEFAULT_LEVEL_SIZE, &[]),
    }
}

impl Ring<'_> {
    /// Sets `dst` to a random element.
    ///
    /// `sizes` holds one size per nesting level, outermost first.
    /// Denominators of fractions are nonzero.
    pub fn randtest<R: Rng + ?Sized>(&self, dst: &mut [Slot], rng: &mut R, sizes: &[u32]) {
        match self.node() {
            RingNode::Integer => {
                let (bits, _) = split_level(sizes);
                dst[0] = Slot::Int(Integer::random_bits(rng, bits));
            }
            RingNode::MachineInteger => dst[0] = Slot::Word(rng.gen()),
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let bits = u32::try_from(m.bit_len() + 1).unwrap_or(u32::MAX);
                    dst[0] = Slot::Int(Integer::random_bits(rng, bits).rem_euclid(m));
                }
                Modulus::Word(m) => dst[0] = Slot::Word(m.random(rng)),
            },
            RingNode::Polynomial { base } => {
                if !matches!(dst[0], Slot::Poly(_)) {
                    self.zero(dst);
                }
                let pr = PolyRing::new(*self, self.child(*base));
                pr.randtest(dst[0].as_poly_mut(), rng, sizes);
            }
            RingNode::Fraction { numer, denom } => {
                let (numer, denom) = (self.child(*numer), self.child(*denom));
                let (n, d) = self.layout().regions_mut(dst);
                numer.randtest(n, rng, sizes);
                for _ in 0..DENOMINATOR_ATTEMPTS {
                    denom.randtest(d, rng, sizes);
                    if !denom.is_zero(d) {
                        return;
                    }
                }
                denom.one(d);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let (re, im) = self.layout().regions_mut(dst);
                base.randtest(re, rng, sizes);
                base.randtest(im, rng, sizes);
            }
        }
    }

    /// Allocates a new random element.
    #[must_use]
    pub fn random_elem<R: Rng + ?Sized>(&self, rng: &mut R, sizes: &[u32]) -> crate::Elem {
        let mut elem = self.new_elem();
        self.randtest(&mut elem, rng, sizes);
        elem
    }
}
