//! Printing elements.

use std::fmt;
use strata_core::{Layout, RingDisplay, RingNode, Slot};

use crate::ring::Ring;

/// Display adapter for an element of a ring.
pub struct ElemDisplay<'r, 's> {
    ring: Ring<'r>,
    slots: &'s [Slot],
}

impl<'a> Ring<'a> {
    /// Returns a printable view of the element `x`.
    #[must_use]
    pub fn display<'s>(&self, x: &'s [Slot]) -> ElemDisplay<'a, 's> {
        ElemDisplay {
            ring: *self,
            slots: x,
        }
    }

    /// Returns a printable view of this ring.
    #[must_use]
    pub fn display_ring(&self) -> RingDisplay<'a> {
        self.arena().display(self.handle())
    }
}

impl fmt::Display for ElemDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ring = &self.ring;
        let x = self.slots;
        match ring.node() {
            RingNode::Integer | RingNode::Quotient { .. } | RingNode::MachineInteger => {
                match &x[0] {
                    Slot::Int(v) => write!(f, "{v}"),
                    Slot::Word(w) => write!(f, "{w}"),
                    Slot::Poly(_) => Err(fmt::Error),
                }
            }
            RingNode::Polynomial { base } => {
                let base = ring.child(*base);
                let stride = base.size();
                let p = x[0].as_poly();
                let mut first = true;
                for (i, c) in p.significant(stride).chunks_exact(stride).enumerate() {
                    if base.is_zero(c) {
                        continue;
                    }
                    if !first {
                        f.write_str(" + ")?;
                    }
                    first = false;
                    write_coeff(f, &base, c)?;
                    match i {
                        0 => {}
                        1 => f.write_str("*x")?,
                        _ => write!(f, "*x^{i}")?,
                    }
                }
                if first {
                    f.write_str("0")?;
                }
                Ok(())
            }
            RingNode::Fraction { numer, denom } => {
                let (n, d) = ring.layout().regions(x);
                f.write_str("(")?;
                write!(f, "{}", ring.child(*numer).display(n))?;
                f.write_str(")/(")?;
                write!(f, "{}", ring.child(*denom).display(d))?;
                f.write_str(")")
            }
            RingNode::Complex { base } => {
                let base = ring.child(*base);
                let (re, im) = ring.layout().regions(x);
                write_coeff(f, &base, re)?;
                f.write_str(" + ")?;
                write_coeff(f, &base, im)?;
                f.write_str("*i")
            }
        }
    }
}

/// Writes a coefficient, parenthesised unless it is a leaf value.
fn write_coeff(f: &mut fmt::Formatter<'_>, ring: &Ring<'_>, x: &[Slot]) -> fmt::Result {
    if matches!(ring.layout(), Layout::Scalar | Layout::Wrapped { .. }) {
        write!(f, "{}", ring.display(x))
    } else {
        write!(f, "({})", ring.display(x))
    }
}

impl fmt::Debug for ElemDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self} in {}", self.ring)
    }
}
