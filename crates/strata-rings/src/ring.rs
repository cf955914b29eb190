//! Element dispatch.
//!
//! A `Ring` is a view of one descriptor in a `RingArena`. Every operation
//! takes element storage as slot runs, matches on the descriptor, and
//! either runs leaf arithmetic directly or splits the element by its
//! layout and recurses into the sub-rings.
//!
//! ## Aliasing
//!
//! Operations writing to a separate destination (`add(dst, x, y)`) need
//! `dst` to be distinct from the inputs, which the borrow checker enforces.
//! The aliased forms have their own entry points:
//!
//! | aliased call    | method              |
//! |-----------------|---------------------|
//! | `add(x, x, y)`  | `add_assign(x, y)`  |
//! | `add(x, y, x)`  | `add_assign(x, y)`  |
//! | `sub(x, x, y)`  | `sub_assign(x, y)`  |
//! | `sub(x, y, x)`  | `sub_from(x, y)`    |
//! | `mul(x, x, y)`  | `mul_assign(x, y)`  |
//! | `pow(x, x, e)`  | `pow_assign(x, e)`  |

use num_traits::{One, Zero};
use std::fmt;
use strata_core::{Layout, Modulus, Poly, RingArena, RingHandle, RingKind, RingNode, Slot};
use strata_integers::Integer;

use crate::elem::Elem;
use crate::poly::PolyRing;

/// A ring descriptor together with the arena it lives in.
#[derive(Clone, Copy)]
pub struct Ring<'a> {
    arena: &'a RingArena,
    handle: RingHandle,
}

/// Reduces an integer into `[0, m)`.
fn reduce(x: &mut Integer, m: &Integer) {
    if x.is_negative() || &*x >= m {
        *x = x.rem_euclid(m);
    }
}

/// Writes an integer into a slot, replacing whatever it held.
fn put_int(slot: &mut Slot, value: Integer) {
    match slot {
        Slot::Int(x) => *x = value,
        other => *other = Slot::Int(value),
    }
}

/// Returns the polynomial in a slot, installing an empty one if needed.
fn poly_slot(slot: &mut Slot) -> &mut Poly {
    if !matches!(slot, Slot::Poly(_)) {
        *slot = Slot::Poly(Poly::new());
    }
    slot.as_poly_mut()
}

impl<'a> Ring<'a> {
    /// Creates a view of `handle` in `arena`.
    #[must_use]
    pub fn new(arena: &'a RingArena, handle: RingHandle) -> Self {
        Self { arena, handle }
    }

    /// Returns the handle of this ring.
    #[must_use]
    pub fn handle(&self) -> RingHandle {
        self.handle
    }

    /// Returns the arena this ring lives in.
    #[must_use]
    pub fn arena(&self) -> &'a RingArena {
        self.arena
    }

    /// Returns the descriptor of this ring.
    #[must_use]
    pub fn node(&self) -> &'a RingNode {
        self.arena.get(self.handle)
    }

    /// Returns the kind of this ring.
    #[must_use]
    pub fn kind(&self) -> RingKind {
        self.node().kind()
    }

    /// Returns the element layout of this ring.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.arena.layout(self.handle)
    }

    /// Returns the number of slots one element occupies.
    #[must_use]
    pub fn size(&self) -> usize {
        self.layout().size()
    }

    pub(crate) fn child(&self, handle: RingHandle) -> Self {
        Self::new(self.arena, handle)
    }

    fn poly(&self, base: RingHandle) -> PolyRing<'a> {
        PolyRing::new(*self, self.child(base))
    }

    /// Returns the polynomial view of this ring, if it is a polynomial ring.
    #[must_use]
    pub fn as_poly_ring(&self) -> Option<PolyRing<'a>> {
        match self.node() {
            RingNode::Polynomial { base } => Some(self.poly(*base)),
            _ => None,
        }
    }

    /// Returns the sub-rings of a two-part composite.
    fn pair(&self) -> (Self, Self) {
        match self.node() {
            RingNode::Fraction { numer, denom } => (self.child(*numer), self.child(*denom)),
            RingNode::Complex { base } => (self.child(*base), self.child(*base)),
            other => panic!("{other:?} is not a two-part ring"),
        }
    }

    // === Allocation and constants ===

    /// Allocates a new zero element.
    #[must_use]
    pub fn new_elem(&self) -> Elem {
        let mut elem = Elem::with_size(self.size());
        self.zero(&mut elem);
        elem
    }

    /// Allocates a new element equal to `value`.
    #[must_use]
    pub fn elem_si(&self, value: i64) -> Elem {
        let mut elem = self.new_elem();
        self.set_si(&mut elem, value);
        elem
    }

    /// Sets `dst` to zero.
    ///
    /// This also initialises storage that does not hold an element of
    /// this ring yet.
    pub fn zero(&self, dst: &mut [Slot]) {
        match self.node() {
            RingNode::Integer => put_int(&mut dst[0], Integer::zero()),
            RingNode::MachineInteger => dst[0] = Slot::Word(0),
            RingNode::Quotient { base, .. } => self.child(*base).zero(dst),
            RingNode::Polynomial { base } => {
                let p = poly_slot(&mut dst[0]);
                self.poly(*base).zero(p);
            }
            RingNode::Fraction { .. } => {
                let (numer, denom) = self.pair();
                let (n, d) = self.layout().regions_mut(dst);
                numer.zero(n);
                denom.one(d);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let (re, im) = self.layout().regions_mut(dst);
                base.zero(re);
                base.zero(im);
            }
        }
    }

    /// Sets `dst` to one.
    pub fn one(&self, dst: &mut [Slot]) {
        self.set_si(dst, 1);
    }

    /// Sets `dst` to the image of `value`.
    pub fn set_si(&self, dst: &mut [Slot], value: i64) {
        match self.node() {
            RingNode::Integer => put_int(&mut dst[0], Integer::new(value)),
            // two's complement image in Z/2^64
            RingNode::MachineInteger => dst[0] = Slot::Word(value as u64),
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => put_int(&mut dst[0], Integer::new(value).rem_euclid(m)),
                Modulus::Word(m) => dst[0] = Slot::Word(m.from_signed(value)),
            },
            RingNode::Polynomial { base } => {
                let p = poly_slot(&mut dst[0]);
                self.poly(*base).set_si(p, value);
            }
            RingNode::Fraction { .. } => {
                let (numer, denom) = self.pair();
                let (n, d) = self.layout().regions_mut(dst);
                numer.set_si(n, value);
                denom.set_si(d, 1);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let (re, im) = self.layout().regions_mut(dst);
                base.set_si(re, value);
                base.zero(im);
            }
        }
    }

    // === Copy and negation ===

    /// Sets `dst = src`.
    pub fn set(&self, dst: &mut [Slot], src: &[Slot]) {
        match self.node() {
            RingNode::Integer => dst[0].as_int_mut().assign(src[0].as_int()),
            RingNode::MachineInteger => dst[0] = Slot::Word(src[0].as_word()),
            RingNode::Quotient { base, .. } => self.child(*base).set(dst, src),
            RingNode::Polynomial { base } => {
                self.poly(*base).set(dst[0].as_poly_mut(), src[0].as_poly());
            }
            RingNode::Fraction { .. } | RingNode::Complex { .. } => {
                let (first, second) = self.pair();
                let layout = self.layout();
                let (a, b) = layout.regions(src);
                let (ra, rb) = layout.regions_mut(dst);
                first.set(ra, a);
                second.set(rb, b);
            }
        }
    }

    /// Sets `dst = -x`.
    pub fn neg(&self, dst: &mut [Slot], x: &[Slot]) {
        self.set(dst, x);
        self.neg_assign(dst);
    }

    /// Sets `x = -x`.
    pub fn neg_assign(&self, x: &mut [Slot]) {
        match self.node() {
            RingNode::Integer => x[0].as_int_mut().neg_assign(),
            RingNode::MachineInteger => {
                let w = x[0].as_word_mut();
                *w = w.wrapping_neg();
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let v = x[0].as_int_mut();
                    if !v.is_zero() {
                        let old = v.clone();
                        v.sub_into(m, &old);
                    }
                }
                Modulus::Word(m) => {
                    let w = x[0].as_word_mut();
                    *w = m.neg(*w);
                }
            },
            RingNode::Polynomial { base } => self.poly(*base).neg_assign(x[0].as_poly_mut()),
            RingNode::Fraction { .. } => {
                let (numer, _) = self.pair();
                let (n, _) = self.layout().regions_mut(x);
                numer.neg_assign(n);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let (re, im) = self.layout().regions_mut(x);
                base.neg_assign(re);
                base.neg_assign(im);
            }
        }
    }

    // === Addition ===

    /// Sets `dst = x + y`.
    pub fn add(&self, dst: &mut [Slot], x: &[Slot], y: &[Slot]) {
        match self.node() {
            RingNode::Integer => dst[0].as_int_mut().add_into(x[0].as_int(), y[0].as_int()),
            RingNode::MachineInteger => {
                dst[0] = Slot::Word(x[0].as_word().wrapping_add(y[0].as_word()));
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let d = dst[0].as_int_mut();
                    d.add_into(x[0].as_int(), y[0].as_int());
                    reduce(d, m);
                }
                Modulus::Word(m) => dst[0] = Slot::Word(m.add(x[0].as_word(), y[0].as_word())),
            },
            RingNode::Polynomial { base } => {
                self.poly(*base)
                    .add(dst[0].as_poly_mut(), x[0].as_poly(), y[0].as_poly());
            }
            RingNode::Fraction { .. } => self.frac_add_sub(dst, x, y, false),
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let layout = self.layout();
                let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
                let (re, im) = layout.regions_mut(dst);
                base.add(re, a, c);
                base.add(im, b, d);
            }
        }
    }

    /// Sets `x = x + y`.
    pub fn add_assign(&self, x: &mut [Slot], y: &[Slot]) {
        match self.node() {
            RingNode::Integer => x[0].as_int_mut().add_assign(y[0].as_int()),
            RingNode::MachineInteger => {
                let w = x[0].as_word_mut();
                *w = w.wrapping_add(y[0].as_word());
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let v = x[0].as_int_mut();
                    v.add_assign(y[0].as_int());
                    reduce(v, m);
                }
                Modulus::Word(m) => {
                    let w = x[0].as_word_mut();
                    *w = m.add(*w, y[0].as_word());
                }
            },
            RingNode::Polynomial { base } => {
                self.poly(*base).add_assign(x[0].as_poly_mut(), y[0].as_poly());
            }
            RingNode::Fraction { .. } => {
                let old = Elem::from_slots(&x[..self.size()]);
                self.frac_add_sub(x, &old, y, false);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let layout = self.layout();
                let (c, d) = layout.regions(y);
                let (a, b) = layout.regions_mut(x);
                base.add_assign(a, c);
                base.add_assign(b, d);
            }
        }
    }

    // === Subtraction ===

    /// Sets `dst = x - y`.
    pub fn sub(&self, dst: &mut [Slot], x: &[Slot], y: &[Slot]) {
        match self.node() {
            RingNode::Integer => dst[0].as_int_mut().sub_into(x[0].as_int(), y[0].as_int()),
            RingNode::MachineInteger => {
                dst[0] = Slot::Word(x[0].as_word().wrapping_sub(y[0].as_word()));
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let d = dst[0].as_int_mut();
                    d.sub_into(x[0].as_int(), y[0].as_int());
                    reduce(d, m);
                }
                Modulus::Word(m) => dst[0] = Slot::Word(m.sub(x[0].as_word(), y[0].as_word())),
            },
            RingNode::Polynomial { base } => {
                self.poly(*base)
                    .sub(dst[0].as_poly_mut(), x[0].as_poly(), y[0].as_poly());
            }
            RingNode::Fraction { .. } => self.frac_add_sub(dst, x, y, true),
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let layout = self.layout();
                let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
                let (re, im) = layout.regions_mut(dst);
                base.sub(re, a, c);
                base.sub(im, b, d);
            }
        }
    }

    /// Sets `x = x - y`.
    pub fn sub_assign(&self, x: &mut [Slot], y: &[Slot]) {
        match self.node() {
            RingNode::Integer => x[0].as_int_mut().sub_assign(y[0].as_int()),
            RingNode::MachineInteger => {
                let w = x[0].as_word_mut();
                *w = w.wrapping_sub(y[0].as_word());
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let v = x[0].as_int_mut();
                    v.sub_assign(y[0].as_int());
                    reduce(v, m);
                }
                Modulus::Word(m) => {
                    let w = x[0].as_word_mut();
                    *w = m.sub(*w, y[0].as_word());
                }
            },
            RingNode::Polynomial { base } => {
                self.poly(*base).sub_assign(x[0].as_poly_mut(), y[0].as_poly());
            }
            RingNode::Fraction { .. } => {
                let old = Elem::from_slots(&x[..self.size()]);
                self.frac_add_sub(x, &old, y, true);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let layout = self.layout();
                let (c, d) = layout.regions(y);
                let (a, b) = layout.regions_mut(x);
                base.sub_assign(a, c);
                base.sub_assign(b, d);
            }
        }
    }

    /// Sets `x = y - x`.
    pub fn sub_from(&self, x: &mut [Slot], y: &[Slot]) {
        self.neg_assign(x);
        self.add_assign(x, y);
    }

    /// `a/b ± c/d = (a*d ± c*b) / (b*d)`, skipping the cross terms when the
    /// denominators agree.
    fn frac_add_sub(&self, dst: &mut [Slot], x: &[Slot], y: &[Slot], subtract: bool) {
        let (numer, denom) = self.pair();
        let layout = self.layout();
        let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
        let (rn, rd) = layout.regions_mut(dst);

        if denom.equal(b, d) {
            if subtract {
                numer.sub(rn, a, c);
            } else {
                numer.add(rn, a, c);
            }
            denom.set(rd, b);
            return;
        }

        let mut cross = numer.new_elem();
        numer.scale(rn, a, &denom, d);
        numer.scale(&mut cross, c, &denom, b);
        if subtract {
            numer.sub_assign(rn, &cross);
        } else {
            numer.add_assign(rn, &cross);
        }
        denom.mul(rd, b, d);
    }

    // === Multiplication ===

    /// Sets `dst = x * y`.
    pub fn mul(&self, dst: &mut [Slot], x: &[Slot], y: &[Slot]) {
        match self.node() {
            RingNode::Integer => dst[0].as_int_mut().mul_into(x[0].as_int(), y[0].as_int()),
            RingNode::MachineInteger => {
                dst[0] = Slot::Word(x[0].as_word().wrapping_mul(y[0].as_word()));
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let d = dst[0].as_int_mut();
                    d.mul_into(x[0].as_int(), y[0].as_int());
                    reduce(d, m);
                }
                Modulus::Word(m) => dst[0] = Slot::Word(m.mul(x[0].as_word(), y[0].as_word())),
            },
            RingNode::Polynomial { base } => {
                self.poly(*base)
                    .mul(dst[0].as_poly_mut(), x[0].as_poly(), y[0].as_poly());
            }
            RingNode::Fraction { .. } => {
                let (numer, denom) = self.pair();
                let layout = self.layout();
                let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
                let (rn, rd) = layout.regions_mut(dst);
                numer.mul(rn, a, c);
                denom.mul(rd, b, d);
            }
            RingNode::Complex { base } => {
                // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
                let base = self.child(*base);
                let layout = self.layout();
                let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
                let (re, im) = layout.regions_mut(dst);
                let mut t = base.new_elem();
                base.mul(re, a, c);
                base.mul(&mut t, b, d);
                base.sub_assign(re, &t);
                base.mul(im, a, d);
                base.mul(&mut t, b, c);
                base.add_assign(im, &t);
            }
        }
    }

    /// Sets `x = x * y`.
    pub fn mul_assign(&self, x: &mut [Slot], y: &[Slot]) {
        match self.node() {
            RingNode::Integer => x[0].as_int_mut().mul_assign(y[0].as_int()),
            RingNode::MachineInteger => {
                let w = x[0].as_word_mut();
                *w = w.wrapping_mul(y[0].as_word());
            }
            RingNode::Polynomial { base } => {
                self.poly(*base).mul_assign(x[0].as_poly_mut(), y[0].as_poly());
            }
            _ => {
                let old = Elem::from_slots(&x[..self.size()]);
                self.mul(x, &old, y);
            }
        }
    }

    /// Sets `dst = x * s` where `s` is an element of `scalar`, a ring that
    /// acts on this one.
    ///
    /// # Panics
    ///
    /// Panics if `scalar` does not act on this ring.
    pub fn scale(&self, dst: &mut [Slot], x: &[Slot], scalar: &Ring<'_>, s: &[Slot]) {
        if self.handle == scalar.handle {
            self.mul(dst, x, s);
            return;
        }
        match self.node() {
            RingNode::Polynomial { base } => {
                self.poly(*base)
                    .scale(dst[0].as_poly_mut(), x[0].as_poly(), scalar, s);
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let layout = self.layout();
                let (a, b) = layout.regions(x);
                let (re, im) = layout.regions_mut(dst);
                base.scale(re, a, scalar, s);
                base.scale(im, b, scalar, s);
            }
            RingNode::Fraction { .. } => {
                let (numer, denom) = self.pair();
                let layout = self.layout();
                let (a, b) = layout.regions(x);
                let (rn, rd) = layout.regions_mut(dst);
                numer.scale(rn, a, scalar, s);
                denom.set(rd, b);
            }
            RingNode::Quotient { modulus, .. } => match modulus {
                Modulus::Integer(m) => {
                    let d = dst[0].as_int_mut();
                    d.mul_into(x[0].as_int(), s[0].as_int());
                    reduce(d, m);
                }
                Modulus::Word(m) => {
                    dst[0] = Slot::Word(m.mul(x[0].as_word(), m.reduce(s[0].as_word())));
                }
            },
            RingNode::Integer | RingNode::MachineInteger => {
                panic!("{scalar} does not act on {self}")
            }
        }
    }

    // === Exponentiation ===

    /// Sets `dst = x^exp`, with `x^0 = 1`.
    pub fn pow(&self, dst: &mut [Slot], x: &[Slot], exp: u64) {
        match self.node() {
            RingNode::Integer => {
                if let Ok(e) = u32::try_from(exp) {
                    *dst[0].as_int_mut() = x[0].as_int().pow(e);
                    return;
                }
            }
            RingNode::Quotient {
                modulus: Modulus::Word(m),
                ..
            } => {
                dst[0] = Slot::Word(m.pow(x[0].as_word(), exp));
                return;
            }
            _ => {}
        }

        if exp == 0 {
            self.one(dst);
            return;
        }

        // left-to-right binary powering
        let size = self.size();
        let dst = &mut dst[..size];
        let mut square = self.new_elem();
        self.set(dst, x);
        for bit in (0..u64::BITS - 1 - exp.leading_zeros()).rev() {
            self.mul(&mut square, dst, dst);
            if (exp >> bit) & 1 == 1 {
                self.mul(dst, &square, x);
            } else {
                // swaps polynomial headers too, so dst may take over the
                // scratch storage and its capacity
                dst.swap_with_slice(&mut square);
            }
        }
    }

    /// Sets `x = x^exp`.
    pub fn pow_assign(&self, x: &mut [Slot], exp: u64) {
        let base = Elem::from_slots(&x[..self.size()]);
        self.pow(x, &base, exp);
    }

    // === Predicates ===

    /// Returns true if `x == y`.
    #[must_use]
    pub fn equal(&self, x: &[Slot], y: &[Slot]) -> bool {
        match self.node() {
            RingNode::Integer => x[0].as_int() == y[0].as_int(),
            RingNode::MachineInteger => x[0].as_word() == y[0].as_word(),
            RingNode::Quotient { base, .. } => self.child(*base).equal(x, y),
            RingNode::Polynomial { base } => self.poly(*base).equal(x[0].as_poly(), y[0].as_poly()),
            RingNode::Fraction { .. } => {
                // a/b == c/d  <=>  a*d == c*b
                let (numer, denom) = self.pair();
                let layout = self.layout();
                let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
                if denom.equal(b, d) {
                    return numer.equal(a, c);
                }
                let mut lhs = numer.new_elem();
                let mut rhs = numer.new_elem();
                numer.scale(&mut lhs, a, &denom, d);
                numer.scale(&mut rhs, c, &denom, b);
                numer.equal(&lhs, &rhs)
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let layout = self.layout();
                let ((a, b), (c, d)) = (layout.regions(x), layout.regions(y));
                base.equal(a, c) && base.equal(b, d)
            }
        }
    }

    /// Returns true if `x` is zero.
    #[must_use]
    pub fn is_zero(&self, x: &[Slot]) -> bool {
        match self.node() {
            RingNode::Integer => x[0].as_int().is_zero(),
            RingNode::MachineInteger => x[0].as_word() == 0,
            RingNode::Quotient { base, .. } => self.child(*base).is_zero(x),
            RingNode::Polynomial { .. } => x[0].as_poly().is_empty(),
            RingNode::Fraction { .. } => {
                let (numer, _) = self.pair();
                numer.is_zero(self.layout().regions(x).0)
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let (re, im) = self.layout().regions(x);
                base.is_zero(re) && base.is_zero(im)
            }
        }
    }

    /// Returns true if `x` is one.
    #[must_use]
    pub fn is_one(&self, x: &[Slot]) -> bool {
        match self.node() {
            RingNode::Integer => x[0].as_int().is_one(),
            RingNode::MachineInteger => x[0].as_word() == 1,
            RingNode::Quotient { .. } => self.equal(x, &self.elem_si(1)),
            RingNode::Polynomial { base } => {
                let p = x[0].as_poly();
                let base = self.child(*base);
                p.len() == 1 && base.is_one(p.coeff(0, base.size()))
            }
            RingNode::Fraction { .. } => {
                let (numer, denom) = self.pair();
                let (a, b) = self.layout().regions(x);
                let mut embedded = numer.new_elem();
                numer.scale(&mut embedded, &numer.elem_si(1), &denom, b);
                numer.equal(a, &embedded)
            }
            RingNode::Complex { base } => {
                let base = self.child(*base);
                let (re, im) = self.layout().regions(x);
                base.is_one(re) && base.is_zero(im)
            }
        }
    }
}

impl fmt::Display for Ring<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.arena.display(self.handle))
    }
}

impl fmt::Debug for Ring<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring({}, {self})", self.handle)
    }
}
