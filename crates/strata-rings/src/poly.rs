//! Generic dense polynomials.
//!
//! A polynomial element is a `Poly` header: flat coefficient storage over
//! the base ring plus a significant length. Polynomials are kept
//! normalised: the leading significant coefficient is nonzero, or the
//! length is zero. Storage past the length always holds zero elements, so
//! growing the length never exposes stale values.
//!
//! Coefficients are stored lowest degree first:
//! `p(x) = c[0] + c[1]*x + ... + c[len-1]*x^(len-1)`.

use rand::Rng;
use strata_core::{Poly, Slot};

use crate::random::split_level;
use crate::ring::Ring;
use crate::vec;

/// A polynomial ring viewed through its coefficient ring.
#[derive(Clone, Copy, Debug)]
pub struct PolyRing<'a> {
    ring: Ring<'a>,
    base: Ring<'a>,
}

impl<'a> PolyRing<'a> {
    /// Creates the view of `ring`, a polynomial ring over `base`.
    #[must_use]
    pub fn new(ring: Ring<'a>, base: Ring<'a>) -> Self {
        Self { ring, base }
    }

    /// Returns the polynomial ring itself.
    #[must_use]
    pub fn ring(&self) -> Ring<'a> {
        self.ring
    }

    /// Returns the coefficient ring.
    #[must_use]
    pub fn base(&self) -> Ring<'a> {
        self.base
    }

    fn stride(&self) -> usize {
        self.base.size()
    }

    // === Length and capacity ===

    /// Returns the number of significant coefficients.
    #[must_use]
    pub fn len(&self, p: &Poly) -> usize {
        p.len()
    }

    /// Returns the number of allocated coefficients.
    #[must_use]
    pub fn capacity(&self, p: &Poly) -> usize {
        p.capacity(self.stride())
    }

    /// Returns coefficient `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the capacity.
    #[must_use]
    pub fn coeff<'p>(&self, p: &'p Poly, i: usize) -> &'p [Slot] {
        p.coeff(i, self.stride())
    }

    /// Ensures room for at least `len` coefficients.
    ///
    /// Storage grows to at least twice its previous capacity and never
    /// shrinks. Existing coefficients are preserved.
    pub fn fit_length(&self, p: &mut Poly, len: usize) {
        let cap = self.capacity(p);
        if len > cap {
            let target = len.max(2 * cap);
            let zero = self.base.new_elem();
            p.extend_storage(target - cap, &zero);
        }
    }

    /// Sets the length, zeroing the coefficients it drops.
    ///
    /// The result is not normalised.
    pub fn set_length(&self, p: &mut Poly, len: usize) {
        let old = p.len();
        if len < old {
            let s = self.stride();
            vec::zero(&self.base, &mut p.storage_mut()[len * s..], old - len);
        }
        p.set_len_raw(len);
    }

    /// Trims trailing zero coefficients.
    pub fn normalise(&self, p: &mut Poly) {
        let mut len = p.len();
        while len > 0 && self.base.is_zero(self.coeff(p, len - 1)) {
            len -= 1;
        }
        p.set_len_raw(len);
    }

    // === Constants and copies ===

    /// Creates the zero polynomial without allocating.
    #[must_use]
    pub fn new_poly(&self) -> Poly {
        Poly::new()
    }

    /// Creates a polynomial from small integer coefficients, lowest first.
    #[must_use]
    pub fn from_coeffs_si(&self, coeffs: &[i64]) -> Poly {
        let mut p = Poly::new();
        self.fit_length(&mut p, coeffs.len());
        for (i, c) in coeffs.iter().enumerate() {
            self.base.set_si(p.coeff_mut(i, self.stride()), *c);
        }
        p.set_len_raw(coeffs.len());
        self.normalise(&mut p);
        p
    }

    /// Sets `p` to zero, keeping its storage.
    pub fn zero(&self, p: &mut Poly) {
        self.set_length(p, 0);
    }

    /// Sets `p` to one.
    pub fn one(&self, p: &mut Poly) {
        self.set_si(p, 1);
    }

    /// Sets `p` to the constant `value`.
    pub fn set_si(&self, p: &mut Poly, value: i64) {
        if value == 0 {
            self.zero(p);
            return;
        }
        self.fit_length(p, 1);
        self.base.set_si(p.coeff_mut(0, self.stride()), value);
        self.set_length(p, 1);
        self.normalise(p);
    }

    /// Sets `res = p`.
    pub fn set(&self, res: &mut Poly, p: &Poly) {
        let len = p.len();
        self.fit_length(res, len);
        vec::set(&self.base, res.storage_mut(), p.storage(), len);
        self.set_length(res, len);
    }

    /// Sets `res = -p`.
    pub fn neg(&self, res: &mut Poly, p: &Poly) {
        self.set(res, p);
        self.neg_assign(res);
    }

    /// Negates `p` in place.
    pub fn neg_assign(&self, p: &mut Poly) {
        let len = p.len();
        vec::neg_assign(&self.base, p.storage_mut(), len);
    }

    // === Addition and subtraction ===

    /// Sets `res = p + q`.
    pub fn add(&self, res: &mut Poly, p: &Poly, q: &Poly) {
        let s = self.stride();
        let (lp, lq) = (p.len(), q.len());
        let (min, max) = (lp.min(lq), lp.max(lq));

        self.fit_length(res, max);
        vec::add(&self.base, res.storage_mut(), p.storage(), q.storage(), min);
        if lp > min {
            vec::set(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &p.storage()[min * s..],
                lp - min,
            );
        }
        if lq > min {
            vec::set(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &q.storage()[min * s..],
                lq - min,
            );
        }
        self.set_length(res, max);
        self.normalise(res);
    }

    /// Sets `res = res + q`.
    pub fn add_assign(&self, res: &mut Poly, q: &Poly) {
        let s = self.stride();
        let (lr, lq) = (res.len(), q.len());
        let (min, max) = (lr.min(lq), lr.max(lq));

        self.fit_length(res, max);
        vec::add_assign(&self.base, res.storage_mut(), q.storage(), min);
        // the tail of res, if longer, is already in place
        if lq > min {
            vec::set(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &q.storage()[min * s..],
                lq - min,
            );
        }
        self.set_length(res, max);
        self.normalise(res);
    }

    /// Sets `res = p - q`.
    pub fn sub(&self, res: &mut Poly, p: &Poly, q: &Poly) {
        let s = self.stride();
        let (lp, lq) = (p.len(), q.len());
        let (min, max) = (lp.min(lq), lp.max(lq));

        self.fit_length(res, max);
        vec::sub(&self.base, res.storage_mut(), p.storage(), q.storage(), min);
        if lp > min {
            vec::set(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &p.storage()[min * s..],
                lp - min,
            );
        }
        if lq > min {
            vec::neg(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &q.storage()[min * s..],
                lq - min,
            );
        }
        self.set_length(res, max);
        self.normalise(res);
    }

    /// Sets `res = res - q`.
    pub fn sub_assign(&self, res: &mut Poly, q: &Poly) {
        let s = self.stride();
        let (lr, lq) = (res.len(), q.len());
        let (min, max) = (lr.min(lq), lr.max(lq));

        self.fit_length(res, max);
        vec::sub_assign(&self.base, res.storage_mut(), q.storage(), min);
        if lq > min {
            vec::neg(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &q.storage()[min * s..],
                lq - min,
            );
        }
        self.set_length(res, max);
        self.normalise(res);
    }

    /// Sets `res = p - res`.
    pub fn sub_from(&self, res: &mut Poly, p: &Poly) {
        let s = self.stride();
        let (lr, lp) = (res.len(), p.len());
        let (min, max) = (lr.min(lp), lr.max(lp));

        self.fit_length(res, max);
        vec::sub_from(&self.base, res.storage_mut(), p.storage(), min);
        if lr > min {
            vec::neg_assign(&self.base, &mut res.storage_mut()[min * s..], lr - min);
        }
        if lp > min {
            vec::set(
                &self.base,
                &mut res.storage_mut()[min * s..],
                &p.storage()[min * s..],
                lp - min,
            );
        }
        self.set_length(res, max);
        self.normalise(res);
    }

    // === Multiplication ===

    /// Sets `res = p * q` by schoolbook multiplication.
    pub fn mul(&self, res: &mut Poly, p: &Poly, q: &Poly) {
        let (lp, lq) = (p.len(), q.len());
        if lp == 0 || lq == 0 {
            self.zero(res);
            return;
        }

        let s = self.stride();
        let len = lp + lq - 1;
        self.set_length(res, 0);
        self.fit_length(res, len);

        let mut term = self.base.new_elem();
        for (i, a) in p.significant(s).chunks_exact(s).enumerate() {
            for (j, b) in q.significant(s).chunks_exact(s).enumerate() {
                self.base.mul(&mut term, a, b);
                self.base.add_assign(res.coeff_mut(i + j, s), &term);
            }
        }
        res.set_len_raw(len);
        self.normalise(res);
    }

    /// Sets `res = res * q`.
    pub fn mul_assign(&self, res: &mut Poly, q: &Poly) {
        let old = res.clone();
        self.mul(res, &old, q);
    }

    /// Sets `res = p * s` for a scalar `s` of a ring acting on the
    /// coefficients.
    pub fn scale(&self, res: &mut Poly, p: &Poly, scalar: &Ring<'_>, s: &[Slot]) {
        let stride = self.stride();
        let len = p.len();
        self.fit_length(res, len);
        for i in 0..len {
            self.base
                .scale(res.coeff_mut(i, stride), p.coeff(i, stride), scalar, s);
        }
        self.set_length(res, len);
        self.normalise(res);
    }

    // === Predicates ===

    /// Returns true if `p == q`.
    #[must_use]
    pub fn equal(&self, p: &Poly, q: &Poly) -> bool {
        p.len() == q.len() && vec::equal(&self.base, p.storage(), q.storage(), p.len())
    }

    /// Returns true if `p` is zero.
    #[must_use]
    pub fn is_zero(&self, p: &Poly) -> bool {
        p.is_empty()
    }

    /// Sets `p` to a random polynomial.
    ///
    /// The length is drawn from `0..=sizes[0]` and the coefficients from
    /// the base ring with the remaining size levels.
    pub fn randtest<R: Rng + ?Sized>(&self, p: &mut Poly, rng: &mut R, sizes: &[u32]) {
        let (level, rest) = split_level(sizes);
        let len = rng.gen_range(0..=level as usize);
        let s = self.stride();

        self.set_length(p, 0);
        self.fit_length(p, len);
        for i in 0..len {
            self.base.randtest(p.coeff_mut(i, s), rng, rest);
        }
        p.set_len_raw(len);
        self.normalise(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::RingArena;
    use strata_integers::Integer;

    fn assert_normalised(pr: &PolyRing<'_>, p: &Poly) {
        if let Some(last) = p.len().checked_sub(1) {
            assert!(!pr.base().is_zero(pr.coeff(p, last)));
        }
        for i in p.len()..pr.capacity(p) {
            assert!(pr.base().is_zero(pr.coeff(p, i)));
        }
    }

    #[test]
    fn test_from_coeffs() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

        let p = pr.from_coeffs_si(&[1, 2, 0, 0]);
        assert_eq!(pr.len(&p), 2);
        assert_eq!(pr.coeff(&p, 1)[0].as_int(), &Integer::new(2));
        assert_normalised(&pr, &p);

        assert!(pr.is_zero(&pr.from_coeffs_si(&[0, 0])));
    }

    #[test]
    fn test_fit_length_grows() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

        let mut p = pr.from_coeffs_si(&[5, 6, 7]);
        let cap = pr.capacity(&p);
        pr.fit_length(&mut p, cap + 1);
        assert_eq!(pr.capacity(&p), 2 * cap);
        assert_eq!(pr.coeff(&p, 2)[0].as_int(), &Integer::new(7));

        pr.fit_length(&mut p, 1);
        assert_eq!(pr.capacity(&p), 2 * cap);
    }

    #[test]
    fn test_set_length_zeroes_tail() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

        let mut p = pr.from_coeffs_si(&[1, 2, 3]);
        pr.set_length(&mut p, 1);
        assert_normalised(&pr, &p);
        pr.set_length(&mut p, 3);
        assert!(pr.equal(&p, &{
            let mut q = pr.from_coeffs_si(&[1, 0, 0]);
            q.set_len_raw(3);
            q
        }));
    }

    #[test]
    fn test_add_cancellation() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

        let p = pr.from_coeffs_si(&[1, 2, 3]);
        let q = pr.from_coeffs_si(&[4, -2, -3]);
        let mut r = pr.from_coeffs_si(&[9, 9, 9, 9, 9]);
        pr.add(&mut r, &p, &q);
        assert!(pr.equal(&r, &pr.from_coeffs_si(&[5])));
        assert_normalised(&pr, &r);
    }

    #[test]
    fn test_add_tails() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

        let short = pr.from_coeffs_si(&[1]);
        let long = pr.from_coeffs_si(&[1, 1, 1]);
        let expected = pr.from_coeffs_si(&[2, 1, 1]);

        let mut r = Poly::new();
        pr.add(&mut r, &short, &long);
        assert!(pr.equal(&r, &expected));
        pr.add(&mut r, &long, &short);
        assert!(pr.equal(&r, &expected));

        let mut x = short.clone();
        pr.add_assign(&mut x, &long);
        assert!(pr.equal(&x, &expected));
        let mut x = long.clone();
        pr.add_assign(&mut x, &short);
        assert!(pr.equal(&x, &expected));
    }

    #[test]
    fn test_sub_forms_agree() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zi = arena.complex(z);
        let zix = arena.polynomial(zi);
        let pr = Ring::new(&arena, zix).as_poly_ring().unwrap();

        let p = pr.from_coeffs_si(&[1, 2]);
        let q = pr.from_coeffs_si(&[3, 4, 5]);

        let mut expected = Poly::new();
        pr.sub(&mut expected, &p, &q);
        assert!(pr.equal(&expected, &pr.from_coeffs_si(&[-2, -2, -5])));

        let mut x = p.clone();
        pr.sub_assign(&mut x, &q);
        assert!(pr.equal(&x, &expected));

        let mut y = q.clone();
        pr.sub_from(&mut y, &p);
        assert!(pr.equal(&y, &expected));

        let mut y = p.clone();
        pr.sub_from(&mut y, &q);
        pr.neg_assign(&mut y);
        assert!(pr.equal(&y, &expected));
    }

    #[test]
    fn test_mul_schoolbook() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

        // (1 + x)(1 - x) = 1 - x^2
        let p = pr.from_coeffs_si(&[1, 1]);
        let q = pr.from_coeffs_si(&[1, -1]);
        let mut r = pr.from_coeffs_si(&[7, 7, 7, 7, 7, 7]);
        pr.mul(&mut r, &p, &q);
        assert!(pr.equal(&r, &pr.from_coeffs_si(&[1, 0, -1])));
        assert_normalised(&pr, &r);

        let mut x = p.clone();
        pr.mul_assign(&mut x, &q);
        assert!(pr.equal(&x, &r));

        pr.mul(&mut r, &p, &Poly::new());
        assert!(pr.is_zero(&r));
    }

    #[test]
    fn test_mul_modular_cancellation() {
        let mut arena = RingArena::new();
        let w = arena.machine_integer();
        let w4 = arena.quotient(w, &Integer::new(4)).unwrap();
        let w4x = arena.polynomial(w4);
        let pr = Ring::new(&arena, w4x).as_poly_ring().unwrap();

        // (2x)(2x) = 4x^2 = 0 mod 4
        let p = pr.from_coeffs_si(&[0, 2]);
        let mut r = Poly::new();
        pr.mul(&mut r, &p, &p);
        assert!(pr.is_zero(&r));
    }

    #[test]
    fn test_nested_polynomials() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let zxy = arena.polynomial(zx);
        let outer = Ring::new(&arena, zxy).as_poly_ring().unwrap();

        let p = outer.from_coeffs_si(&[1, 1]);
        let mut sq = Poly::new();
        outer.mul(&mut sq, &p, &p);
        assert!(outer.equal(&sq, &outer.from_coeffs_si(&[1, 2, 1])));

        let mut d = Poly::new();
        outer.sub(&mut d, &sq, &sq);
        assert!(outer.is_zero(&d));
    }

    #[test]
    fn test_scale_by_integer() {
        let mut arena = RingArena::new();
        let z = arena.integer();
        let zx = arena.polynomial(z);
        let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();
        let zr = Ring::new(&arena, z);

        let p = pr.from_coeffs_si(&[1, -2, 3]);
        let mut r = Poly::new();
        pr.scale(&mut r, &p, &zr, &zr.elem_si(-3));
        assert!(pr.equal(&r, &pr.from_coeffs_si(&[-3, 6, -9])));

        pr.scale(&mut r, &p, &zr, &zr.elem_si(0));
        assert!(pr.is_zero(&r));
    }
}
