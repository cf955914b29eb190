//! Property-based tests for element arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use proptest::prelude::*;
    use strata_core::{Poly, RingArena, Slot};
    use strata_integers::Integer;

    use crate::{vec, Elem, Ring};

    fn small_coeffs() -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-100i64..100, 0..6)
    }

    fn boundary_i64() -> impl Strategy<Value = i64> {
        prop_oneof![
            Just(i64::MAX),
            Just(i64::MIN),
            Just(i64::MAX - 1),
            Just(i64::MIN + 1),
            any::<i64>(),
        ]
    }

    /// A complex number over the rationals with small parts.
    fn gaussian_rational() -> impl Strategy<Value = [i64; 4]> {
        [-20i64..20, 1i64..20, -20i64..20, 1i64..20]
    }

    fn qi_elem(ring: &Ring<'_>, parts: [i64; 4]) -> Elem {
        let mut x = ring.new_elem();
        for (slot, v) in x.iter_mut().zip(parts) {
            *slot = Slot::Int(Integer::new(v));
        }
        x
    }

    proptest! {
        #[test]
        fn poly_add_length_invariant(p in small_coeffs(), q in small_coeffs()) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let zx = arena.polynomial(z);
            let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();
            let zr = Ring::new(&arena, z);

            let (p, q) = (pr.from_coeffs_si(&p), pr.from_coeffs_si(&q));
            let mut r = Poly::new();
            pr.add(&mut r, &p, &q);

            let max = p.len().max(q.len());
            prop_assert!(r.len() <= max);
            if p.len() != q.len() {
                prop_assert_eq!(r.len(), max);
            }
            if let Some(last) = r.len().checked_sub(1) {
                prop_assert!(!zr.is_zero(pr.coeff(&r, last)));
            }
        }

        #[test]
        fn poly_add_assign_matches_add(p in small_coeffs(), q in small_coeffs()) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let zx = arena.polynomial(z);
            let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

            let (p, q) = (pr.from_coeffs_si(&p), pr.from_coeffs_si(&q));
            let mut expected = Poly::new();
            pr.add(&mut expected, &p, &q);

            let mut x = p.clone();
            pr.add_assign(&mut x, &q);
            prop_assert!(pr.equal(&x, &expected));

            let mut y = q.clone();
            pr.add_assign(&mut y, &p);
            prop_assert!(pr.equal(&y, &expected));
        }

        #[test]
        fn poly_sub_then_add_roundtrip(p in small_coeffs(), q in small_coeffs()) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let zx = arena.polynomial(z);
            let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

            let (p, q) = (pr.from_coeffs_si(&p), pr.from_coeffs_si(&q));
            let mut d = Poly::new();
            pr.sub(&mut d, &p, &q);
            pr.add_assign(&mut d, &q);
            prop_assert!(pr.equal(&d, &p));
        }

        #[test]
        fn poly_mul_commutative(p in small_coeffs(), q in small_coeffs()) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let zx = arena.polynomial(z);
            let pr = Ring::new(&arena, zx).as_poly_ring().unwrap();

            let (p, q) = (pr.from_coeffs_si(&p), pr.from_coeffs_si(&q));
            let (mut pq, mut qp) = (Poly::new(), Poly::new());
            pr.mul(&mut pq, &p, &q);
            pr.mul(&mut qp, &q, &p);
            prop_assert!(pr.equal(&pq, &qp));
            if !p.is_empty() && !q.is_empty() {
                prop_assert_eq!(pq.len(), p.len() + q.len() - 1);
            }
        }

        #[test]
        fn poly_pow_aliasing(p in small_coeffs(), e in 0u64..6) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let zx = arena.polynomial(z);
            let ring = Ring::new(&arena, zx);

            let mut a = ring.new_elem();
            *a[0].as_poly_mut() = ring.as_poly_ring().unwrap().from_coeffs_si(&p);
            let mut b = ring.new_elem();
            ring.pow(&mut b, &a, e);
            ring.pow_assign(&mut a, e);
            prop_assert!(ring.equal(&a, &b));
        }

        #[test]
        fn vector_sub_matches_integers(
            a in prop::collection::vec(boundary_i64(), 4),
            b in prop::collection::vec(boundary_i64(), 4),
        ) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let ring = Ring::new(&arena, z);

            let to_slots = |v: &[i64]| -> Vec<Slot> {
                v.iter().map(|x| Slot::Int(Integer::new(*x))).collect()
            };
            let (sa, sb) = (to_slots(&a), to_slots(&b));
            let mut res = vec::init(&ring, 4);
            vec::sub(&ring, &mut res, &sa, &sb, 4);

            for (i, r) in res.iter().enumerate() {
                let expected = Integer::from(IBig::from(a[i]) - IBig::from(b[i]));
                prop_assert_eq!(r.as_int(), &expected);
            }
        }

        #[test]
        fn gaussian_rational_power_laws(
            a in gaussian_rational(),
            b in gaussian_rational(),
            e in 0u64..5,
            f in 0u64..5,
        ) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let q = arena.fraction(z, z).unwrap();
            let qi = arena.complex(q);
            let ring = Ring::new(&arena, qi);
            let (a, b) = (qi_elem(&ring, a), qi_elem(&ring, b));

            // (AB)^e = A^e B^e
            let mut ab = ring.new_elem();
            ring.mul(&mut ab, &a, &b);
            let mut lhs = ring.new_elem();
            ring.pow(&mut lhs, &ab, e);
            let (mut ae, mut be) = (ring.new_elem(), ring.new_elem());
            ring.pow(&mut ae, &a, e);
            ring.pow(&mut be, &b, e);
            ring.mul_assign(&mut ae, &be);
            prop_assert!(ring.equal(&lhs, &ae));

            // A^e A^f = A^(e+f)
            let (mut x, mut y, mut z) = (ring.new_elem(), ring.new_elem(), ring.new_elem());
            ring.pow(&mut x, &a, e);
            ring.pow(&mut y, &a, f);
            ring.mul_assign(&mut x, &y);
            ring.pow(&mut z, &a, e + f);
            prop_assert!(ring.equal(&x, &z));
        }

        #[test]
        fn fraction_sub_from_matches_sub(a in gaussian_rational(), b in gaussian_rational()) {
            let mut arena = RingArena::new();
            let z = arena.integer();
            let q = arena.fraction(z, z).unwrap();
            let qi = arena.complex(q);
            let ring = Ring::new(&arena, qi);
            let (a, b) = (qi_elem(&ring, a), qi_elem(&ring, b));

            let mut expected = ring.new_elem();
            ring.sub(&mut expected, &b, &a);
            let mut x = a.clone();
            ring.sub_from(&mut x, &b);
            prop_assert!(ring.equal(&x, &expected));

            let mut y = b.clone();
            ring.sub_assign(&mut y, &a);
            prop_assert!(ring.equal(&y, &expected));
        }
    }
}
