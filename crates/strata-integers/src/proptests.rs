//! Property-based tests for the integer fast path.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, WordModulus};

    // Strategy for values straddling the inline boundary
    fn boundary_int() -> impl Strategy<Value = Integer> {
        prop_oneof![
            any::<i64>().prop_map(Integer::new),
            (i64::MAX - 16..=i64::MAX).prop_map(Integer::new),
            (i64::MIN..=i64::MIN + 16).prop_map(Integer::new),
            (any::<i64>(), 1u32..3u32).prop_map(|(v, e)| Integer::new(v).pow(e + 1)),
        ]
    }

    fn is_canonical(x: &Integer) -> bool {
        match x {
            Integer::Small(_) => true,
            Integer::Large(b) => i64::try_from(b.clone()).is_err(),
        }
    }

    proptest! {
        #[test]
        fn add_matches_backend(a in boundary_int(), b in boundary_int()) {
            let mut sum = Integer::zero();
            sum.add_into(&a, &b);
            prop_assert_eq!(sum.to_big(), a.to_big() + b.to_big());
            prop_assert!(is_canonical(&sum));
        }

        #[test]
        fn add_assign_matches_add_into(a in boundary_int(), b in boundary_int()) {
            let mut expected = Integer::zero();
            expected.add_into(&a, &b);
            let mut x = a.clone();
            x.add_assign(&b);
            prop_assert_eq!(x, expected);
        }

        #[test]
        fn sub_matches_backend(a in boundary_int(), b in boundary_int()) {
            let mut diff = Integer::zero();
            diff.sub_into(&a, &b);
            prop_assert_eq!(diff.to_big(), a.to_big() - b.to_big());
            prop_assert!(is_canonical(&diff));

            let mut x = a.clone();
            x.sub_assign(&b);
            prop_assert_eq!(x, diff);
        }

        #[test]
        fn mul_matches_backend(a in boundary_int(), b in boundary_int()) {
            let prod = &a * &b;
            prop_assert_eq!(prod.to_big(), a.to_big() * b.to_big());
            prop_assert!(is_canonical(&prod));
        }

        #[test]
        fn neg_is_involution(a in boundary_int()) {
            let n = -&a;
            prop_assert!(is_canonical(&n));
            prop_assert_eq!(-n, a);
        }

        #[test]
        fn from_big_round_trips(a in boundary_int()) {
            prop_assert_eq!(Integer::from_big(IBig::from(a.clone())), a);
        }

        #[test]
        fn rem_euclid_in_range(a in boundary_int(), m in 1i64..1_000_000) {
            let m = Integer::new(m);
            let r = a.rem_euclid(&m);
            prop_assert!(!r.is_negative() && r < m);
            prop_assert!((&a - &r).rem_euclid(&m).is_zero());
        }

        #[test]
        fn word_modulus_matches_u128(a in any::<u64>(), b in any::<u64>(), n in 1u64..=u64::MAX) {
            let m = WordModulus::new(n).unwrap();
            let (a, b) = (m.reduce(a), m.reduce(b));
            let wide = u128::from(n);
            prop_assert_eq!(u128::from(m.add(a, b)), (u128::from(a) + u128::from(b)) % wide);
            prop_assert_eq!(u128::from(m.sub(a, b)), (wide + u128::from(a) - u128::from(b)) % wide);
            prop_assert_eq!(u128::from(m.mul(a, b)), (u128::from(a) * u128::from(b)) % wide);
        }
    }
}
