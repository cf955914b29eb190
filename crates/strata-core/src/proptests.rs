//! Property-based tests for ring composition.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{RingArena, RingHandle};

    /// A recipe for a ring tower, applied bottom-up.
    #[derive(Clone, Debug)]
    enum Step {
        Poly,
        Complex,
        FracOverInteger,
        FracOverSelf,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Poly),
            Just(Step::Complex),
            Just(Step::FracOverInteger),
            Just(Step::FracOverSelf),
        ]
    }

    fn build(arena: &mut RingArena, steps: &[Step]) -> (RingHandle, Vec<RingHandle>) {
        let z = arena.integer();
        let mut ring = z;
        let mut tower = vec![z];
        for s in steps {
            ring = match s {
                Step::Poly => arena.polynomial(ring),
                Step::Complex => arena.complex(ring),
                Step::FracOverInteger => arena.fraction(ring, z).unwrap(),
                Step::FracOverSelf => arena.fraction(ring, ring).unwrap(),
            };
            tower.push(ring);
        }
        (ring, tower)
    }

    proptest! {
        #[test]
        fn fraction_layout_is_concatenation(steps in prop::collection::vec(step(), 0..5)) {
            let mut arena = RingArena::new();
            let (x, _) = build(&mut arena, &steps);
            let z = arena.integer();
            let xx = arena.polynomial(x);

            for (numer, denom) in [(x, x), (x, z), (xx, z), (xx, x)] {
                let frac = arena.fraction(numer, denom).unwrap();
                prop_assert_eq!(arena.size(frac), arena.size(numer) + arena.size(denom));
                prop_assert_eq!(arena.denom_offset(frac), Some(arena.size(numer)));
            }
        }

        #[test]
        fn children_precede_parents(steps in prop::collection::vec(step(), 0..6)) {
            let mut arena = RingArena::new();
            let (_, tower) = build(&mut arena, &steps);

            for ring in tower {
                for child in arena.get(ring).children() {
                    prop_assert!(child < ring);
                }
            }
        }

        #[test]
        fn rebuilding_is_idempotent(steps in prop::collection::vec(step(), 0..6)) {
            let mut arena = RingArena::new();
            let (first, _) = build(&mut arena, &steps);
            let len = arena.len();
            let (second, _) = build(&mut arena, &steps);

            prop_assert_eq!(first, second);
            prop_assert_eq!(arena.len(), len);
        }
    }
}
