//! Property tests for the extension-principle arithmetic.

use std::collections::BTreeMap;

use fuzzy_arith::{BinaryOp, FuzzyNumber};
use proptest::prelude::*;

/// Small integer-valued support keeps sums and products exact, so collisions
/// actually happen. Zero shows up with either sign.
fn arb_number() -> impl Strategy<Value = FuzzyNumber> {
    prop::collection::vec((-8i32..8, any::<bool>(), 0.0f64..=1.0), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(x, negate_zero, g)| {
                let x = f64::from(x);
                (if x == 0.0 && negate_zero { -0.0 } else { x }, g)
            })
            .collect()
    })
}

fn arb_op() -> impl Strategy<Value = BinaryOp> {
    prop::sample::select(BinaryOp::ALL.to_vec())
}

/// Keys are equal when bit-identical; all NaNs count as one.
fn key_bits(x: f64) -> u64 {
    if x.is_nan() { f64::NAN.to_bits() } else { x.to_bits() }
}

/// Brute-force reference: collect every candidate per key, then take the max.
fn reference(a: &FuzzyNumber, b: &FuzzyNumber, op: BinaryOp) -> BTreeMap<u64, f64> {
    let mut candidates: BTreeMap<u64, Vec<f64>> = BTreeMap::new();
    for (x1, mu1) in a.iter() {
        for (x2, mu2) in b.iter() {
            let key = op.apply(x1, x2);
            candidates.entry(key_bits(key)).or_default().push(mu1.min(mu2));
        }
    }
    candidates
        .into_iter()
        .map(|(k, gs)| (k, gs.into_iter().fold(f64::NEG_INFINITY, f64::max)))
        .collect()
}

proptest! {
    #[test]
    fn commutative_operators_commute(a in arb_number(), b in arb_number()) {
        for op in BinaryOp::ALL.into_iter().filter(|op| op.is_commutative()) {
            prop_assert_eq!(a.apply(op, &b), b.apply(op, &a), "{}", op);
        }
    }

    #[test]
    fn cardinality_is_bounded_by_product(a in arb_number(), b in arb_number(), op in arb_op()) {
        prop_assert!(a.apply(op, &b).len() <= a.len() * b.len());
    }

    #[test]
    fn grades_never_exceed_operand_heights(a in arb_number(), b in arb_number(), op in arb_op()) {
        let result = a.apply(op, &b);
        if let Some(height) = result.height() {
            let bound = a.height().unwrap().max(b.height().unwrap());
            prop_assert!(height <= bound);
        }
    }

    #[test]
    fn matches_max_of_min_reference(a in arb_number(), b in arb_number(), op in arb_op()) {
        let result = a.apply(op, &b);
        let expected = reference(&a, &b, op);
        prop_assert_eq!(result.len(), expected.len());
        for (x, grade) in result.iter() {
            prop_assert_eq!(expected.get(&key_bits(x)).copied(), Some(grade));
        }
    }

    #[test]
    fn empty_operand_gives_empty(a in arb_number(), op in arb_op()) {
        let empty = FuzzyNumber::default();
        prop_assert!(a.apply(op, &empty).is_empty());
        prop_assert!(empty.apply(op, &a).is_empty());
    }
}
