use fuzzy_arith::{BinaryOp, FuzzyNumber};

fn pairs(number: &FuzzyNumber) -> Vec<(f64, f64)> {
    number.iter().collect()
}

#[test]
fn sum_with_colliding_key() {
    let a = FuzzyNumber::from([(1.0, 0.5), (2.0, 1.0)]);
    let b = FuzzyNumber::from([(1.0, 1.0), (2.0, 0.3)]);
    assert_eq!(pairs(&a.add(&b)), vec![(2.0, 0.5), (3.0, 1.0), (4.0, 0.3)]);
}

#[test]
fn extrema_of_crisp_singletons() {
    let a = FuzzyNumber::from([(0.0, 1.0)]);
    let b = FuzzyNumber::from([(5.0, 1.0)]);
    assert_eq!(pairs(&a.extra_maximum(&b)), vec![(5.0, 1.0)]);
    assert_eq!(pairs(&a.extra_minimum(&b)), vec![(0.0, 1.0)]);
}

#[test]
fn empty_operand_absorbs_every_operation() {
    let a = FuzzyNumber::from([(1.0, 0.2), (4.0, 0.9)]);
    let empty = FuzzyNumber::default();
    for op in BinaryOp::ALL {
        assert!(a.apply(op, &empty).is_empty(), "{op} with empty rhs");
        assert!(empty.apply(op, &a).is_empty(), "{op} with empty lhs");
    }
}

#[test]
fn named_methods_match_operator_table() {
    let a = FuzzyNumber::from([(-2.0, 0.4), (3.0, 1.0), (6.0, 0.7)]);
    let b = FuzzyNumber::from([(1.0, 0.6), (2.0, 1.0)]);
    assert_eq!(a.add(&b), a.apply(BinaryOp::Add, &b));
    assert_eq!(a.subtract(&b), a.apply(BinaryOp::Subtract, &b));
    assert_eq!(a.multiply(&b), a.apply(BinaryOp::Multiply, &b));
    assert_eq!(a.divide(&b), a.apply(BinaryOp::Divide, &b));
    assert_eq!(a.extra_maximum(&b), a.apply(BinaryOp::Max, &b));
    assert_eq!(a.extra_minimum(&b), a.apply(BinaryOp::Min, &b));
}

#[test]
fn division_by_zero_support_point_propagates() {
    let a = FuzzyNumber::from([(-1.0, 0.5), (1.0, 1.0)]);
    let b = FuzzyNumber::from([(0.0, 0.8), (2.0, 0.6)]);
    let quotient = a.divide(&b);
    assert_eq!(
        pairs(&quotient),
        vec![(f64::NEG_INFINITY, 0.5), (-0.5, 0.5), (0.5, 0.6), (f64::INFINITY, 0.8)]
    );
}

#[test]
fn out_of_range_grades_are_not_corrected() {
    let a = FuzzyNumber::from([(1.0, 2.5)]);
    let b = FuzzyNumber::from([(1.0, 1.5)]);
    assert_eq!(pairs(&a.multiply(&b)), vec![(1.0, 1.5)]);
}

#[test]
fn arbitrary_operator_through_combine_with() {
    let a = FuzzyNumber::from([(1.0, 1.0), (-1.0, 0.4)]);
    let b = FuzzyNumber::from([(0.0, 1.0)]);
    let distance = a.combine_with(&b, |x1, x2| (x1 - x2).abs());
    assert_eq!(pairs(&distance), vec![(1.0, 1.0)]);
}

#[test]
fn result_round_trips_through_json() {
    let a = FuzzyNumber::from([(1.0, 0.9)]);
    let b = FuzzyNumber::from([(0.0, 0.7), (4.0, 0.2)]);
    let quotient = a.divide(&b);
    let json = serde_json::to_string(&quotient).unwrap();
    assert_eq!(json, r#"[[0.25,0.2],["inf",0.7]]"#);
    let back: FuzzyNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, quotient);
}
