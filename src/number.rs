use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::extension::{self, BinaryOp};
use crate::set::FuzzySet;

/// A discrete fuzzy number: the operand and result type of fuzzy arithmetic.
///
/// Arithmetic never mutates an operand; each operation returns a fresh value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuzzyNumber(FuzzySet);

impl FuzzyNumber {
    pub fn new(set: FuzzySet) -> Self {
        Self(set)
    }

    pub fn as_set(&self) -> &FuzzySet {
        &self.0
    }

    pub fn into_set(self) -> FuzzySet {
        self.0
    }

    pub fn add(&self, other: &FuzzyNumber) -> FuzzyNumber {
        self.apply(BinaryOp::Add, other)
    }

    pub fn subtract(&self, other: &FuzzyNumber) -> FuzzyNumber {
        self.apply(BinaryOp::Subtract, other)
    }

    pub fn multiply(&self, other: &FuzzyNumber) -> FuzzyNumber {
        self.apply(BinaryOp::Multiply, other)
    }

    /// Zero-valued support points in `other` are not special-cased.
    pub fn divide(&self, other: &FuzzyNumber) -> FuzzyNumber {
        self.apply(BinaryOp::Divide, other)
    }

    pub fn extra_maximum(&self, other: &FuzzyNumber) -> FuzzyNumber {
        self.apply(BinaryOp::Max, other)
    }

    pub fn extra_minimum(&self, other: &FuzzyNumber) -> FuzzyNumber {
        self.apply(BinaryOp::Min, other)
    }

    pub fn apply(&self, op: BinaryOp, other: &FuzzyNumber) -> FuzzyNumber {
        FuzzyNumber(extension::combine_op(&self.0, &other.0, op))
    }

    /// Extend an arbitrary real operator to fuzzy numbers.
    pub fn combine_with<F>(&self, other: &FuzzyNumber, f: F) -> FuzzyNumber
    where
        F: Fn(f64, f64) -> f64,
    {
        FuzzyNumber(extension::combine(&self.0, &other.0, f))
    }
}

/// Left fold of `op` over `operands`: `((a op b) op c) ...`.
///
/// `None` for an empty sequence; a single operand is returned as-is.
pub fn fold<'a, I>(op: BinaryOp, operands: I) -> Option<FuzzyNumber>
where
    I: IntoIterator<Item = &'a FuzzyNumber>,
{
    let mut operands = operands.into_iter();
    let first = operands.next()?.clone();
    Some(operands.fold(first, |acc, next| acc.apply(op, next)))
}

impl Deref for FuzzyNumber {
    type Target = FuzzySet;

    fn deref(&self) -> &FuzzySet {
        &self.0
    }
}

impl From<FuzzySet> for FuzzyNumber {
    fn from(set: FuzzySet) -> Self {
        Self(set)
    }
}

impl<const N: usize> From<[(f64, f64); N]> for FuzzyNumber {
    fn from(pairs: [(f64, f64); N]) -> Self {
        Self(FuzzySet::from(pairs))
    }
}

impl FromIterator<(f64, f64)> for FuzzyNumber {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// Borrowed operands only: a by-value `Add` impl would shadow the inherent
// `add` during method lookup on owned values.
macro_rules! impl_binary_ops {
    ($($trait_:ident :: $method:ident => $named:ident),* $(,)?) => {$(
        impl $trait_<&FuzzyNumber> for &FuzzyNumber {
            type Output = FuzzyNumber;

            fn $method(self, rhs: &FuzzyNumber) -> FuzzyNumber {
                FuzzyNumber::$named(self, rhs)
            }
        }
    )*};
}

impl_binary_ops! {
    Add::add => add,
    Sub::sub => subtract,
    Mul::mul => multiply,
    Div::div => divide,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> FuzzyNumber {
        FuzzyNumber::from([(1.0, 0.5), (2.0, 1.0)])
    }

    fn b() -> FuzzyNumber {
        FuzzyNumber::from([(1.0, 1.0), (2.0, 0.3)])
    }

    #[test]
    fn add_merges_colliding_sums() {
        assert_eq!(a().add(&b()), FuzzyNumber::from([(2.0, 0.5), (3.0, 1.0), (4.0, 0.3)]));
    }

    #[test]
    fn subtract_is_ordered() {
        assert_eq!(
            a().subtract(&b()),
            FuzzyNumber::from([(-1.0, 0.3), (0.0, 0.5), (1.0, 1.0)])
        );
    }

    #[test]
    fn multiply_and_divide() {
        assert_eq!(
            a().multiply(&b()),
            FuzzyNumber::from([(1.0, 0.5), (2.0, 1.0), (4.0, 0.3)])
        );
        assert_eq!(
            a().divide(&b()),
            FuzzyNumber::from([(0.5, 0.3), (1.0, 0.5), (2.0, 1.0)])
        );
    }

    #[test]
    fn extrema() {
        let zero = FuzzyNumber::from([(0.0, 1.0)]);
        let five = FuzzyNumber::from([(5.0, 1.0)]);
        assert_eq!(zero.extra_maximum(&five), five);
        assert_eq!(zero.extra_minimum(&five), zero);
    }

    #[test]
    fn operands_are_untouched() {
        let (lhs, rhs) = (a(), b());
        let _ = lhs.multiply(&rhs);
        assert_eq!(lhs, a());
        assert_eq!(rhs, b());
    }

    #[test]
    fn operator_traits_match_named_methods() {
        assert_eq!(&a() + &b(), a().add(&b()));
        assert_eq!(&a() - &b(), a().subtract(&b()));
        assert_eq!(&a() * &b(), a().multiply(&b()));
        assert_eq!(&a() / &b(), a().divide(&b()));
    }

    #[test]
    fn fold_is_left_associative() {
        let c = FuzzyNumber::from([(10.0, 0.8)]);
        let operands = [a(), b(), c.clone()];
        let folded = fold(BinaryOp::Subtract, &operands);
        assert_eq!(folded, Some(a().subtract(&b()).subtract(&c)));
        assert_eq!(fold(BinaryOp::Add, std::iter::empty()), None);
        assert_eq!(fold(BinaryOp::Add, [a()].iter()), Some(a()));
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&a()).unwrap();
        assert_eq!(json, "[[1.0,0.5],[2.0,1.0]]");
        let back: FuzzyNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a());
    }
}
