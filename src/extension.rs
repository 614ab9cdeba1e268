//! Zadeh's extension principle over discrete fuzzy numbers.
//!
//! For a real operator `f`, the combined membership map is
//!
//! ```text
//! A ⊕ B = { (f(x1, x2), min(μA(x1), μB(x2))) : x1 ∈ supp A, x2 ∈ supp B }
//! ```
//!
//! where pairs landing on the same key are reconciled with `max`.
//! Keys compare exactly (no epsilon); non-finite keys are kept like any other.
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::set::FuzzySet;

/// The binary real operators the arithmetic surface exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Extended maximum.
    Max,
    /// Extended minimum.
    Min,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 6] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Max,
        BinaryOp::Min,
    ];

    /// Apply the underlying real operator. Division follows IEEE semantics,
    /// so a zero divisor yields `±inf` or `NaN`; `max`/`min` return NaN when
    /// either side is NaN.
    pub fn apply(self, x1: f64, x2: f64) -> f64 {
        match self {
            BinaryOp::Add => x1 + x2,
            BinaryOp::Subtract => x1 - x2,
            BinaryOp::Multiply => x1 * x2,
            BinaryOp::Divide => x1 / x2,
            BinaryOp::Max => propagating_max(x1, x2),
            BinaryOp::Min => propagating_min(x1, x2),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
            BinaryOp::Max => "max",
            BinaryOp::Min => "min",
        }
    }

    pub fn is_commutative(self) -> bool {
        !matches!(self, BinaryOp::Subtract | BinaryOp::Divide)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator `{0}` (expected one of add, subtract, multiply, divide, max, min)")]
pub struct UnknownOp(pub String);

impl FromStr for BinaryOp {
    type Err = UnknownOp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(BinaryOp::Add),
            "subtract" | "sub" | "-" => Ok(BinaryOp::Subtract),
            "multiply" | "mul" | "*" => Ok(BinaryOp::Multiply),
            "divide" | "div" | "/" => Ok(BinaryOp::Divide),
            "max" | "extra-maximum" => Ok(BinaryOp::Max),
            "min" | "extra-minimum" => Ok(BinaryOp::Min),
            _ => Err(UnknownOp(s.to_string())),
        }
    }
}

/// `max` that returns NaN if either argument is NaN and orders `-0.0`
/// below `0.0`. `f64::max` would drop the NaN instead.
pub(crate) fn propagating_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a.total_cmp(&b).is_lt() {
        b
    } else {
        a
    }
}

/// `min` counterpart of [`propagating_max`].
pub(crate) fn propagating_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else if a.total_cmp(&b).is_gt() {
        b
    } else {
        a
    }
}

/// Combine two membership maps under `f`.
///
/// Every pair of the cross product is visited: the candidate grade is the
/// smaller of the two operand grades, and a key reached by several pairs
/// keeps the largest candidate. Either operand empty gives an empty result.
pub fn combine<F>(lhs: &FuzzySet, rhs: &FuzzySet, f: F) -> FuzzySet
where
    F: Fn(f64, f64) -> f64,
{
    let mut out = FuzzySet::new();
    for (x1, mu1) in lhs {
        for (x2, mu2) in rhs {
            out.upsert_max(f(x1, x2), propagating_min(mu1, mu2));
        }
    }
    debug!(lhs = lhs.len(), rhs = rhs.len(), result = out.len(), "extension principle combine");
    out
}

/// [`combine`] with one of the named operators.
pub fn combine_op(lhs: &FuzzySet, rhs: &FuzzySet, op: BinaryOp) -> FuzzySet {
    combine(lhs, rhs, |x1, x2| op.apply(x1, x2))
}
