//! Arithmetic over discrete fuzzy numbers via Zadeh's extension principle.
//!
//! ```
//! use fuzzy_arith::FuzzyNumber;
//!
//! let a = FuzzyNumber::from([(1.0, 0.5), (2.0, 1.0)]);
//! let b = FuzzyNumber::from([(1.0, 1.0), (2.0, 0.3)]);
//! let sum = a.add(&b);
//! assert_eq!(sum, FuzzyNumber::from([(2.0, 0.5), (3.0, 1.0), (4.0, 0.3)]));
//! ```
pub mod set;
pub mod number;
pub mod extension;
pub mod error;
pub mod path_de;
pub mod jq_exec;
pub mod input;
pub mod render;
pub mod cli;

pub use error::{Error, Result};
pub use extension::{combine, combine_op, BinaryOp};
pub use number::{fold, FuzzyNumber};
pub use set::FuzzySet;
