//! Exact-real implements arbitrary precision signed fixed-point numbers purely in Rust.
//!
//! ## Introduction
//!
//! **Numbers**
//!
//! The number is defined by the data type `ExactNumber`. Each number consists of a vector of
//! digits in a large integer base, a positional exponent giving the place of the radix point,
//! and the sign of the number.
//!
//! Addition, subtraction, and multiplication are exact: they never lose digits, and the cost
//! grows with the number of digits of the operands. Division is computed to a requested
//! precision with a one-sided error: the caller chooses whether the result's residual is
//! non-negative or non-positive.
//!
//! The working base of the digit vector is not stored in the number. The `std::ops` operators
//! and [`ExactNumber::divide_vector`] use the default working base [`DIGIT_BASE`]; the
//! `base10_*` methods operate on decimal-digit vectors, which is the form produced by parsing
//! a string. A chain of operations must stay in one base.
//!
//! **Strings**
//!
//! `ExactNumber` parses from decimal scientific notation, and the renderer produces the exact
//! decimal value of a number held in any base.
//!
//! ## Examples
//!
//! ```rust
//! use exact_real::ExactNumber;
//!
//! // the decimal pipeline: parse, operate in base 10, render
//! let a: ExactNumber = "1.5".parse().unwrap();
//! let b: ExactNumber = "2.25".parse().unwrap();
//! assert_eq!(a.base10_add(&b).to_string(), "3.75");
//!
//! // bounded-precision division in the default working base
//! let one: ExactNumber = "1".parse().unwrap();
//! let three: ExactNumber = "3".parse().unwrap();
//! let q = one.divide_vector(&three, 10, false).unwrap();
//!
//! // the residual q * 3 - 1 is negative or zero by choice of `upper`
//! let residual = &(&q * &three) - &one;
//! assert!(residual <= ExactNumber::new());
//! ```

#![deny(clippy::suspicious)]

mod common;
mod conv;
mod defs;
mod num;
mod ops;
mod parser;

#[cfg(feature = "serde")]
mod for_3rd;

pub use crate::defs::Digit;
pub use crate::defs::DoubleDigit;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::defs::SignedDigit;
pub use crate::defs::DIGIT_BASE;
pub use crate::defs::DIGIT_MAX;
pub use crate::defs::EXPONENT_MAX;
pub use crate::defs::EXPONENT_MIN;
pub use crate::num::ExactNumber;
