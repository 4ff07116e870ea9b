//! # btern
//!
//! Arithmetic over balanced ternary numbers: integers written with the
//! three digits -1, 0 and +1, rendered as '-', '0' and '+'. Balanced
//! ternary needs no separate sign bit, since negating a number just
//! flips every digit.
//!
//! The crate provides:
//! - [`Trit`] - a single balanced ternary digit
//! - [`Ternary`] - an arbitrary-length trit sequence, most significant first
//! - [`add`], [`sub`], [`mul`], [`div`] - the arithmetic operators
//!
//! ```
//! use btern::{add, div, Ternary};
//!
//! let a = Ternary::from_i64(5);
//! let b = Ternary::from_i64(6);
//! assert_eq!(add(&a, &b).to_string(), "++-");
//! assert_eq!(add(&a, &b).to_i64(), 11);
//!
//! let result = div(&Ternary::from_i64(1337), &Ternary::from_i64(42)).unwrap();
//! assert_eq!(result.quotient.to_i64(), 31);
//! assert_eq!(result.remainder.to_i64(), 35);
//! ```

mod trit;
mod number;
pub mod arith;

pub use trit::Trit;
pub use number::{ParseError, Ternary};
pub use arith::{add, sub, mul, div, ArithError, DivRem};
