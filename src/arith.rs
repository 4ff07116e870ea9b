//! Arithmetic over balanced ternary numbers.
//!
//! Provides addition, subtraction, multiplication, and division with
//! remainder for [`Ternary`] values using ripple-carry algorithms.
//! Every operation returns a fresh value; operands are never mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::number::Ternary;
use crate::trit::Trit;

/// Add two balanced ternary numbers.
///
/// The operands are aligned to a common length and summed trit by trit
/// from least significant to most significant, threading the carry; a
/// final nonzero carry appends one more trit, so the result is at most
/// one trit wider than the wider operand. `add` does not strip leading
/// zero trits; callers that need canonical form truncate the result.
pub fn add(a: &Ternary, b: &Ternary) -> Ternary {
    let (a, b) = Ternary::align(a, b);

    let mut trits = Vec::with_capacity(a.len() + 1);
    let mut carry = Trit::O;
    for (&x, &y) in a.trits().iter().rev().zip(b.trits().iter().rev()) {
        let (sum, next_carry) = x.add_with_carry(y, carry);
        trits.push(sum);
        carry = next_carry;
    }
    if !carry.is_zero() {
        trits.push(carry);
    }
    trits.reverse();

    Ternary::from_trits(trits)
}

/// Subtract `b` from `a` by adding the negation.
#[inline]
pub fn sub(a: &Ternary, b: &Ternary) -> Ternary {
    add(a, &b.neg())
}

/// Multiply two balanced ternary numbers.
///
/// Schoolbook long multiplication with the shorter operand driving the
/// outer loop. A zero trit contributes nothing; a nonzero trit at
/// position `i` (counted from the units end) contributes `b` or its
/// negation shifted left by `i` places. Like [`add`], the result is
/// not guaranteed to be in canonical form.
pub fn mul(a: &Ternary, b: &Ternary) -> Ternary {
    if b.len() < a.len() {
        return mul(b, a);
    }
    if a.is_zero() || b.is_zero() {
        return Ternary::zero();
    }

    let mut result = Ternary::zero();
    for (index, &trit) in a.trits().iter().rev().enumerate() {
        if trit.is_zero() {
            continue;
        }
        let partial = if trit.is_positive() { b.clone() } else { b.neg() };
        result = add(&result, &partial.shift_left(index));
    }
    result
}

/// The quotient and remainder produced by [`div`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivRem {
    /// The quotient, rounded toward zero.
    pub quotient: Ternary,
    /// The remainder: zero, or carrying the dividend's sign, with
    /// magnitude strictly below the divisor's.
    pub remainder: Ternary,
}

impl DivRem {
    /// Pair up a quotient and remainder.
    pub fn new(quotient: Ternary, remainder: Ternary) -> Self {
        Self { quotient, remainder }
    }
}

/// Errors that can occur during balanced ternary arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    /// Division by a zero-valued divisor. Carries the dividend for
    /// diagnostics.
    #[error("division of {dividend} ({}) by zero", .dividend.to_i64())]
    DivisionByZero {
        /// The dividend of the failed division.
        dividend: Ternary,
    },
}

/// Divide `a` by `b`, returning the quotient/remainder pair.
///
/// The quotient rounds toward zero and the remainder is zero or has
/// the dividend's sign (the convention of Rust's `/` and `%` on
/// integers), so `quotient * b + remainder == a` always holds. Both
/// parts come back in canonical form. Dividing by zero reports
/// [`ArithError::DivisionByZero`].
///
/// Positive operands reduce by repeated subtraction, so the cost is
/// linear in the quotient's magnitude rather than its trit count.
pub fn div(a: &Ternary, b: &Ternary) -> Result<DivRem, ArithError> {
    if b.is_zero() {
        return Err(ArithError::DivisionByZero { dividend: a.clone() });
    }

    let a = a.trunc();
    let b = b.trunc();
    let one = Ternary::one();

    // 0 / x = 0 rem 0
    if a.is_zero() {
        return Ok(DivRem::new(Ternary::zero(), Ternary::zero()));
    }
    // x / 1 = x rem 0
    if b == one {
        return Ok(DivRem::new(a, Ternary::zero()));
    }
    // x / -1 = -x rem 0
    if b == one.neg() {
        return Ok(DivRem::new(a.neg(), Ternary::zero()));
    }
    // x / -y = -(x / y), remainder unchanged.
    if b.is_negative() {
        let inner = div(&a, &b.neg())?;
        return Ok(DivRem::new(inner.quotient.neg(), inner.remainder));
    }
    // -x / y = -(x / y), remainder negated so it tracks the dividend.
    if a.is_negative() {
        let inner = div(&a.neg(), &b)?;
        return Ok(DivRem::new(inner.quotient.neg(), inner.remainder.neg()));
    }

    // Both operands positive with b >= 2: repeated subtraction.
    let mut quotient = Ternary::zero();
    let mut remainder = a;
    loop {
        let candidate = sub(&remainder, &b);
        if candidate.is_negative() {
            break;
        }
        remainder = candidate;
        quotient = add(&quotient, &one);
    }

    Ok(DivRem::new(quotient, remainder.trunc()))
}
