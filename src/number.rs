//! Arbitrary-length balanced ternary numbers.
//!
//! A [`Ternary`] is an ordered sequence of trits, most significant
//! first: `trits[0]` carries the weight 3^(len-1) and the last trit is
//! the units digit. Unlike a fixed-width machine word there is no value
//! range; the sequence grows as needed.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::trit::Trit;

/// An arbitrary-length balanced ternary number.
///
/// The trit sequence is never empty; zero is the single trit `0`.
/// Arithmetic results may carry leading zero trits, and
/// [`Ternary::trunc`] strips them back to canonical form.
///
/// Equality is trit-wise, so `"0+"` and `"+"` compare unequal even
/// though both denote 1. Truncate both sides to compare numerically.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ternary {
    /// Trits stored from most significant (index 0) to least significant.
    trits: Vec<Trit>,
}

impl Ternary {
    /// Canonical zero: the single trit `0`.
    #[inline]
    pub fn zero() -> Self {
        Self { trits: vec![Trit::O] }
    }

    /// Canonical one: the single trit `+`.
    #[inline]
    pub fn one() -> Self {
        Self { trits: vec![Trit::P] }
    }

    /// Create a number from a trit sequence, most significant first.
    ///
    /// An empty sequence becomes canonical zero, so a `Ternary` is
    /// never empty. Leading zero trits are kept as given.
    pub fn from_trits(trits: Vec<Trit>) -> Self {
        if trits.is_empty() {
            Self::zero()
        } else {
            Self { trits }
        }
    }

    /// The underlying trit sequence, most significant first.
    #[inline]
    pub fn trits(&self) -> &[Trit] {
        &self.trits
    }

    /// Number of trits, counting any leading zeros.
    #[inline]
    pub fn len(&self) -> usize {
        self.trits.len()
    }

    /// Convert a machine integer to balanced ternary.
    ///
    /// Divides repeatedly by 3 with balanced remainders: a remainder of
    /// 2 stands for a -1 digit plus a borrow of one unit of 3 from the
    /// next place up. Digits come out least significant first and are
    /// reversed at the end. Negative input converts its absolute value
    /// and negates every trit.
    pub fn from_i64(value: i64) -> Self {
        if value == 0 {
            return Self::zero();
        }

        let negative = value < 0;
        // unsigned_abs keeps i64::MIN convertible.
        let mut magnitude = value.unsigned_abs();
        let mut trits = Vec::new();

        while magnitude != 0 {
            match magnitude % 3 {
                0 => {
                    trits.push(Trit::O);
                    magnitude /= 3;
                }
                1 => {
                    trits.push(Trit::P);
                    magnitude /= 3;
                }
                _ => {
                    // 2 ≡ -1 (mod 3): emit N and borrow from the next place.
                    trits.push(Trit::N);
                    magnitude = magnitude / 3 + 1;
                }
            }
        }
        trits.reverse();

        let result = Self { trits };
        if negative {
            result.neg()
        } else {
            result
        }
    }

    /// Convert back to a machine integer.
    ///
    /// Evaluates the trit polynomial with wrapping i64 arithmetic, so
    /// every value representable in an i64 converts exactly (including
    /// `i64::MIN`, whose final step transiently leaves the range) and
    /// anything wider wraps around.
    pub fn to_i64(&self) -> i64 {
        self.trits.iter().fold(0i64, |acc, t| {
            acc.wrapping_mul(3).wrapping_add(t.to_i8() as i64)
        })
    }

    /// Negate all trits (multiply by -1). Length-preserving.
    pub fn neg(&self) -> Self {
        Self {
            trits: self.trits.iter().map(|t| t.neg()).collect(),
        }
    }

    /// Check if this number is zero (every trit zero).
    pub fn is_zero(&self) -> bool {
        self.trits.iter().all(|t| t.is_zero())
    }

    /// The sign of this number: its leading non-zero trit, or O for zero.
    pub fn sign(&self) -> Trit {
        for &t in &self.trits {
            if !t.is_zero() {
                return t;
            }
        }
        Trit::O
    }

    /// Check if this number is negative.
    pub fn is_negative(&self) -> bool {
        self.sign().is_negative()
    }

    /// Strip leading zero trits, yielding the canonical form.
    ///
    /// All-zero input collapses to canonical zero.
    pub fn trunc(&self) -> Self {
        match self.trits.iter().position(|t| !t.is_zero()) {
            Some(first) => Self {
                trits: self.trits[first..].to_vec(),
            },
            None => Self::zero(),
        }
    }

    /// Pad both numbers with leading zero trits to a common length.
    ///
    /// Trit-wise operations assume positional correspondence, so they
    /// align their operands first.
    pub fn align(a: &Ternary, b: &Ternary) -> (Ternary, Ternary) {
        let width = a.len().max(b.len());
        (a.pad_to(width), b.pad_to(width))
    }

    fn pad_to(&self, width: usize) -> Ternary {
        debug_assert!(self.len() <= width);
        let mut trits = vec![Trit::O; width - self.len()];
        trits.extend_from_slice(&self.trits);
        Ternary { trits }
    }

    /// Shift left by `n` trit positions (multiply by 3^n) by appending
    /// trailing zero trits.
    pub fn shift_left(&self, n: usize) -> Ternary {
        let mut trits = self.trits.clone();
        trits.resize(self.len() + n, Trit::O);
        Ternary { trits }
    }

    /// Parse leniently: any character other than '-', '0', '+' counts
    /// as a zero trit but still occupies its position (and therefore
    /// shifts the weights of the surrounding digits). Empty input
    /// yields canonical zero.
    ///
    /// Prefer the strict [`FromStr`] parser unless this leniency is
    /// specifically wanted.
    pub fn parse_permissive(s: &str) -> Ternary {
        Self::from_trits(
            s.chars()
                .map(|c| Trit::from_char(c).unwrap_or(Trit::O))
                .collect(),
        )
    }

    /// Render as trits followed by the decimal value, e.g. `"+-0 (6)"`.
    pub fn pretty(&self) -> String {
        format!("{} ({})", self, self.to_i64())
    }
}

impl Default for Ternary {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.trits {
            write!(f, "{}", t.to_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Ternary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ternary({} = {})", self, self.to_i64())
    }
}

impl std::ops::Neg for Ternary {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Ternary::neg(&self)
    }
}

impl std::ops::Neg for &Ternary {
    type Output = Ternary;

    fn neg(self) -> Self::Output {
        Ternary::neg(self)
    }
}

impl From<i64> for Ternary {
    fn from(value: i64) -> Self {
        Ternary::from_i64(value)
    }
}

/// Errors that can occur when parsing balanced ternary strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string contained no trits at all.
    #[error("empty balanced ternary string")]
    Empty,

    /// An invalid character was encountered.
    #[error("invalid trit character: '{0}' (expected '-', '0' or '+')")]
    InvalidChar(char),
}

impl FromStr for Ternary {
    type Err = ParseError;

    /// Strict parse of a trit string like `"+-0"`.
    ///
    /// Rejects empty input and any character outside '-', '0', '+'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        let trits = s
            .chars()
            .map(|c| Trit::from_char(c).ok_or(ParseError::InvalidChar(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { trits })
    }
}

impl Serialize for Ternary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ternary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
