//! Single balanced ternary digit (trit).
//!
//! A trit can hold one of three values: -1, 0, or +1, written as the
//! characters '-', '0' and '+' in text form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single balanced ternary digit.
///
/// The discriminant of each variant is its integer weight, so
/// converting to an integer is a plain cast.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Trit {
    /// Negative (-1)
    N = -1,
    /// Zero (0)
    O = 0,
    /// Positive (+1)
    P = 1,
}

impl Trit {
    /// All possible trit values in order: N, O, P
    pub const ALL: [Trit; 3] = [Trit::N, Trit::O, Trit::P];

    /// Create a trit from an integer value.
    ///
    /// # Panics
    /// Panics if value is not in {-1, 0, 1}.
    #[inline]
    pub fn from_i8(value: i8) -> Self {
        match value {
            -1 => Trit::N,
            0 => Trit::O,
            1 => Trit::P,
            _ => panic!("Invalid trit value: {} (must be -1, 0, or 1)", value),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Create a trit from its text form, one of '-', '0', '+'.
    ///
    /// Returns `None` for any other character.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Trit::N),
            '0' => Some(Trit::O),
            '+' => Some(Trit::P),
            _ => None,
        }
    }

    /// The text form of this trit: '-', '0' or '+'.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Trit::N => '-',
            Trit::O => '0',
            Trit::P => '+',
        }
    }

    /// Negate the trit (flip N ↔ P, O stays O).
    #[inline]
    pub const fn neg(self) -> Self {
        match self {
            Trit::N => Trit::P,
            Trit::O => Trit::O,
            Trit::P => Trit::N,
        }
    }

    /// Full adder: adds two trits and an incoming carry, returning
    /// (sum, carry_out).
    ///
    /// The three inputs total a value in [-3, 3]; totals outside the
    /// digit range [-1, 1] wrap around and emit a carry of the matching
    /// sign, so the carry chain never leaves {-1, 0, +1}.
    #[inline]
    pub const fn add_with_carry(self, other: Self, carry_in: Self) -> (Self, Self) {
        let total = self.to_i8() + other.to_i8() + carry_in.to_i8();
        match total {
            -3 => (Trit::O, Trit::N),
            -2 => (Trit::P, Trit::N),
            -1 => (Trit::N, Trit::O),
            0 => (Trit::O, Trit::O),
            1 => (Trit::P, Trit::O),
            2 => (Trit::N, Trit::P),
            3 => (Trit::O, Trit::P),
            _ => unreachable!(),
        }
    }

    /// Returns true if this trit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::O)
    }

    /// Returns true if this trit is positive.
    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Trit::P)
    }

    /// Returns true if this trit is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Trit::N)
    }
}

impl Default for Trit {
    fn default() -> Self {
        Trit::O
    }
}

impl fmt::Debug for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trit::N => write!(f, "N"),
            Trit::O => write!(f, "O"),
            Trit::P => write!(f, "P"),
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::ops::Neg for Trit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Trit::neg(self)
    }
}

impl From<i8> for Trit {
    fn from(value: i8) -> Self {
        Trit::from_i8(value)
    }
}

impl From<Trit> for i8 {
    fn from(trit: Trit) -> Self {
        trit.to_i8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negation_involution() {
        for t in Trit::ALL {
            assert_eq!(t.neg().neg(), t, "negate(negate({:?})) should equal {:?}", t, t);
        }
    }

    #[test]
    fn test_full_adder_identity() {
        // sum + 3 * carry must reproduce the plain integer total for
        // all 27 input combinations.
        for a in Trit::ALL {
            for b in Trit::ALL {
                for c in Trit::ALL {
                    let (sum, carry) = a.add_with_carry(b, c);
                    assert_eq!(
                        sum.to_i8() + 3 * carry.to_i8(),
                        a.to_i8() + b.to_i8() + c.to_i8(),
                        "add_with_carry({:?}, {:?}, {:?})", a, b, c
                    );
                }
            }
        }
    }

    #[test]
    fn test_full_adder_table() {
        // 0 + 0 + 0 = 0, carry 0
        assert_eq!(Trit::O.add_with_carry(Trit::O, Trit::O), (Trit::O, Trit::O));

        // 1 + 1 + 0 = -1, carry 1 (2 = -1 + 3)
        assert_eq!(Trit::P.add_with_carry(Trit::P, Trit::O), (Trit::N, Trit::P));

        // 1 + 1 + 1 = 0, carry 1 (3 = 0 + 3)
        assert_eq!(Trit::P.add_with_carry(Trit::P, Trit::P), (Trit::O, Trit::P));

        // -1 + -1 + 0 = 1, carry -1 (-2 = 1 - 3)
        assert_eq!(Trit::N.add_with_carry(Trit::N, Trit::O), (Trit::P, Trit::N));

        // -1 + -1 + -1 = 0, carry -1 (-3 = 0 - 3)
        assert_eq!(Trit::N.add_with_carry(Trit::N, Trit::N), (Trit::O, Trit::N));
    }

    #[test]
    fn test_full_adder_commutativity() {
        for a in Trit::ALL {
            for b in Trit::ALL {
                for c in Trit::ALL {
                    assert_eq!(a.add_with_carry(b, c), b.add_with_carry(a, c));
                }
            }
        }
    }

    #[test]
    fn test_char_roundtrip() {
        for t in Trit::ALL {
            assert_eq!(Trit::from_char(t.to_char()), Some(t));
        }
        assert_eq!(Trit::from_char('x'), None);
        assert_eq!(Trit::from_char('1'), None);
    }

    #[test]
    fn test_i8_roundtrip() {
        for t in Trit::ALL {
            assert_eq!(Trit::from_i8(t.to_i8()), t);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Trit::N.to_string(), "-");
        assert_eq!(Trit::O.to_string(), "0");
        assert_eq!(Trit::P.to_string(), "+");
    }
}
