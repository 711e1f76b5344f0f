//! # Money Module
//!
//! Two-decimal display of totals.
//!
//! ## Rounding Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices and totals stay plain f64 values so the math matches the       │
//! │  numbers the cart was priced with:                                      │
//! │    1700 - 1700 × 0.2 = 1360                                             │
//! │                                                                         │
//! │  Rounding happens exactly once, on the exact binary value, when a       │
//! │  total is shown:                                                        │
//! │    4.055  is really 4.05499999…  → "4.05"                               │
//! │    0.125  is exactly 1/8 (a tie) → "0.13"  (ties go away from zero)     │
//! │    1e17                          → "100000000000000000.00"              │
//! │    -5                            → "-5.00"  (sign after the `$`)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use till_core::money::Money;
//!
//! let total = Money::from_amount(1360.0).unwrap();
//! assert_eq!(total.to_fixed(), "1360.00");
//! assert_eq!(total.to_string(), "$1360.00");
//! assert_eq!(Money::from_amount(-5.0).unwrap().to_string(), "$-5.00");
//! ```

use serde::Serialize;
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A finite monetary amount in major units, shown with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Wraps a finite amount.
    ///
    /// ## Errors
    /// `InvalidTotal` when `amount` is NaN or infinite.
    ///
    /// ## Example
    /// ```rust
    /// use till_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(10.99).unwrap().amount(), 10.99);
    /// assert!(Money::from_amount(f64::NAN).is_err());
    /// ```
    pub fn from_amount(amount: f64) -> CoreResult<Self> {
        if !amount.is_finite() {
            return Err(CoreError::InvalidTotal);
        }
        Ok(Money(amount))
    }

    /// The unrounded amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is zero (either sign).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// The amount with exactly two decimals and no currency symbol.
    ///
    /// The nearest two-decimal number to the exact binary value is chosen;
    /// when two are equally near, the one further from zero wins. Negative
    /// amounts keep their `-` even when they round to zero (`-0.001` →
    /// `"-0.00"`), while `-0.0` itself renders as `"0.00"`.
    pub fn to_fixed(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.abs();

        let digits = if is_half_cent(magnitude) {
            // Exact: a half cent terminates at the third decimal
            round_up_last_place(&format!("{magnitude:.3}"))
        } else {
            format!("{magnitude:.2}")
        };

        format!("{sign}{digits}")
    }
}

/// True when `magnitude` lies exactly halfway between two cent values.
///
/// A binary float is a half cent only when it is an odd multiple of 1/8,
/// i.e. its fractional part is .125, .375, .625 or .875.
fn is_half_cent(magnitude: f64) -> bool {
    (magnitude * 8.0).fract() == 0.0 && (magnitude * 4.0).fract() != 0.0
}

/// Drops the trailing `5` of a three-decimal string and adds one unit in the
/// new last place, carrying through nines: `"9.995"` → `"10.00"`.
fn round_up_last_place(three_places: &str) -> String {
    let mut chars: Vec<char> = three_places.chars().collect();
    chars.pop();

    for c in chars.iter_mut().rev() {
        match *c {
            '.' => {}
            '9' => *c = '0',
            digit => {
                *c = char::from(digit as u8 + 1);
                return chars.into_iter().collect();
            }
        }
    }

    std::iter::once('1').chain(chars).collect()
}

/// Shows money as `$` followed by [`Money::to_fixed`], e.g. `$1360.00`, `$-5.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.to_fixed())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(amount: f64) -> String {
        Money::from_amount(amount).unwrap().to_fixed()
    }

    #[test]
    fn test_from_amount_rejects_non_finite() {
        assert_eq!(Money::from_amount(f64::NAN), Err(CoreError::InvalidTotal));
        assert_eq!(Money::from_amount(f64::INFINITY), Err(CoreError::InvalidTotal));
        assert_eq!(
            Money::from_amount(f64::NEG_INFINITY),
            Err(CoreError::InvalidTotal)
        );
    }

    #[test]
    fn test_plain_values() {
        assert_eq!(fixed(1360.0), "1360.00");
        assert_eq!(fixed(10.99), "10.99");
        assert_eq!(fixed(0.0), "0.00");
        assert_eq!(fixed(0.1 + 0.2), "0.30");
    }

    #[test]
    fn test_rounds_the_exact_binary_value() {
        // Each of these sits just below the half cent in binary
        assert_eq!(fixed(1.005), "1.00");
        assert_eq!(fixed(4.055), "4.05");
        assert_eq!(fixed(4.095), "4.09");
        assert_eq!(fixed(8.065), "8.06");
        assert_eq!(fixed(16.005), "16.00");
        assert_eq!(fixed(16.255), "16.25");
        assert_eq!(fixed(2.675), "2.67");
    }

    #[test]
    fn test_exact_half_cents_round_away_from_zero() {
        assert_eq!(fixed(0.125), "0.13");
        assert_eq!(fixed(0.375), "0.38");
        assert_eq!(fixed(2.625), "2.63");
        assert_eq!(fixed(9.875), "9.88");
        assert_eq!(fixed(-0.125), "-0.13");
    }

    #[test]
    fn test_half_cent_detection() {
        assert!(is_half_cent(0.125));
        assert!(is_half_cent(1234.875));
        assert!(!is_half_cent(0.25));
        assert!(!is_half_cent(1.0));
        assert!(!is_half_cent(4.055));
        assert!(!is_half_cent(1e300));
    }

    #[test]
    fn test_carry_through_nines() {
        assert_eq!(round_up_last_place("0.125"), "0.13");
        assert_eq!(round_up_last_place("9.995"), "10.00");
        assert_eq!(round_up_last_place("99.995"), "100.00");
        assert_eq!(round_up_last_place("1.095"), "1.10");
    }

    #[test]
    fn test_large_totals_are_exact() {
        assert_eq!(fixed(1e17), "100000000000000000.00");
        assert_eq!(fixed(1e20), "100000000000000000000.00");
        assert_eq!(fixed(-1e17), "-100000000000000000.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(fixed(-5.0), "-5.00");
        assert_eq!(fixed(-5.5), "-5.50");
        assert_eq!(fixed(-0.001), "-0.00");
        assert_eq!(fixed(-0.0), "0.00");
    }

    #[test]
    fn test_display() {
        let show = |amount: f64| Money::from_amount(amount).unwrap().to_string();
        assert_eq!(show(10.99), "$10.99");
        assert_eq!(show(5.0), "$5.00");
        assert_eq!(show(-5.5), "$-5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_amount(-0.0).unwrap().is_zero());
        assert!(Money::from_amount(-0.01).unwrap().is_negative());
        assert!(!Money::from_amount(0.01).unwrap().is_negative());
    }
}
