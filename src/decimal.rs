//! Fixed-point currency type with 2 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so every reported
//! metric lands on a currency-rounded value without floating-point errors.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A currency amount that maintains exactly 2 decimal places.
///
/// This type wraps `rust_decimal::Decimal` and rounds on construction using
/// banker's rounding (`round_dp`). Raw transaction amounts keep their source
/// scale; only derived metrics pass through `Money`.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use financial_health::Money;
///
/// let amount = Money::from_str("10.5").unwrap();
/// assert_eq!(amount.to_string(), "10.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money(Decimal);

impl Money {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Creates a new `Money` from a `Decimal`, rounding to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut rounded = value.round_dp(Self::SCALE);
        rounded.rescale(Self::SCALE);
        Money(rounded)
    }

    /// Returns the underlying decimal value.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let decimal = Decimal::from_str(trimmed)?;
        Ok(Money::new(decimal))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Money::new(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Money::new(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
        self.0.rescale(Self::SCALE);
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", self.0))
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let m = Money::from_str("1").unwrap();
        assert_eq!(m.to_string(), "1.00");

        let m = Money::from_str("1.5").unwrap();
        assert_eq!(m.to_string(), "1.50");

        let m = Money::from_str("1.12").unwrap();
        assert_eq!(m.to_string(), "1.12");

        let m = Money::from_str("  2.5  ").unwrap();
        assert_eq!(m.to_string(), "2.50");
    }

    #[test]
    fn test_new_rounds_to_two_places() {
        let m = Money::new(Decimal::from_str("-240.198").unwrap());
        assert_eq!(m.to_string(), "-240.20");

        let m = Money::new(Decimal::from_str("2000.994").unwrap());
        assert_eq!(m.to_string(), "2000.99");
    }

    #[test]
    fn test_arithmetic_preserves_scale() {
        let a = Money::from_str("1.5").unwrap();
        let b = Money::from_str("2.5").unwrap();

        assert_eq!((a + b).to_string(), "4.00");
        assert_eq!((b - a).to_string(), "1.00");
    }

    #[test]
    fn test_zero_constant() {
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn test_negative_values() {
        let positive = Money::from_str("1.0").unwrap();
        let negative = Money::from_str("-1.0").unwrap();

        assert_eq!((positive - negative).to_string(), "2.00");
        assert_eq!((negative - positive).to_string(), "-2.00");
    }
}
