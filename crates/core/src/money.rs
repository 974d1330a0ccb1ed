//! Monetary amounts in integer minor units.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

const MINOR_PER_MAJOR: i64 = 100;
const BASIS_POINTS_PER_UNIT: i128 = 10_000;

/// Amount of money in the smallest currency unit (e.g., cents).
///
/// A single implicit currency is assumed. Arithmetic is exact and checked:
/// overflow is reported as [`DomainError::InvariantViolation`] instead of
/// wrapping.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("money overflow"))
    }

    /// Multiply by a quantity (e.g. unit price × quantity = line cost).
    pub fn checked_mul(self, quantity: u32) -> DomainResult<Money> {
        self.0
            .checked_mul(i64::from(quantity))
            .map(Money)
            .ok_or_else(|| DomainError::invariant("money overflow"))
    }

    /// Fraction of this amount given in basis points (2300 = 23%).
    ///
    /// Rounded half away from zero to the nearest minor unit.
    pub fn apply_rate(self, basis_points: u32) -> DomainResult<Money> {
        let scaled = i128::from(self.0) * i128::from(basis_points);
        let half = BASIS_POINTS_PER_UNIT / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / BASIS_POINTS_PER_UNIT
        } else {
            (scaled - half) / BASIS_POINTS_PER_UNIT
        };
        i64::try_from(rounded)
            .map(Money)
            .map_err(|_| DomainError::invariant("money overflow"))
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per = MINOR_PER_MAJOR as u64;
        write!(f, "{sign}{}.{:02}", abs / per, abs % per)
    }
}

impl FromStr for Money {
    type Err = DomainError;

    /// Parses `12`, `12.3`, `12.34` and their negatives.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (digits, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if major.is_empty() || !all_digits(major) || !all_digits(minor) || minor.len() > 2 {
            return Err(DomainError::validation(format!("malformed money amount: {s:?}")));
        }

        let overflow = || DomainError::validation(format!("money amount out of range: {s:?}"));
        let major: i64 = major.parse().map_err(|_| overflow())?;
        let minor: i64 = match minor.len() {
            0 => 0,
            1 => minor.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => minor.parse().map_err(|_| overflow())?,
        };

        let units = major
            .checked_mul(MINOR_PER_MAJOR)
            .and_then(|m| m.checked_add(minor))
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -units } else { units }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_default() {
        assert_eq!(Money::default(), Money::ZERO);
        assert!(Money::ZERO.is_zero());
    }

    #[test]
    fn addition_is_exact() {
        let dime = Money::from_minor(10);
        let mut total = Money::ZERO;
        for _ in 0..10 {
            total = total.checked_add(dime).unwrap();
        }
        assert_eq!(total, Money::from_minor(100));
    }

    #[test]
    fn addition_overflow_is_an_invariant_violation() {
        let err = Money::from_minor(i64::MAX)
            .checked_add(Money::from_minor(1))
            .unwrap_err();
        assert_eq!(err, DomainError::invariant("money overflow"));
    }

    #[test]
    fn multiply_by_quantity() {
        assert_eq!(Money::from_minor(250).checked_mul(4).unwrap(), Money::from_minor(1000));
        assert_eq!(Money::from_minor(250).checked_mul(0).unwrap(), Money::ZERO);
        assert!(Money::from_minor(i64::MAX).checked_mul(2).is_err());
    }

    #[test]
    fn apply_rate_rounds_half_away_from_zero() {
        // 23% of 1.00 = 0.23
        assert_eq!(Money::from_minor(100).apply_rate(2300).unwrap(), Money::from_minor(23));
        // 5% of 0.10 = 0.005 -> 0.01
        assert_eq!(Money::from_minor(10).apply_rate(500).unwrap(), Money::from_minor(1));
        // 5% of 0.09 = 0.0045 -> 0.00
        assert_eq!(Money::from_minor(9).apply_rate(500).unwrap(), Money::ZERO);
        assert_eq!(Money::from_minor(-10).apply_rate(500).unwrap(), Money::from_minor(-1));
        assert_eq!(Money::ZERO.apply_rate(2300).unwrap(), Money::ZERO);
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::from_minor(1234).to_string(), "12.34");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
        assert_eq!(Money::from_minor(-50).to_string(), "-0.50");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn parse_accepts_common_literals() {
        assert_eq!("12.34".parse::<Money>().unwrap(), Money::from_minor(1234));
        assert_eq!("12.3".parse::<Money>().unwrap(), Money::from_minor(1230));
        assert_eq!("7".parse::<Money>().unwrap(), Money::from_minor(700));
        assert_eq!("-0.50".parse::<Money>().unwrap(), Money::from_minor(-50));
        assert_eq!(" 1.00 ".parse::<Money>().unwrap(), Money::from_minor(100));
    }

    #[test]
    fn parse_rejects_malformed_literals() {
        for bad in ["", "-", ".5", "1.234", "1,00", "abc", "1.-5", "99999999999999999999"] {
            match bad.parse::<Money>() {
                Err(DomainError::Validation(_)) => {}
                other => panic!("Expected validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn serializes_as_minor_units() {
        let json = serde_json::to_string(&Money::from_minor(1999)).unwrap();
        assert_eq!(json, "1999");
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_minor(1999));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: Summing in any grouping gives the same total as summing raw units.
        #[test]
        fn checked_add_matches_integer_sum(
            amounts in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..50)
        ) {
            let mut total = Money::ZERO;
            for a in &amounts {
                total = total.checked_add(Money::from_minor(*a)).unwrap();
            }
            prop_assert_eq!(total.minor_units(), amounts.iter().sum::<i64>());
        }

        /// Property: Display output parses back to the same amount.
        #[test]
        fn display_parses_back(units in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::from_minor(units);
            prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }
    }
}
