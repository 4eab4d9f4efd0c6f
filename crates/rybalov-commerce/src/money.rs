//! Money type for representing monetary values.
//!
//! Catalog prices are whole rubles, so amounts are plain integers with no
//! minor unit. Arithmetic saturates instead of panicking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies. The catalog is priced in rubles only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create an amount in rubles.
    pub const fn rub(amount: i64) -> Self {
        Self {
            amount,
            currency: Currency::RUB,
        }
    }

    /// Format as a display string (e.g., "4500 ₽").
    pub fn display(&self) -> String {
        format!("{} {}", self.amount, self.currency.symbol())
    }

    /// Multiply by a quantity, saturating at the `i64` bounds.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::rub(self.amount.saturating_mul(factor))
    }

    /// Sum an iterator of Money values, saturating at the `i64` bounds.
    pub fn sum<I>(iter: I) -> Money
    where
        I: IntoIterator<Item = Money>,
    {
        iter.into_iter().fold(Money::default(), |acc, m| {
            Money::rub(acc.amount.saturating_add(m.amount))
        })
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_rub() {
        assert_eq!(Money::rub(4500).display(), "4500 \u{20bd}");
        assert_eq!(Money::rub(0).to_string(), "0 \u{20bd}");
    }

    #[test]
    fn test_money_multiply_saturates() {
        assert_eq!(Money::rub(890).multiply(3).amount, 2670);
        assert_eq!(Money::rub(i64::MAX).multiply(2).amount, i64::MAX);
    }

    #[test]
    fn test_money_sum() {
        let total = Money::sum([Money::rub(100), Money::rub(20), Money::rub(3)]);
        assert_eq!(total, Money::rub(123));
        assert_eq!(Money::sum([]), Money::rub(0));
    }

    #[test]
    fn test_money_sum_saturates() {
        let total = Money::sum([Money::rub(i64::MAX), Money::rub(1)]);
        assert_eq!(total.amount, i64::MAX);
    }
}
