//! Money type for representing prices and totals.
//!
//! Catalog prices are whole currency units (no kopecks or cents), so the
//! amount is a plain integer. Arithmetic saturates instead of overflowing:
//! cart math has no failure path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// Thousands separator used when displaying amounts (no-break space).
const GROUP_SEPARATOR: char = '\u{00a0}';

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whether the symbol is written after the amount ("2 500 ₽").
    pub fn symbol_after(&self) -> bool {
        matches!(self, Currency::RUB)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CommerceError::UnknownCurrency(s.to_string()))
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
    /// Create a new Money value.
    pub const fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn times(&self, quantity: i64) -> Money {
        Money::new(self.amount.saturating_mul(quantity), self.currency)
    }

    /// Add another amount, saturating at the numeric bounds.
    ///
    /// Both amounts are expected in the same currency. No conversion happens:
    /// the result carries `self`'s currency.
    pub fn plus(&self, other: &Money) -> Money {
        Money::new(self.amount.saturating_add(other.amount), self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum(iter: impl IntoIterator<Item = Money>, currency: Currency) -> Money {
        iter.into_iter()
            .fold(Money::zero(currency), |acc, m| acc.plus(&m))
    }

    /// Format the amount with grouped thousands, without the symbol ("13 500").
    pub fn display_amount(&self) -> String {
        group_thousands(self.amount)
    }

    /// Format as a display string ("13 500 ₽", "$13 500").
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        if self.currency.symbol_after() {
            format!("{}{}{}", amount, GROUP_SEPARATOR, self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), amount)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
