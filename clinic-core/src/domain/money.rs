//! Monetary amounts with a fixed currency.
//!
//! All cost comparisons in this crate go through [`Money::rounded_amount`]:
//! half-up rounding to two decimal places. Raw amounts keep whatever
//! precision the caller supplied; only comparisons are rounded.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places used when comparing amounts.
pub const COMPARISON_SCALE: u32 = 2;

/// The canonical rounding applied wherever amounts are summed or compared.
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(COMPARISON_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Validation errors returned by [`CurrencyCode::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyValidationError {
    InvalidCurrencyCode,
}

impl fmt::Display for MoneyValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCurrencyCode => {
                write!(f, "currency code must be exactly 3 ASCII uppercase letters")
            }
        }
    }
}

impl std::error::Error for MoneyValidationError {}

/// ISO 4217 style three-letter currency code.
///
/// No currency conversion happens anywhere in this crate; the code exists so
/// amounts in different currencies never compare equal by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Validate and construct a [`CurrencyCode`].
    pub fn new(code: impl Into<String>) -> Result<Self, MoneyValidationError> {
        let code = code.into();
        if code.len() != 3 || !code.bytes().all(|byte| byte.is_ascii_uppercase()) {
            return Err(MoneyValidationError::InvalidCurrencyCode);
        }
        Ok(Self(code))
    }

    /// The currency every amount defaults to.
    pub fn eur() -> Self {
        Self("EUR".to_owned())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::eur()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MoneyValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// An amount of money in a single currency.
///
/// Two values are equal iff the amounts are numerically equal and the
/// currencies match; amounts in different currencies never compare equal.
/// Use [`Money::rounded_amount`] wherever estimates are summed or compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: Decimal,
    pub currency: CurrencyCode,
}

impl Money {
    /// Build an amount in an explicit currency.
    pub fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Self { amount, currency }
    }

    /// Build an amount in the default currency.
    pub fn eur(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::eur())
    }

    /// The amount rounded half-up to two decimal places.
    pub fn rounded_amount(&self) -> Decimal {
        round_half_up(self.amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
