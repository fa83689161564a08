use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of the HUB-3 amount field.
pub const AMOUNT_WIDTH: usize = 15;

/// The largest cent value that still fits in [AMOUNT_WIDTH] digits.
const MAX_CENTS: u64 = 999_999_999_999_999;

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum AmountError {
    #[error("The amount is not a finite number")]
    NotFinite,

    #[error("The amount must not be negative")]
    Negative,

    #[error("The amount does not fit in 15 digits of cents")]
    TooLarge,

    #[error("Invalid decimal amount: {0}")]
    Parse(String),

    #[error("The calculation overflowed the decimal range")]
    Overflow,
}

/// A non-negative EUR amount that can be written into a HUB-3 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAmount", into = "Decimal")]
pub struct Hub3Amount {
    value: Decimal,
    cents: u64,
}

impl Hub3Amount {
    pub const ZERO: Hub3Amount = Hub3Amount {
        value: Decimal::ZERO,
        cents: 0,
    };

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative);
        }
        let cents = value
            .abs()
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_u64())
            .filter(|cents| *cents <= MAX_CENTS)
            .ok_or(AmountError::TooLarge)?;
        Ok(Hub3Amount { value, cents })
    }

    /// The amount as it was given, before rounding to cents.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// The amount rounded to the nearest cent, half away from zero.
    pub fn cents(&self) -> u64 {
        self.cents
    }
}

impl TryFrom<Decimal> for Hub3Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Hub3Amount::new(value)
    }
}

impl TryFrom<f64> for Hub3Amount {
    type Error = AmountError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountError::Negative);
        }
        // Go through the shortest round-trip text so 262.51 stays 262.51.
        let value = Decimal::from_str(&value.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(value))
            .ok_or(AmountError::TooLarge)?;
        Hub3Amount::new(value)
    }
}

impl TryFrom<u64> for Hub3Amount {
    type Error = AmountError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Hub3Amount::new(Decimal::from(value))
    }
}

impl FromStr for Hub3Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s.trim()).map_err(|err| AmountError::Parse(err.to_string()))?;
        Hub3Amount::new(value)
    }
}

impl From<Hub3Amount> for Decimal {
    fn from(amount: Hub3Amount) -> Self {
        amount.value
    }
}

impl fmt::Display for Hub3Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// JSON amounts arrive either as numbers or as decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl TryFrom<RawAmount> for Hub3Amount {
    type Error = AmountError;

    fn try_from(raw: RawAmount) -> Result<Self, Self::Error> {
        match raw {
            RawAmount::Number(value) => Hub3Amount::try_from(value),
            RawAmount::Text(value) => value.parse(),
        }
    }
}

/// Formats an amount as 15 zero-padded digits of integer cents.
pub fn format_hub3_amount(amount: &Hub3Amount) -> String {
    format!("{:0width$}", amount.cents(), width = AMOUNT_WIDTH)
}
