use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::error;

const DECIMAL_PLACES: u32 = 3;

/// Largest accepted amount, one quadrillion.
///
/// Summing capped amounts cannot overflow `Decimal` (about 7.9e28) for fewer
/// than 7.9e13 records, far beyond what fits in memory.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A non-negative transfer amount backed by a fixed-precision decimal.
///
/// Aggregations never work on the raw value: every record contributes its
/// [`Amount::rounded`] form, so totals do not drift with the source precision.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value < Decimal::ZERO {
            return Err(AmountError::Negative(value));
        }

        if value > MAX_AMOUNT {
            return Err(AmountError::TooLarge(value));
        }

        Ok(Amount(value))
    }

    /// Rounds to three fractional digits, half to even.
    pub fn rounded(self) -> Amount {
        Amount(self.0.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven))
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }
}

/// Pads to three fractional digits, or as many as the 96-bit mantissa allows.
pub(super) fn fixed_scale(value: Decimal) -> Decimal {
    let mut value = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    value.rescale(DECIMAL_PLACES);
    value
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        // unreachable for amounts within MAX_AMOUNT
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |mut total, amount| {
            total += amount;
            total
        })
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", fixed_scale(self.0))
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::InvalidFormat("Value is an empty string".to_string()));
        }

        Amount::new(Decimal::from_str(value)?)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "a non-negative number no greater than {MAX_AMOUNT}")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Amount, E> {
        Amount::new(Decimal::from(value)).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Amount, E> {
        Amount::new(Decimal::from(value)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Amount, E> {
        // shortest round-trip text keeps 430.2 as 430.2 rather than its binary expansion
        let decimal = Decimal::from_str(&value.to_string())
            .map_err(|_| E::invalid_value(Unexpected::Float(value), &self))?;

        Amount::new(decimal).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // numbers only, a quoted amount is a type error
        deserializer.deserialize_any(AmountVisitor)
    }
}
