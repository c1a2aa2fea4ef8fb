//! Pricing

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use rusty_money::{Money, MoneyError, iso::Currency};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pricing tier selecting which price list applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Menudeo: retail prices.
    #[default]
    Retail,

    /// Mayoreo: wholesale prices.
    Wholesale,
}

impl OrderType {
    /// Stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
        }
    }
}

impl Display for OrderType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Unknown order type string.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown order type: {0}")]
pub struct UnknownOrderType(pub String);

impl FromStr for OrderType {
    type Err = UnknownOrderType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "retail" => Ok(Self::Retail),
            "wholesale" => Ok(Self::Wholesale),
            other => Err(UnknownOrderType(other.to_string())),
        }
    }
}

/// Errors that can occur while pricing cart lines.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// Unit price times quantity does not fit in minor units.
    #[error("line total overflows: {quantity} x {unit_minor} minor units")]
    Overflow {
        /// Unit price in minor units
        unit_minor: i64,
        /// Line quantity
        quantity: u32,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `unit_price x quantity`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] when the product does not fit in minor units.
pub fn line_total<'a>(
    unit_price: Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let unit_minor = unit_price.to_minor_units();

    let total = unit_minor
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow {
            unit_minor,
            quantity,
        })?;

    Ok(Money::from_minor(total, unit_price.currency()))
}

/// Sums amounts, starting from zero in `currency`.
///
/// # Errors
///
/// Returns [`PricingError::Money`] on currency mismatch or arithmetic failure.
pub fn sum<'a, I>(amounts: I, currency: &'a Currency) -> Result<Money<'a, Currency>, PricingError>
where
    I: IntoIterator<Item = Money<'a, Currency>>,
{
    amounts
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, amount| {
            acc.add(amount).map_err(PricingError::from)
        })
}
