//! Order Numbers
//!
//! Orders are numbered `COT-00001`, `COT-00002`, ... The next number is derived from the most
//! recently created order by keeping only the digits of its number and adding one.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::IntErrorKind,
};

use thiserror::Error;

/// Prefix of every order number.
pub const ORDER_NUMBER_PREFIX: &str = "COT-";

/// Minimum digits after the prefix; larger sequences print wider.
const ORDER_NUMBER_WIDTH: usize = 5;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderNumberError {
    /// The previous order number carries no digits to continue from.
    #[error("order number {0:?} has no digits")]
    NoDigits(String),

    /// The previous order number's digits do not fit the sequence.
    #[error("order number {0:?} is out of range")]
    OutOfRange(String),
}

/// Sequential order number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderNumber(u64);

impl OrderNumber {
    /// Number given to the very first order.
    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }

    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }

    /// Read the sequence out of a stored number, ignoring every non-digit.
    ///
    /// # Errors
    ///
    /// Returns an error if the text has no digits or they overflow the sequence.
    pub fn parse(text: &str) -> Result<Self, OrderNumberError> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|error| match error.kind() {
                IntErrorKind::Empty => OrderNumberError::NoDigits(text.to_string()),
                _ => OrderNumberError::OutOfRange(text.to_string()),
            })
    }

    /// The number following this one.
    ///
    /// # Errors
    ///
    /// Returns [`OrderNumberError::OutOfRange`] when the sequence is exhausted.
    pub fn next(self) -> Result<Self, OrderNumberError> {
        self.0
            .checked_add(1)
            .map(Self)
            .ok_or_else(|| OrderNumberError::OutOfRange(self.to_string()))
    }

    /// The number to give a new order, given the latest stored one.
    ///
    /// # Errors
    ///
    /// Returns an error if the latest number cannot be continued.
    pub fn next_after(latest: Option<&str>) -> Result<Self, OrderNumberError> {
        match latest {
            Some(latest) => Self::parse(latest)?.next(),
            None => Ok(Self::first()),
        }
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{ORDER_NUMBER_PREFIX}{:0width$}",
            self.0,
            width = ORDER_NUMBER_WIDTH
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn follows_the_latest_number() -> TestResult {
        let next = OrderNumber::next_after(Some("COT-00042"))?;

        assert_eq!(next.to_string(), "COT-00043");

        Ok(())
    }

    #[test]
    fn starts_at_one_without_prior_orders() -> TestResult {
        assert_eq!(OrderNumber::next_after(None)?.to_string(), "COT-00001");

        Ok(())
    }

    #[test]
    fn ignores_non_digits_anywhere() -> TestResult {
        assert_eq!(OrderNumber::parse("COT-0-01-9x")?.sequence(), 19);
        assert_eq!(OrderNumber::next_after(Some("cot 9"))?.to_string(), "COT-00010");

        Ok(())
    }

    #[test]
    fn grows_past_five_digits() -> TestResult {
        assert_eq!(
            OrderNumber::next_after(Some("COT-99999"))?.to_string(),
            "COT-100000"
        );

        Ok(())
    }

    #[test]
    fn number_without_digits_is_rejected() {
        assert_eq!(
            OrderNumber::next_after(Some("COT-")),
            Err(OrderNumberError::NoDigits("COT-".to_string()))
        );
    }

    #[test]
    fn overflowing_digits_are_rejected() {
        assert!(matches!(
            OrderNumber::parse("COT-99999999999999999999999"),
            Err(OrderNumberError::OutOfRange(_))
        ));
        assert!(matches!(
            OrderNumber::parse(&u64::MAX.to_string()).and_then(OrderNumber::next),
            Err(OrderNumberError::OutOfRange(_))
        ));
    }
}
