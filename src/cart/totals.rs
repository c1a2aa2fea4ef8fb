//! Cart Totals

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, iso::Currency};

use crate::pricing::OrderType;

/// Priced summary of a cart for one order type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals<'a> {
    pub(crate) order_type: OrderType,
    pub(crate) retail_subtotal: Money<'a, Currency>,
    pub(crate) subtotal: Money<'a, Currency>,
    pub(crate) discount: Money<'a, Currency>,
}

impl<'a> CartTotals<'a> {
    /// Order type the totals were priced at.
    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Sum of lines at retail prices, whatever the order type.
    pub fn retail_subtotal(&self) -> Money<'a, Currency> {
        self.retail_subtotal
    }

    /// Sum of lines at the order type's prices.
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Amount saved versus retail pricing. Zero for retail orders.
    pub fn discount(&self) -> Money<'a, Currency> {
        self.discount
    }

    /// Amount charged. The discount is already part of the wholesale subtotal.
    pub fn total(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Discount as a share of the retail subtotal.
    pub fn savings_percent(&self) -> Percentage {
        let discount_minor = self.discount.to_minor_units();
        let retail_minor = self.retail_subtotal.to_minor_units();

        if retail_minor == 0 {
            return Percentage::from(0.0);
        }

        let discount_dec = Decimal::from_i64(discount_minor).unwrap_or(Decimal::ZERO);
        let retail_dec = Decimal::from_i64(retail_minor).unwrap_or(Decimal::ZERO);

        Percentage::from(discount_dec / retail_dec)
    }

    /// Savings in percent points, rounded to two decimals (e.g. `20.00`).
    pub fn savings_percent_points(&self) -> Decimal {
        ((self.savings_percent() * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
    }
}
