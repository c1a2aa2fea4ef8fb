//! Cart
//!
//! In-memory draft of a quote: one line per product, each bounded by the product's stock
//! snapshot, priced per [`OrderType`].

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    pricing::{OrderType, PricingError, sum},
    products::{Product, ProductId},
};

mod line;
mod totals;

pub use line::CartLine;
pub use totals::CartTotals;

/// Errors raised by cart mutations. A failed mutation leaves the cart unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity exceeds the product's stock ceiling.
    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        /// Product that ran out
        product: ProductId,
        /// Product name, for display
        name: String,
        /// Quantity the mutation asked for
        requested: u32,
        /// Stock ceiling of the product
        available: u32,
    },

    /// A product is priced in a different currency than the cart (product, product currency,
    /// cart currency).
    #[error("product {0} is priced in {1}, but the cart is in {2}")]
    CurrencyMismatch(ProductId, &'static str, &'static str),
}

/// Outcome of a quantity update that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// The line now has the requested quantity.
    Applied,

    /// The input was not a positive quantity, or the product is not in the cart.
    Ignored,
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart priced in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the product, or starts a new line with quantity 1.
    /// Returns the line's new quantity.
    ///
    /// # Errors
    ///
    /// - [`CartError::InsufficientStock`]: the new quantity would exceed the product's stock.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    pub fn add_item(&mut self, product: &Product<'a>) -> Result<u32, CartError> {
        if let Some(line) = self.line_mut(product.id) {
            let requested = line.quantity().saturating_add(1);

            if !line.allows(requested) {
                return Err(insufficient_stock(line.product(), requested));
            }

            line.set_quantity(requested);

            return Ok(requested);
        }

        self.check_currency(product)?;

        if !product.in_stock() {
            return Err(insufficient_stock(product, 1));
        }

        self.lines.push(CartLine::new(product.clone(), 1));

        Ok(1)
    }

    /// Replace the quantity of a product already in the cart.
    ///
    /// A quantity of zero is ignored, as is a product that is not in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InsufficientStock`] if the quantity exceeds the product's stock.
    pub fn set_quantity(
        &mut self,
        product: ProductId,
        quantity: u32,
    ) -> Result<QuantityUpdate, CartError> {
        if quantity < 1 {
            return Ok(QuantityUpdate::Ignored);
        }

        let Some(line) = self.line_mut(product) else {
            return Ok(QuantityUpdate::Ignored);
        };

        if !line.allows(quantity) {
            return Err(insufficient_stock(line.product(), quantity));
        }

        line.set_quantity(quantity);

        Ok(QuantityUpdate::Applied)
    }

    /// Replace the quantity of a product from raw user input.
    ///
    /// Input that is not a positive integer is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InsufficientStock`] if the quantity exceeds the product's stock.
    pub fn set_quantity_input(
        &mut self,
        product: ProductId,
        input: &str,
    ) -> Result<QuantityUpdate, CartError> {
        match input.trim().parse::<u32>() {
            Ok(quantity) => self.set_quantity(product, quantity),
            Err(_) => Ok(QuantityUpdate::Ignored),
        }
    }

    /// Remove a product's line, returning it if it was present.
    pub fn remove_item(&mut self, product: ProductId) -> Option<CartLine<'a>> {
        let position = self
            .lines
            .iter()
            .position(|line| line.product_id() == product)?;

        Some(self.lines.remove(position))
    }

    /// Sum of line subtotals at the order type's prices.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn subtotal(&self, order_type: OrderType) -> Result<Money<'a, Currency>, PricingError> {
        let line_totals = self
            .lines
            .iter()
            .map(|line| line.subtotal(order_type))
            .collect::<Result<Vec<_>, _>>()?;

        sum(line_totals, self.currency)
    }

    /// Amount saved versus retail prices: zero unless the order is wholesale.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn discount(&self, order_type: OrderType) -> Result<Money<'a, Currency>, PricingError> {
        match order_type {
            OrderType::Retail => Ok(Money::from_minor(0, self.currency)),
            OrderType::Wholesale => Ok(self
                .subtotal(OrderType::Retail)?
                .sub(self.subtotal(OrderType::Wholesale)?)?),
        }
    }

    /// Amount charged, equal to the subtotal.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn total(&self, order_type: OrderType) -> Result<Money<'a, Currency>, PricingError> {
        self.subtotal(order_type)
    }

    /// All totals for the order type at once.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn totals(&self, order_type: OrderType) -> Result<CartTotals<'a>, PricingError> {
        let retail_subtotal = self.subtotal(OrderType::Retail)?;

        let (subtotal, discount) = match order_type {
            OrderType::Retail => (retail_subtotal, Money::from_minor(0, self.currency)),
            OrderType::Wholesale => {
                let subtotal = self.subtotal(OrderType::Wholesale)?;

                (subtotal, retail_subtotal.sub(subtotal)?)
            }
        };

        Ok(CartTotals {
            order_type,
            retail_subtotal,
            subtotal,
            discount,
        })
    }

    /// First line whose quantity exceeds the stock reported by `available`.
    ///
    /// Products for which `available` returns `None` are treated as having no stock.
    pub fn first_shortfall<F>(&self, available: F) -> Option<CartError>
    where
        F: Fn(ProductId) -> Option<u32>,
    {
        self.lines.iter().find_map(|line| {
            let stock = available(line.product_id()).unwrap_or(0);

            (!line.fits_stock(stock)).then(|| CartError::InsufficientStock {
                product: line.product_id(),
                name: line.product().name.clone(),
                requested: line.quantity(),
                available: stock,
            })
        })
    }

    /// First line whose quantity exceeds its own stock snapshot.
    pub fn stock_shortfall(&self) -> Option<CartError> {
        self.first_shortfall(|product| self.line(product).map(CartLine::stock_ceiling))
    }

    /// Line for a product, if present.
    pub fn line(&self, product: ProductId) -> Option<&CartLine<'a>> {
        self.lines.iter().find(|line| line.product_id() == product)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine<'a>] {
        &self.lines
    }

    /// Total number of units across lines.
    pub fn units(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity())).sum()
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn line_mut(&mut self, product: ProductId) -> Option<&mut CartLine<'a>> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id() == product)
    }

    fn check_currency(&self, product: &Product<'a>) -> Result<(), CartError> {
        [product.retail_price, product.wholesale_price]
            .iter()
            .try_for_each(|price| {
                let price_currency = price.currency();

                if price_currency == self.currency {
                    Ok(())
                } else {
                    Err(CartError::CurrencyMismatch(
                        product.id,
                        price_currency.iso_alpha_code,
                        self.currency.iso_alpha_code,
                    ))
                }
            })
    }
}

fn insufficient_stock(product: &Product<'_>, requested: u32) -> CartError {
    CartError::InsufficientStock {
        product: product.id,
        name: product.name.clone(),
        requested,
        available: product.total_stock,
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{MXN, USD};
    use testresult::TestResult;
    use uuid::Uuid;

    use super::*;

    fn product(retail: i64, wholesale: i64, stock: u32) -> Product<'static> {
        Product {
            id: ProductId::from_uuid(Uuid::now_v7()),
            name: "Arracadas".to_string(),
            sku: "AR-010".to_string(),
            material: "baño de oro".to_string(),
            total_stock: stock,
            retail_price: Money::from_minor(retail, MXN),
            wholesale_price: Money::from_minor(wholesale, MXN),
        }
    }

    #[test]
    fn add_item_starts_line_at_one() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        assert_eq!(cart.add_item(&a)?, 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(a.id).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn add_item_twice_increments_existing_line() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;

        assert_eq!(cart.add_item(&a)?, 2);
        assert_eq!(cart.len(), 1, "same product must not create a second line");

        Ok(())
    }

    #[test]
    fn add_item_beyond_stock_is_rejected_without_mutation() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 1);

        cart.add_item(&a)?;
        let before = cart.clone();

        let result = cart.add_item(&a);

        assert_eq!(
            result,
            Err(CartError::InsufficientStock {
                product: a.id,
                name: a.name.clone(),
                requested: 2,
                available: 1,
            })
        );
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn add_item_out_of_stock_product_is_rejected() {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 0);

        let result = cart.add_item(&a);

        assert!(
            matches!(result, Err(CartError::InsufficientStock { requested: 1, available: 0, .. })),
            "expected InsufficientStock, got {result:?}"
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_other_currency_is_rejected() {
        let mut cart = Cart::new(MXN);
        let mut a = product(100_00, 80_00, 3);
        a.wholesale_price = Money::from_minor(40_00, USD);

        let result = cart.add_item(&a);

        assert_eq!(
            result,
            Err(CartError::CurrencyMismatch(a.id, "USD", "MXN"))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_replaces_quantity() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;

        assert_eq!(cart.set_quantity(a.id, 4)?, QuantityUpdate::Applied);
        assert_eq!(cart.line(a.id).map(CartLine::quantity), Some(4));

        Ok(())
    }

    #[test]
    fn set_quantity_above_stock_is_rejected() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;
        cart.set_quantity(a.id, 2)?;
        let before = cart.clone();

        let result = cart.set_quantity(a.id, 6);

        assert!(
            matches!(result, Err(CartError::InsufficientStock { requested: 6, available: 5, .. })),
            "expected InsufficientStock, got {result:?}"
        );
        assert_eq!(cart, before);

        Ok(())
    }

    #[test]
    fn set_quantity_zero_is_ignored() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;

        assert_eq!(cart.set_quantity(a.id, 0)?, QuantityUpdate::Ignored);
        assert_eq!(cart.line(a.id).map(CartLine::quantity), Some(1));

        Ok(())
    }

    #[test]
    fn set_quantity_unknown_product_is_ignored() -> TestResult {
        let mut cart = Cart::new(MXN);

        let update = cart.set_quantity(ProductId::from_uuid(Uuid::now_v7()), 2)?;

        assert_eq!(update, QuantityUpdate::Ignored);
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn set_quantity_input_ignores_non_numeric_and_negative_input() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;

        for input in ["", "abc", "-3", "0", "2.5"] {
            assert_eq!(
                cart.set_quantity_input(a.id, input)?,
                QuantityUpdate::Ignored,
                "input {input:?} should be ignored"
            );
        }

        assert_eq!(cart.set_quantity_input(a.id, " 3 ")?, QuantityUpdate::Applied);
        assert_eq!(cart.line(a.id).map(CartLine::quantity), Some(3));

        Ok(())
    }

    #[test]
    fn remove_item_is_idempotent() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;

        assert!(cart.remove_item(a.id).is_some());
        assert!(cart.remove_item(a.id).is_none());
        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn retail_totals_have_no_discount() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100, 80, 5);

        cart.add_item(&a)?;
        cart.set_quantity(a.id, 2)?;

        assert_eq!(cart.subtotal(OrderType::Retail)?, Money::from_minor(200, MXN));
        assert_eq!(cart.discount(OrderType::Retail)?, Money::from_minor(0, MXN));
        assert_eq!(cart.total(OrderType::Retail)?, Money::from_minor(200, MXN));

        Ok(())
    }

    #[test]
    fn wholesale_discount_is_savings_versus_retail() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100, 80, 5);

        cart.add_item(&a)?;
        cart.set_quantity(a.id, 2)?;

        assert_eq!(cart.subtotal(OrderType::Wholesale)?, Money::from_minor(160, MXN));
        assert_eq!(cart.discount(OrderType::Wholesale)?, Money::from_minor(40, MXN));
        assert_eq!(cart.total(OrderType::Wholesale)?, Money::from_minor(160, MXN));

        Ok(())
    }

    #[test]
    fn totals_match_individual_calculations() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(450_00, 360_00, 5);
        let b = product(120_00, 95_00, 10);

        cart.add_item(&a)?;
        cart.add_item(&b)?;
        cart.set_quantity(b.id, 3)?;

        for order_type in [OrderType::Retail, OrderType::Wholesale] {
            let totals = cart.totals(order_type)?;

            assert_eq!(totals.order_type(), order_type);
            assert_eq!(totals.subtotal(), cart.subtotal(order_type)?);
            assert_eq!(totals.discount(), cart.discount(order_type)?);
            assert_eq!(totals.total(), cart.total(order_type)?);
            assert_eq!(totals.retail_subtotal(), cart.subtotal(OrderType::Retail)?);
        }

        Ok(())
    }

    #[test]
    fn empty_cart_totals_are_zero() -> TestResult {
        let cart = Cart::new(MXN);
        let totals = cart.totals(OrderType::Wholesale)?;

        assert_eq!(totals.total(), Money::from_minor(0, MXN));
        assert_eq!(totals.discount(), Money::from_minor(0, MXN));

        Ok(())
    }

    #[test]
    fn stock_shortfall_compares_against_current_stock() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);

        cart.add_item(&a)?;
        cart.set_quantity(a.id, 4)?;

        assert_eq!(cart.stock_shortfall(), None);
        assert_eq!(cart.first_shortfall(|_| Some(4)), None);
        assert_eq!(
            cart.first_shortfall(|_| Some(3)),
            Some(CartError::InsufficientStock {
                product: a.id,
                name: a.name.clone(),
                requested: 4,
                available: 3,
            })
        );
        assert!(cart.first_shortfall(|_| None).is_some());

        Ok(())
    }

    #[test]
    fn units_counts_every_piece() -> TestResult {
        let mut cart = Cart::new(MXN);
        let a = product(100_00, 80_00, 5);
        let b = product(100_00, 80_00, 5);

        cart.add_item(&a)?;
        cart.add_item(&b)?;
        cart.set_quantity(b.id, 4)?;

        assert_eq!(cart.units(), 5);

        Ok(())
    }
}
