//! Cart Lines

use rusty_money::{Money, iso::Currency};

use crate::{
    pricing::{OrderType, PricingError, line_total},
    products::{Product, ProductId},
};

/// One product and the quantity requested for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    product: Product<'a>,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    pub(crate) fn new(product: Product<'a>, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Product snapshot for this line.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Identifier of the line's product.
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Requested quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Stock ceiling recorded on the product snapshot.
    pub fn stock_ceiling(&self) -> u32 {
        self.product.total_stock
    }

    pub(crate) fn allows(&self, quantity: u32) -> bool {
        quantity <= self.stock_ceiling()
    }

    /// Returns `true` if the quantity fits within the given stock.
    pub fn fits_stock(&self, available: u32) -> bool {
        self.quantity <= available
    }

    /// Unit price for the order type.
    pub fn unit_price(&self, order_type: OrderType) -> Money<'a, Currency> {
        self.product.price(order_type)
    }

    /// Unit price times quantity for the order type.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total overflows.
    pub fn subtotal(&self, order_type: OrderType) -> Result<Money<'a, Currency>, PricingError> {
        line_total(self.unit_price(order_type), self.quantity)
    }
}
