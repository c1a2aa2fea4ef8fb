//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rusty_money::{Money, iso::Currency};
use uuid::Uuid;

use crate::pricing::OrderType;

/// Product identifier shared with the catalog store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Wraps a store identifier.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Product snapshot as loaded from the catalog.
///
/// Stock and prices are read once when the product is loaded and are not refreshed while a
/// cart holds the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Stock keeping unit
    pub sku: String,

    /// Material description (e.g. "plata .925")
    pub material: String,

    /// Units in stock when the product was loaded
    pub total_stock: u32,

    /// Menudeo price
    pub retail_price: Money<'a, Currency>,

    /// Mayoreo price
    pub wholesale_price: Money<'a, Currency>,
}

impl<'a> Product<'a> {
    /// Unit price applicable to the given order type.
    #[must_use]
    pub fn price(&self, order_type: OrderType) -> Money<'a, Currency> {
        match order_type {
            OrderType::Retail => self.retail_price,
            OrderType::Wholesale => self.wholesale_price,
        }
    }

    /// Returns `true` when the product has any stock at all.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.total_stock > 0
    }
}
