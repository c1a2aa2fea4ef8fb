//! Product Records

use std::num::TryFromIntError;

use cotizador::products::{Product, ProductId};
use jiff::Timestamp;
use rusty_money::Money;

use crate::{domain::store_currency, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub sku: String,
    pub material: String,
    pub total_stock: u32,
    pub retail_price: u64,
    pub wholesale_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProductRecord {
    /// Snapshot of the record for the cart engine, priced in the store currency.
    ///
    /// # Errors
    ///
    /// Returns an error if a price does not fit in signed minor units.
    pub fn to_product(&self) -> Result<Product<'static>, TryFromIntError> {
        let currency = store_currency();

        Ok(Product {
            id: ProductId::from_uuid(self.uuid.into_uuid()),
            name: self.name.clone(),
            sku: self.sku.clone(),
            material: self.material.clone(),
            total_stock: self.total_stock,
            retail_price: Money::from_minor(i64::try_from(self.retail_price)?, currency),
            wholesale_price: Money::from_minor(i64::try_from(self.wholesale_price)?, currency),
        })
    }
}

impl From<ProductId> for ProductUuid {
    fn from(value: ProductId) -> Self {
        Self::from_uuid(value.into_uuid())
    }
}
