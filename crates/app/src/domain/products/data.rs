//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub sku: String,
    pub material: String,
    pub total_stock: u32,
    pub retail_price: u64,
    pub wholesale_price: u64,
}
