//! Cotizador
//!
//! Cotizador is the pricing and stock-validation engine behind quote drafting for a jewelry
//! retailer: a cart of catalog products with stock ceilings, priced per order type.

pub mod cart;
pub mod fixtures;
pub mod pricing;
pub mod products;
