//! Product Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, MXN, USD},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Map of product key -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Optional fixed identifier; derived from the SKU when omitted
    #[serde(default)]
    pub id: Option<Uuid>,

    /// Product name
    pub name: String,

    /// Stock keeping unit
    pub sku: String,

    /// Material description
    pub material: String,

    /// Units in stock
    pub stock: u32,

    /// Retail price (e.g., "450.00 MXN")
    pub retail_price: String,

    /// Wholesale price (e.g., "360.00 MXN")
    pub wholesale_price: String,
}

impl ProductFixture {
    /// Currency both prices are written in.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be parsed or the two prices disagree on currency.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        let (_, retail) = parse_price(&self.retail_price)?;
        let (_, wholesale) = parse_price(&self.wholesale_price)?;

        if retail == wholesale {
            Ok(retail)
        } else {
            Err(FixtureError::CurrencyMismatch(
                retail.iso_alpha_code.to_string(),
                wholesale.iso_alpha_code.to_string(),
            ))
        }
    }
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (retail_minor, retail_currency) = parse_price(&fixture.retail_price)?;
        let (wholesale_minor, wholesale_currency) = parse_price(&fixture.wholesale_price)?;

        let id = fixture
            .id
            .unwrap_or_else(|| Uuid::new_v5(&Uuid::NAMESPACE_OID, fixture.sku.as_bytes()));

        Ok(Product {
            id: ProductId::from_uuid(id),
            name: fixture.name,
            sku: fixture.sku,
            material: fixture.material,
            total_stock: fixture.stock,
            retail_price: Money::from_minor(retail_minor, retail_currency),
            wholesale_price: Money::from_minor(wholesale_minor, wholesale_currency),
        })
    }
}

/// Parse price string (e.g., "1299.50 MXN") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is
/// not a non-negative decimal with at most two decimal places, or if the currency code is not
/// recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .filter(|value| value.fract().is_zero())
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "MXN" => MXN,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
