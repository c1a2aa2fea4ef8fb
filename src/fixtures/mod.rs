//! Fixtures
//!
//! Product catalogs described in YAML, for tests and local seeding.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    products::Product,
};

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Cart construction error
    #[error("Failed to fill cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Fixture key -> product
    products: FxHashMap<String, Product<'a>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures"))
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: FxHashMap::default(),
            currency: None,
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.load_products_from_str(&contents)
    }

    /// Load products from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or if there are currency mismatches.
    pub fn load_products_from_str(&mut self, contents: &str) -> Result<&mut Self, FixtureError> {
        let fixture: products::ProductsFixture = serde_norway::from_str(contents)?;

        for (key, product_fixture) in fixture.products {
            let currency = product_fixture.currency()?;

            if let Some(existing_currency) = self.currency {
                if existing_currency != currency {
                    return Err(FixtureError::CurrencyMismatch(
                        existing_currency.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
            } else {
                self.currency = Some(currency);
            }

            let product: Product<'a> = product_fixture.try_into()?;

            self.products.insert(key, product);
        }

        Ok(self)
    }

    /// Load a named product catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?;

        Ok(fixture)
    }

    /// Get a product by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, key: &str) -> Result<&Product<'a>, FixtureError> {
        self.products
            .get(key)
            .ok_or_else(|| FixtureError::ProductNotFound(key.to_string()))
    }

    /// All products, sorted by SKU
    pub fn products(&self) -> Vec<&Product<'a>> {
        let mut products: Vec<&Product<'a>> = self.products.values().collect();

        products.sort_by(|a, b| a.sku.cmp(&b.sku));

        products
    }

    /// Build a cart holding the given quantity of each keyed product.
    ///
    /// # Errors
    ///
    /// Returns an error if a product is unknown or a quantity exceeds its stock.
    pub fn cart(&self, lines: &[(&str, u32)]) -> Result<Cart<'a>, FixtureError> {
        let mut cart = Cart::new(self.currency()?);

        for (key, quantity) in lines {
            let product = self.product(key)?;

            cart.add_item(product)?;
            cart.set_quantity(product.id, *quantity)?;
        }

        Ok(cart)
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
