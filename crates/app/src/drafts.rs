//! Draft Documents
//!
//! A quote written down as YAML, so it can be prepared ahead of time and submitted from the
//! command line:
//!
//! ```yaml
//! customer:
//!   new:
//!     name: Mariana López
//!     phone: 33 1111 2222
//!     source: whatsapp
//! order_type: wholesale
//! delivery_method: delivery
//! delivery_address: Calle Morelos 12, Guadalajara
//! status: quoted
//! lines:
//!   - sku: AN-001
//!     quantity: 2
//! ```
//!
//! Lines are replayed through the cart, so the same stock rules apply as when quoting by hand.

use std::{num::TryFromIntError, path::Path};

use cotizador::{
    cart::{Cart, CartError, CartLine},
    fixtures::{FixtureError, products::parse_price},
    pricing::OrderType,
    products::Product,
};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    domain::{
        customers::records::{CreditStatus, CustomerSource, CustomerUuid, MaterialPreference},
        orders::status::DeliveryMethod,
        products::{ProductsService, ProductsServiceError},
        quotes::{CustomerSelection, NewCustomerForm, QuoteDraft, QuoteStatus},
        store_currency,
    },
    session::Session,
};

#[derive(Debug, Error)]
pub enum DraftDocumentError {
    #[error("failed to read draft: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse draft: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("failed to look up products")]
    Products(#[from] ProductsServiceError),

    #[error("no product with SKU {0}")]
    UnknownSku(String),

    #[error("quantity for {0} must be at least 1")]
    InvalidQuantity(String),

    #[error("invalid credit limit")]
    CreditLimit(#[source] FixtureError),

    #[error("credit limit must be in {expected}, got {found}")]
    CreditLimitCurrency {
        expected: &'static str,
        found: &'static str,
    },

    #[error("stored price out of range")]
    Price(#[from] TryFromIntError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Quote as written in a draft document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DraftDocument {
    #[serde(default)]
    pub customer: Option<CustomerDocument>,

    #[serde(default)]
    pub order_type: OrderType,

    #[serde(default)]
    pub delivery_method: DeliveryMethod,

    #[serde(default)]
    pub delivery_address: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub status: QuoteStatus,

    #[serde(default)]
    pub lines: Vec<LineDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerDocument {
    Existing(CustomerUuid),
    New(NewCustomerDocument),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewCustomerDocument {
    pub name: String,
    pub phone: String,

    #[serde(default)]
    pub source: CustomerSource,

    #[serde(default)]
    pub material_preference: MaterialPreference,

    /// e.g. `"5000.00 MXN"`
    #[serde(default)]
    pub credit_limit: Option<String>,

    #[serde(default)]
    pub credit_status: CreditStatus,

    #[serde(default)]
    pub credit_notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineDocument {
    pub sku: String,
    pub quantity: u32,
}

impl DraftDocument {
    /// Parse a draft from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid draft.
    pub fn from_yaml(text: &str) -> Result<Self, DraftDocumentError> {
        Ok(serde_norway::from_str(text)?)
    }

    /// Read and parse a draft file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid draft.
    pub async fn from_path(path: &Path) -> Result<Self, DraftDocumentError> {
        let text = tokio::fs::read_to_string(path).await?;

        Self::from_yaml(&text)
    }

    /// Look up the draft's products and build the quote draft.
    ///
    /// Repeated SKUs add up on one cart line.
    ///
    /// # Errors
    ///
    /// Returns an error if a SKU is unknown, a quantity is zero or exceeds stock, or the
    /// products cannot be fetched.
    pub async fn resolve(
        self,
        session: Session,
        products: &dyn ProductsService,
    ) -> Result<QuoteDraft, DraftDocumentError> {
        let mut skus: Vec<String> = self.lines.iter().map(|line| line.sku.clone()).collect();
        skus.sort();
        skus.dedup();

        let catalog = if skus.is_empty() {
            FxHashMap::default()
        } else {
            products
                .find_products_by_sku(session, skus)
                .await?
                .iter()
                .map(|record| Ok((record.sku.clone(), record.to_product()?)))
                .collect::<Result<FxHashMap<_, _>, DraftDocumentError>>()?
        };

        let mut cart = Cart::new(store_currency());

        for line in &self.lines {
            add_line(&mut cart, &catalog, line)?;
        }

        Ok(QuoteDraft {
            customer: match self.customer {
                None => CustomerSelection::Existing(None),
                Some(CustomerDocument::Existing(uuid)) => CustomerSelection::Existing(Some(uuid)),
                Some(CustomerDocument::New(customer)) => {
                    CustomerSelection::New(customer.into_form()?)
                }
            },
            order_type: self.order_type,
            delivery_method: self.delivery_method,
            delivery_address: self.delivery_address,
            notes: self.notes,
            status: self.status,
            cart,
        })
    }
}

impl NewCustomerDocument {
    fn into_form(self) -> Result<NewCustomerForm, DraftDocumentError> {
        let credit_limit = match self.credit_limit.as_deref() {
            None => 0,
            Some(text) => {
                let (minor, currency) = parse_price(text).map_err(DraftDocumentError::CreditLimit)?;

                if currency != store_currency() {
                    return Err(DraftDocumentError::CreditLimitCurrency {
                        expected: store_currency().iso_alpha_code,
                        found: currency.iso_alpha_code,
                    });
                }

                u64::try_from(minor)?
            }
        };

        Ok(NewCustomerForm {
            name: self.name,
            phone: self.phone,
            source: self.source,
            material_preference: self.material_preference,
            credit_limit,
            credit_status: self.credit_status,
            credit_notes: self.credit_notes,
        })
    }
}

fn add_line(
    cart: &mut Cart<'static>,
    catalog: &FxHashMap<String, Product<'static>>,
    line: &LineDocument,
) -> Result<(), DraftDocumentError> {
    if line.quantity < 1 {
        return Err(DraftDocumentError::InvalidQuantity(line.sku.clone()));
    }

    let product = catalog
        .get(&line.sku)
        .ok_or_else(|| DraftDocumentError::UnknownSku(line.sku.clone()))?;

    let current = cart.line(product.id).map_or(0, CartLine::quantity);

    if current == 0 {
        cart.add_item(product)?;
    }

    cart.set_quantity(product.id, current.saturating_add(line.quantity))?;

    Ok(())
}
