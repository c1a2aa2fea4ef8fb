//! Quote Validation
//!
//! Checks run before anything is written. They run in a fixed order and stop at the first
//! failure, so the user sees a single message.

use cotizador::cart::{Cart, CartError};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::domain::{
    products::records::ProductUuid,
    quotes::draft::{CustomerSelection, QuoteDraft},
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuoteValidationError {
    #[error("enter the new customer's name and phone")]
    MissingCustomerDetails,

    #[error("select a customer")]
    CustomerNotSelected,

    #[error("add at least one product")]
    EmptyCart,

    #[error("{0}")]
    Stock(CartError),

    #[error("enter a delivery address")]
    MissingDeliveryAddress,
}

/// Validate a draft against the stock recorded on its cart lines.
///
/// # Errors
///
/// Returns the first failing check: customer, cart contents, stock, delivery address.
pub fn validate(draft: &QuoteDraft) -> Result<(), QuoteValidationError> {
    match &draft.customer {
        CustomerSelection::New(form) if !form.is_complete() => {
            return Err(QuoteValidationError::MissingCustomerDetails);
        }
        CustomerSelection::Existing(None) => {
            return Err(QuoteValidationError::CustomerNotSelected);
        }
        CustomerSelection::New(_) | CustomerSelection::Existing(Some(_)) => {}
    }

    if draft.cart.is_empty() {
        return Err(QuoteValidationError::EmptyCart);
    }

    if let Some(shortfall) = draft.cart.stock_shortfall() {
        return Err(QuoteValidationError::Stock(shortfall));
    }

    if draft.delivery_method.requires_address() && draft.delivery_address().is_none() {
        return Err(QuoteValidationError::MissingDeliveryAddress);
    }

    Ok(())
}

/// Re-check cart quantities against freshly read stock. Products missing from `stock` count
/// as having none.
pub(crate) fn check_current_stock(
    cart: &Cart<'_>,
    stock: &FxHashMap<ProductUuid, u32>,
) -> Result<(), QuoteValidationError> {
    match cart.first_shortfall(|product| stock.get(&ProductUuid::from(product)).copied()) {
        Some(shortfall) => Err(QuoteValidationError::Stock(shortfall)),
        None => Ok(()),
    }
}
