//! Cotizador Domain Concerns

use rusty_money::iso::{Currency, MXN};

pub mod customers;
pub mod orders;
pub mod products;
pub mod quotes;
mod stored;

pub use stored::{StoredValue, UnknownValue};
pub(crate) use stored::stored_value_traits;

/// Currency every stored amount is denominated in.
#[must_use]
pub fn store_currency() -> &'static Currency {
    MXN
}
