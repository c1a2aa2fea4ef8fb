//! Quote Drafts

use cotizador::{
    cart::{Cart, CartTotals},
    pricing::{OrderType, PricingError},
};
use serde::{Deserialize, Serialize};

use crate::domain::{
    StoredValue,
    customers::{
        data::NewCustomer,
        records::{CreditStatus, CustomerSource, CustomerUuid, MaterialPreference},
    },
    orders::status::{DeliveryMethod, OrderStatus},
    store_currency,
    stored_value_traits,
};

/// Status a quote is saved with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Draft,
    Quoted,
}

impl StoredValue for QuoteStatus {
    const KIND: &'static str = "quote status";
    const ALL: &'static [Self] = &[Self::Draft, Self::Quoted];

    fn as_str(self) -> &'static str {
        OrderStatus::from(self).as_str()
    }
}

stored_value_traits!(QuoteStatus);

impl From<QuoteStatus> for OrderStatus {
    fn from(value: QuoteStatus) -> Self {
        match value {
            QuoteStatus::Draft => Self::Draft,
            QuoteStatus::Quoted => Self::Quoted,
        }
    }
}

/// Customer typed in alongside the quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomerForm {
    pub name: String,
    pub phone: String,
    pub source: CustomerSource,
    pub material_preference: MaterialPreference,
    pub credit_limit: u64,
    pub credit_status: CreditStatus,
    pub credit_notes: Option<String>,
}

impl NewCustomerForm {
    /// Both name and phone are filled in.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }

    pub(crate) fn to_new_customer(&self) -> NewCustomer {
        NewCustomer {
            uuid: CustomerUuid::new(),
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            source: self.source,
            material_preference: self.material_preference,
            credit_limit: self.credit_limit,
            credit_status: self.credit_status,
            credit_notes: non_blank(self.credit_notes.as_deref()).map(str::to_string),
        }
    }
}

/// Who the quote is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerSelection {
    /// A customer already on record; `None` until one is picked.
    Existing(Option<CustomerUuid>),

    /// A customer created together with the quote.
    New(NewCustomerForm),
}

impl Default for CustomerSelection {
    fn default() -> Self {
        Self::Existing(None)
    }
}

/// Everything entered on the quote screen.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDraft {
    pub customer: CustomerSelection,
    pub order_type: OrderType,
    pub delivery_method: DeliveryMethod,
    pub delivery_address: String,
    pub notes: String,
    pub status: QuoteStatus,
    pub cart: Cart<'static>,
}

impl QuoteDraft {
    /// Empty retail pickup draft with no customer selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            customer: CustomerSelection::default(),
            order_type: OrderType::default(),
            delivery_method: DeliveryMethod::default(),
            delivery_address: String::new(),
            notes: String::new(),
            status: QuoteStatus::default(),
            cart: Cart::new(store_currency()),
        }
    }

    /// Totals of the cart at the draft's order type.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn totals(&self) -> Result<CartTotals<'static>, PricingError> {
        self.cart.totals(self.order_type)
    }

    /// Trimmed delivery address, only when the order is delivered.
    #[must_use]
    pub fn delivery_address(&self) -> Option<&str> {
        if self.delivery_method.requires_address() {
            non_blank(Some(&self.delivery_address))
        } else {
            None
        }
    }

    /// Trimmed notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        non_blank(Some(&self.notes))
    }
}

impl Default for QuoteDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}
