//! Quotes service errors.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::TryFromIntError,
};

use cotizador::pricing::PricingError;
use thiserror::Error;

use crate::domain::{orders::number::OrderNumberError, quotes::validation::QuoteValidationError};

/// Stage of the submission transaction, for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    Begin,
    CheckStock,
    CreateCustomer,
    AllocateNumber,
    CreateOrder,
    CreateItems,
    Commit,
}

impl Display for SubmitStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::Begin => "begin",
            Self::CheckStock => "check_stock",
            Self::CreateCustomer => "create_customer",
            Self::AllocateNumber => "allocate_number",
            Self::CreateOrder => "create_order",
            Self::CreateItems => "create_items",
            Self::Commit => "commit",
        })
    }
}

/// Underlying cause of a failed submission.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Sql(#[from] sqlx::Error),

    #[error(transparent)]
    OrderNumber(#[from] OrderNumberError),
}

#[derive(Debug, Error)]
pub enum QuotesServiceError {
    /// The draft is not ready; nothing was written.
    #[error(transparent)]
    Validation(#[from] QuoteValidationError),

    /// The cart could not be priced; nothing was written.
    #[error("the quote could not be priced")]
    Pricing(#[from] PricingError),

    /// An amount cannot be stored; nothing was written.
    #[error("the quote total is out of range")]
    InvalidAmount(#[from] TryFromIntError),

    /// Saving failed and was rolled back. The message is the same whichever step failed.
    #[error("the quote could not be saved, please try again")]
    Persistence {
        step: SubmitStep,
        #[source]
        source: PersistenceError,
    },
}

impl QuotesServiceError {
    /// The validation failure, if that is what this is.
    #[must_use]
    pub fn validation(&self) -> Option<&QuoteValidationError> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Pricing(_) | Self::InvalidAmount(_) | Self::Persistence { .. } => None,
        }
    }
}
