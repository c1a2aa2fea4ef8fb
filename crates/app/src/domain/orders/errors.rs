//! Orders service errors.

use sqlx::Error;
use thiserror::Error;

use crate::{database::StoreFailure, domain::orders::number::OrderNumberError};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid order data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error(transparent)]
    OrderNumber(#[from] OrderNumberError),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        match StoreFailure::of(&error) {
            StoreFailure::NotFound => Self::NotFound,
            StoreFailure::Duplicate => Self::AlreadyExists,
            StoreFailure::BrokenReference => Self::InvalidReference,
            StoreFailure::MissingValue => Self::MissingRequiredData,
            StoreFailure::RejectedValue => Self::InvalidData,
            StoreFailure::Other => Self::Sql(error),
        }
    }
}
