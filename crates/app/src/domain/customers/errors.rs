//! Customers service errors.

use sqlx::Error;
use thiserror::Error;

use crate::database::StoreFailure;

#[derive(Debug, Error)]
pub enum CustomersServiceError {
    #[error("customer already exists")]
    AlreadyExists,

    #[error("customer not found")]
    NotFound,

    #[error("missing required customer data")]
    MissingRequiredData,

    #[error("invalid customer data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CustomersServiceError {
    fn from(error: Error) -> Self {
        match StoreFailure::of(&error) {
            StoreFailure::NotFound => Self::NotFound,
            StoreFailure::Duplicate => Self::AlreadyExists,
            StoreFailure::MissingValue => Self::MissingRequiredData,
            StoreFailure::RejectedValue => Self::InvalidData,
            StoreFailure::BrokenReference | StoreFailure::Other => Self::Sql(error),
        }
    }
}
