//! Products service errors.

use std::num::TryFromIntError;

use sqlx::Error;
use thiserror::Error;

use crate::database::StoreFailure;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("a product with this SKU already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid product data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),

    #[error("price does not fit in minor units")]
    InvalidPrice(#[from] TryFromIntError),
}

impl From<Error> for ProductsServiceError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_product_row_is_not_found() {
        assert!(matches!(
            ProductsServiceError::from(Error::RowNotFound),
            ProductsServiceError::NotFound
        ));
    }

    #[test]
    fn price_beyond_money_range_is_invalid_price() {
        let overflow = i64::try_from(u64::MAX).map(|_| ()).unwrap_err();
        let error = ProductsServiceError::from(overflow);

        assert!(matches!(error, ProductsServiceError::InvalidPrice(_)));
        assert_eq!(error.to_string(), "price does not fit in minor units");
    }
}
