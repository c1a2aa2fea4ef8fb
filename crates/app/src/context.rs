//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        customers::{CustomersService, PgCustomersService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
        quotes::{PgQuotesService, QuoteSettings, QuotesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub customers: Arc<dyn CustomersService>,
    pub orders: Arc<dyn OrdersService>,
    pub quotes: Arc<dyn QuotesService>,
}

impl AppContext {
    /// Build the services over an existing connection.
    #[must_use]
    pub fn new(db: Db, settings: QuoteSettings) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            customers: Arc::new(PgCustomersService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            quotes: Arc::new(PgQuotesService::new(db, settings)),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        settings: QuoteSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::new(Db::new(pool), settings))
    }
}
