//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{info, instrument};

use crate::{
    database::Db,
    domain::customers::{
        data::NewCustomer,
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        repository::PgCustomersRepository,
    },
    session::Session,
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    #[instrument(skip_all, fields(user = %session.user, limit = limit))]
    async fn list_customers(
        &self,
        session: Session,
        limit: u32,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let customers = self.repository.list_customers(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(customers)
    }

    #[instrument(skip_all, fields(user = %session.user, customer = %customer))]
    async fn get_customer(
        &self,
        session: Session,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let customer = self.repository.get_customer(&mut tx, customer).await?;

        tx.commit().await?;

        Ok(customer)
    }

    #[instrument(skip_all, fields(user = %session.user, customer = %customer.uuid))]
    async fn create_customer(
        &self,
        session: Session,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_customer(&mut tx, &customer).await?;

        tx.commit().await?;

        info!(source = %created.source, "customer created");

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Most recently created customers first.
    async fn list_customers(
        &self,
        session: Session,
        limit: u32,
    ) -> Result<Vec<CustomerRecord>, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(
        &self,
        session: Session,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Creates a customer. Name and phone are stored trimmed.
    async fn create_customer(
        &self,
        session: Session,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;
}
