//! Products service.

use async_trait::async_trait;
use mockall::automock;
use tracing::instrument;

use crate::{
    database::Db,
    domain::products::{
        data::NewProduct,
        errors::ProductsServiceError,
        records::{ProductRecord, ProductUuid},
        repository::PgProductsRepository,
    },
    session::Session,
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    #[instrument(skip_all, fields(user = %session.user))]
    async fn list_products(
        &self,
        session: Session,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    #[instrument(skip_all, fields(user = %session.user, product = %product))]
    async fn get_product(
        &self,
        session: Session,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    #[instrument(skip_all, fields(user = %session.user, count = products.len()))]
    async fn get_products(
        &self,
        session: Session,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.get_products(&mut tx, &products).await?;

        tx.commit().await?;

        Ok(products)
    }

    #[instrument(skip_all, fields(user = %session.user, count = skus.len()))]
    async fn find_products_by_sku(
        &self,
        session: Session,
        skus: Vec<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let products = self.repository.find_products_by_sku(&mut tx, &skus).await?;

        tx.commit().await?;

        Ok(products)
    }

    #[instrument(skip_all, fields(user = %session.user, sku = %product.sku))]
    async fn create_product(
        &self,
        session: Session,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by name.
    async fn list_products(
        &self,
        session: Session,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        session: Session,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Retrieve the given products. Unknown identifiers are skipped.
    async fn get_products(
        &self,
        session: Session,
        products: Vec<ProductUuid>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve the products carrying the given SKUs. Unknown SKUs are skipped.
    async fn find_products_by_sku(
        &self,
        session: Session,
        skus: Vec<String>,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Creates a new catalog product.
    async fn create_product(
        &self,
        session: Session,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
