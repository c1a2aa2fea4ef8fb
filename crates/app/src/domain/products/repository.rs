//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, count_to_i32, try_get_amount, try_get_count},
    domain::products::{
        data::NewProduct,
        records::{ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const GET_PRODUCTS_SQL: &str = include_str!("sql/get_products.sql");
const FIND_PRODUCTS_BY_SKU_SQL: &str = include_str!("sql/find_products_by_sku.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const LOCK_STOCK_SQL: &str = include_str!("sql/lock_stock.sql");

/// Current stock of one product, read under a share lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StockLevel {
    pub(crate) product: ProductUuid,
    pub(crate) total_stock: u32,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCTS_SQL)
            .bind(to_uuids(products))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_products_by_sku(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        skus: &[String],
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(FIND_PRODUCTS_BY_SKU_SQL)
            .bind(skus)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(product.uuid.into_uuid())
            .bind(&product.name)
            .bind(&product.sku)
            .bind(&product.material)
            .bind(count_to_i32(product.total_stock, "total_stock")?)
            .bind(amount_to_i64(product.retail_price, "retail_price")?)
            .bind(amount_to_i64(product.wholesale_price, "wholesale_price")?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Read current stock for the given products, holding a share lock on their rows until
    /// the transaction ends.
    pub(crate) async fn lock_stock(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &[ProductUuid],
    ) -> Result<Vec<StockLevel>, sqlx::Error> {
        query_as::<Postgres, StockLevel>(LOCK_STOCK_SQL)
            .bind(to_uuids(products))
            .fetch_all(&mut **tx)
            .await
    }
}

fn to_uuids(products: &[ProductUuid]) -> Vec<Uuid> {
    products.iter().map(|product| product.into_uuid()).collect()
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ProductUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            sku: row.try_get("sku")?,
            material: row.try_get("material")?,
            total_stock: try_get_count(row, "total_stock")?,
            retail_price: try_get_amount(row, "retail_price")?,
            wholesale_price: try_get_amount(row, "wholesale_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for StockLevel {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product: ProductUuid::from_uuid(row.try_get("uuid")?),
            total_stock: try_get_count(row, "total_stock")?,
        })
    }
}
