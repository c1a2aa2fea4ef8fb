//! Customers Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_enum},
    domain::{
        StoredValue,
        customers::{
            data::NewCustomer,
            records::{CustomerRecord, CustomerUuid},
        },
    },
};

const LIST_CUSTOMERS_SQL: &str = include_str!("sql/list_customers.sql");
const GET_CUSTOMER_SQL: &str = include_str!("sql/get_customer.sql");
const CREATE_CUSTOMER_SQL: &str = include_str!("sql/create_customer.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCustomersRepository;

impl PgCustomersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_customers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<CustomerRecord>, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(LIST_CUSTOMERS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(GET_CUSTOMER_SQL)
            .bind(customer.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_customer(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: &NewCustomer,
    ) -> Result<CustomerRecord, sqlx::Error> {
        query_as::<Postgres, CustomerRecord>(CREATE_CUSTOMER_SQL)
            .bind(customer.uuid.into_uuid())
            .bind(customer.name.trim())
            .bind(customer.phone.trim())
            .bind(customer.source.as_str())
            .bind(customer.material_preference.as_str())
            .bind(amount_to_i64(customer.credit_limit, "credit_limit")?)
            .bind(customer.credit_status.as_str())
            .bind(customer.credit_notes.as_deref())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CustomerRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CustomerUuid::from_uuid(row.try_get("uuid")?),
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            source: try_get_enum(row, "source")?,
            material_preference: try_get_enum(row, "material_preference")?,
            credit_limit: try_get_amount(row, "credit_limit")?,
            credit_status: try_get_enum(row, "credit_status")?,
            credit_notes: row.try_get("credit_notes")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
