//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use uuid::Uuid;

use crate::{
    database::{amount_to_i64, try_get_amount, try_get_enum},
    domain::{
        StoredValue,
        customers::records::CustomerUuid,
        orders::{
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
        },
    },
    session::UserUuid,
};

const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const LATEST_ORDER_NUMBER_SQL: &str = include_str!("../sql/latest_order_number.sql");
const LOCK_ORDER_NUMBERS_SQL: &str = include_str!("../sql/lock_order_numbers.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        limit: u32,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    /// Serialise order-number allocation until the transaction ends.
    pub(crate) async fn lock_order_numbers(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_ORDER_NUMBERS_SQL).execute(&mut **tx).await?;

        Ok(())
    }

    /// Number of the most recently created order, if any.
    pub(crate) async fn latest_order_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Option<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LATEST_ORDER_NUMBER_SQL)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &NewOrder,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.order_number.to_string())
            .bind(order.customer_uuid.map(CustomerUuid::into_uuid))
            .bind(order.order_type.as_str())
            .bind(order.status.as_str())
            .bind(order.payment_status.as_str())
            .bind(order.delivery_method.as_str())
            .bind(order.delivery_address.as_deref())
            .bind(order.notes.as_deref())
            .bind(amount_to_i64(order.subtotal, "subtotal")?)
            .bind(order.discount)
            .bind(amount_to_i64(order.total, "total")?)
            .bind(order.created_by.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            order_number: row.try_get("order_number")?,
            customer_uuid: row
                .try_get::<Option<Uuid>, _>("customer_uuid")?
                .map(CustomerUuid::from_uuid),
            customer_name: row.try_get("customer_name")?,
            order_type: try_get_enum(row, "order_type")?,
            status: try_get_enum(row, "status")?,
            payment_status: try_get_enum(row, "payment_status")?,
            delivery_method: try_get_enum(row, "delivery_method")?,
            delivery_address: row.try_get("delivery_address")?,
            notes: row.try_get("notes")?,
            subtotal: try_get_amount(row, "subtotal")?,
            discount: row.try_get("discount")?,
            total: try_get_amount(row, "total")?,
            created_by: UserUuid::from_uuid(row.try_get("created_by")?),
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
