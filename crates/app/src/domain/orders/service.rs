//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use tracing::instrument;

use crate::{
    database::Db,
    domain::orders::{
        errors::OrdersServiceError,
        number::OrderNumber,
        records::{OrderRecord, OrderUuid},
        repositories::{PgOrderItemsRepository, PgOrdersRepository},
    },
    session::Session,
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[instrument(skip_all, fields(user = %session.user, order = %order))]
    async fn get_order(
        &self,
        session: Session,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut record = self.orders_repository.get_order(&mut tx, order).await?;

        let items = self
            .items_repository
            .get_order_items(&mut tx, order)
            .await?;

        tx.commit().await?;

        record.items.extend(items);

        Ok(record)
    }

    #[instrument(skip_all, fields(user = %session.user, limit = limit))]
    async fn list_orders(
        &self,
        session: Session,
        limit: u32,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let orders = self.orders_repository.list_orders(&mut tx, limit).await?;

        tx.commit().await?;

        Ok(orders)
    }

    #[instrument(skip_all, fields(user = %session.user))]
    async fn next_order_number(&self, session: Session) -> Result<OrderNumber, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let latest = self.orders_repository.latest_order_number(&mut tx).await?;

        tx.commit().await?;

        Ok(OrderNumber::next_after(latest.as_deref())?)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Retrieve an order with its items.
    async fn get_order(
        &self,
        session: Session,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Most recent orders first, without their items.
    async fn list_orders(
        &self,
        session: Session,
        limit: u32,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// The number the next submitted quote would receive. Not reserved.
    async fn next_order_number(&self, session: Session) -> Result<OrderNumber, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use cotizador::pricing::OrderType;
    use testresult::TestResult;

    use crate::domain::products::service::ProductsService;
    use crate::test::{
        TestContext,
        helpers::{insert_order, new_product},
    };

    use super::*;

    #[tokio::test]
    async fn next_order_number_starts_at_one() -> TestResult {
        let ctx = TestContext::new().await;

        let next = ctx.orders.next_order_number(ctx.session).await?;

        assert_eq!(next.to_string(), "COT-00001");

        Ok(())
    }

    #[tokio::test]
    async fn next_order_number_follows_latest_order() -> TestResult {
        let ctx = TestContext::new().await;

        insert_order(&ctx, "COT-00041", &[]).await?;
        insert_order(&ctx, "COT-00042", &[]).await?;

        let next = ctx.orders.next_order_number(ctx.session).await?;

        assert_eq!(next.to_string(), "COT-00043");

        Ok(())
    }

    #[tokio::test]
    async fn get_order_includes_items_with_product_details() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ctx
            .products
            .create_product(
                ctx.session,
                new_product("AN-001", "Anillo solitario", 5, 100_00, 80_00),
            )
            .await?;

        let order = insert_order(&ctx, "COT-00001", &[(ring.uuid, 2, 80_00)]).await?;

        let fetched = ctx.orders.get_order(ctx.session, order.uuid).await?;

        assert_eq!(fetched.order_number, "COT-00001");
        assert_eq!(fetched.order_type, OrderType::Retail);
        assert_eq!(fetched.created_by, ctx.session.user);
        assert_eq!(fetched.items.len(), 1);

        let item = fetched.items.first().ok_or("missing item")?;

        assert_eq!(item.product_name, "Anillo solitario");
        assert_eq!(item.product_sku, "AN-001");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.subtotal, 160_00);

        Ok(())
    }

    #[tokio::test]
    async fn get_order_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.orders.get_order(ctx.session, OrderUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn list_orders_newest_first() -> TestResult {
        let ctx = TestContext::new().await;

        for number in ["COT-00001", "COT-00002", "COT-00003"] {
            insert_order(&ctx, number, &[]).await?;
        }

        let orders = ctx.orders.list_orders(ctx.session, 2).await?;
        let numbers: Vec<&str> = orders.iter().map(|o| o.order_number.as_str()).collect();

        assert_eq!(numbers, vec!["COT-00003", "COT-00002"]);

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_order_number_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        insert_order(&ctx, "COT-00007", &[]).await?;

        let result = insert_order(&ctx, "COT-00007", &[]).await;

        assert!(
            matches!(result, Err(OrdersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }
}
