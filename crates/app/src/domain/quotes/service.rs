//! Quotes service.

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;
use tracing::{error, info, instrument, warn};

use crate::{
    database::Db,
    domain::{
        customers::repository::PgCustomersRepository,
        orders::{
            data::NewOrder,
            number::OrderNumber,
            records::{OrderRecord, OrderUuid},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
            status::PaymentStatus,
        },
        products::repository::PgProductsRepository,
        quotes::{
            draft::{CustomerSelection, QuoteDraft},
            errors::{PersistenceError, QuotesServiceError, SubmitStep},
            priced::PricedQuote,
            validation::{check_current_stock, validate},
        },
    },
    session::Session,
};

/// Submission behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteSettings {
    /// Re-read stock inside the submission transaction instead of trusting the snapshot
    /// taken when products were added to the cart.
    pub revalidate_stock: bool,
}

impl Default for QuoteSettings {
    fn default() -> Self {
        Self {
            revalidate_stock: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgQuotesService {
    db: Db,
    settings: QuoteSettings,
    customers_repository: PgCustomersRepository,
    products_repository: PgProductsRepository,
    orders_repository: PgOrdersRepository,
    items_repository: PgOrderItemsRepository,
}

impl PgQuotesService {
    #[must_use]
    pub fn new(db: Db, settings: QuoteSettings) -> Self {
        Self {
            db,
            settings,
            customers_repository: PgCustomersRepository::new(),
            products_repository: PgProductsRepository::new(),
            orders_repository: PgOrdersRepository::new(),
            items_repository: PgOrderItemsRepository::new(),
        }
    }
}

/// Log a failed step and hide its cause behind the generic persistence error.
fn failed<E>(step: SubmitStep) -> impl FnOnce(E) -> QuotesServiceError
where
    E: Into<PersistenceError>,
{
    move |cause| {
        let source = cause.into();

        error!(%step, error = %source, "quote submission failed, rolling back");

        QuotesServiceError::Persistence { step, source }
    }
}

#[async_trait]
impl QuotesService for PgQuotesService {
    #[instrument(
        skip_all,
        fields(
            user = %session.user,
            order_type = %draft.order_type,
            lines = draft.cart.len(),
        )
    )]
    async fn submit_quote(
        &self,
        session: Session,
        draft: QuoteDraft,
    ) -> Result<OrderRecord, QuotesServiceError> {
        if let Err(rejection) = validate(&draft) {
            warn!(reason = %rejection, "quote rejected");

            return Err(rejection.into());
        }

        let priced = PricedQuote::from_draft(&draft)?;

        let mut tx = self
            .db
            .begin_transaction()
            .await
            .map_err(failed(SubmitStep::Begin))?;

        if self.settings.revalidate_stock {
            let stock: FxHashMap<_, _> = self
                .products_repository
                .lock_stock(&mut tx, &priced.products())
                .await
                .map_err(failed(SubmitStep::CheckStock))?
                .into_iter()
                .map(|level| (level.product, level.total_stock))
                .collect();

            if let Err(rejection) = check_current_stock(&draft.cart, &stock) {
                warn!(reason = %rejection, "quote rejected after stock re-check");

                return Err(rejection.into());
            }
        }

        let customer_uuid = match &draft.customer {
            CustomerSelection::Existing(customer) => *customer,
            CustomerSelection::New(form) => {
                let created = self
                    .customers_repository
                    .create_customer(&mut tx, &form.to_new_customer())
                    .await
                    .map_err(failed(SubmitStep::CreateCustomer))?;

                Some(created.uuid)
            }
        };

        self.orders_repository
            .lock_order_numbers(&mut tx)
            .await
            .map_err(failed(SubmitStep::AllocateNumber))?;

        let latest = self
            .orders_repository
            .latest_order_number(&mut tx)
            .await
            .map_err(failed(SubmitStep::AllocateNumber))?;

        let order_number =
            OrderNumber::next_after(latest.as_deref()).map_err(failed(SubmitStep::AllocateNumber))?;

        let new_order = NewOrder {
            uuid: OrderUuid::new(),
            order_number,
            customer_uuid,
            order_type: draft.order_type,
            status: draft.status.into(),
            payment_status: PaymentStatus::Pending,
            delivery_method: draft.delivery_method,
            delivery_address: draft.delivery_address().map(str::to_string),
            notes: draft.notes().map(str::to_string),
            subtotal: priced.subtotal,
            discount: priced.discount,
            total: priced.total,
            created_by: session.user,
        };

        let mut order = self
            .orders_repository
            .create_order(&mut tx, &new_order)
            .await
            .map_err(failed(SubmitStep::CreateOrder))?;

        for item in &priced.items {
            let created = self
                .items_repository
                .create_order_item(&mut tx, order.uuid, item)
                .await
                .map_err(failed(SubmitStep::CreateItems))?;

            order.items.push(created);
        }

        tx.commit().await.map_err(failed(SubmitStep::Commit))?;

        info!(
            order = %order.uuid,
            order_number = %order.order_number,
            status = %order.status,
            total = order.total,
            items = order.items.len(),
            "quote submitted"
        );

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait QuotesService: Send + Sync {
    /// Validate a draft and save it as an order with its items, all or nothing.
    ///
    /// A new customer on the draft is created in the same transaction. The order gets the
    /// next sequential number.
    async fn submit_quote(
        &self,
        session: Session,
        draft: QuoteDraft,
    ) -> Result<OrderRecord, QuotesServiceError>;
}

#[cfg(test)]
mod tests {
    use cotizador::{
        cart::{Cart, CartError},
        pricing::OrderType,
    };
    use sqlx::{PgPool, query};
    use testresult::TestResult;

    use crate::{
        domain::{
            customers::{CustomersService, records::CustomerUuid},
            orders::{
                OrdersService,
                status::{DeliveryMethod, OrderStatus},
            },
            products::{ProductsService, records::ProductRecord},
            quotes::{
                draft::{NewCustomerForm, QuoteStatus},
                validation::QuoteValidationError,
            },
            store_currency,
        },
        session::UserUuid,
        test::{
            TestContext,
            helpers::{cart_of, create_customer, create_product, product_snapshot},
        },
    };

    use super::*;

    fn walk_in(cart: Cart<'static>) -> QuoteDraft {
        QuoteDraft {
            customer: CustomerSelection::New(NewCustomerForm {
                name: "Mariana López".to_string(),
                phone: "33 1111 2222".to_string(),
                ..NewCustomerForm::default()
            }),
            cart,
            ..QuoteDraft::new()
        }
    }

    async fn ring(ctx: &TestContext) -> TestResult<ProductRecord> {
        Ok(create_product(ctx, "AN-001", "Anillo solitario", 5, 100_00, 80_00).await?)
    }

    #[tokio::test]
    async fn retail_quote_is_saved_with_items_and_new_customer() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;
        let draft = walk_in(cart_of(&[(&ring, 2)])?);

        let order = ctx.quotes.submit_quote(ctx.session, draft).await?;

        assert_eq!(order.order_number, "COT-00001");
        assert_eq!(order.status, OrderStatus::Draft);
        assert_eq!(order.payment_status, PaymentStatus::Pending);
        assert_eq!(order.order_type, OrderType::Retail);
        assert_eq!(order.subtotal, 200_00);
        assert_eq!(order.discount, 0);
        assert_eq!(order.total, 200_00);
        assert_eq!(order.delivery_address, None);
        assert_eq!(order.created_by, ctx.session.user);
        assert_eq!(order.customer_name.as_deref(), Some("Mariana López"));

        let stored = ctx.orders.get_order(ctx.session, order.uuid).await?;

        assert_eq!(stored, order);

        let customers = ctx.customers.list_customers(ctx.session, 10).await?;

        assert_eq!(customers.len(), 1);
        assert_eq!(customers.first().map(|c| c.uuid), order.customer_uuid);

        Ok(())
    }

    #[tokio::test]
    async fn wholesale_quote_snapshots_wholesale_prices() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;
        let customer = create_customer(&ctx, "Joyería Zafiro", "33 9999 0000").await?;

        let draft = QuoteDraft {
            customer: CustomerSelection::Existing(Some(customer.uuid)),
            order_type: OrderType::Wholesale,
            delivery_method: DeliveryMethod::Delivery,
            delivery_address: " Calle Morelos 12 ".to_string(),
            notes: "entregar antes del sábado".to_string(),
            status: QuoteStatus::Quoted,
            cart: cart_of(&[(&ring, 2)])?,
        };

        let order = ctx.quotes.submit_quote(ctx.session, draft).await?;

        assert_eq!(order.status, OrderStatus::Quoted);
        assert_eq!(order.subtotal, 160_00);
        assert_eq!(order.discount, 40_00);
        assert_eq!(order.total, 160_00);
        assert_eq!(order.customer_uuid, Some(customer.uuid));
        assert_eq!(order.delivery_address.as_deref(), Some("Calle Morelos 12"));
        assert_eq!(order.notes.as_deref(), Some("entregar antes del sábado"));

        let item = order.items.first().ok_or("missing item")?;

        assert_eq!(item.unit_price, 80_00);
        assert_eq!(item.subtotal, 160_00);
        assert_eq!(item.quantity, 2);

        Ok(())
    }

    #[tokio::test]
    async fn consecutive_quotes_get_consecutive_numbers() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;

        let first = ctx
            .quotes
            .submit_quote(ctx.session, walk_in(cart_of(&[(&ring, 1)])?))
            .await?;
        let second = ctx
            .quotes
            .submit_quote(ctx.session, walk_in(cart_of(&[(&ring, 1)])?))
            .await?;

        assert_eq!(first.order_number, "COT-00001");
        assert_eq!(second.order_number, "COT-00002");

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_quotes_never_share_a_number() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;

        let first = walk_in(cart_of(&[(&ring, 1)])?);
        let second = walk_in(cart_of(&[(&ring, 1)])?);

        let (a, b) = tokio::join!(
            ctx.quotes.submit_quote(ctx.session, first),
            ctx.quotes.submit_quote(ctx.session, second),
        );

        let mut numbers = vec![a?.order_number, b?.order_number];
        numbers.sort();

        assert_eq!(numbers, vec!["COT-00001", "COT-00002"]);

        Ok(())
    }

    #[tokio::test]
    async fn delivery_without_address_fails_before_touching_the_database() -> TestResult {
        // Nothing listens on this address; any persistence attempt would fail differently.
        let pool = PgPool::connect_lazy("postgres://cotizador@127.0.0.1:1/cotizador")?;
        let service = PgQuotesService::new(Db::new(pool), QuoteSettings::default());

        let ring = product_snapshot("AN-001", 5, 100_00, 80_00);
        let mut cart = Cart::new(store_currency());
        cart.add_item(&ring)?;

        let draft = QuoteDraft {
            delivery_method: DeliveryMethod::Delivery,
            delivery_address: String::new(),
            ..walk_in(cart)
        };

        let result = service
            .submit_quote(Session::new(UserUuid::new()), draft)
            .await;

        assert!(
            matches!(
                result,
                Err(QuotesServiceError::Validation(
                    QuoteValidationError::MissingDeliveryAddress
                ))
            ),
            "expected MissingDeliveryAddress, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn stock_sold_since_loading_is_rejected_and_nothing_saved() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;
        let draft = walk_in(cart_of(&[(&ring, 4)])?);

        query("UPDATE products SET total_stock = 2 WHERE uuid = $1")
            .bind(ring.uuid.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        let result = ctx.quotes.submit_quote(ctx.session, draft).await;

        assert!(
            matches!(
                result,
                Err(QuotesServiceError::Validation(QuoteValidationError::Stock(
                    CartError::InsufficientStock {
                        requested: 4,
                        available: 2,
                        ..
                    }
                )))
            ),
            "expected stock rejection, got {result:?}"
        );

        assert!(ctx.orders.list_orders(ctx.session, 10).await?.is_empty());
        assert!(ctx.customers.list_customers(ctx.session, 10).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn snapshot_stock_is_trusted_when_revalidation_is_off() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;
        let draft = walk_in(cart_of(&[(&ring, 4)])?);

        query("UPDATE products SET total_stock = 2 WHERE uuid = $1")
            .bind(ring.uuid.into_uuid())
            .execute(ctx.db.pool())
            .await?;

        let service = PgQuotesService::new(
            Db::new(ctx.db.pool().clone()),
            QuoteSettings {
                revalidate_stock: false,
            },
        );

        let order = service.submit_quote(ctx.session, draft).await?;

        assert_eq!(order.items.first().map(|item| item.quantity), Some(4));

        Ok(())
    }

    #[tokio::test]
    async fn failure_after_customer_insert_rolls_everything_back() -> TestResult {
        let ctx = TestContext::new().await;

        // Priced in the cart but never stored: the item insert hits the foreign key.
        let ghost = product_snapshot("XX-000", 3, 50_00, 40_00);
        let mut cart = Cart::new(store_currency());
        cart.add_item(&ghost)?;

        let service = PgQuotesService::new(
            Db::new(ctx.db.pool().clone()),
            QuoteSettings {
                revalidate_stock: false,
            },
        );

        let result = service.submit_quote(ctx.session, walk_in(cart)).await;

        assert!(
            matches!(
                result,
                Err(QuotesServiceError::Persistence {
                    step: SubmitStep::CreateItems,
                    ..
                })
            ),
            "expected a persistence failure on items, got {result:?}"
        );
        assert_eq!(
            result.err().map(|error| error.to_string()),
            Some("the quote could not be saved, please try again".to_string())
        );

        assert!(ctx.orders.list_orders(ctx.session, 10).await?.is_empty());
        assert!(ctx.customers.list_customers(ctx.session, 10).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn unknown_existing_customer_is_a_persistence_failure() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;

        let draft = QuoteDraft {
            customer: CustomerSelection::Existing(Some(CustomerUuid::new())),
            cart: cart_of(&[(&ring, 1)])?,
            ..QuoteDraft::new()
        };

        let result = ctx.quotes.submit_quote(ctx.session, draft).await;

        assert!(
            matches!(
                result,
                Err(QuotesServiceError::Persistence {
                    step: SubmitStep::CreateOrder,
                    ..
                })
            ),
            "expected a persistence failure on the order, got {result:?}"
        );

        let next = ctx.orders.next_order_number(ctx.session).await?;

        assert_eq!(next.to_string(), "COT-00001");

        Ok(())
    }

    #[tokio::test]
    async fn products_service_sees_unchanged_stock_after_submission() -> TestResult {
        let ctx = TestContext::new().await;
        let ring = ring(&ctx).await?;

        ctx.quotes
            .submit_quote(ctx.session, walk_in(cart_of(&[(&ring, 3)])?))
            .await?;

        let after = ctx.products.get_product(ctx.session, ring.uuid).await?;

        assert_eq!(after.total_stock, 5);

        Ok(())
    }
}
