//! Test Helpers

use cotizador::{
    cart::Cart,
    pricing::OrderType,
    products::{Product, ProductId},
};
use rusty_money::Money;
use testresult::TestResult;
use uuid::Uuid;

use crate::{
    domain::{
        customers::{
            CustomersService, CustomersServiceError,
            data::NewCustomer,
            records::{CustomerRecord, CustomerUuid},
        },
        orders::{
            OrderNumber, OrdersServiceError,
            data::{NewOrder, NewOrderItem},
            records::{OrderItemUuid, OrderRecord, OrderUuid},
            repositories::{PgOrderItemsRepository, PgOrdersRepository},
            status::{DeliveryMethod, OrderStatus, PaymentStatus},
        },
        products::{
            ProductsService, ProductsServiceError,
            data::NewProduct,
            records::{ProductRecord, ProductUuid},
        },
        store_currency,
    },
    test::TestContext,
};

pub(crate) fn new_product(
    sku: &str,
    name: &str,
    total_stock: u32,
    retail_price: u64,
    wholesale_price: u64,
) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_string(),
        sku: sku.to_string(),
        material: "plata .925".to_string(),
        total_stock,
        retail_price,
        wholesale_price,
    }
}

pub(crate) fn new_customer(name: &str, phone: &str) -> NewCustomer {
    NewCustomer {
        uuid: CustomerUuid::new(),
        name: name.to_string(),
        phone: phone.to_string(),
        source: Default::default(),
        material_preference: Default::default(),
        credit_limit: 0,
        credit_status: Default::default(),
        credit_notes: None,
    }
}

pub(crate) async fn create_product(
    ctx: &TestContext,
    sku: &str,
    name: &str,
    total_stock: u32,
    retail_price: u64,
    wholesale_price: u64,
) -> Result<ProductRecord, ProductsServiceError> {
    ctx.products
        .create_product(
            ctx.session,
            new_product(sku, name, total_stock, retail_price, wholesale_price),
        )
        .await
}

pub(crate) async fn create_customer(
    ctx: &TestContext,
    name: &str,
    phone: &str,
) -> Result<CustomerRecord, CustomersServiceError> {
    ctx.customers
        .create_customer(ctx.session, new_customer(name, phone))
        .await
}

/// A product that exists only in memory.
pub(crate) fn product_snapshot(
    sku: &str,
    total_stock: u32,
    retail_price: i64,
    wholesale_price: i64,
) -> Product<'static> {
    Product {
        id: ProductId::from_uuid(Uuid::now_v7()),
        name: sku.to_string(),
        sku: sku.to_string(),
        material: "plata .925".to_string(),
        total_stock,
        retail_price: Money::from_minor(retail_price, store_currency()),
        wholesale_price: Money::from_minor(wholesale_price, store_currency()),
    }
}

/// Cart holding the given quantity of each stored product.
pub(crate) fn cart_of(lines: &[(&ProductRecord, u32)]) -> TestResult<Cart<'static>> {
    let mut cart = Cart::new(store_currency());

    for (record, quantity) in lines {
        let product = record.to_product()?;

        cart.add_item(&product)?;
        cart.set_quantity(product.id, *quantity)?;
    }

    Ok(cart)
}

/// Insert a retail pickup order directly, bypassing quote submission.
pub(crate) async fn insert_order(
    ctx: &TestContext,
    order_number: &str,
    items: &[(ProductUuid, u32, u64)],
) -> Result<OrderRecord, OrdersServiceError> {
    let subtotal = items
        .iter()
        .map(|(_, quantity, unit_price)| u64::from(*quantity) * unit_price)
        .sum();

    let mut tx = ctx.db.begin_test_transaction().await;

    let mut order = PgOrdersRepository::new()
        .create_order(
            &mut tx,
            &NewOrder {
                uuid: OrderUuid::new(),
                order_number: OrderNumber::parse(order_number)?,
                customer_uuid: None,
                order_type: OrderType::Retail,
                status: OrderStatus::Draft,
                payment_status: PaymentStatus::Pending,
                delivery_method: DeliveryMethod::Pickup,
                delivery_address: None,
                notes: None,
                subtotal,
                discount: 0,
                total: subtotal,
                created_by: ctx.session.user,
            },
        )
        .await?;

    for (product, quantity, unit_price) in items {
        let item = PgOrderItemsRepository::new()
            .create_order_item(
                &mut tx,
                order.uuid,
                &NewOrderItem {
                    uuid: OrderItemUuid::new(),
                    product_uuid: *product,
                    quantity: *quantity,
                    unit_price: *unit_price,
                    subtotal: u64::from(*quantity) * unit_price,
                },
            )
            .await?;

        order.items.push(item);
    }

    tx.commit().await?;

    Ok(order)
}
