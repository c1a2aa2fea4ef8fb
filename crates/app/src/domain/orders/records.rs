//! Order Records

use cotizador::pricing::OrderType;
use jiff::Timestamp;

use crate::{
    domain::{
        customers::records::CustomerUuid,
        orders::status::{DeliveryMethod, OrderStatus, PaymentStatus},
        products::records::ProductUuid,
    },
    session::UserUuid,
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub order_number: String,
    pub customer_uuid: Option<CustomerUuid>,
    pub customer_name: Option<String>,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub delivery_method: DeliveryMethod,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub subtotal: u64,
    pub discount: i64,
    pub total: u64,
    pub created_by: UserUuid,
    pub items: Vec<OrderItemRecord>,
    pub created_at: Timestamp,
}

/// Order Item UUID
pub type OrderItemUuid = TypedUuid<OrderItemRecord>;

/// Order Item Record. Prices are the snapshot taken when the order was created.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemRecord {
    pub uuid: OrderItemUuid,
    pub order_uuid: OrderUuid,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    pub product_sku: String,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
    pub created_at: Timestamp,
}
