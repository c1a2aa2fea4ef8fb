//! Order Data

use cotizador::pricing::OrderType;

use crate::{
    domain::{
        customers::records::CustomerUuid,
        orders::{
            number::OrderNumber,
            records::{OrderItemUuid, OrderUuid},
            status::{DeliveryMethod, OrderStatus, PaymentStatus},
        },
        products::records::ProductUuid,
    },
    session::UserUuid,
};

/// New Order Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
    pub order_number: OrderNumber,
    pub customer_uuid: Option<CustomerUuid>,
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
}

/// New Order Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrderItem {
    pub uuid: OrderItemUuid,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub unit_price: u64,
    pub subtotal: u64,
}
