//! Order statuses

use serde::{Deserialize, Serialize};

use crate::domain::{StoredValue, stored_value_traits};

/// Lifecycle of an order. Quotes are created as `Draft` or `Quoted`; later states are set
/// elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Draft,
    Quoted,
    Confirmed,
    Paid,
}

impl StoredValue for OrderStatus {
    const KIND: &'static str = "order status";
    const ALL: &'static [Self] = &[Self::Draft, Self::Quoted, Self::Confirmed, Self::Paid];

    fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Quoted => "quoted",
            Self::Confirmed => "confirmed",
            Self::Paid => "paid",
        }
    }
}

stored_value_traits!(OrderStatus);

/// How much of the order has been paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Partial,
    Paid,
}

impl StoredValue for PaymentStatus {
    const KIND: &'static str = "payment status";
    const ALL: &'static [Self] = &[Self::Pending, Self::Partial, Self::Paid];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }
}

stored_value_traits!(PaymentStatus);

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Pickup,
    Delivery,
}

impl StoredValue for DeliveryMethod {
    const KIND: &'static str = "delivery method";
    const ALL: &'static [Self] = &[Self::Pickup, Self::Delivery];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Delivery => "delivery",
        }
    }
}

stored_value_traits!(DeliveryMethod);

impl DeliveryMethod {
    /// Whether a delivery address must accompany the order.
    #[must_use]
    pub fn requires_address(self) -> bool {
        matches!(self, Self::Delivery)
    }
}
