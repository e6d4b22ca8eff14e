use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    /// Populated by the backend on category reads, absent elsewhere.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menus: Vec<MenuItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub category_id: u32,
    pub name: String,
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// One line of the client-local cart: a menu snapshot plus a quantity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    pub item: MenuItem,
    pub quantity: u32,
}

/// Aggregate assembled just before submission, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderData {
    pub items: Vec<CartItem>,
    pub total_amount: i64,
    pub payment_date: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Order {
    pub id: u32,
    pub total_price: i64,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_items: Vec<OrderItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderItem {
    pub id: u32,
    pub order_id: u32,
    pub menu_id: u32,
    pub quantity: u32,
    /// Price at time of purchase, independent of later menu edits.
    pub price: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateCategoryPayload {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateCategoryPayload {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateOrderPayload {
    pub items: Vec<OrderItemPayload>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderItemPayload {
    pub menu_id: u32,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentPayload {
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaymentResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<PaymentDetails>,
}

/// Outcome details attached to some payment responses. The backend emits a
/// different key set per outcome (verified, timed out, cancelled), so every
/// field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PaymentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_change: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempt: Option<u32>,
}

/// Envelope returned by `GET /orders/period`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrdersByPeriodResponse {
    pub start_date: String,
    pub end_date: String,
    pub count: u32,
    pub orders: Vec<Order>,
}

/// `{"message": ...}` acknowledgements returned by delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}
