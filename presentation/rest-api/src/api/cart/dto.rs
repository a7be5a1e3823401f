use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartLineItem};

use crate::notifications::Toast;

#[derive(Debug, Clone, Object)]
pub struct UpdateAmountRequest {
    /// Requested quantity; values below 1 are rejected with an out-of-stock toast
    pub amount: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Product image URL
    pub image: String,
    /// Quantity in the cart
    pub amount: u32,
    /// price × amount
    pub subtotal: f64,
}

impl From<&CartLineItem> for CartItemResponse {
    fn from(item: &CartLineItem) -> Self {
        Self {
            id: item.id().value(),
            title: item.product.title.clone(),
            price: item.product.price,
            image: item.product.image.clone(),
            amount: item.amount,
            subtotal: item.line_total(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    /// info or error
    pub severity: String,
    /// Message to display to the shopper
    pub message: String,
    /// When the notification was raised
    pub created_at: DateTime<Utc>,
}

impl From<Toast> for NotificationResponse {
    fn from(toast: Toast) -> Self {
        Self {
            severity: toast.severity.to_string(),
            message: toast.message,
            created_at: toast.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Line items in the order they were first added
    pub items: Vec<CartItemResponse>,
    /// Number of distinct products
    pub size: u64,
    /// Sum of all quantities
    pub total_units: u64,
    /// Sum of all line subtotals
    pub total: f64,
    /// Notifications raised while handling this request
    pub notifications: Vec<NotificationResponse>,
}

impl CartResponse {
    pub fn new(cart: &Cart, toasts: Vec<Toast>) -> Self {
        Self {
            items: cart.items().iter().map(CartItemResponse::from).collect(),
            size: cart.len() as u64,
            total_units: cart.total_units(),
            total: cart.subtotal(),
            notifications: toasts.into_iter().map(NotificationResponse::from).collect(),
        }
    }
}
