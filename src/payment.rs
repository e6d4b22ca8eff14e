use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{CartItem, CreateOrderPayload, Order, PaymentPayload, PaymentResponse};

/// Client for the checkout endpoints: `POST /payment` and `POST /orders`.
///
/// The two calls are independent. Nothing here sequences them, retries, or
/// compensates when one succeeds and the other fails; the caller decides
/// what to do with a partial outcome.
#[derive(Clone)]
pub struct PaymentApi {
    client: ApiClient,
}

impl PaymentApi {
    pub fn new(client: ApiClient) -> Self {
        PaymentApi { client }
    }

    /// Ask the backend to confirm a payment of `amount`. A declined or
    /// timed-out payment still resolves Ok, with `success: false` and the
    /// outcome in `message`/`details`.
    pub async fn request_payment(&self, amount: i64) -> Result<PaymentResponse, ApiError> {
        let payload = PaymentPayload { amount };
        self.client.post("/payment", &payload).await
    }

    /// Submit the cart as `{"items": [{"menu_id", "quantity"}]}` and return
    /// the server-confirmed order with priced line items.
    pub async fn post_order(&self, cart_items: &[CartItem]) -> Result<Order, ApiError> {
        let payload = CreateOrderPayload {
            items: cart_items
                .iter()
                .map(|cart_item| crate::models::OrderItemPayload {
                    menu_id: cart_item.item.id,
                    quantity: cart_item.quantity,
                })
                .collect(),
        };
        self.client.post("/orders", &payload).await
    }
}
