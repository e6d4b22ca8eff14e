pub mod cart;
pub mod categories;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod menus;
pub mod models;
pub mod orders;
pub mod payment;
pub mod routes;
pub mod utils;

// Re-export the common surface at the crate root
pub use crate::cart::Cart;
pub use crate::categories::CategoryApi;
pub use crate::config::Config;
pub use crate::error::ApiError;
pub use crate::http::ApiClient;
pub use crate::menus::{ImageUpload, MenuApi, MenuForm};
pub use crate::orders::{OrderApi, PeriodFilter, SortField, SortOrder};
pub use crate::payment::PaymentApi;

/// All resource clients behind one configured HTTP client.
///
/// The `ApiClient` is built once and cloned into each resource client; no
/// module-level singleton exists.
#[derive(Clone)]
pub struct KioskApi {
    pub categories: CategoryApi,
    pub menus: MenuApi,
    pub orders: OrderApi,
    pub payment: PaymentApi,
}

impl KioskApi {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(Self::with_client(ApiClient::new(config)?))
    }

    pub fn with_client(client: ApiClient) -> Self {
        KioskApi {
            categories: CategoryApi::new(client.clone()),
            menus: MenuApi::new(client.clone()),
            orders: OrderApi::new(client.clone()),
            payment: PaymentApi::new(client),
        }
    }
}
