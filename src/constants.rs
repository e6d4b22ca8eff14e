// Remote service configuration
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const API_PREFIX: &str = "/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 100;

// Environment variables read by Config::from_env
pub const ENV_BASE_URL: &str = "KIOSK_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "KIOSK_API_TIMEOUT_SECS";

// Wire date format for period queries (YYYY-MM-DD)
pub const WIRE_DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

// Sort fields accepted by GET /orders/period
pub const SORT_BY_CREATED_AT: &str = "created_at";
pub const SORT_BY_UPDATED_AT: &str = "updated_at";
pub const SORT_BY_TOTAL_PRICE: &str = "total_price";
pub const SORT_ORDER_ASC: &str = "asc";
pub const SORT_ORDER_DESC: &str = "desc";

// Route resolution
pub const MAX_REDIRECTS: usize = 4;
