use time::Date;

use crate::constants::*;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{Order, OrdersByPeriodResponse};
use crate::utils::format_wire_date;

/// Sort fields the period endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    TotalPrice,
}

impl SortField {
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::CreatedAt => SORT_BY_CREATED_AT,
            SortField::UpdatedAt => SORT_BY_UPDATED_AT,
            SortField::TotalPrice => SORT_BY_TOTAL_PRICE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => SORT_ORDER_ASC,
            SortOrder::Desc => SORT_ORDER_DESC,
        }
    }
}

/// Optional filters for `GET /orders/period`.
///
/// Serialization is deterministic: keys always appear in the order
/// `start_date`, `end_date`, `min_amount`, `max_amount`, `menu_id`,
/// `category_id`, `sort_by`, `order`, and an unset option emits no key at
/// all. The backend applies its own defaults for missing keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodFilter {
    pub min_amount: Option<i64>,
    pub max_amount: Option<i64>,
    pub menu_id: Option<u32>,
    pub category_id: Option<u32>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl PeriodFilter {
    pub fn min_amount(mut self, amount: i64) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn max_amount(mut self, amount: i64) -> Self {
        self.max_amount = Some(amount);
        self
    }

    pub fn menu_id(mut self, id: u32) -> Self {
        self.menu_id = Some(id);
        self
    }

    pub fn category_id(mut self, id: u32) -> Self {
        self.category_id = Some(id);
        self
    }

    pub fn sort_by(mut self, field: SortField) -> Self {
        self.sort_by = Some(field);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Full query for one period request, dates first.
    pub fn to_query(&self, start: Date, end: Date) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("start_date", format_wire_date(start)),
            ("end_date", format_wire_date(end)),
        ];
        if let Some(min_amount) = self.min_amount {
            query.push(("min_amount", min_amount.to_string()));
        }
        if let Some(max_amount) = self.max_amount {
            query.push(("max_amount", max_amount.to_string()));
        }
        if let Some(menu_id) = self.menu_id {
            query.push(("menu_id", menu_id.to_string()));
        }
        if let Some(category_id) = self.category_id {
            query.push(("category_id", category_id.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            query.push(("sort_by", sort_by.as_str().to_string()));
        }
        if let Some(order) = self.order {
            query.push(("order", order.as_str().to_string()));
        }
        query
    }
}

/// Resource client for `/orders` reads. Order creation lives on
/// `PaymentApi`, next to the payment request it is issued alongside.
#[derive(Clone)]
pub struct OrderApi {
    client: ApiClient,
}

impl OrderApi {
    pub fn new(client: ApiClient) -> Self {
        OrderApi { client }
    }

    /// Full order list; the backend returns everything in one response.
    pub async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.client.get("/orders").await
    }

    pub async fn get_order(&self, id: u32) -> Result<Order, ApiError> {
        self.client.get(&format!("/orders/{}", id)).await
    }

    /// Orders created between `start` and `end` (inclusive of the end day),
    /// narrowed and sorted by `filter`.
    pub async fn get_orders_by_period(
        &self,
        start: Date,
        end: Date,
        filter: &PeriodFilter,
    ) -> Result<OrdersByPeriodResponse, ApiError> {
        self.client
            .get_with_query("/orders/period", &filter.to_query(start, end))
            .await
    }
}
