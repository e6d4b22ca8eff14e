use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{
    Category, CreateCategoryPayload, MenuItem, MessageResponse, UpdateCategoryPayload,
};

/// Resource client for `/categories`.
///
/// Each operation maps one-to-one onto a REST path and verb; no validation,
/// pagination, or caching happens on this side. The backend owns the data.
#[derive(Clone)]
pub struct CategoryApi {
    client: ApiClient,
}

impl CategoryApi {
    pub fn new(client: ApiClient) -> Self {
        CategoryApi { client }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, ApiError> {
        self.client.get("/categories").await
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Category, ApiError> {
        self.client.get(&format!("/categories/{}", id)).await
    }

    /// Menus belonging to one category, `GET /categories/{id}/menus`.
    pub async fn get_menus(&self, category_id: u32) -> Result<Vec<MenuItem>, ApiError> {
        self.client
            .get(&format!("/categories/{}/menus", category_id))
            .await
    }

    pub async fn create(&self, name: &str) -> Result<Category, ApiError> {
        let payload = CreateCategoryPayload {
            name: name.to_string(),
        };
        self.client.post("/categories", &payload).await
    }

    pub async fn update(&self, id: u32, name: &str) -> Result<Category, ApiError> {
        let payload = UpdateCategoryPayload {
            name: name.to_string(),
        };
        self.client
            .put(&format!("/categories/{}", id), &payload)
            .await
    }

    /// Fails with 400 while the category still has menus; the check is the
    /// backend's, not ours.
    pub async fn delete(&self, id: u32) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/categories/{}", id)).await
    }
}
