use reqwest::multipart::{Form, Part};

use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{MenuItem, MessageResponse};

/// Image attached to a menu create/update, sent as the `image` file part.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart payload for menu create/update. Field names follow the backend
/// form binding: `category_id`, `name`, `price`, plus an optional `image`
/// file. No client-side image validation or resizing.
#[derive(Debug, Clone)]
pub struct MenuForm {
    pub category_id: u32,
    pub name: String,
    pub price: i64,
    pub image: Option<ImageUpload>,
}

impl MenuForm {
    pub fn new(category_id: u32, name: impl Into<String>, price: i64) -> Self {
        MenuForm {
            category_id,
            name: name.into(),
            price,
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageUpload) -> Self {
        self.image = Some(image);
        self
    }

    fn into_multipart(self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("category_id", self.category_id.to_string())
            .text("name", self.name)
            .text("price", self.price.to_string());

        if let Some(image) = self.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part("image", part);
        }

        Ok(form)
    }
}

/// Resource client for `/menus`.
#[derive(Clone)]
pub struct MenuApi {
    client: ApiClient,
}

impl MenuApi {
    pub fn new(client: ApiClient) -> Self {
        MenuApi { client }
    }

    /// Without a category this lists every menu from `/menus`; with one it
    /// requests `/categories/{id}/menus` instead.
    pub async fn get_menus(&self, category_id: Option<u32>) -> Result<Vec<MenuItem>, ApiError> {
        match category_id {
            Some(id) => self.client.get(&format!("/categories/{}/menus", id)).await,
            None => self.client.get("/menus").await,
        }
    }

    pub async fn get_menu(&self, id: u32) -> Result<MenuItem, ApiError> {
        self.client.get(&format!("/menus/{}", id)).await
    }

    pub async fn create_menu(&self, form: MenuForm) -> Result<MenuItem, ApiError> {
        self.client
            .post_multipart("/menus", form.into_multipart()?)
            .await
    }

    pub async fn update_menu(&self, id: u32, form: MenuForm) -> Result<MenuItem, ApiError> {
        self.client
            .put_multipart(&format!("/menus/{}", id), form.into_multipart()?)
            .await
    }

    pub async fn delete_menu(&self, id: u32) -> Result<MessageResponse, ApiError> {
        self.client.delete(&format!("/menus/{}", id)).await
    }
}
