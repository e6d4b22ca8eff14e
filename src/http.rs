use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::multipart::Form;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::ApiError;

/// Shape of the error body the backend attaches to non-2xx responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Preconfigured HTTP client all resource clients issue requests through.
///
/// Constructed once from `Config` and handed to each resource client by
/// clone; there is no global instance. Requests default to JSON with the
/// configured timeout, multipart calls override the content type per
/// request. Failures are not retried.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(ApiClient {
            http,
            base_url: config.api_base_url(),
        })
    }

    /// Wrap an already-built `reqwest::Client`. `base_url` must include the
    /// `/api` prefix.
    pub fn from_parts(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        ApiClient {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::parse(response).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::parse(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self.http.post(self.url(path)).multipart(form).send().await?;
        Self::parse(response).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        Self::parse(response).await
    }

    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self.http.put(self.url(path)).multipart(form).send().await?;
        Self::parse(response).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;
        Self::parse(response).await
    }

    /// Check the status, then deserialize the body into the expected shape.
    /// Non-2xx responses carry `{"error": ...}` (or `{"message": ...}`) from
    /// the backend; fall back to the raw body text when neither parses.
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.error.or(body.message))
                .unwrap_or(text);
            log::debug!("request failed with {}: {}", status, message);
            return Err(ApiError::Status { status, message });
        }

        Ok(response.json::<T>().await?)
    }
}
