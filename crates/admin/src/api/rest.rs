//! REST client for the orders service.

use std::sync::Arc;

use async_trait::async_trait;
use order_admin_core::{Order, OrderId};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use super::{ApiError, OrdersApi};
use crate::config::OrdersApiConfig;

/// Orders service REST client.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct RestOrdersClient {
    inner: Arc<RestOrdersClientInner>,
}

struct RestOrdersClientInner {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    base_url: String,
}

impl RestOrdersClient {
    /// Create a new orders API client.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &OrdersApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = &config.token {
            let auth_value = format!("Bearer {}", token.expose_secret());
            let mut value = HeaderValue::from_str(&auth_value)
                .map_err(|e| ApiError::Parse(format!("Invalid API token format: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(RestOrdersClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Get the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn orders_url(&self) -> String {
        format!("{}/orders", self.inner.base_url)
    }

    fn order_url(&self, id: &OrderId) -> String {
        format!(
            "{}/orders/{}",
            self.inner.base_url,
            urlencoding::encode(id.as_str())
        )
    }

    /// Handle API response and parse JSON.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse response: {e}")));
        }

        Err(Self::parse_error(response).await)
    }

    /// Map an error response to an [`ApiError`].
    async fn parse_error(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        if status == 401 || status == 403 {
            return ApiError::Unauthorized;
        }

        if status == 404 {
            return ApiError::NotFound(response.url().path().to_string());
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        ApiError::Api { status, message }
    }
}

#[async_trait]
impl OrdersApi for RestOrdersClient {
    #[instrument(skip(self))]
    async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        let response = self.inner.client.get(self.orders_url()).send().await?;
        let orders: Vec<Order> = Self::handle_response(response).await?;
        tracing::debug!(count = orders.len(), "Fetched orders");
        Ok(orders)
    }

    #[instrument(skip(self), fields(order_id = %id))]
    async fn delete_order(&self, id: &OrderId) -> Result<(), ApiError> {
        let response = self.inner.client.delete(self.order_url(id)).send().await?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(Self::parse_error(response).await)
    }
}

impl std::fmt::Debug for RestOrdersClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestOrdersClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}
