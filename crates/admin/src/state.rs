//! Application state shared across handlers.

use std::sync::Arc;

use crate::{
    api::{ApiError, OrdersApi, RestOrdersClient},
    config::AdminConfig,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    api: Arc<dyn OrdersApi>,
}

impl AppState {
    /// Build state around any orders API implementation.
    #[must_use]
    pub fn new(api: Arc<dyn OrdersApi>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { api }),
        }
    }

    /// Build state with the REST client described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn from_config(config: &AdminConfig) -> Result<Self, ApiError> {
        let client = RestOrdersClient::new(config.orders_api())?;
        tracing::info!(base_url = %client.base_url(), "Orders API client created");
        Ok(Self::new(Arc::new(client)))
    }

    /// The orders API.
    #[must_use]
    pub fn api(&self) -> Arc<dyn OrdersApi> {
        Arc::clone(&self.inner.api)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
