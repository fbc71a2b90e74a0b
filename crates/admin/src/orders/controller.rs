//! Fetch / delete / re-fetch cycle for the order list.

use std::sync::Arc;

use order_admin_core::OrderId;
use tokio::sync::RwLock;
use tracing::instrument;

use super::list::{OrderList, OrderListError};
use crate::api::{ApiError, OrdersApi};

/// Drives an [`OrderList`] against the orders API.
///
/// The view state sits behind a single lock that is only held for
/// synchronous transitions, never across an API call. Overlapping fetches
/// are not coordinated: whichever response lands last becomes the snapshot.
pub struct OrderListController<A: ?Sized> {
    api: Arc<A>,
    state: RwLock<OrderList>,
}

impl<A: OrdersApi + ?Sized> OrderListController<A> {
    /// Create a controller with an empty, unfetched list.
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: RwLock::new(OrderList::new()),
        }
    }

    /// Create a controller and perform the initial fetch.
    ///
    /// # Errors
    ///
    /// Returns the API error if the initial fetch fails.
    pub async fn mount(api: Arc<A>) -> Result<Self, ApiError> {
        let controller = Self::new(api);
        controller.refresh().await?;
        Ok(controller)
    }

    /// Fetch all orders and replace the snapshot.
    ///
    /// On failure the previous snapshot is kept.
    ///
    /// # Errors
    ///
    /// Returns the API error if the fetch fails.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<usize, ApiError> {
        let orders = self.api.get_orders().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to fetch orders, keeping previous snapshot");
        })?;

        let count = orders.len();
        self.state.write().await.replace(orders);
        tracing::debug!(count, "Order snapshot replaced");
        Ok(count)
    }

    /// Open the confirmation dialog for an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is unknown or protected.
    pub async fn request_delete(&self, id: &OrderId) -> Result<(), OrderListError> {
        self.state.write().await.request_delete(id)
    }

    /// Close the dialog. No request is issued.
    pub async fn cancel_delete(&self) {
        self.state.write().await.cancel_delete();
    }

    /// Confirm the pending deletion.
    ///
    /// The dialog closes before the delete request is sent. Once the delete
    /// completes the list is fetched again. Returns the deleted id, or `None`
    /// if nothing was pending (no request is issued in that case).
    ///
    /// # Errors
    ///
    /// Returns the API error from the delete or the re-fetch. A failed
    /// delete skips the re-fetch.
    #[instrument(skip(self))]
    pub async fn confirm_delete(&self) -> Result<Option<OrderId>, ApiError> {
        let Some(id) = self.state.write().await.take_pending() else {
            return Ok(None);
        };

        if let Err(e) = self.api.delete_order(&id).await {
            tracing::error!(order_id = %id, error = %e, "Failed to delete order");
            return Err(e);
        }
        tracing::info!(order_id = %id, "Order deleted");

        self.refresh().await?;
        Ok(Some(id))
    }

    /// Clone of the current view state for rendering.
    pub async fn snapshot(&self) -> OrderList {
        self.state.read().await.clone()
    }
}
