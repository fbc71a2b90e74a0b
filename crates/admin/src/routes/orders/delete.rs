//! Order delete handler.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use tracing::instrument;

use crate::{error::AppError, orders::OrderListController, state::AppState};

use super::list::parse_order_id;
use super::types::OrdersQuery;

/// Confirm deletion of an order.
///
/// Loads the current list so the selection is validated the same way the
/// dialog was opened, deletes, re-fetches, and sends the operator back to
/// the list with their search, sort, and page intact.
#[instrument(skip(state, query))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<OrdersQuery>,
) -> Result<Redirect, AppError> {
    let id = parse_order_id(&id)?;

    let controller = OrderListController::mount(state.api()).await?;
    controller.request_delete(&id).await?;

    if let Some(deleted) = controller.confirm_delete().await? {
        let remaining = controller.snapshot().await.len();
        tracing::info!(order_id = %deleted, remaining, "Order deleted from admin");
    }

    Ok(Redirect::to(&query.list_params().list_href()))
}
