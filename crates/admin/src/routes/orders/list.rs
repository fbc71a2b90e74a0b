//! Orders list page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use order_admin_core::OrderId;
use tracing::instrument;

use crate::{
    components::data_table::orders_table_config,
    error::AppError,
    filters,
    orders::{OrderList, OrderListController, grid},
    state::AppState,
};

use super::types::{
    ColumnHeaderView, DeleteDialogView, OrderRowView, OrdersQuery, PaginationView,
};

/// Orders list page template.
#[derive(Template, WebTemplate)]
#[template(path = "orders/index.html")]
pub struct OrdersIndexTemplate {
    pub current_path: String,
    /// Data table ID.
    pub table_id: String,
    /// Column headers.
    pub columns: Vec<ColumnHeaderView>,
    /// Rows on the current page.
    pub rows: Vec<OrderRowView>,
    /// Whether the fetched list had no orders at all.
    pub is_empty: bool,
    /// Empty-state notice.
    pub empty_title: String,
    /// Shown when the search hides every row.
    pub no_matches_title: String,
    /// Search box placeholder.
    pub search_placeholder: String,
    /// Current search query.
    pub search_value: String,
    /// Sort parameters carried by the search form (empty for the default sort).
    pub sort_param: String,
    pub dir_param: String,
    pub pagination: PaginationView,
    /// Open delete confirmation dialog.
    pub dialog: Option<DeleteDialogView>,
}

impl OrdersIndexTemplate {
    /// Build the page for a view state and the request's list parameters.
    #[must_use]
    pub fn build(list: &OrderList, query: &OrdersQuery) -> Self {
        let config = orders_table_config();
        let params = query.list_params();
        let grid = grid::apply(list.orders(), &query.grid_query());

        let (sort_param, dir_param) = if params.sort == grid::SortModel::default() {
            (String::new(), String::new())
        } else {
            (
                params.sort.key.as_param().to_string(),
                params.sort.direction.as_param().to_string(),
            )
        };

        Self {
            current_path: "/orders".to_string(),
            table_id: config.table_id.clone(),
            columns: config
                .columns
                .iter()
                .map(|c| ColumnHeaderView::new(c, &params))
                .collect(),
            rows: grid
                .rows
                .iter()
                .map(|o| OrderRowView::new(o, &params))
                .collect(),
            is_empty: list.is_empty(),
            empty_title: config.empty_title,
            no_matches_title: config.no_matches_title,
            search_placeholder: config.search_placeholder,
            search_value: params.search.clone().unwrap_or_default(),
            sort_param,
            dir_param,
            pagination: PaginationView::new(&grid, &params),
            dialog: list
                .pending_delete()
                .map(|id| DeleteDialogView::new(id, &params)),
        }
    }
}

/// Parse an order id from a path or query value.
pub(super) fn parse_order_id(raw: &str) -> Result<OrderId, AppError> {
    OrderId::parse(raw).map_err(|e| AppError::BadRequest(format!("invalid order id: {e}")))
}

/// Orders list page handler.
///
/// Every visit mounts the list: orders are fetched, then the delete
/// confirmation named by `confirm_delete` (if any) is opened.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<OrdersIndexTemplate, AppError> {
    let controller = OrderListController::mount(state.api()).await?;

    if let Some(raw) = query.confirm_delete.as_deref() {
        let id = parse_order_id(raw)?;
        controller.request_delete(&id).await?;
    }

    let list = controller.snapshot().await;
    Ok(OrdersIndexTemplate::build(&list, &query))
}
