//! Query parameters and view types for the orders pages.

use std::{fmt, str::FromStr};

use order_admin_core::{Order, OrderId};
use serde::{Deserialize, Deserializer};

use crate::{
    components::data_table::TableColumn,
    orders::{GridPage, GridQuery, SortDirection, SortKey, SortModel},
};

/// Deserialize an optional value, treating an empty or blank string as absent.
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

// =============================================================================
// Query Parameters
// =============================================================================

/// Query parameters for the orders list.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// 1-based page number.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<usize>,
    /// Sort column key.
    pub sort: Option<String>,
    /// Sort direction (asc/desc).
    pub dir: Option<String>,
    /// Quick search text.
    pub q: Option<String>,
    /// Order whose delete confirmation dialog is open.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub confirm_delete: Option<String>,
}

impl OrdersQuery {
    /// Grid parameters described by this query.
    #[must_use]
    pub fn grid_query(&self) -> GridQuery {
        GridQuery {
            sort: SortModel::from_params(self.sort.as_deref(), self.dir.as_deref()),
            search: self
                .q
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(ToString::to_string),
            page: self.page.unwrap_or(1),
        }
    }

    /// Parameters that survive navigation between list views.
    #[must_use]
    pub fn list_params(&self) -> ListParams {
        let grid = self.grid_query();
        ListParams {
            search: grid.search,
            sort: grid.sort,
            page: grid.page,
        }
    }
}

/// Search, sort and page state carried in list links.
///
/// Default values are left out of the generated query strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: SortModel,
    pub page: usize,
}

impl ListParams {
    /// Same parameters on a different page.
    #[must_use]
    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// Same search with a new sort, back on the first page.
    #[must_use]
    pub fn with_sort(&self, sort: SortModel) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    /// Encoded query string without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut params = Vec::new();

        if let Some(q) = &self.search {
            params.push(format!("q={}", urlencoding::encode(q)));
        }
        if self.sort != SortModel::default() {
            params.push(format!(
                "sort={}",
                urlencoding::encode(self.sort.key.as_param())
            ));
            params.push(format!("dir={}", self.sort.direction.as_param()));
        }
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }

        params.join("&")
    }

    /// Link to the list with these parameters.
    #[must_use]
    pub fn list_href(&self) -> String {
        with_query("/orders", &self.query_string())
    }

    /// Link that opens the delete confirmation for an order.
    #[must_use]
    pub fn confirm_href(&self, id: &OrderId) -> String {
        let id = urlencoding::encode(id.as_str());
        let qs = self.query_string();
        if qs.is_empty() {
            format!("/orders?confirm_delete={id}")
        } else {
            format!("/orders?{qs}&confirm_delete={id}")
        }
    }

    /// Form action that performs the delete.
    #[must_use]
    pub fn delete_action(&self, id: &OrderId) -> String {
        let id = urlencoding::encode(id.as_str());
        with_query(&format!("/orders/{id}/delete"), &self.query_string())
    }
}

fn with_query(path: &str, qs: &str) -> String {
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{qs}")
    }
}

// =============================================================================
// View Types
// =============================================================================

/// Grid column header.
#[derive(Debug, Clone)]
pub struct ColumnHeaderView {
    pub key: String,
    pub label: String,
    pub width: u16,
    /// Link that sorts by this column; `None` for unsortable columns.
    pub sort_href: Option<String>,
    /// Arrow shown next to the active sort column.
    pub sort_indicator: &'static str,
}

impl ColumnHeaderView {
    /// Build a header, linking to the next sort state for this column.
    ///
    /// Clicking the active column flips its direction; clicking another
    /// sortable column sorts ascending by it.
    #[must_use]
    pub fn new(column: &TableColumn, params: &ListParams) -> Self {
        let key = column
            .sortable
            .then(|| SortKey::from_param(&column.key))
            .flatten();

        let (sort_href, sort_indicator) = match key {
            Some(key) if key == params.sort.key => {
                let next = SortModel {
                    key,
                    direction: params.sort.direction.reversed(),
                };
                let indicator = match params.sort.direction {
                    SortDirection::Asc => "▲",
                    SortDirection::Desc => "▼",
                };
                (Some(params.with_sort(next).list_href()), indicator)
            }
            Some(key) => {
                let next = SortModel {
                    key,
                    direction: SortDirection::Asc,
                };
                (Some(params.with_sort(next).list_href()), "")
            }
            None => (None, ""),
        };

        Self {
            key: column.key.clone(),
            label: column.label.clone(),
            width: column.width,
            sort_href,
            sort_indicator,
        }
    }
}

/// One grid row.
#[derive(Debug, Clone)]
pub struct OrderRowView {
    pub id: String,
    /// RFC 3339 creation time, formatted in the template.
    pub created_at: String,
    pub username: String,
    pub avatar_url: String,
    pub status: String,
    pub payment_method: String,
    pub amount: String,
    /// Whether the delete control is enabled.
    pub deletable: bool,
    /// Per-order edit view.
    pub edit_href: String,
    /// Opens the delete confirmation dialog.
    pub delete_href: String,
}

impl OrderRowView {
    #[must_use]
    pub fn new(order: &Order, params: &ListParams) -> Self {
        Self {
            id: order.id.to_string(),
            created_at: order.created_at.to_rfc3339(),
            username: order.user.username.clone(),
            avatar_url: order.user.img.clone(),
            status: order.order_status.clone(),
            payment_method: order.payment_method.clone(),
            amount: order.total_amount.to_string(),
            deletable: order.is_deletable(),
            edit_href: format!("/order/{}", urlencoding::encode(order.id.as_str())),
            delete_href: params.confirm_href(&order.id),
        }
    }
}

/// Grid footer.
#[derive(Debug, Clone)]
pub struct PaginationView {
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
    pub first_row: usize,
    pub last_row: usize,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl PaginationView {
    #[must_use]
    pub fn new(grid: &GridPage<'_>, params: &ListParams) -> Self {
        Self {
            page: grid.page,
            page_count: grid.page_count,
            total_rows: grid.total_rows,
            first_row: grid.first_row(),
            last_row: grid.last_row(),
            prev_href: grid
                .has_prev()
                .then(|| params.with_page(grid.page - 1).list_href()),
            next_href: grid
                .has_next()
                .then(|| params.with_page(grid.page + 1).list_href()),
        }
    }
}

/// Delete confirmation dialog.
#[derive(Debug, Clone)]
pub struct DeleteDialogView {
    pub order_id: String,
    /// Form action for "Proceed".
    pub action: String,
    /// Link for "Cancel"; returns to the list without a request.
    pub cancel_href: String,
}

impl DeleteDialogView {
    #[must_use]
    pub fn new(id: &OrderId, params: &ListParams) -> Self {
        Self {
            order_id: id.to_string(),
            action: params.delete_action(id),
            cancel_href: params.list_href(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::fake::{admin_order, order};

    fn params(q: Option<&str>, sort: SortModel, page: usize) -> ListParams {
        ListParams {
            search: q.map(ToString::to_string),
            sort,
            page,
        }
    }

    #[test]
    fn test_default_params_produce_bare_links() {
        let p = params(None, SortModel::default(), 1);
        let id = OrderId::parse("a1").unwrap();

        assert_eq!(p.list_href(), "/orders");
        assert_eq!(p.confirm_href(&id), "/orders?confirm_delete=a1");
        assert_eq!(p.delete_action(&id), "/orders/a1/delete");
    }

    #[test]
    fn test_params_are_preserved() {
        let sort = SortModel {
            key: SortKey::Username,
            direction: SortDirection::Asc,
        };
        let p = params(Some("card & cash"), sort, 2);
        let id = OrderId::parse("a1").unwrap();

        assert_eq!(
            p.list_href(),
            "/orders?q=card%20%26%20cash&sort=user.username&dir=asc&page=2"
        );
        assert_eq!(
            p.confirm_href(&id),
            "/orders?q=card%20%26%20cash&sort=user.username&dir=asc&page=2&confirm_delete=a1"
        );
        assert_eq!(
            p.delete_action(&id),
            "/orders/a1/delete?q=card%20%26%20cash&sort=user.username&dir=asc&page=2"
        );
    }

    #[test]
    fn test_links_escape_id() {
        let p = params(None, SortModel::default(), 1);
        let id = OrderId::parse("ORD.2024/7 &x").unwrap();

        assert_eq!(
            p.confirm_href(&id),
            "/orders?confirm_delete=ORD.2024%2F7%20%26x"
        );
        assert_eq!(p.delete_action(&id), "/orders/ORD.2024%2F7%20%26x/delete");

        let row = OrderRowView::new(&order("ORD.2024/7 &x", 0), &p);
        assert_eq!(row.edit_href, "/order/ORD.2024%2F7%20%26x");
    }

    #[test]
    fn test_with_sort_resets_page() {
        let p = params(Some("x"), SortModel::default(), 3);
        let sorted = p.with_sort(SortModel {
            key: SortKey::Id,
            direction: SortDirection::Asc,
        });
        assert_eq!(sorted.page, 1);
        assert_eq!(sorted.search.as_deref(), Some("x"));
    }

    #[test]
    fn test_grid_query_trims_blank_search() {
        let query = OrdersQuery {
            q: Some("   ".to_string()),
            ..OrdersQuery::default()
        };
        let grid = query.grid_query();
        assert_eq!(grid.search, None);
        assert_eq!(grid.page, 1);
    }

    #[test]
    fn test_header_links() {
        let p = params(None, SortModel::default(), 1);

        let created = ColumnHeaderView::new(&TableColumn::sortable("createdAt", "Created At"), &p);
        assert_eq!(created.sort_indicator, "▼");
        assert_eq!(
            created.sort_href.as_deref(),
            Some("/orders?sort=createdAt&dir=asc")
        );

        let status = ColumnHeaderView::new(&TableColumn::sortable("orderStatus", "Status"), &p);
        assert_eq!(status.sort_indicator, "");
        assert_eq!(
            status.sort_href.as_deref(),
            Some("/orders?sort=orderStatus&dir=asc")
        );

        let action = ColumnHeaderView::new(&TableColumn::new("action", "Action"), &p);
        assert!(action.sort_href.is_none());
    }

    #[test]
    fn test_row_view() {
        let p = params(None, SortModel::default(), 1);

        let row = OrderRowView::new(&order("a1", 0), &p);
        assert_eq!(row.id, "a1");
        assert_eq!(row.username, "user-a1");
        assert_eq!(row.amount, "19.99");
        assert_eq!(row.edit_href, "/order/a1");
        assert_eq!(row.delete_href, "/orders?confirm_delete=a1");
        assert!(row.deletable);

        let row = OrderRowView::new(&admin_order("root", 0), &p);
        assert!(!row.deletable);
    }
}
