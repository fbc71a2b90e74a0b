//! Data table component types.
//!
//! These types define the configuration for data tables in the admin panel.

use crate::orders::SortKey;

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Unique key for the column, also used as the `sort` parameter.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
    /// Whether the column is sortable.
    pub sortable: bool,
    /// Column width in pixels.
    pub width: u16,
}

impl TableColumn {
    /// Create a new sortable column.
    #[must_use]
    pub fn sortable(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: true,
            width: 150,
        }
    }

    /// Create a new non-sortable column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            sortable: false,
            width: 150,
        }
    }

    /// Set the column width.
    #[must_use]
    pub const fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }
}

/// Configuration for a data table.
///
/// Paging is fixed at [`PAGE_SIZE`](crate::orders::PAGE_SIZE) rows.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Message shown when the source list is empty.
    pub empty_title: String,
    /// Message shown when the search hides every row.
    pub no_matches_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            search_placeholder: "Search...".to_string(),
            empty_title: "No items found".to_string(),
            no_matches_title: "No rows match your search".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state message.
    #[must_use]
    pub fn empty_state(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }
}

/// Build the orders table configuration.
///
/// Sortable column keys round-trip through [`SortKey::from_param`].
#[must_use]
pub fn orders_table_config() -> DataTableConfig {
    DataTableConfig::new("orders")
        .column(TableColumn::sortable(SortKey::CreatedAt.as_param(), "Created At").width(200))
        .column(TableColumn::sortable(SortKey::Id.as_param(), "Order ID").width(250))
        .column(TableColumn::sortable(SortKey::Username.as_param(), "User").width(200))
        .column(TableColumn::sortable(SortKey::Status.as_param(), "Status").width(100))
        .column(TableColumn::sortable(SortKey::PaymentMethod.as_param(), "Payment"))
        .column(TableColumn::sortable(SortKey::TotalAmount.as_param(), "Amount"))
        .column(TableColumn::new("action", "Action"))
        .search_placeholder("Search orders...")
        .empty_state("No order has been placed yet.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_table_columns() {
        let config = orders_table_config();
        let labels: Vec<&str> = config.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Created At",
                "Order ID",
                "User",
                "Status",
                "Payment",
                "Amount",
                "Action"
            ]
        );
        assert_eq!(config.empty_title, "No order has been placed yet.");
    }

    #[test]
    fn test_sortable_columns_map_to_sort_keys() {
        for column in orders_table_config().columns {
            assert_eq!(
                column.sortable,
                SortKey::from_param(&column.key).is_some(),
                "column {}",
                column.key
            );
        }
    }
}
