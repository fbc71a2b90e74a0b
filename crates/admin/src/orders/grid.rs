//! Client-side grid behavior applied to a fetched snapshot.
//!
//! The orders API returns everything at once, so sorting, quick search and
//! paging all happen here on the borrowed snapshot.

use std::cmp::Ordering;

use order_admin_core::Order;

/// Rows per page.
pub const PAGE_SIZE: usize = 10;

/// Sortable grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    CreatedAt,
    Id,
    Username,
    Status,
    PaymentMethod,
    TotalAmount,
}

impl SortKey {
    /// Parse a `sort` query parameter. Keys match the column keys.
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "createdAt" => Some(Self::CreatedAt),
            "_id" => Some(Self::Id),
            "user.username" => Some(Self::Username),
            "orderStatus" => Some(Self::Status),
            "paymentMethod" => Some(Self::PaymentMethod),
            "totalAmount" => Some(Self::TotalAmount),
            _ => None,
        }
    }

    /// Column key used in query parameters.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Id => "_id",
            Self::Username => "user.username",
            Self::Status => "orderStatus",
            Self::PaymentMethod => "paymentMethod",
            Self::TotalAmount => "totalAmount",
        }
    }

    fn compare(self, a: &Order, b: &Order) -> Ordering {
        match self {
            Self::CreatedAt => a.created_at.cmp(&b.created_at),
            Self::Id => a.id.cmp(&b.id),
            Self::Username => a.user.username.cmp(&b.user.username),
            Self::Status => a.order_status.cmp(&b.order_status),
            Self::PaymentMethod => a.payment_method.cmp(&b.payment_method),
            Self::TotalAmount => a.total_amount.cmp(&b.total_amount),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parse a `dir` query parameter.
    #[must_use]
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortModel {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortModel {
    /// Build from raw query parameters, falling back to the default for
    /// missing or unknown values.
    #[must_use]
    pub fn from_params(sort: Option<&str>, dir: Option<&str>) -> Self {
        let Some(key) = sort.and_then(SortKey::from_param) else {
            return Self::default();
        };
        let direction = dir.and_then(SortDirection::from_param).unwrap_or_default();
        Self { key, direction }
    }
}

/// Grid view parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery {
    pub sort: SortModel,
    /// Quick search text; blank means no filtering.
    pub search: Option<String>,
    /// 1-based page number.
    pub page: usize,
}

impl Default for GridQuery {
    fn default() -> Self {
        Self {
            sort: SortModel::default(),
            search: None,
            page: 1,
        }
    }
}

/// One page of grid rows.
#[derive(Debug, Clone)]
pub struct GridPage<'a> {
    pub rows: Vec<&'a Order>,
    /// 1-based page actually shown after clamping.
    pub page: usize,
    /// At least 1, even with no matching rows.
    pub page_count: usize,
    /// Rows matching the quick search, across all pages.
    pub total_rows: usize,
}

impl GridPage<'_> {
    /// 1-based index of the first row on this page (0 when empty).
    #[must_use]
    pub fn first_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + 1
        }
    }

    /// 1-based index of the last row on this page (0 when empty).
    #[must_use]
    pub fn last_row(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            (self.page - 1) * PAGE_SIZE + self.rows.len()
        }
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

/// Whether an order matches every whitespace-separated search term.
///
/// Terms are matched case-insensitively against the text columns.
#[must_use]
pub fn matches_search(order: &Order, search: &str) -> bool {
    let haystacks = [
        order.id.as_str().to_lowercase(),
        order.user.username.to_lowercase(),
        order.order_status.to_lowercase(),
        order.payment_method.to_lowercase(),
        order.total_amount.to_string(),
    ];

    search
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| haystacks.iter().any(|h| h.contains(&term)))
}

/// Filter, sort and page a snapshot.
#[must_use]
pub fn apply<'a>(orders: &'a [Order], query: &GridQuery) -> GridPage<'a> {
    let search = query.search.as_deref().map(str::trim).unwrap_or_default();

    let mut rows: Vec<&Order> = orders
        .iter()
        .filter(|o| search.is_empty() || matches_search(o, search))
        .collect();

    let SortModel { key, direction } = query.sort;
    // Stable sort keeps snapshot order for ties
    rows.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });

    let total_rows = rows.len();
    let page_count = total_rows.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.clamp(1, page_count);

    let rows = rows
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    GridPage {
        rows,
        page,
        page_count,
        total_rows,
    }
}
