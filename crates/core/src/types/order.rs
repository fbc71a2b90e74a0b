//! Order records as returned by the remote orders API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Amount, OrderId};

/// The user who placed an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUser {
    /// Display name.
    pub username: String,
    /// Avatar image URL. Empty when the user has no avatar.
    #[serde(default)]
    pub img: String,
}

/// A purchase record.
///
/// Field names follow the remote API's JSON (`_id`, camelCase elsewhere).
/// Fields this panel does not display are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Record identifier.
    #[serde(rename = "_id")]
    pub id: OrderId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Owning user.
    pub user: OrderUser,
    /// Free-form status text (e.g. "pending", "delivered").
    pub order_status: String,
    /// Free-form payment method text (e.g. "card", "cash").
    pub payment_method: String,
    /// Order total.
    pub total_amount: Amount,
    /// Protected records cannot be deleted from the panel.
    #[serde(default)]
    pub is_admin: bool,
}

impl Order {
    /// Whether the delete control for this order is enabled.
    #[must_use]
    pub const fn is_deletable(&self) -> bool {
        !self.is_admin
    }
}
