//! Order list component state.

use order_admin_core::{Order, OrderId};
use thiserror::Error;

/// Errors raised when selecting an order for deletion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderListError {
    /// The id is not part of the current snapshot.
    #[error("order {0} is not in the current list")]
    NotFound(OrderId),

    /// The order is flagged as protected and its delete control is disabled.
    #[error("order {0} is protected and cannot be deleted")]
    Protected(OrderId),
}

/// Delete confirmation flow.
///
/// ```text
/// Idle --request_delete(id)--> PendingConfirm(id)
/// PendingConfirm --cancel_delete--> Idle           (no request issued)
/// PendingConfirm --take_pending--> Idle            (caller deletes, then re-fetches)
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    PendingConfirm(OrderId),
}

/// State owned by the order list view.
///
/// `orders` is always the last snapshot handed to [`OrderList::replace`];
/// nothing here mutates it locally.
#[derive(Debug, Clone, Default)]
pub struct OrderList {
    orders: Vec<Order>,
    delete_flow: DeleteFlow,
}

impl OrderList {
    /// Create an empty list in the `Idle` state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot with a freshly fetched one.
    pub fn replace(&mut self, orders: Vec<Order>) {
        self.orders = orders;
    }

    /// The current snapshot.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Whether the snapshot has no orders (drives the empty-state notice).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Look up an order in the snapshot.
    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| &o.id == id)
    }

    /// Current delete flow state.
    #[must_use]
    pub const fn delete_flow(&self) -> &DeleteFlow {
        &self.delete_flow
    }

    /// The order awaiting confirmation, if any.
    #[must_use]
    pub const fn pending_delete(&self) -> Option<&OrderId> {
        match &self.delete_flow {
            DeleteFlow::PendingConfirm(id) => Some(id),
            DeleteFlow::Idle => None,
        }
    }

    /// Whether the confirmation dialog is open.
    #[must_use]
    pub const fn is_dialog_open(&self) -> bool {
        matches!(self.delete_flow, DeleteFlow::PendingConfirm(_))
    }

    /// Select an order for deletion and open the dialog.
    ///
    /// Selecting while another order is pending replaces the selection.
    ///
    /// # Errors
    ///
    /// Returns [`OrderListError::NotFound`] if the order is not in the
    /// snapshot and [`OrderListError::Protected`] if its delete control is
    /// disabled. The flow is left unchanged in both cases.
    pub fn request_delete(&mut self, id: &OrderId) -> Result<(), OrderListError> {
        let order = self
            .find(id)
            .ok_or_else(|| OrderListError::NotFound(id.clone()))?;

        if !order.is_deletable() {
            return Err(OrderListError::Protected(id.clone()));
        }

        self.delete_flow = DeleteFlow::PendingConfirm(id.clone());
        Ok(())
    }

    /// Close the dialog without deleting anything.
    pub fn cancel_delete(&mut self) {
        self.delete_flow = DeleteFlow::Idle;
    }

    /// Close the dialog and hand back the confirmed id.
    ///
    /// Returns `None` when nothing was pending.
    pub fn take_pending(&mut self) -> Option<OrderId> {
        match std::mem::take(&mut self.delete_flow) {
            DeleteFlow::PendingConfirm(id) => Some(id),
            DeleteFlow::Idle => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::fake::{admin_order, order};

    fn id(s: &str) -> OrderId {
        OrderId::parse(s).unwrap()
    }

    fn list() -> OrderList {
        let mut list = OrderList::new();
        list.replace(vec![order("a1", 0), order("b2", 1), admin_order("c3", 2)]);
        list
    }

    #[test]
    fn test_starts_idle_and_empty() {
        let list = OrderList::new();
        assert!(list.is_empty());
        assert_eq!(list.delete_flow(), &DeleteFlow::Idle);
        assert!(!list.is_dialog_open());
    }

    #[test]
    fn test_request_delete_opens_dialog() {
        let mut list = list();
        list.request_delete(&id("b2")).unwrap();

        assert!(list.is_dialog_open());
        assert_eq!(list.pending_delete(), Some(&id("b2")));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut list = list();
        list.request_delete(&id("a1")).unwrap();
        list.cancel_delete();

        assert_eq!(list.delete_flow(), &DeleteFlow::Idle);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_take_pending_closes_dialog() {
        let mut list = list();
        list.request_delete(&id("a1")).unwrap();

        assert_eq!(list.take_pending(), Some(id("a1")));
        assert!(!list.is_dialog_open());
        assert_eq!(list.take_pending(), None);
        // Snapshot untouched until the next fetch
        assert!(list.find(&id("a1")).is_some());
    }

    #[test]
    fn test_protected_order_rejected() {
        let mut list = list();
        assert_eq!(
            list.request_delete(&id("c3")),
            Err(OrderListError::Protected(id("c3")))
        );
        assert_eq!(list.delete_flow(), &DeleteFlow::Idle);
    }

    #[test]
    fn test_unknown_order_rejected() {
        let mut list = list();
        list.request_delete(&id("a1")).unwrap();
        assert_eq!(
            list.request_delete(&id("zz")),
            Err(OrderListError::NotFound(id("zz")))
        );
        // Previous selection survives a rejected request
        assert_eq!(list.pending_delete(), Some(&id("a1")));
    }

    #[test]
    fn test_replace_keeps_flow() {
        let mut list = list();
        list.request_delete(&id("a1")).unwrap();
        list.replace(vec![order("d4", 5)]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.pending_delete(), Some(&id("a1")));
    }
}
