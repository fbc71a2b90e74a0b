//! Shared helpers for admin integration tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use order_admin::api::{ApiError, OrdersApi};
use order_admin_core::{Amount, Order, OrderId, OrderUser};
use rust_decimal::Decimal;

/// Build an order created `minute` minutes after a fixed instant.
pub fn order(id: &str, minute: i64) -> Order {
    Order {
        id: OrderId::parse(id).unwrap(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
            + chrono::Duration::minutes(minute),
        user: OrderUser {
            username: format!("user-{id}"),
            img: format!("https://cdn.example.com/{id}.png"),
        },
        order_status: "pending".to_string(),
        payment_method: "card".to_string(),
        total_amount: Amount::new(Decimal::new(4250, 2)),
        is_admin: false,
    }
}

/// Build an order whose delete control is disabled.
pub fn admin_order(id: &str, minute: i64) -> Order {
    Order {
        is_admin: true,
        ..order(id, minute)
    }
}

/// Orders API that records every call.
#[derive(Default)]
pub struct RecordingApi {
    orders: Mutex<Vec<Order>>,
    calls: Mutex<Vec<String>>,
    fail_fetch: bool,
}

impl RecordingApi {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: Mutex::new(orders),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_fetch: true,
            ..Self::default()
        }
    }

    /// Calls in order, e.g. `["get", "delete a1", "get"]`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("delete"))
            .collect()
    }
}

#[async_trait]
impl OrdersApi for RecordingApi {
    async fn get_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.calls.lock().unwrap().push("get".to_string());
        if self.fail_fetch {
            return Err(ApiError::Api {
                status: 503,
                message: "orders service down".to_string(),
            });
        }
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn delete_order(&self, id: &OrderId) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("delete {id}"));
        self.orders.lock().unwrap().retain(|o| &o.id != id);
        Ok(())
    }
}
