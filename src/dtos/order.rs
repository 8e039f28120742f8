// src/dtos/order.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::order::Order;
use crate::pricing::to_f64;

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub table_number: Option<i32>,
    pub detail: Option<String>,
    pub service_type: Option<String>,
}

#[derive(Serialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: i64,
    pub status: String,
}

#[derive(Serialize)]
pub struct StatusUpdatedResponse {
    pub success: bool,
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub table_number: i32,
    pub service_type: String,
    pub detail: String,
    pub status: String,
    /// Derived against the current menu at read time, never stored.
    pub cost: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderResponse {
    pub fn from_order(order: Order, cost: Decimal) -> Self {
        Self {
            id: order.id,
            table_number: order.table_number,
            service_type: order.service_type,
            detail: order.detail,
            status: order.status,
            cost: to_f64(cost),
            created_at: order.created_at,
        }
    }
}
