// src/dtos/admin.rs
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct StatsResponse {
    pub orders_today: i64,
    pub sales_today: f64,
    pub total_users: i64,
    pub pending_orders: i64,
}

#[derive(Serialize)]
pub struct RecentOrderRow {
    pub id: i64,
    pub customer: String,
    pub date: DateTime<Utc>,
    /// Always null here; the dashboard card doesn't price orders.
    pub total: Option<f64>,
    pub status: String,
}

#[derive(Serialize)]
pub struct SalesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Serialize)]
pub struct CountPoint {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Deserialize)]
pub struct OrderReportQuery {
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub min_cost: Option<Decimal>,
    pub max_cost: Option<Decimal>,
}
