// src/models/cash_session.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

pub const STATUS_OPEN: &str = "OPEN";
pub const STATUS_CLOSED: &str = "CLOSED";

#[derive(Debug, FromRow)]
pub struct CashSession {
    pub id: i64,
    pub opened_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub opening_amount: Decimal,
    pub closing_amount: Option<Decimal>,
    pub status: String,
}
