// src/models/sale.rs
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Immutable once inserted.
#[derive(Debug, FromRow)]
pub struct Sale {
    pub id: i64,
    pub sale_date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
    pub created_at: Option<DateTime<Utc>>,
}
