// src/models/receipt.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

pub const SUBMISSION_PENDING: &str = "PENDING";
pub const SUBMISSION_SENT: &str = "SENT";

#[derive(Debug, FromRow)]
pub struct Receipt {
    pub id: i64,
    pub sale_id: i64,
    pub number: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub receipt_type: String,
    pub submission_status: String,
    pub created_at: Option<DateTime<Utc>>,
}
