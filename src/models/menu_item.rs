// src/models/menu_item.rs
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Dish names are the join key from order detail text; there is no
/// foreign key from orders into this table.
#[derive(Debug, FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub category: String,
    pub created_at: Option<DateTime<Utc>>,
}
