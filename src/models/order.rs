// src/models/order.rs
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const STATUS_REQUESTED: &str = "requested";

pub const SERVICE_DINE_IN: &str = "dine-in";
pub const SERVICE_TAKEOUT: &str = "takeout";

#[derive(Debug, FromRow)]
pub struct Order {
    pub id: i64,
    pub table_number: i32,
    pub service_type: String,
    pub detail: String,
    /// Free-form. Kitchen screens write whatever stage label they use;
    /// only the cancel guard inspects this (case-insensitively).
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<i64>,
}

/// An order can be cancelled only while nobody has touched its status,
/// whatever casing the client wrote it back with.
pub fn cancellable(status: &str) -> bool {
    status.eq_ignore_ascii_case(STATUS_REQUESTED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_guard_ignores_case() {
        assert!(cancellable("requested"));
        assert!(cancellable("Requested"));
        assert!(cancellable("REQUESTED"));
    }

    #[test]
    fn cancel_guard_rejects_other_states() {
        assert!(!cancellable("preparing"));
        assert!(!cancellable("delivered"));
        assert!(!cancellable(""));
        assert!(!cancellable("requested "));
    }
}
