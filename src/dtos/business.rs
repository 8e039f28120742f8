// src/dtos/business.rs
use serde::{Deserialize, Serialize};

/// Display fields printed on receipts and shown in the frontend footer.
/// Persisted as a standalone JSON document, not in the database.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessSettings {
    pub legal_name: String,
    pub tax_id: String,
    pub address: String,
    pub phone: String,
    pub payment_qr: String,
}
