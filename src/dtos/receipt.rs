// src/dtos/receipt.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct GenerateReceiptRequest {
    pub sale_id: Option<i64>,
    pub receipt_type: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateReceiptResponse {
    pub success: bool,
    pub receipt_id: i64,
    pub number: String,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub receipt_type: String,
}

#[derive(Serialize)]
pub struct SubmitReceiptResponse {
    pub success: bool,
    pub receipt_id: i64,
}
