// src/dtos/cash.rs
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct OpenSessionRequest {
    pub amount: Option<Decimal>,
}

#[derive(Serialize)]
pub struct OpenSessionResponse {
    pub success: bool,
    pub id: i64,
}

#[derive(Serialize)]
pub struct SessionStatusResponse {
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opening_amount: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterSaleRequest {
    pub amount: Option<Decimal>,
    pub payment_method: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterSaleResponse {
    pub success: bool,
    pub sale_id: i64,
}

#[derive(Serialize)]
pub struct CloseSessionResponse {
    pub success: bool,
    pub closing_amount: f64,
}
