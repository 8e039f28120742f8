// src/handlers/receipt.rs
use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use tracing::instrument;

use crate::billing::{normalize_receipt_type, receipt_number, split_total, TYPE_RECEIPT};
use crate::dtos::receipt::{GenerateReceiptRequest, GenerateReceiptResponse, SubmitReceiptResponse};
use super::decode_body;
use crate::error::AppError;
use crate::models::receipt::{Receipt, SUBMISSION_PENDING, SUBMISSION_SENT};
use crate::models::sale::Sale;
use crate::pricing::to_f64;
use crate::state::AppState;

// POST /caja/recibo - bill a sale (the named one, or the latest)
#[instrument(skip(state, body))]
pub async fn generate_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateReceiptResponse>, AppError> {
    let payload: GenerateReceiptRequest = decode_body(&body)?;

    let sale = match payload.sale_id {
        Some(id) => {
            sqlx::query_as::<_, Sale>(
                "SELECT id, sale_date, amount, payment_method, created_at
                 FROM sales WHERE id = $1"
            )
            .bind(id)
            .fetch_optional(&state.db_pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Sale>(
                "SELECT id, sale_date, amount, payment_method, created_at
                 FROM sales ORDER BY id DESC LIMIT 1"
            )
            .fetch_optional(&state.db_pool)
            .await?
        }
    }
    .ok_or_else(|| AppError::not_found("No sale to bill"))?;

    let (subtotal, tax) = split_total(sale.amount);
    let number = receipt_number(Utc::now().date_naive(), sale.id);
    let receipt_type =
        normalize_receipt_type(payload.receipt_type.as_deref().unwrap_or(TYPE_RECEIPT));

    let receipt_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO receipts (sale_id, number, subtotal, tax, total, receipt_type, submission_status)
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id"
    )
    .bind(sale.id)
    .bind(&number)
    .bind(subtotal)
    .bind(tax)
    .bind(sale.amount)
    .bind(receipt_type)
    .bind(SUBMISSION_PENDING)
    .fetch_one(&state.db_pool)
    .await?;

    Ok(Json(GenerateReceiptResponse {
        success: true,
        receipt_id,
        number,
        subtotal: to_f64(subtotal),
        tax: to_f64(tax),
        total: to_f64(sale.amount),
        receipt_type: receipt_type.to_string(),
    }))
}

// POST /caja/sunat - simulated submission of the latest pending receipt.
// The log row is the entire "integration"; nothing leaves the process.
#[instrument(skip(state))]
pub async fn submit_receipt(
    State(state): State<AppState>,
) -> Result<Json<SubmitReceiptResponse>, AppError> {
    let mut tx = state.db_pool.begin().await?;

    let receipt = sqlx::query_as::<_, Receipt>(
        "SELECT id, sale_id, number, subtotal, tax, total, receipt_type, submission_status, created_at
         FROM receipts WHERE submission_status = $1
         ORDER BY id DESC LIMIT 1 FOR UPDATE"
    )
    .bind(SUBMISSION_PENDING)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::not_found("No pending receipts"))?;

    sqlx::query("UPDATE receipts SET submission_status = $2 WHERE id = $1")
        .bind(receipt.id)
        .bind(SUBMISSION_SENT)
        .execute(&mut *tx)
        .await?;

    sqlx::query("INSERT INTO submission_log (receipt_id, response) VALUES ($1, $2)")
        .bind(receipt.id)
        .bind(SUBMISSION_SENT)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(number = %receipt.number, "Receipt submitted");

    Ok(Json(SubmitReceiptResponse {
        success: true,
        receipt_id: receipt.id,
    }))
}
