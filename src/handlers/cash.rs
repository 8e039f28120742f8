// src/handlers/cash.rs
use axum::{body::Bytes, extract::State, Json};
use rust_decimal::Decimal;
use sqlx::Error as SqlxError;
use tracing::instrument;

use super::decode_body;

use crate::dtos::cash::{
    CloseSessionResponse, OpenSessionRequest, OpenSessionResponse, RegisterSaleRequest,
    RegisterSaleResponse, SessionStatusResponse,
};
use crate::error::AppError;
use crate::models::cash_session::{CashSession, STATUS_CLOSED, STATUS_OPEN};
use crate::pricing::to_f64;
use crate::state::AppState;

/// Till float used when the cashier opens without naming an amount.
const DEFAULT_OPENING_AMOUNT: Decimal = Decimal::from_parts(10000, 0, 0, false, 2); // 100.00

const DEFAULT_PAYMENT_METHOD: &str = "cash";

// POST /caja/abrir
#[instrument(skip(state, body))]
pub async fn open_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OpenSessionResponse>, AppError> {
    let payload: OpenSessionRequest = decode_body(&body)?;
    // Any amount is accepted as the float; only sales are sign-checked.
    let amount = payload.amount.unwrap_or(DEFAULT_OPENING_AMOUNT);

    // Existence check and insert as one statement, so two concurrent
    // opens cannot both pass the check. The partial unique index on
    // status = 'OPEN' backstops it.
    let inserted = sqlx::query_scalar::<_, i64>(
        "INSERT INTO cash_sessions (opened_at, opening_amount, status)
         SELECT NOW(), $1, $2
         WHERE NOT EXISTS (SELECT 1 FROM cash_sessions WHERE status = $2)
         RETURNING id"
    )
    .bind(amount)
    .bind(STATUS_OPEN)
    .fetch_optional(&state.db_pool)
    .await
    .map_err(|e| match &e {
        SqlxError::Database(db_err) if db_err.code().as_deref() == Some("23505") => {
            AppError::conflict("A cash session is already open")
        }
        _ => AppError::db(e),
    })?;

    let id = inserted.ok_or_else(|| AppError::conflict("A cash session is already open"))?;

    Ok(Json(OpenSessionResponse { success: true, id }))
}

// GET /caja/estado - latest session, open or not
#[instrument(skip(state))]
pub async fn session_status(
    State(state): State<AppState>,
) -> Result<Json<SessionStatusResponse>, AppError> {
    let session = sqlx::query_as::<_, CashSession>(
        "SELECT id, opened_at, closed_at, opening_amount, closing_amount, status
         FROM cash_sessions ORDER BY id DESC LIMIT 1"
    )
    .fetch_optional(&state.db_pool)
    .await?;

    let response = match session {
        Some(s) => SessionStatusResponse {
            status: Some(s.status),
            id: Some(s.id),
            opening_amount: Some(to_f64(s.opening_amount)),
        },
        None => SessionStatusResponse {
            status: None,
            id: None,
            opening_amount: None,
        },
    };

    Ok(Json(response))
}

// POST /caja/venta
#[instrument(skip(state, body))]
pub async fn register_sale(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RegisterSaleResponse>, AppError> {
    let payload: RegisterSaleRequest = decode_body(&body)?;

    let amount = payload.amount.unwrap_or(Decimal::ZERO);
    if amount <= Decimal::ZERO {
        return Err(AppError::validation("amount must be greater than 0"));
    }

    let payment_method = payload
        .payment_method
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

    let sale_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO sales (sale_date, amount, payment_method)
         VALUES (CURRENT_DATE, $1, $2) RETURNING id"
    )
    .bind(amount)
    .bind(&payment_method)
    .fetch_one(&state.db_pool)
    .await?;

    Ok(Json(RegisterSaleResponse {
        success: true,
        sale_id,
    }))
}

// POST /caja/cerrar
#[instrument(skip(state))]
pub async fn close_session(
    State(state): State<AppState>,
) -> Result<Json<CloseSessionResponse>, AppError> {
    let mut tx = state.db_pool.begin().await?;

    let session = sqlx::query_as::<_, CashSession>(
        "SELECT id, opened_at, closed_at, opening_amount, closing_amount, status
         FROM cash_sessions WHERE status = $1
         ORDER BY id DESC LIMIT 1 FOR UPDATE"
    )
    .bind(STATUS_OPEN)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::conflict("No cash session is open"))?;

    // The window is the calendar day the session opened, not the exact
    // instant: same-day sales rung up before opening count toward the
    // till tally.
    let opened_on = session.opened_at.date_naive();
    let sales_total = sqlx::query_scalar::<_, Option<Decimal>>(
        "SELECT SUM(amount) FROM sales WHERE sale_date >= $1"
    )
    .bind(opened_on)
    .fetch_one(&mut *tx)
    .await?
    .unwrap_or(Decimal::ZERO);

    let closing_amount = session.opening_amount + sales_total;

    sqlx::query(
        "UPDATE cash_sessions SET status = $2, closed_at = NOW(), closing_amount = $3
         WHERE id = $1"
    )
    .bind(session.id)
    .bind(STATUS_CLOSED)
    .bind(closing_amount)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Json(CloseSessionResponse {
        success: true,
        closing_amount: to_f64(closing_amount),
    }))
}
