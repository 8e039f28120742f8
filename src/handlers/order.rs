// src/handlers/order.rs
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::instrument;

use crate::dtos::order::{
    CreateOrderRequest, CreateOrderResponse, OrderResponse, StatusUpdatedResponse,
    UpdateStatusRequest,
};
use crate::error::AppError;
use crate::middleware::auth::AuthContext;
use crate::models::order::{cancellable, Order, SERVICE_DINE_IN, SERVICE_TAKEOUT, STATUS_REQUESTED};
use crate::pricing::{compute_cost, Catalog};
use crate::state::AppState;

/// Snapshot the menu for one pricing pass. Orders reference dishes by
/// name only, so this is the entire join.
pub(crate) async fn load_catalog(db_pool: &PgPool) -> Result<Catalog, AppError> {
    let rows = sqlx::query_as::<_, (String, Decimal)>("SELECT name, price FROM menu_items")
        .fetch_all(db_pool)
        .await?;
    Ok(Catalog::new(rows))
}

// GET /pedidos - newest first, each priced against the current menu
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let catalog = load_catalog(&state.db_pool).await?;

    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, table_number, service_type, detail, status, created_at, created_by
         FROM orders ORDER BY created_at DESC, id DESC"
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(
        orders
            .into_iter()
            .map(|order| {
                let cost = compute_cost(&order.detail, &catalog);
                OrderResponse::from_order(order, cost)
            })
            .collect(),
    ))
}

// POST /pedidos
#[instrument(skip(state, payload, auth))]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<CreateOrderResponse>), AppError> {
    let table_number = payload
        .table_number
        .ok_or_else(|| AppError::validation("table_number is required"))?;
    if table_number <= 0 {
        return Err(AppError::validation("table_number must be positive"));
    }

    let detail = payload
        .detail
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::validation("detail is required"))?;

    let service_type = match payload.service_type.as_deref() {
        None => SERVICE_DINE_IN,
        Some(s) if s == SERVICE_DINE_IN => SERVICE_DINE_IN,
        Some(s) if s == SERVICE_TAKEOUT => SERVICE_TAKEOUT,
        Some(_) => {
            return Err(AppError::validation(
                "service_type must be 'dine-in' or 'takeout'",
            ))
        }
    };

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO orders (table_number, service_type, detail, status, created_at, created_by)
         VALUES ($1, $2, $3, $4, NOW(), $5) RETURNING id"
    )
    .bind(table_number)
    .bind(service_type)
    .bind(&detail)
    .bind(STATUS_REQUESTED)
    .bind(auth.user_id)
    .fetch_one(&state.db_pool)
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse { success: true, id }),
    ))
}

// POST /pedidos/actualizar - unconditional status overwrite.
// No transition table: the kitchen screens own their stage vocabulary.
#[instrument(skip(state), fields(id = payload.id))]
pub async fn update_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<StatusUpdatedResponse>, AppError> {
    let status = payload.status.trim();
    if status.is_empty() {
        return Err(AppError::validation("status is required"));
    }

    let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
        .bind(payload.id)
        .bind(status)
        .execute(&state.db_pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Order not found"));
    }

    Ok(Json(StatusUpdatedResponse { success: true }))
}

// DELETE /pedidos/{id} - permanent, and only before the kitchen starts
#[instrument(skip(state), fields(id))]
pub async fn cancel_order(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<StatusUpdatedResponse>, AppError> {
    let mut tx = state.db_pool.begin().await?;

    let status = sqlx::query_scalar::<_, String>(
        "SELECT status FROM orders WHERE id = $1 FOR UPDATE"
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| AppError::not_found("Order not found"))?;

    if !cancellable(&status) {
        return Err(AppError::conflict(
            "Only orders still in 'requested' state can be cancelled",
        ));
    }

    sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(Json(StatusUpdatedResponse { success: true }))
}
