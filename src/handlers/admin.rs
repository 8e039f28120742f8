// src/handlers/admin.rs
use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::dtos::admin::{CountPoint, OrderReportQuery, RecentOrderRow, SalesPoint, StatsResponse};
use crate::dtos::order::OrderResponse;
use crate::error::AppError;
use crate::handlers::order::load_catalog;
use crate::models::order::{Order, STATUS_REQUESTED};
use crate::pricing::{compute_cost, to_f64};
use crate::state::AppState;

// GET /admin/stats - dashboard headline numbers
#[instrument(skip(state))]
pub async fn stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let orders_today = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM orders WHERE created_at::DATE = CURRENT_DATE"
    )
    .fetch_one(&state.db_pool)
    .await?;

    let sales_today = sqlx::query_scalar::<_, Option<Decimal>>(
        "SELECT SUM(amount) FROM sales WHERE sale_date = CURRENT_DATE"
    )
    .fetch_one(&state.db_pool)
    .await?
    .unwrap_or(Decimal::ZERO);

    let total_users = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&state.db_pool)
        .await?;

    let pending_orders = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM orders WHERE LOWER(status) = $1"
    )
    .bind(STATUS_REQUESTED)
    .fetch_one(&state.db_pool)
    .await?;

    Ok(Json(StatsResponse {
        orders_today,
        sales_today: to_f64(sales_today),
        total_users,
        pending_orders,
    }))
}

// GET /admin/recent - latest 10 orders for the dashboard card
#[instrument(skip(state))]
pub async fn recent_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<RecentOrderRow>>, AppError> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT id, table_number, service_type, detail, status, created_at, created_by
         FROM orders ORDER BY created_at DESC, id DESC LIMIT 10"
    )
    .fetch_all(&state.db_pool)
    .await?;

    Ok(Json(
        orders
            .into_iter()
            .map(|o| RecentOrderRow {
                id: o.id,
                customer: format!("Table {}", o.table_number),
                date: o.created_at,
                total: None,
                status: o.status,
            })
            .collect(),
    ))
}

fn series_label_format(period: &str) -> Result<&'static str, AppError> {
    match period {
        "daily" => Ok("YYYY-MM-DD"),
        "monthly" => Ok("YYYY-MM"),
        "yearly" => Ok("YYYY"),
        _ => Err(AppError::not_found("Unknown report period")),
    }
}

// GET /admin/sales/{period} - summed amounts grouped by day/month/year
#[instrument(skip(state))]
pub async fn sales_series(
    Path(period): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<SalesPoint>>, AppError> {
    let fmt = series_label_format(&period)?;
    let sql = format!(
        "SELECT to_char(sale_date, '{fmt}') AS label, SUM(amount) AS value
         FROM sales GROUP BY 1 ORDER BY 1"
    );

    let rows = sqlx::query_as::<_, (String, Decimal)>(&sql)
        .fetch_all(&state.db_pool)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(label, value)| SalesPoint {
                label,
                value: to_f64(value),
            })
            .collect(),
    ))
}

// GET /admin/orders/{period} - order counts grouped by day/month/year
#[instrument(skip(state))]
pub async fn orders_series(
    Path(period): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<CountPoint>>, AppError> {
    let fmt = series_label_format(&period)?;
    let sql = format!(
        "SELECT to_char(created_at, '{fmt}') AS label, COUNT(*) AS value
         FROM orders GROUP BY 1 ORDER BY 1"
    );

    let rows = sqlx::query_as::<_, (String, i64)>(&sql)
        .fetch_all(&state.db_pool)
        .await?;

    Ok(Json(
        rows.into_iter()
            .map(|(label, value)| CountPoint { label, value })
            .collect(),
    ))
}

// GET /admin/reports/orders - filterable report; cost is re-derived from
// the current menu, so the min/max filters run after the query.
#[instrument(skip(state))]
pub async fn order_report(
    State(state): State<AppState>,
    Query(params): Query<OrderReportQuery>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let mut query_str = String::from(
        "SELECT id, table_number, service_type, detail, status, created_at, created_by
         FROM orders WHERE 1=1"
    );

    let mut param_num = 0;
    if params.status.is_some() {
        param_num += 1;
        query_str.push_str(&format!(" AND LOWER(status) = LOWER(${param_num})"));
    }
    if params.from.is_some() {
        param_num += 1;
        query_str.push_str(&format!(" AND created_at::DATE >= ${param_num}"));
    }
    if params.to.is_some() {
        param_num += 1;
        query_str.push_str(&format!(" AND created_at::DATE <= ${param_num}"));
    }
    query_str.push_str(" ORDER BY created_at DESC, id DESC");

    let mut query = sqlx::query_as::<_, Order>(&query_str);
    if let Some(status) = &params.status {
        query = query.bind(status);
    }
    if let Some(from) = params.from {
        query = query.bind(from);
    }
    if let Some(to) = params.to {
        query = query.bind(to);
    }

    let orders = query.fetch_all(&state.db_pool).await?;
    let catalog = load_catalog(&state.db_pool).await?;

    let rows = orders
        .into_iter()
        .filter_map(|order| {
            let cost = compute_cost(&order.detail, &catalog);
            if let Some(min) = params.min_cost {
                if cost < min {
                    return None;
                }
            }
            if let Some(max) = params.max_cost {
                if cost > max {
                    return None;
                }
            }
            Some(OrderResponse::from_order(order, cost))
        })
        .collect();

    Ok(Json(rows))
}
