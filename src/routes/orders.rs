use axum::{
    routing::{get, post, delete},
    Router,
};
use crate::state::AppState;
use crate::handlers::order;
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pedidos", get(order::list_orders).post(order::create_order))
        .route("/pedidos/actualizar", post(order::update_status))
        .route("/pedidos/{id}", delete(order::cancel_order))
        .route_layer(axum::middleware::from_fn(require_auth))
}
