use axum::{
    routing::{get, post},
    Router,
};
use crate::state::AppState;
use crate::handlers::{cash, receipt};
use crate::middleware::auth::require_auth;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/caja/abrir", post(cash::open_session))
        .route("/caja/cerrar", post(cash::close_session))
        .route("/caja/estado", get(cash::session_status))
        .route("/caja/venta", post(cash::register_sale))
        .route("/caja/recibo", post(receipt::generate_receipt))
        .route("/caja/sunat", post(receipt::submit_receipt))
        .route_layer(axum::middleware::from_fn(require_auth))
}
