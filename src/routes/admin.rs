use axum::{
    routing::{delete, get},
    middleware,
    Router,
};
use crate::state::AppState;
use crate::handlers::{admin, business, user};
use crate::middleware::auth::{require_admin, require_auth};

pub fn routes() -> Router<AppState> {
    // require_auth must run first so require_admin sees the AuthContext;
    // the outermost layer is the one added last.
    Router::new()
        .route("/admin/stats", get(admin::stats))
        .route("/admin/recent", get(admin::recent_orders))
        .route("/admin/sales/{period}", get(admin::sales_series))
        .route("/admin/orders/{period}", get(admin::orders_series))
        .route("/admin/reports/orders", get(admin::order_report))
        .route("/admin/users", get(user::list_users).post(user::create_user))
        .route("/admin/users/{id}", delete(user::delete_user))
        .route("/admin/business", get(business::get_settings).put(business::update_settings))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn(require_auth))
}
