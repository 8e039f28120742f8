use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use crate::state::AppState;
use crate::handlers::menu;
use crate::middleware::auth::{require_admin, require_auth};

/// Image uploads cap (5MB)
const MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

pub fn routes() -> Router<AppState> {
    // Anyone can read the menu; editing it is an admin concern.
    // require_auth must run first so require_admin sees the AuthContext;
    // the outermost layer is the one added last.
    let open = Router::new()
        .route("/menu", get(menu::list_menu));

    let protected = Router::new()
        .route("/menu", post(menu::create_menu_item))
        .route("/menu/{id}", put(menu::update_menu_item).delete(menu::delete_menu_item))
        .route_layer(axum::middleware::from_fn(require_admin))
        .route_layer(axum::middleware::from_fn(require_auth))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE));

    open.merge(protected)
}
