use axum::{routing::post, Router};
use crate::state::AppState;
use crate::handlers::user;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(user::login))
}
