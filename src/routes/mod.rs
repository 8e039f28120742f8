pub mod admin;
pub mod cash;
pub mod menu;
pub mod orders;
pub mod users;

use axum::Router;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(menu::routes())
        .merge(orders::routes())
        .merge(cash::routes())
        .merge(users::routes())
        .merge(admin::routes())
}
