use axum::Router;
use axum::middleware;
use axum::routing::{get, put};

use crate::presentation::AppState;
use crate::presentation::http::handlers::account::{me, update_saved};
use crate::presentation::http::middleware::auth::cookie_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/saved", put(update_saved))
        .layer(middleware::from_fn_with_state(state, cookie_auth_middleware))
}
