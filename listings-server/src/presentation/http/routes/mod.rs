use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::http::handlers::account::site_message;

pub(crate) mod account;
pub(crate) mod listings;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/api/listings", listings::router(state.clone()))
        .nest("/account", account::router(state))
        .route("/api/sitemessage", get(site_message))
}
