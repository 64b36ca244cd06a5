use axum::Router;
use axum::middleware;
use axum::routing::{get, post, put};

use crate::presentation::AppState;
use crate::presentation::http::handlers::listings::{
    create_listing, get_listing, list_listings, new_in, trending, update_listing,
};
use crate::presentation::http::middleware::auth::cookie_auth_middleware;

pub(crate) fn router(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(list_listings))
        .route("/trending", get(trending))
        .route("/new-in", get(new_in))
        .route("/{id}", get(get_listing));

    let protected = Router::new()
        .route("/", post(create_listing))
        .route("/{id}", put(update_listing))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            cookie_auth_middleware,
        ));

    public.merge(protected)
}
