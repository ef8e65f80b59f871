use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use aoba_core::health::healthz;
use aoba_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{authenticate, logout},
    health::readyz,
    pages::{authed_page, shopping_page},
    rpc::get_user_query,
    user::{create_user, delete_user, get_user, list_users, update_user},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users", get(list_users))
        .route("/users", post(create_user))
        .route("/users/update", post(update_user))
        .route("/users/delete", post(delete_user))
        // REST read endpoint
        .route("/api/users/{id}", get(get_user))
        // RPC query endpoint
        .route("/api/rpc/users.getUser", post(get_user_query))
        // Auth actions
        .route("/login", post(authenticate))
        .route("/logout", post(logout))
        // Protected areas (session guard via extractor)
        .route("/authed", get(authed_page))
        .route("/shopping", get(shopping_page))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
