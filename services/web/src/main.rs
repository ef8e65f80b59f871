use sea_orm::Database;
use tracing::info;

use aoba_web::config::WebConfig;
use aoba_web::infra::auth::HttpAuthProvider;
use aoba_web::router::build_router;
use aoba_web::state::AppState;

#[tokio::main]
async fn main() {
    aoba_core::tracing::init_tracing();

    let config = WebConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let auth = HttpAuthProvider::new(config.auth_base_url.clone(), config.auth_api_key.clone());

    let state = AppState {
        db,
        auth,
        cookie_domain: config.cookie_domain.clone(),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.web_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("web service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
