use axum::http::StatusCode;
use axum_test::TestServer;

use aoba_web::router::build_router;

use crate::helpers::{test_state, untouched_db};

#[tokio::test]
async fn should_redirect_an_anonymous_authed_request_to_login() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server.get("/authed").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/login?from=authed"
    );
}

#[tokio::test]
async fn should_redirect_an_anonymous_shopping_request_with_its_own_hint() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server.get("/shopping").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "/login?from=shopping"
    );
}
