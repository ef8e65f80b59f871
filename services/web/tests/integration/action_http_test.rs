use axum::http::StatusCode;
use axum_test::TestServer;

use aoba_web::router::build_router;

use crate::helpers::{test_state, untouched_db};

#[tokio::test]
async fn should_return_a_422_state_for_an_invalid_create_form() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server
        .post("/users")
        .form(&[
            ("name", ""),
            ("url", "not a url"),
            ("phone1", "090"),
            ("phone2", "1234"),
            ("phone3", "5678"),
            ("email", "tester@example.com"),
        ])
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "some fields are invalid");
    // the raw form rides along for re-rendering
    assert_eq!(json["data"]["phone1"], "090");
    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "name");
    assert_eq!(errors[1]["field"], "url");
}

#[tokio::test]
async fn should_return_a_422_state_for_an_invalid_login_form() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server
        .post("/login")
        .form(&[("email", "nope"), ("password", "short"), ("login", "1")])
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let json: serde_json::Value = response.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["authError"], false);
    assert!(json["validationErrors"].as_array().unwrap().len() >= 2);
}

#[tokio::test]
async fn should_reject_a_delete_without_a_usable_id() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server.post("/users/delete").form(&[("id", "abc")]).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let json: serde_json::Value = response.json();
    assert_eq!(json["message"], "Invalid value.");
}

#[tokio::test]
async fn should_treat_an_absent_delete_id_like_a_garbage_one() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server.post("/users/delete").form(&[("other", "x")]).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
