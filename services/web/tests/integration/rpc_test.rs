use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use aoba_web::router::build_router;
use aoba_web_schema::{orders, users};

use crate::helpers::{test_state, untouched_db, user_row};

#[tokio::test]
async fn should_answer_the_query_with_the_flattened_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_row()]])
        .append_query_results([Vec::<orders::Model>::new()])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db))).unwrap();

    let response = server
        .post("/api/rpc/users.getUser")
        .json(&serde_json::json!(1))
        .await;
    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    assert_eq!(json["id"], 1);
    assert_eq!(json["phone1"], "090");
    assert_eq!(json["email"], "tester@example.com");
}

#[tokio::test]
async fn should_reject_non_numeric_input_at_the_boundary() {
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    for input in [
        serde_json::json!("1"),
        serde_json::json!(true),
        serde_json::json!({ "id": 1 }),
    ] {
        let response = server.post("/api/rpc/users.getUser").json(&input).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let json: serde_json::Value = response.json();
        assert_eq!(json["error"]["code"], "BAD_REQUEST", "input {input}");
    }
}

#[tokio::test]
async fn should_code_a_missing_user_as_not_found_never_internal() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db))).unwrap();

    let response = server
        .post("/api/rpc/users.getUser")
        .json(&serde_json::json!(99))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json: serde_json::Value = response.json();
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "user not found");
}

#[tokio::test]
async fn should_surface_the_source_message_on_internal_failures() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".to_owned())])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db))).unwrap();

    let response = server
        .post("/api/rpc/users.getUser")
        .json(&serde_json::json!(1))
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = response.json();
    assert_eq!(json["error"]["code"], "INTERNAL_SERVER_ERROR");
    // this surface keeps the failing operation's message, unlike REST
    assert_eq!(json["error"]["message"], "find user by id");
}
