use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

use aoba_web::router::build_router;
use aoba_web_schema::{orders, users};

use crate::helpers::{test_state, untouched_db, user_row};

#[tokio::test]
async fn should_return_the_flattened_record() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user_row()]])
        .append_query_results([Vec::<orders::Model>::new()])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db))).unwrap();

    let response = server.get("/api/users/1").await;
    response.assert_status(StatusCode::OK);

    let json: serde_json::Value = response.json();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Aoba Tester");
    assert_eq!(json["phone1"], "090");
    assert_eq!(json["phone2"], "1234");
    assert_eq!(json["phone3"], "5678");
    assert_eq!(json["createAt"], "2024-01-15T12:00:00.000Z");
    assert_eq!(json["updateAt"], "2024-01-15T12:00:00.000Z");
    // the stored joined form never appears in the flattened shape
    assert!(json.get("phone").is_none());
}

#[tokio::test]
async fn should_reject_a_non_numeric_id_with_400() {
    for id in ["123abc", "abc", "1.2.3"] {
        let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

        let response = server.get(&format!("/api/users/{id}")).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let json: serde_json::Value = response.json();
        assert_eq!(json["message"], "Invalid value.", "id {id:?}");
    }
}

#[tokio::test]
async fn should_return_404_for_a_numeric_id_with_no_record() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<users::Model>::new()])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db))).unwrap();

    let response = server.get("/api/users/99").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let json: serde_json::Value = response.json();
    assert_eq!(json["message"], "No results found.");
}

#[tokio::test]
async fn should_hide_persistence_failures_behind_an_opaque_500() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection refused".to_owned())])
        .into_connection();
    let server = TestServer::new(build_router(test_state(db))).unwrap();

    let response = server.get("/api/users/1").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Internal Server Error");
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn should_fail_a_fractional_id_as_an_internal_error() {
    // "1.5" coerces to a number, so it is not an invalid value; it dies at
    // the store boundary instead, before any query runs.
    let server = TestServer::new(build_router(test_state(untouched_db()))).unwrap();

    let response = server.get("/api/users/1.5").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Internal Server Error");
}
