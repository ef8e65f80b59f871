use chrono::{TimeZone, Utc};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};

use aoba_web::infra::auth::HttpAuthProvider;
use aoba_web::state::AppState;
use aoba_web_schema::users;

/// State over a mocked database. The auth provider points at a dead host;
/// tests that use it never let a request reach the network.
pub fn test_state(db: DatabaseConnection) -> AppState {
    AppState {
        db,
        auth: HttpAuthProvider::new("http://auth.invalid".to_owned(), "test-key".to_owned()),
        cookie_domain: "example.com".to_owned(),
    }
}

/// A database that expects no queries at all.
pub fn untouched_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

pub fn user_row() -> users::Model {
    users::Model {
        id: 1,
        name: "Aoba Tester".to_owned(),
        url: "https://example.com".to_owned(),
        phone: "090-1234-5678".to_owned(),
        email: "tester@example.com".to_owned(),
        create_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
        update_at: Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap(),
    }
}
