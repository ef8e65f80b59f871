use sea_orm::DatabaseConnection;

use crate::infra::auth::HttpAuthProvider;
use crate::infra::db::DbUserRepository;

/// Shared application state passed to every handler via axum `State`.
///
/// Both the database connection and the auth provider's HTTP client are
/// created once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: HttpAuthProvider,
    pub cookie_domain: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn auth_provider(&self) -> HttpAuthProvider {
        self.auth.clone()
    }
}
