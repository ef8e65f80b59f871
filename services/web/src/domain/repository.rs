#![allow(async_fn_in_trait)]

use crate::domain::types::{
    AuthAttempt, AuthDenial, NewUser, SessionUser, User, UserUpdate, UserWithOrders,
};
use crate::error::WebServiceError;

/// Repository for user records. Every failure is a persistence-unavailable
/// condition and propagates; absence is `None`, never an error.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserWithOrders>, WebServiceError>;

    /// All users in ascending id order, each with its orders.
    async fn list(&self) -> Result<Vec<UserWithOrders>, WebServiceError>;

    /// Persist a new user; the store assigns the id.
    async fn create(&self, user: &NewUser) -> Result<User, WebServiceError>;

    /// Replace every field of an existing user. Fails when the id does not
    /// match a row.
    async fn update(&self, user: &UserUpdate) -> Result<User, WebServiceError>;

    /// Remove a user and return the removed record. Fails when the id does
    /// not match a row.
    async fn delete(&self, id: i32) -> Result<User, WebServiceError>;
}

/// Port to the external authentication provider. Credentials are never
/// persisted locally; this service only relays them.
///
/// Calls distinguish the provider saying "no" (a domain-level
/// [`AuthDenial`] inside an `Ok`) from the provider being unreachable
/// (`Err`, infrastructure).
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthAttempt, WebServiceError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthAttempt, WebServiceError>;

    /// Revoke a session. `None` on success, the provider's denial otherwise.
    async fn sign_out(&self, access_token: &str) -> Result<Option<AuthDenial>, WebServiceError>;

    /// Resolve the user behind a session token. `None` when the token is
    /// missing, expired, or rejected.
    async fn fetch_session_user(
        &self,
        access_token: &str,
    ) -> Result<Option<SessionUser>, WebServiceError>;
}
