//! Session guard for the protected areas.
//!
//! Requests into `/authed` or `/shopping` without a valid provider session
//! are redirected to the login page with a `from` hint naming the area
//! they attempted, so the login flow can bounce them back.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use http::request::Parts;

use aoba_session::cookie::AOBA_SESSION;
use aoba_session::redirect::login_redirect;

use crate::domain::repository::AuthProvider as _;
use crate::domain::types::SessionUser;
use crate::state::AppState;

/// Extractor that requires a provider-backed session.
///
/// Handlers behind it receive the resolved user and the raw access token.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user: SessionUser,
    pub access_token: String,
}

impl FromRequestParts<AppState> for SessionIdentity {
    type Rejection = Response;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not
    // `async fn`), so gather everything borrowed up front and return a
    // 'static async block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let area = if parts.uri.path().starts_with("/shopping") {
            "shopping"
        } else {
            "authed"
        };
        let token = CookieJar::from_headers(&parts.headers)
            .get(AOBA_SESSION)
            .map(|cookie| cookie.value().to_owned());
        let provider = state.auth_provider();

        async move {
            let Some(token) = token else {
                return Err(to_login(area));
            };
            match provider.fetch_session_user(&token).await {
                Ok(Some(user)) => Ok(Self {
                    user,
                    access_token: token,
                }),
                Ok(None) => Err(to_login(area)),
                Err(err) => Err(err.into_response()),
            }
        }
    }
}

fn to_login(area: &str) -> Response {
    Redirect::to(&login_redirect(area)).into_response()
}
