use anyhow::Context as _;
use serde::Deserialize;

use crate::domain::repository::AuthProvider;
use crate::domain::types::{AuthAttempt, AuthDenial, ProviderSession, SessionUser};
use crate::error::WebServiceError;

const DEFAULT_SESSION_TTL: u64 = 3600;

/// HTTP client for the external authentication provider.
///
/// The provider speaks a GoTrue-compatible REST API: password grant,
/// signup, logout, and session introspection. A non-2xx response with a
/// decodable body is a domain-level denial; transport failures and
/// undecodable payloads are infrastructure errors.
#[derive(Clone)]
pub struct HttpAuthProvider {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpAuthProvider {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    async fn credential_request(
        &self,
        path: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthAttempt, WebServiceError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .context("auth provider request")?;

        let status = response.status();
        if status.is_success() {
            let payload: SessionPayload = response
                .json()
                .await
                .context("decode auth provider session")?;
            Ok(AuthAttempt::Granted(payload.into_session()))
        } else {
            let payload: DenialPayload = response
                .json()
                .await
                .context("decode auth provider denial")?;
            Ok(AuthAttempt::Denied(AuthDenial {
                status: status.as_u16(),
                message: payload.message(),
            }))
        }
    }
}

/// Successful token/signup response body. `access_token` is absent when
/// the provider defers the session (e.g. signup pending confirmation).
#[derive(Deserialize)]
struct SessionPayload {
    access_token: Option<String>,
    expires_in: Option<u64>,
}

impl SessionPayload {
    fn into_session(self) -> Option<ProviderSession> {
        self.access_token.map(|access_token| ProviderSession {
            access_token,
            expires_in: self.expires_in.unwrap_or(DEFAULT_SESSION_TTL),
        })
    }
}

/// Error response body. The provider is inconsistent about which field
/// carries the human-readable text, so take the first one present.
#[derive(Deserialize)]
struct DenialPayload {
    error_description: Option<String>,
    msg: Option<String>,
    error: Option<String>,
}

impl DenialPayload {
    fn message(self) -> String {
        self.error_description
            .or(self.msg)
            .or(self.error)
            .unwrap_or_else(|| "authentication rejected".to_owned())
    }
}

#[derive(Deserialize)]
struct UserPayload {
    id: String,
    email: String,
}

impl AuthProvider for HttpAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthAttempt, WebServiceError> {
        self.credential_request("/token?grant_type=password", email, password)
            .await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthAttempt, WebServiceError> {
        self.credential_request("/signup", email, password).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<Option<AuthDenial>, WebServiceError> {
        let response = self
            .http
            .post(format!("{}/logout", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("auth provider sign-out request")?;

        let status = response.status();
        if status.is_success() {
            return Ok(None);
        }
        let payload: DenialPayload = response
            .json()
            .await
            .context("decode auth provider denial")?;
        Ok(Some(AuthDenial {
            status: status.as_u16(),
            message: payload.message(),
        }))
    }

    async fn fetch_session_user(
        &self,
        access_token: &str,
    ) -> Result<Option<SessionUser>, WebServiceError> {
        let response = self
            .http
            .get(format!("{}/user", self.base_url))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .context("auth provider introspection request")?;

        // Any rejection means "no session" here; route protection only
        // needs a yes/no answer.
        if !response.status().is_success() {
            return Ok(None);
        }
        let payload: UserPayload = response
            .json()
            .await
            .context("decode auth provider user")?;
        Ok(Some(SessionUser {
            id: payload.id,
            email: payload.email,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_the_most_specific_denial_field() {
        let payload = DenialPayload {
            error_description: Some("invalid login credentials".into()),
            msg: Some("other".into()),
            error: None,
        };
        assert_eq!(payload.message(), "invalid login credentials");

        let payload = DenialPayload {
            error_description: None,
            msg: None,
            error: Some("invalid_grant".into()),
        };
        assert_eq!(payload.message(), "invalid_grant");

        let payload = DenialPayload {
            error_description: None,
            msg: None,
            error: None,
        };
        assert_eq!(payload.message(), "authentication rejected");
    }

    #[test]
    fn should_build_a_session_only_when_a_token_was_granted() {
        let payload = SessionPayload {
            access_token: Some("token".into()),
            expires_in: None,
        };
        let session = payload.into_session().unwrap();
        assert_eq!(session.expires_in, DEFAULT_SESSION_TTL);

        let payload = SessionPayload {
            access_token: None,
            expires_in: Some(600),
        };
        assert!(payload.into_session().is_none());
    }
}
