use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use aoba_domain::auth::AuthForm;
use aoba_domain::validate::FieldError;
use aoba_session::cookie::{AOBA_SESSION, clear_session_cookie, set_session_cookie};

use crate::error::WebServiceError;
use crate::state::AppState;
use crate::usecase::auth::{AuthOutcome, AuthenticateAction, LogoutAction};

// ── POST /login ──────────────────────────────────────────────────────────────

/// Raw login/signup form. `login` and `signup` are the submit buttons; a
/// button that was pressed arrives as a present field, so intent is
/// presence, not value.
#[derive(Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub login: Option<String>,
    pub signup: Option<String>,
    pub from: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthActionState {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<FieldError>>,
    pub auth_error: bool,
}

pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(body): Form<AuthRequest>,
) -> Result<Response, WebServiceError> {
    let action = AuthenticateAction {
        provider: state.auth_provider(),
    };
    let outcome = action
        .execute(AuthForm {
            email: body.email,
            password: body.password,
            login: body.login.is_some(),
            signup: body.signup.is_some(),
            from: body.from,
        })
        .await?;

    Ok(match outcome {
        AuthOutcome::Authenticated {
            session,
            redirect_path,
        } => {
            let body = AuthActionState {
                success: true,
                message: None,
                redirect_path: Some(redirect_path.to_owned()),
                validation_errors: None,
                auth_error: false,
            };
            match session {
                Some(session) => {
                    let jar =
                        set_session_cookie(jar, session.access_token, state.cookie_domain.clone());
                    (jar, Json(body)).into_response()
                }
                None => Json(body).into_response(),
            }
        }
        AuthOutcome::Rejected { errors } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(AuthActionState {
                success: false,
                message: Some("some fields are invalid".to_owned()),
                redirect_path: None,
                validation_errors: Some(errors),
                auth_error: false,
            }),
        )
            .into_response(),
        AuthOutcome::Denied { message } => (
            StatusCode::UNAUTHORIZED,
            Json(AuthActionState {
                success: false,
                message: Some(message),
                redirect_path: None,
                validation_errors: None,
                auth_error: true,
            }),
        )
            .into_response(),
    })
}

// ── POST /logout ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutState {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_path: Option<String>,
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, WebServiceError> {
    let token = jar
        .get(AOBA_SESSION)
        .map(|cookie| cookie.value().to_owned())
        .unwrap_or_default();

    let action = LogoutAction {
        provider: state.auth_provider(),
    };
    let outcome = action.execute(&token).await?;

    let body = LogoutState {
        success: outcome.success,
        message: outcome.message,
        redirect_path: outcome.redirect_path,
    };
    Ok(if body.success {
        let jar = clear_session_cookie(jar, state.cookie_domain.clone());
        (jar, Json(body)).into_response()
    } else {
        Json(body).into_response()
    })
}
