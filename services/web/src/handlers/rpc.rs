//! Single-query RPC endpoint: `users.getUser`.
//!
//! Mirrors the typed-client contract: raw JSON input, schema-checked at
//! the boundary, structured error codes out. Unlike the REST surface this
//! endpoint exposes the underlying error message on internal failures.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::WebServiceError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::user::{GetUserAction, to_record_id};

/// Structured RPC error: a named code plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: &'static str,
    pub message: String,
}

impl RpcError {
    fn status(&self) -> StatusCode {
        match self.code {
            "BAD_REQUEST" => StatusCode::BAD_REQUEST,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RpcError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = self.code, message = %self.message, "rpc internal error");
        }
        (status, Json(serde_json::json!({ "error": self }))).into_response()
    }
}

/// Recode a service error for the RPC surface. Internal failures keep the
/// source error's message; every other structured error passes through
/// with its own code, unrecoded.
fn rpc_error_from(err: WebServiceError) -> RpcError {
    match err {
        WebServiceError::Internal(source) => RpcError {
            code: "INTERNAL_SERVER_ERROR",
            message: source.to_string(),
        },
        other => RpcError {
            code: other.kind(),
            message: other.to_string(),
        },
    }
}

// ── POST /api/rpc/users.getUser ──────────────────────────────────────────────

pub async fn get_user_query(
    State(state): State<AppState>,
    Json(input): Json<serde_json::Value>,
) -> Result<Json<UserResponse>, RpcError> {
    // boundary schema: the input must be a JSON number
    let Some(id) = input.as_f64() else {
        return Err(RpcError {
            code: "BAD_REQUEST",
            message: "input must be a number".to_owned(),
        });
    };
    let record_id = to_record_id(id).map_err(rpc_error_from)?;

    let action = GetUserAction {
        repo: state.user_repo(),
    };
    let detail = action
        .execute(record_id)
        .await
        .map_err(rpc_error_from)?
        .ok_or(RpcError {
            code: "NOT_FOUND",
            message: "user not found".to_owned(),
        })?;

    Ok(Json(UserResponse {
        id: detail.id,
        name: detail.name,
        url: detail.url,
        phone1: detail.phone1,
        phone2: detail.phone2,
        phone3: detail.phone3,
        email: detail.email,
        create_at: detail.create_at,
        update_at: detail.update_at,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_the_source_message_for_internal_errors() {
        let err = WebServiceError::Internal(anyhow::anyhow!("find user by id"));
        let rpc = rpc_error_from(err);
        assert_eq!(rpc.code, "INTERNAL_SERVER_ERROR");
        assert_eq!(rpc.message, "find user by id");
    }

    #[test]
    fn should_pass_other_structured_errors_through_unrecoded() {
        let rpc = rpc_error_from(WebServiceError::InvalidValue);
        assert_eq!(rpc.code, "BAD_REQUEST");
        assert_eq!(rpc.message, "Invalid value.");

        let rpc = rpc_error_from(WebServiceError::NoResultsFound);
        assert_eq!(rpc.code, "NOT_FOUND");
    }

    #[test]
    fn should_map_codes_to_statuses() {
        let bad = RpcError {
            code: "BAD_REQUEST",
            message: String::new(),
        };
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        let missing = RpcError {
            code: "NOT_FOUND",
            message: String::new(),
        };
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let internal = RpcError {
            code: "INTERNAL_SERVER_ERROR",
            message: String::new(),
        };
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
