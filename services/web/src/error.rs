use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Web service error variants surfaced to HTTP clients.
///
/// Validation failures are NOT errors — they come back as data in the
/// action state objects. This enum covers the remaining taxonomy: bad
/// identifiers at a boundary, absent records, and infrastructure failures.
#[derive(Debug, thiserror::Error)]
pub enum WebServiceError {
    /// A record identifier that does not coerce to a number.
    #[error("Invalid value.")]
    InvalidValue,
    /// Lookup target does not exist. Distinct from failure.
    #[error("No results found.")]
    NoResultsFound,
    /// Persistence or transport failure. The cause chain is logged and
    /// replaced with an opaque body so no internal detail leaks.
    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl WebServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidValue => "BAD_REQUEST",
            Self::NoResultsFound => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl IntoResponse for WebServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidValue => StatusCode::BAD_REQUEST,
            Self::NoResultsFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. Internal errors need the anyhow chain logged so the
        // root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL_SERVER_ERROR", "internal error");
        }
        let body = match &self {
            Self::Internal(_) => serde_json::json!({ "error": self.to_string() }),
            _ => serde_json::json!({ "message": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
