use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness only. Readiness is owned by the
/// service, which knows what backing stores it depends on.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn healthz_returns_200() {
        assert_eq!(healthz().await, StatusCode::OK);
    }
}
