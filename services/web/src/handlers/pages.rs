//! Protected area pages. Both sit behind the session guard; the shopping
//! feature is a placeholder pending its real catalog.

use axum::Json;

use crate::guard::SessionIdentity;

pub async fn authed_page(identity: SessionIdentity) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "area": "authed",
        "email": identity.user.email,
    }))
}

pub async fn shopping_page(identity: SessionIdentity) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "area": "shopping",
        "email": identity.user.email,
        "message": "shopping is under construction",
    }))
}
