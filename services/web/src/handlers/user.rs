use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use aoba_domain::user::UserForm;
use aoba_domain::validate::{FieldError, coerce_number};

use crate::error::WebServiceError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserAction, CreateUserOutcome, DeleteUserAction, GetUserAction, ListUsersAction,
    UpdateUserAction, UpdateUserOutcome, to_record_id,
};

// ── GET /api/users/{id} ──────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
    pub email: String,
    #[serde(rename = "createAt", serialize_with = "aoba_core::serde::to_rfc3339_ms")]
    pub create_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updateAt", serialize_with = "aoba_core::serde::to_rfc3339_ms")]
    pub update_at: chrono::DateTime<chrono::Utc>,
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, WebServiceError> {
    let numeric = coerce_number(&id);
    if numeric.is_nan() {
        return Err(WebServiceError::InvalidValue);
    }
    let record_id = to_record_id(numeric)?;

    let action = GetUserAction {
        repo: state.user_repo(),
    };
    let detail = action
        .execute(record_id)
        .await?
        .ok_or(WebServiceError::NoResultsFound)?;

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

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "orderDate", serialize_with = "aoba_core::serde::to_rfc3339_ms")]
    pub order_date: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "totalPrice")]
    pub total_price: i64,
}

/// List entry: the phone stays in its stored (joined) form here; only the
/// single-record reads split it for editing.
#[derive(Serialize)]
pub struct UserListResponse {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "createAt", serialize_with = "aoba_core::serde::to_rfc3339_ms")]
    pub create_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updateAt", serialize_with = "aoba_core::serde::to_rfc3339_ms")]
    pub update_at: chrono::DateTime<chrono::Utc>,
    pub orders: Vec<OrderResponse>,
}

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserListResponse>>, WebServiceError> {
    let action = ListUsersAction {
        repo: state.user_repo(),
    };
    let users = action.execute().await?;
    Ok(Json(
        users
            .into_iter()
            .map(|entry| UserListResponse {
                id: entry.user.id,
                name: entry.user.name,
                url: entry.user.url,
                phone: entry.user.phone,
                email: entry.user.email,
                create_at: entry.user.create_at,
                update_at: entry.user.update_at,
                orders: entry
                    .orders
                    .into_iter()
                    .map(|order| OrderResponse {
                        id: order.id,
                        order_date: order.order_date,
                        total_price: order.total_price,
                    })
                    .collect(),
            })
            .collect(),
    ))
}

// ── POST /users ──────────────────────────────────────────────────────────────

/// Structured result state the form actions hand back to the page.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserActionState {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UserForm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_path: Option<String>,
}

impl UserActionState {
    fn rejected(form: UserForm, errors: Vec<FieldError>) -> Self {
        Self {
            success: false,
            message: Some("some fields are invalid"),
            data: Some(form),
            errors: Some(errors),
            create_id: None,
            redirect_path: None,
        }
    }
}

/// Raw create form. Absent fields default to empty strings so the rule
/// set reports them instead of the deserializer rejecting the request.
#[derive(Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub phone1: String,
    #[serde(default)]
    pub phone2: String,
    #[serde(default)]
    pub phone3: String,
    #[serde(default)]
    pub email: String,
}

impl CreateUserRequest {
    fn into_form(self) -> UserForm {
        UserForm {
            name: self.name,
            url: self.url,
            phone1: self.phone1,
            phone2: self.phone2,
            phone3: self.phone3,
            email: self.email,
        }
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    Form(body): Form<CreateUserRequest>,
) -> Result<Response, WebServiceError> {
    let action = CreateUserAction {
        repo: state.user_repo(),
    };
    let outcome = action.execute(body.into_form()).await?;
    Ok(match outcome {
        CreateUserOutcome::Created { id, redirect_path } => Json(UserActionState {
            success: true,
            message: None,
            data: None,
            errors: None,
            create_id: Some(id),
            redirect_path: Some(redirect_path),
        })
        .into_response(),
        CreateUserOutcome::Rejected { form, errors } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(UserActionState::rejected(form, errors)),
        )
            .into_response(),
    })
}

// ── POST /users/update ───────────────────────────────────────────────────────

/// Raw update form. The record id travels inside the form body, as the
/// edit page submits it, and is coerced — not parsed — into a number.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub phone1: String,
    #[serde(default)]
    pub phone2: String,
    #[serde(default)]
    pub phone3: String,
    #[serde(default)]
    pub email: String,
}

pub async fn update_user(
    State(state): State<AppState>,
    Form(body): Form<UpdateUserRequest>,
) -> Result<Response, WebServiceError> {
    let action = UpdateUserAction {
        repo: state.user_repo(),
    };
    let form = UserForm {
        name: body.name,
        url: body.url,
        phone1: body.phone1,
        phone2: body.phone2,
        phone3: body.phone3,
        email: body.email,
    };
    let outcome = action.execute(&body.id, form).await?;
    Ok(match outcome {
        UpdateUserOutcome::Updated { .. } => Json(UserActionState {
            success: true,
            message: None,
            data: None,
            errors: None,
            create_id: None,
            redirect_path: None,
        })
        .into_response(),
        UpdateUserOutcome::Rejected { form, errors } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(UserActionState::rejected(form, errors)),
        )
            .into_response(),
    })
}

// ── POST /users/delete ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteUserRequest {
    pub id: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserState {
    pub success: bool,
    pub redirect_path: String,
}

pub async fn delete_user(
    State(state): State<AppState>,
    Form(body): Form<DeleteUserRequest>,
) -> Result<Json<DeleteUserState>, WebServiceError> {
    let action = DeleteUserAction {
        repo: state.user_repo(),
    };
    let deleted = action.execute(body.id.as_deref()).await?;
    Ok(Json(DeleteUserState {
        success: true,
        redirect_path: deleted.redirect_path,
    }))
}
