use chrono::Utc;
use tracing::info;

use aoba_domain::user::UserForm;
use aoba_domain::validate::{FieldError, coerce_number};

use crate::domain::repository::UserRepository;
use crate::domain::types::{NewUser, UserDetail, UserUpdate, UserWithOrders};
use crate::error::WebServiceError;

/// Convert a coerced form number into a record id the store can address.
///
/// Generic coercion lets fractional values through validation; the store
/// cannot address them, so they fail here as an infrastructure-shaped
/// error — the same observable outcome as the backing store throwing on a
/// non-integral key.
pub fn to_record_id(value: f64) -> Result<i32, WebServiceError> {
    if value.fract() == 0.0 && value >= i32::MIN as f64 && value <= i32::MAX as f64 {
        Ok(value as i32)
    } else {
        Err(anyhow::anyhow!("record id {value} cannot address any row").into())
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

/// Terminal states of the create pipeline. Infrastructure failures are not
/// states — they propagate on the `Err` path.
#[derive(Debug)]
pub enum CreateUserOutcome {
    /// Persisted; the UI should navigate to the new record.
    Created { id: i32, redirect_path: String },
    /// One or more rules failed. The repository was not touched; the raw
    /// form rides along so the UI can re-render it.
    Rejected {
        form: UserForm,
        errors: Vec<FieldError>,
    },
}

pub struct CreateUserAction<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CreateUserAction<R> {
    pub async fn execute(&self, form: UserForm) -> Result<CreateUserOutcome, WebServiceError> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(CreateUserOutcome::Rejected { form, errors }),
        };
        let now = Utc::now();
        let user = self
            .repo
            .create(&NewUser {
                name: valid.name,
                url: valid.url,
                phone: valid.phone,
                email: valid.email,
                create_at: now,
                update_at: now,
            })
            .await?;
        info!(id = user.id, "created user");
        Ok(CreateUserOutcome::Created {
            redirect_path: format!("/users/{}", user.id),
            id: user.id,
        })
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum UpdateUserOutcome {
    Updated { id: i32 },
    Rejected {
        form: UserForm,
        errors: Vec<FieldError>,
    },
}

pub struct UpdateUserAction<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> UpdateUserAction<R> {
    /// The id arrives as a raw form field and goes through generic numeric
    /// coercion, not integer parsing: `"1.5"` survives validation and dies
    /// at the store boundary instead.
    pub async fn execute(
        &self,
        raw_id: &str,
        form: UserForm,
    ) -> Result<UpdateUserOutcome, WebServiceError> {
        let id = coerce_number(raw_id);

        let mut errors = Vec::new();
        if id.is_nan() {
            errors.push(FieldError::new("id", "id must be a number"));
        }
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(mut field_errors) => {
                errors.append(&mut field_errors);
                return Ok(UpdateUserOutcome::Rejected { form, errors });
            }
        };
        if !errors.is_empty() {
            return Ok(UpdateUserOutcome::Rejected { form, errors });
        }

        let record_id = to_record_id(id)?;
        let now = Utc::now();
        let user = self
            .repo
            .update(&UserUpdate {
                id: record_id,
                name: valid.name,
                url: valid.url,
                phone: valid.phone,
                email: valid.email,
                create_at: now,
                update_at: now,
            })
            .await?;
        info!(id = user.id, "updated user");
        Ok(UpdateUserOutcome::Updated { id: user.id })
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

/// Success state of the delete pipeline; the UI navigates back to the
/// list. Delete has no recoverable validation state — a missing or
/// non-numeric id is an invalid-value error.
#[derive(Debug)]
pub struct DeletedUser {
    pub id: i32,
    pub redirect_path: String,
}

pub struct DeleteUserAction<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserAction<R> {
    pub async fn execute(&self, raw_id: Option<&str>) -> Result<DeletedUser, WebServiceError> {
        let raw = raw_id.ok_or(WebServiceError::InvalidValue)?;
        let id = coerce_number(raw);
        if id.is_nan() {
            return Err(WebServiceError::InvalidValue);
        }
        let record_id = to_record_id(id)?;
        let user = self.repo.delete(record_id).await?;
        info!(id = user.id, "deleted user");
        Ok(DeletedUser {
            id: user.id,
            redirect_path: "/users".to_owned(),
        })
    }
}

// ── GetUser / ListUsers ──────────────────────────────────────────────────────

pub struct GetUserAction<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetUserAction<R> {
    /// Absence is `None`, never an error.
    pub async fn execute(&self, id: i32) -> Result<Option<UserDetail>, WebServiceError> {
        let found = self.repo.find_by_id(id).await?;
        Ok(found.map(|with_orders| UserDetail::from_user(with_orders.user)))
    }
}

pub struct ListUsersAction<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersAction<R> {
    pub async fn execute(&self) -> Result<Vec<UserWithOrders>, WebServiceError> {
        self.repo.list().await
    }
}
