use chrono::{DateTime, Utc};

use aoba_domain::phone::PhoneSegments;

/// A stored user row. `phone` carries the three segments joined with `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub phone: String,
    pub email: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

/// An order row, read only through the owning user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub order_date: DateTime<Utc>,
    pub total_price: i64,
}

/// A user with its orders loaded, as the list and detail reads return it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithOrders {
    pub user: User,
    pub orders: Vec<Order>,
}

/// Fields for a user the store has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub url: String,
    pub phone: String,
    pub email: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

/// A full replacement record for an existing user. Every field except the
/// id is overwritten, timestamps included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub phone: String,
    pub email: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

/// Read model for a single user with the stored phone split back into its
/// three edit segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetail {
    pub id: i32,
    pub name: String,
    pub url: String,
    pub phone1: String,
    pub phone2: String,
    pub phone3: String,
    pub email: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl UserDetail {
    pub fn from_user(user: User) -> Self {
        let segments = PhoneSegments::split(&user.phone);
        Self {
            id: user.id,
            name: user.name,
            url: user.url,
            phone1: segments.area,
            phone2: segments.exchange,
            phone3: segments.subscriber,
            email: user.email,
            create_at: user.create_at,
            update_at: user.update_at,
        }
    }
}

// ── Auth provider types ──────────────────────────────────────────────────────

/// Session granted by the auth provider on a successful sign-in/sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    pub access_token: String,
    /// Token lifetime in seconds, as reported by the provider.
    pub expires_in: u64,
}

/// Domain-level rejection the provider reports inside a successful call —
/// bad credentials, duplicate signup, and the like. Not an exception.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthDenial {
    pub status: u16,
    pub message: String,
}

impl AuthDenial {
    /// The display form shown to the user: `"{status}: {message}"`.
    pub fn display(&self) -> String {
        format!("{}: {}", self.status, self.message)
    }
}

/// Outcome of a provider sign-in/sign-up call that completed without an
/// infrastructure failure. Sign-up may be granted without a session when
/// the provider defers to email confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAttempt {
    Granted(Option<ProviderSession>),
    Denied(AuthDenial),
}

/// The user behind a session token, per provider introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn should_split_the_stored_phone_into_detail_segments() {
        let user = User {
            id: 1,
            name: "Aoba Tester".into(),
            url: "https://example.com".into(),
            phone: "090-1234-5678".into(),
            email: "tester@example.com".into(),
            create_at: Utc::now(),
            update_at: Utc::now(),
        };
        let detail = UserDetail::from_user(user);
        assert_eq!(detail.phone1, "090");
        assert_eq!(detail.phone2, "1234");
        assert_eq!(detail.phone3, "5678");
    }

    #[test]
    fn should_compose_the_denial_display_message() {
        let denial = AuthDenial {
            status: 400,
            message: "invalid login credentials".into(),
        };
        assert_eq!(denial.display(), "400: invalid login credentials");
    }
}
