use tracing::{error, info};

use aoba_domain::auth::AuthForm;
use aoba_domain::validate::FieldError;
use aoba_session::redirect::login_redirect;

use crate::domain::repository::AuthProvider;
use crate::domain::types::{AuthAttempt, ProviderSession};
use crate::error::WebServiceError;

// ── Authenticate ─────────────────────────────────────────────────────────────

/// Terminal states of the login/signup pipeline. Infrastructure failures
/// propagate on the `Err` path instead.
#[derive(Debug)]
pub enum AuthOutcome {
    /// Provider accepted, or no intent flag was set (a bare submission
    /// still succeeds); the UI should navigate. Sign-up may come back
    /// without a session when the provider defers to email confirmation.
    Authenticated {
        session: Option<ProviderSession>,
        redirect_path: &'static str,
    },
    /// Form rules failed; the provider was not contacted.
    Rejected { errors: Vec<FieldError> },
    /// The provider reported a domain-level failure inside a successful
    /// call. `message` is the composed `"{status}: {message}"` display
    /// string.
    Denied { message: String },
}

pub struct AuthenticateAction<P: AuthProvider> {
    pub provider: P,
}

impl<P: AuthProvider> AuthenticateAction<P> {
    pub async fn execute(&self, form: AuthForm) -> Result<AuthOutcome, WebServiceError> {
        let valid = match form.validate() {
            Ok(valid) => valid,
            Err(errors) => return Ok(AuthOutcome::Rejected { errors }),
        };
        let redirect_path = valid.redirect_path();

        // login wins when both submit flags arrive set
        let attempt = if valid.login {
            self.provider.sign_in(&valid.email, &valid.password).await?
        } else if valid.signup {
            self.provider.sign_up(&valid.email, &valid.password).await?
        } else {
            AuthAttempt::Granted(None)
        };

        match attempt {
            AuthAttempt::Granted(session) => {
                info!(login = valid.login, signup = valid.signup, "authenticated");
                Ok(AuthOutcome::Authenticated {
                    session,
                    redirect_path,
                })
            }
            AuthAttempt::Denied(denial) => {
                error!(status = denial.status, message = %denial.message, "auth denied");
                Ok(AuthOutcome::Denied {
                    message: denial.display(),
                })
            }
        }
    }
}

// ── Logout ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct LogoutOutcome {
    pub success: bool,
    pub message: &'static str,
    pub redirect_path: Option<String>,
}

pub struct LogoutAction<P: AuthProvider> {
    pub provider: P,
}

impl<P: AuthProvider> LogoutAction<P> {
    pub async fn execute(&self, access_token: &str) -> Result<LogoutOutcome, WebServiceError> {
        match self.provider.sign_out(access_token).await? {
            None => {
                info!("logged out");
                Ok(LogoutOutcome {
                    success: true,
                    message: "logout success",
                    redirect_path: Some(login_redirect("authed")),
                })
            }
            Some(denial) => {
                error!(status = denial.status, message = %denial.message, "logout denied");
                Ok(LogoutOutcome {
                    success: false,
                    message: "logout failed",
                    redirect_path: None,
                })
            }
        }
    }
}
