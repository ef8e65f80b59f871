//! Declarative rule set for the login/signup form.

use serde::{Deserialize, Serialize};

use crate::validate::{EMAIL_RE, FieldError};

/// Protected areas a request can be bounced back to after login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Area {
    Authed,
    Shopping,
}

impl Area {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "authed" => Some(Self::Authed),
            "shopping" => Some(Self::Shopping),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Authed => "authed",
            Self::Shopping => "shopping",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Authed => "/authed",
            Self::Shopping => "/shopping",
        }
    }
}

/// Raw login/signup form fields. `login` and `signup` are independent
/// submit buttons, so both may arrive set; `from` is the area hint carried
/// through the login redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub login: bool,
    pub signup: bool,
    pub from: Option<String>,
}

/// An auth form that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidAuthForm {
    pub email: String,
    pub password: String,
    pub login: bool,
    pub signup: bool,
    pub from: Option<Area>,
}

impl ValidAuthForm {
    /// Post-auth landing page. Shopping wins only when explicitly named;
    /// everything else lands in the default authenticated area.
    pub fn redirect_path(&self) -> &'static str {
        match self.from {
            Some(Area::Shopping) => Area::Shopping.path(),
            _ => Area::Authed.path(),
        }
    }
}

impl AuthForm {
    /// Check every rule and collect one entry per violation. The password
    /// rules are all evaluated independently, so a short password missing
    /// several character classes reports every miss at once.
    pub fn validate(&self) -> Result<ValidAuthForm, Vec<FieldError>> {
        let mut errors = Vec::new();

        if !EMAIL_RE.is_match(&self.email) {
            errors.push(FieldError::new(
                "email",
                "email must be a well-formed address",
            ));
        }
        password_rules(&mut errors, &self.password);

        let from = match self.from.as_deref() {
            None => None,
            Some(raw) => match Area::parse(raw) {
                Some(area) => Some(area),
                None => {
                    errors.push(FieldError::new(
                        "from",
                        "from must be one of: authed, shopping",
                    ));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ValidAuthForm {
            email: self.email.clone(),
            password: self.password.clone(),
            login: self.login,
            signup: self.signup,
            from,
        })
    }
}

fn password_rules(errors: &mut Vec<FieldError>, password: &str) {
    let len = password.chars().count();
    if len < 8 {
        errors.push(FieldError::new(
            "password",
            "password must be at least 8 characters",
        ));
    }
    if len > 72 {
        errors.push(FieldError::new(
            "password",
            "password must be at most 72 characters",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(FieldError::new(
            "password",
            "password must contain a lowercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new(
            "password",
            "password must contain an uppercase letter",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new("password", "password must contain a digit"));
    }
    if !password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        errors.push(FieldError::new(
            "password",
            "password must contain a symbol",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AuthForm {
        AuthForm {
            email: "tester@example.com".into(),
            password: "Sup3r-secret".into(),
            login: true,
            signup: false,
            from: None,
        }
    }

    #[test]
    fn should_accept_a_valid_form() {
        let valid = valid_form().validate().unwrap();
        assert!(valid.login);
        assert_eq!(valid.from, None);
    }

    #[test]
    fn should_report_five_errors_for_an_empty_password() {
        let form = AuthForm {
            password: "".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        // min length + the four character classes; max length cannot fail
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().all(|e| e.field == "password"));
    }

    #[test]
    fn should_report_one_error_per_missing_class() {
        // long enough, has lowercase and digits, misses uppercase + symbol
        let form = AuthForm {
            password: "abcdef123".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn should_reject_a_73_character_password() {
        let form = AuthForm {
            password: format!("Aa1!{}", "x".repeat(69)),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "password must be at most 72 characters");
    }

    #[test]
    fn should_accept_a_boundary_length_password() {
        for password in [
            format!("Aa1!{}", "x".repeat(4)),  // exactly 8
            format!("Aa1!{}", "x".repeat(68)), // exactly 72
        ] {
            let form = AuthForm {
                password,
                ..valid_form()
            };
            assert!(form.validate().is_ok());
        }
    }

    #[test]
    fn should_parse_the_from_hint() {
        let form = AuthForm {
            from: Some("shopping".into()),
            ..valid_form()
        };
        let valid = form.validate().unwrap();
        assert_eq!(valid.from, Some(Area::Shopping));
        assert_eq!(valid.redirect_path(), "/shopping");
    }

    #[test]
    fn should_reject_an_unknown_from_hint() {
        let form = AuthForm {
            from: Some("elsewhere".into()),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "from");
    }

    #[test]
    fn should_redirect_to_the_default_area_unless_shopping_was_asked() {
        let authed = AuthForm {
            from: Some("authed".into()),
            ..valid_form()
        };
        assert_eq!(authed.validate().unwrap().redirect_path(), "/authed");
        assert_eq!(valid_form().validate().unwrap().redirect_path(), "/authed");
    }

    #[test]
    fn should_order_errors_email_first() {
        let form = AuthForm {
            email: "nope".into(),
            password: "".into(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[0].field, "email");
    }
}
