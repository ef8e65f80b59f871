//! Declarative rule set for the user form.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::phone::PhoneSegments;
use crate::validate::{DIGITS_RE, EMAIL_RE, FieldError};

/// Raw user form fields as submitted by the browser. Everything is a
/// string until it passes [`UserForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserForm {
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

/// A user form that passed every rule. `phone` is the joined stored
/// string, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUserForm {
    pub name: String,
    pub url: String,
    pub phone: String,
    pub email: String,
}

impl UserForm {
    /// Check every rule and collect one entry per violation, in field
    /// order. The repository must never see a form that failed here.
    pub fn validate(&self) -> Result<ValidUserForm, Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(FieldError::new("name", "name must not be empty"));
        }
        if Url::parse(&self.url).is_err() {
            errors.push(FieldError::new(
                "url",
                "url must be a well-formed absolute URL",
            ));
        }
        segment_rules(&mut errors, "phone1", &self.phone1);
        segment_rules(&mut errors, "phone2", &self.phone2);
        // subscriber segment: exactly four digits
        if self.phone3.chars().count() != 4 {
            errors.push(FieldError::new("phone3", "phone3 must be exactly 4 digits"));
        }
        if !DIGITS_RE.is_match(&self.phone3) {
            errors.push(FieldError::new(
                "phone3",
                "phone3 must contain only digits",
            ));
        }
        if !EMAIL_RE.is_match(&self.email) {
            errors.push(FieldError::new(
                "email",
                "email must be a well-formed address",
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ValidUserForm {
            name: self.name.clone(),
            url: self.url.clone(),
            phone: PhoneSegments::new(&self.phone1, &self.phone2, &self.phone3).join(),
            email: self.email.clone(),
        })
    }
}

// Area-code and exchange segments share the same three rules: 1–4 chars,
// digits only. Each violated rule is its own entry.
fn segment_rules(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    let len = value.chars().count();
    if len < 1 {
        errors.push(FieldError::new(
            field,
            format!("{field} must be at least 1 digit"),
        ));
    }
    if len > 4 {
        errors.push(FieldError::new(
            field,
            format!("{field} must be at most 4 digits"),
        ));
    }
    if !DIGITS_RE.is_match(value) {
        errors.push(FieldError::new(
            field,
            format!("{field} must contain only digits"),
        ));
    }
}
