//! Field-level validation primitives shared by the form rule sets.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub(crate) static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("invalid regex"));

pub(crate) static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid regex"));

/// One violated rule on one form field.
///
/// Rules are checked independently, so a single field can contribute
/// several entries to a validation report. Order follows the form's field
/// order, then rule order within a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Generic string→number coercion used for record ids arriving as form
/// fields: empty or whitespace input coerces to zero, non-numeric input to
/// NaN, and fractional strings keep their fraction. Integer-only parsing
/// is deliberately NOT applied here; callers reject non-integral values at
/// the persistence boundary instead.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_coerce_integral_strings() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number(" 7 "), 7.0);
    }

    #[test]
    fn should_coerce_empty_input_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn should_keep_fractions() {
        assert_eq!(coerce_number("1.5"), 1.5);
    }

    #[test]
    fn should_coerce_garbage_to_nan() {
        assert!(coerce_number("123abc").is_nan());
        assert!(coerce_number("@#$").is_nan());
    }

    #[test]
    fn should_serialize_field_error_as_object() {
        let err = FieldError::new("name", "name must not be empty");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "name");
        assert_eq!(json["message"], "name must not be empty");
    }
}
