//! Advisory form validation.
//!
//! Stateless `(values, rules) -> field errors` checks for the signup form.
//! Errors are display-only: the mock login ignores form contents entirely,
//! so nothing here ever blocks a state transition.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::session::Role;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// Yemeni mobile numbers, with optional country prefix.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+967|00967|967|0)?7[0-9]{8}$").expect("valid phone regex"));

/// Validation rules for one field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldRule {
    /// Label used in error messages.
    pub label: &'static str,
    pub required: bool,
    pub email: bool,
    pub phone: bool,
    pub min_length: Option<usize>,
}

/// Validates `values` against `rules`, returning one message per failing
/// field. Checks run in rule order and stop at the first failure per field.
pub fn validate(
    values: &BTreeMap<String, String>,
    rules: &[(&'static str, FieldRule)],
) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();
    let empty = String::new();

    for (field, rule) in rules {
        let value = values.get(*field).unwrap_or(&empty);
        let trimmed = value.trim();

        if rule.required && trimmed.is_empty() {
            errors.insert((*field).to_string(), format!("{} is required", rule.label));
            continue;
        }
        if rule.email && !trimmed.is_empty() && !EMAIL_RE.is_match(trimmed) {
            errors.insert((*field).to_string(), "Invalid email address".to_string());
            continue;
        }
        if rule.phone && !trimmed.is_empty() && !PHONE_RE.is_match(trimmed) {
            errors.insert((*field).to_string(), "Invalid phone number".to_string());
            continue;
        }
        if let Some(min) = rule.min_length
            && !trimmed.is_empty()
            && trimmed.chars().count() < min
        {
            errors.insert(
                (*field).to_string(),
                format!("{} must be at least {min} characters", rule.label),
            );
        }
    }

    errors
}

/// Rules for the signup form. Doctors get an extra specialty field.
pub fn signup_rules(role: Role) -> Vec<(&'static str, FieldRule)> {
    let mut rules = vec![
        (
            "full_name",
            FieldRule { label: "Full name", required: true, min_length: Some(3), ..FieldRule::default() },
        ),
        (
            "email",
            FieldRule { label: "Email", required: true, email: true, ..FieldRule::default() },
        ),
        (
            "phone",
            FieldRule { label: "Phone", required: true, phone: true, ..FieldRule::default() },
        ),
        (
            "password",
            FieldRule { label: "Password", required: true, min_length: Some(8), ..FieldRule::default() },
        ),
    ];
    if role == Role::Doctor {
        rules.insert(
            3,
            (
                "specialty",
                FieldRule { label: "Specialty", required: true, ..FieldRule::default() },
            ),
        );
    }
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_required_fields_reported() {
        let errors = validate(&values(&[]), &signup_rules(Role::Patient));
        assert_eq!(errors["full_name"], "Full name is required");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["phone"], "Phone is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn test_email_format() {
        let rules = [("email", FieldRule { label: "Email", email: true, ..FieldRule::default() })];
        assert!(validate(&values(&[("email", "someone@example.com")]), &rules).is_empty());
        assert_eq!(
            validate(&values(&[("email", "not-an-email")]), &rules)["email"],
            "Invalid email address"
        );
    }

    #[test]
    fn test_phone_accepts_local_and_prefixed_forms() {
        let rules = [("phone", FieldRule { label: "Phone", phone: true, ..FieldRule::default() })];
        for ok in ["712345678", "0712345678", "+967712345678", "00967712345678"] {
            assert!(validate(&values(&[("phone", ok)]), &rules).is_empty(), "{ok}");
        }
        for bad in ["812345678", "71234", "05XXXXXXXX"] {
            assert!(!validate(&values(&[("phone", bad)]), &rules).is_empty(), "{bad}");
        }
    }

    #[test]
    fn test_min_length() {
        let rules = [(
            "password",
            FieldRule { label: "Password", min_length: Some(8), ..FieldRule::default() },
        )];
        assert_eq!(
            validate(&values(&[("password", "short")]), &rules)["password"],
            "Password must be at least 8 characters"
        );
        assert!(validate(&values(&[("password", "long enough")]), &rules).is_empty());
    }

    #[test]
    fn test_doctor_rules_include_specialty() {
        let errors = validate(&values(&[]), &signup_rules(Role::Doctor));
        assert_eq!(errors["specialty"], "Specialty is required");
    }

    #[test]
    fn test_optional_empty_field_passes_format_checks() {
        let rules = [("email", FieldRule { label: "Email", email: true, ..FieldRule::default() })];
        assert!(validate(&values(&[("email", "")]), &rules).is_empty());
    }
}
