use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{AppError, FieldError};
use crate::model::user::{parse_subscription, parse_user_type};
use crate::models::{LoginReq, RegisterReq};

// Simple email validation (the unique index is the real gatekeeper)
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

fn finish(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

pub fn validate_register(req: &RegisterReq) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if req.first_name.trim().is_empty() {
        errors.push(FieldError::new("first_name", "First name is required"));
    }
    if req.last_name.trim().is_empty() {
        errors.push(FieldError::new("last_name", "Last name is required"));
    }
    if !is_valid_email(&req.email) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters",
        ));
    }
    if parse_user_type(&req.user_type).is_none() {
        errors.push(FieldError::new(
            "type",
            "Type must be one of: company, employee, admin",
        ));
    }

    finish(errors)
}

pub fn validate_login(req: &LoginReq) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if !is_valid_email(&req.email) {
        errors.push(FieldError::new("email", "Enter a valid email address"));
    }
    if req.password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    finish(errors)
}

/// The profile update body is arbitrary JSON; only fields that are present
/// get checked here. Column selection is handled by the update builder.
pub fn validate_profile_update(body: &Value) -> Result<(), AppError> {
    let obj = body
        .as_object()
        .ok_or_else(|| AppError::BadRequest("Payload must be a JSON object".to_string()))?;

    let mut errors = Vec::new();

    if let Some(v) = obj.get("first_name") {
        if v.as_str().map(str::trim).unwrap_or("").is_empty() {
            errors.push(FieldError::new("first_name", "First name must not be empty"));
        }
    }
    if let Some(v) = obj.get("last_name") {
        if v.as_str().map(str::trim).unwrap_or("").is_empty() {
            errors.push(FieldError::new("last_name", "Last name must not be empty"));
        }
    }
    if let Some(v) = obj.get("subscription") {
        let valid = v.as_str().and_then(parse_subscription).is_some();
        if !valid {
            errors.push(FieldError::new(
                "subscription",
                "Subscription must be one of: Basic, Silver, Premium, Enterprise",
            ));
        }
    }

    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn register_req() -> RegisterReq {
        RegisterReq {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            password: "secret1".into(),
            user_type: "employee".into(),
            lang: None,
            avatar: None,
        }
    }

    #[test]
    fn test_valid_register_passes() {
        assert!(validate_register(&register_req()).is_ok());
    }

    #[test]
    fn test_register_empty_first_name() {
        let mut req = register_req();
        req.first_name = "  ".into();
        let err = validate_register(&req).unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "first_name");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_register_bad_email() {
        let mut req = register_req();
        req.email = "not-an-email".into();
        assert!(validate_register(&req).is_err());

        req.email = "a b@c.com".into();
        assert!(validate_register(&req).is_err());

        req.email = "a@b".into();
        assert!(validate_register(&req).is_err());
    }

    #[test]
    fn test_register_short_password() {
        let mut req = register_req();
        req.password = "five5".into();
        assert!(validate_register(&req).is_err());

        req.password = "sixsix".into();
        assert!(validate_register(&req).is_ok());
    }

    #[test]
    fn test_register_unknown_type() {
        let mut req = register_req();
        req.user_type = "superadmin".into();
        assert!(validate_register(&req).is_err());
    }

    #[test]
    fn test_register_collects_all_errors() {
        let req = RegisterReq {
            first_name: "".into(),
            last_name: "".into(),
            email: "bad".into(),
            password: "123".into(),
            user_type: "nope".into(),
            lang: None,
            avatar: None,
        };
        match validate_register(&req).unwrap_err() {
            AppError::Validation(errors) => assert_eq!(errors.len(), 5),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_login_rules() {
        let ok = LoginReq {
            email: "a@b.com".into(),
            password: "x".into(),
        };
        assert!(validate_login(&ok).is_ok());

        let bad_email = LoginReq {
            email: "nope".into(),
            password: "x".into(),
        };
        assert!(validate_login(&bad_email).is_err());

        let empty_password = LoginReq {
            email: "a@b.com".into(),
            password: "".into(),
        };
        assert!(validate_login(&empty_password).is_err());
    }

    #[test]
    fn test_profile_update_rules() {
        assert!(validate_profile_update(&json!({"first_name": "New"})).is_ok());
        assert!(validate_profile_update(&json!({"first_name": ""})).is_err());
        assert!(validate_profile_update(&json!({"last_name": "  "})).is_err());
        assert!(validate_profile_update(&json!({"subscription": "Silver"})).is_ok());
        assert!(validate_profile_update(&json!({"subscription": "Gold"})).is_err());
        assert!(validate_profile_update(&json!({"subscription": 2})).is_err());
        // absent fields are not checked
        assert!(validate_profile_update(&json!({"lang": "fr"})).is_ok());
    }

    #[test]
    fn test_profile_update_requires_object() {
        assert!(validate_profile_update(&json!([1, 2, 3])).is_err());
        assert!(validate_profile_update(&json!("string")).is_err());
    }
}
