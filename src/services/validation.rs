use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::dto::UserPayload;
use crate::error::ApiError;
use crate::repos::UserRepository;

lazy_static! {
    // Simple local-part@domain shape; intentionally looser than full RFC
    // address validation.
    static ref EMAIL_PATTERN: Regex = Regex::new("^[A-Za-z0-9+_.-]+@(.+)$").unwrap();
}

/// Payload field values that passed validation, ready to persist.
#[derive(Debug, Clone)]
pub struct ValidatedUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Business validation for user payloads.
///
/// Constructed with the repository it needs for uniqueness checks and
/// passed into `UserService` explicitly; there is no ambient validator.
#[derive(Clone)]
pub struct UserValidator {
    users: Arc<dyn UserRepository>,
}

impl UserValidator {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Ids used for mutations must be positive.
    pub fn validate_id(&self, id: i32) -> Result<(), ApiError> {
        if id <= 0 {
            return Err(ApiError::Validation(
                "User ID must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn validate_for_create(&self, payload: &UserPayload) -> Result<ValidatedUser, ApiError> {
        let user = validate_basic_fields(payload)?;

        if self.users.find_by_username(&user.username).await?.is_some() {
            return Err(ApiError::Conflict(format!(
                "User already exists with username: {}",
                user.username
            )));
        }

        if self.users.find_by_email(&user.email).await?.is_some() {
            return Err(ApiError::Conflict(format!(
                "User already exists with email: {}",
                user.email
            )));
        }

        Ok(user)
    }

    /// Same rules as create, but uniqueness checks ignore the record
    /// being updated.
    pub async fn validate_for_update(
        &self,
        id: i32,
        payload: &UserPayload,
    ) -> Result<ValidatedUser, ApiError> {
        let user = validate_basic_fields(payload)?;

        if let Some(existing) = self.users.find_by_username(&user.username).await? {
            if existing.id != id {
                return Err(ApiError::Conflict(format!(
                    "User already exists with username: {}",
                    user.username
                )));
            }
        }

        if let Some(existing) = self.users.find_by_email(&user.email).await? {
            if existing.id != id {
                return Err(ApiError::Conflict(format!(
                    "User already exists with email: {}",
                    user.email
                )));
            }
        }

        Ok(user)
    }
}

fn validate_basic_fields(payload: &UserPayload) -> Result<ValidatedUser, ApiError> {
    let username = required(&payload.username, "Username is required")?;
    if username.len() < 3 || username.len() > 100 {
        return Err(ApiError::Validation(
            "Username must be between 3 and 100 characters".to_string(),
        ));
    }

    let email = required(&payload.email, "Email is required")?;
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(ApiError::Validation("Email format is invalid".to_string()));
    }

    let first_name = required(&payload.first_name, "First name is required")?;
    let last_name = required(&payload.last_name, "Last name is required")?;
    let phone_number = required(&payload.phone_number, "Phone number is required")?;

    Ok(ValidatedUser {
        username,
        email,
        first_name,
        last_name,
        phone_number,
    })
}

fn required(value: &Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> UserPayload {
        UserPayload {
            username: Some("alice".to_string()),
            email: Some("a@example.com".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: Some("A".to_string()),
            phone_number: Some("123".to_string()),
        }
    }

    #[test]
    fn accepts_a_well_formed_payload() {
        let valid = validate_basic_fields(&payload()).unwrap();
        assert_eq!(valid.username, "alice");
        assert_eq!(valid.email, "a@example.com");
    }

    #[test]
    fn rejects_missing_username() {
        let mut p = payload();
        p.username = None;
        let err = validate_basic_fields(&p).unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
    }

    #[test]
    fn rejects_blank_first_name() {
        let mut p = payload();
        p.first_name = Some("   ".to_string());
        let err = validate_basic_fields(&p).unwrap_err();
        assert_eq!(err.to_string(), "First name is required");
    }

    #[test]
    fn rejects_username_outside_length_bounds() {
        let mut p = payload();
        p.username = Some("ab".to_string());
        let err = validate_basic_fields(&p).unwrap_err();
        assert_eq!(err.to_string(), "Username must be between 3 and 100 characters");

        p.username = Some("a".repeat(101));
        let err = validate_basic_fields(&p).unwrap_err();
        assert_eq!(err.to_string(), "Username must be between 3 and 100 characters");
    }

    #[test]
    fn rejects_malformed_email_but_not_unusual_local_parts() {
        let mut p = payload();
        p.email = Some("not-an-email".to_string());
        let err = validate_basic_fields(&p).unwrap_err();
        assert_eq!(err.to_string(), "Email format is invalid");

        // The shape check is deliberately loose: anything with a
        // local-part and a domain passes.
        p.email = Some("odd+local.part@whatever".to_string());
        assert!(validate_basic_fields(&p).is_ok());
    }
}
