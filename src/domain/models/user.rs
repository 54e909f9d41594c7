use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Checks the client-supplied fields of a create/update request.
    /// Email only has to be present; no format constraint is enforced.
    pub fn validate_fields(name: &str, email: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation("name must not be blank".into()));
        }
        if email.trim().is_empty() {
            return Err(DomainError::Validation("email must not be blank".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_non_blank_fields() {
        assert!(User::validate_fields("lee", "lee@google.com").is_ok());
        assert!(User::validate_fields("x", "not-an-email").is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = User::validate_fields("  ", "lee@google.com").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_blank_email() {
        let err = User::validate_fields("lee", "").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
