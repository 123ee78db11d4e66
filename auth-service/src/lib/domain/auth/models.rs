use std::fmt;
use std::str::FromStr;

use crate::auth::errors::EmailError;

/// User unique identifier type.
///
/// Opaque to the auth core; the provider decides the format. The reference
/// in-memory provider assigns decimal counter strings ("1", "2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read-only view of an authenticated or registered user.
///
/// Produced by the user provider (or rebuilt from verified token claims),
/// constructed fresh per request and never mutated by the auth core.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
    pub id: UserId,
    pub email: EmailAddress,
    pub roles: Vec<String>,
}

impl Identity {
    /// Whether this identity holds at least one of `required`.
    pub fn holds_any_role(&self, required: &[String]) -> bool {
        self.roles.iter().any(|role| required.contains(role))
    }
}

/// Outcome of a successful login or registration.
///
/// Handed back to the caller and discarded; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
    pub identity: Identity,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(roles: &[&str]) -> Identity {
        Identity {
            id: UserId::new("1"),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn test_email_address_valid() {
        let email = EmailAddress::new("alice@example.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_email_address_invalid() {
        let result = EmailAddress::new("not-an-email".to_string());
        assert!(matches!(result, Err(EmailError::InvalidFormat(_))));
    }

    #[test]
    fn test_holds_any_role() {
        let admin = identity(&["admin", "user"]);
        let plain = identity(&["user"]);
        let required = vec!["admin".to_string()];

        assert!(admin.holds_any_role(&required));
        assert!(!plain.holds_any_role(&required));
        assert!(!plain.holds_any_role(&[]));
    }
}
