use auth_core::CredentialError;
use auth_core::TokenError;
use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for authentication operations.
///
/// Messages are deliberately generic where they would otherwise allow
/// account enumeration: a wrong password and an unknown email produce the
/// same error, and a profile lookup miss reports plain unauthorized rather
/// than a distinct not-found signal.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("User with this email already exists")]
    EmailAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    SubjectNotFound,

    // Infrastructure errors
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}
