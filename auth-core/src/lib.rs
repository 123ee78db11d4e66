//! Authentication primitives
//!
//! Reusable building blocks for credential-based authentication:
//! - Password hashing and verification (Argon2id)
//! - Access-token issuance and validation (JWT, HS256)
//!
//! The service layer owns orchestration (who may log in, where users live);
//! this crate only answers "does this password match this hash?" and
//! "is this token one of ours, and what does it say?".
//!
//! # Examples
//!
//! ## Passwords
//! ```
//! use auth_core::CredentialValidator;
//!
//! let validator = CredentialValidator::new();
//! let hash = validator.hash("my_password").unwrap();
//! assert!(validator.verify("my_password", &hash).unwrap());
//! assert!(!validator.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth_core::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", Duration::minutes(15));
//! let token = issuer
//!     .issue("42", "alice@example.com", &["user".to_string()])
//!     .unwrap();
//! let claims = issuer.verify(&token).unwrap();
//! assert_eq!(claims.sub, "42");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::CredentialError;
pub use password::CredentialValidator;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
