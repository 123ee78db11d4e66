use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;
use thiserror::Error;

/// Error type for credential operations.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// Verifies plaintext passwords against stored hashes.
///
/// Hashes with Argon2id and a fresh random salt per password. The salt and
/// parameters are embedded in the PHC string, so verification needs nothing
/// beyond the stored hash itself. The plaintext never leaves this type.
pub struct CredentialValidator;

impl CredentialValidator {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| CredentialError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC-format hash.
    ///
    /// A mismatch is a normal outcome (`Ok(false)`), not an error.
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, CredentialError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| CredentialError::MalformedHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let validator = CredentialValidator::new();
        let password = "correct horse battery staple";

        let hash = validator.hash(password).expect("Failed to hash password");
        assert!(hash.starts_with("$argon2"));

        assert!(validator
            .verify(password, &hash)
            .expect("Failed to verify password"));
        assert!(!validator
            .verify("wrong password", &hash)
            .expect("Failed to verify password"));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let validator = CredentialValidator::new();

        let first = validator.hash("password123").unwrap();
        let second = validator.hash("password123").unwrap();

        // Fresh salt per hash
        assert_ne!(first, second);
        assert!(validator.verify("password123", &first).unwrap());
        assert!(validator.verify("password123", &second).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let validator = CredentialValidator::new();

        let result = validator.verify("password", "not-a-phc-string");
        assert!(matches!(result, Err(CredentialError::MalformedHash(_))));
    }
}
