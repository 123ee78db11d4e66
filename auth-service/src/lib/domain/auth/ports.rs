use async_trait::async_trait;

use crate::auth::errors::AuthError;
use crate::auth::models::AuthenticationResult;
use crate::auth::models::EmailAddress;
use crate::auth::models::Identity;
use crate::auth::models::UserId;

/// Capability interface over the user store.
///
/// Any concrete store (in-memory, SQL, remote service) satisfies this port;
/// the auth core depends only on the interface and treats credential records
/// as opaque. Lookups and credential checks may suspend while awaiting I/O.
#[async_trait]
pub trait UserProvider: Send + Sync + 'static {
    /// Look up an identity by email.
    ///
    /// # Returns
    /// `None` when no record matches; this is a normal outcome.
    ///
    /// # Errors
    /// * Infrastructure failures only (never "not found")
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Identity>, AuthError>;

    /// Look up an identity by id.
    ///
    /// # Returns
    /// `None` when no record matches; this is a normal outcome.
    ///
    /// # Errors
    /// * Infrastructure failures only (never "not found")
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, AuthError>;

    /// Check a plaintext password against the stored credential record.
    ///
    /// Fails closed: an unknown email and a wrong password both return
    /// `None`. Neither is an error.
    ///
    /// # Errors
    /// * `Credential` - Stored hash could not be verified (infrastructure)
    async fn validate_credentials(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Option<Identity>, AuthError>;

    /// Create a new user record.
    ///
    /// The caller is expected to have confirmed the email is free; the
    /// provider still owns the final uniqueness guarantee and may refuse.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - A record with this email already exists
    /// * `Credential` - Password hashing failed
    async fn create_user(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Identity, AuthError>;
}

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Issue an access token for an already-validated identity.
    ///
    /// The identity is assumed pre-validated by the caller (typically after
    /// a credential check); issuance is unconditional.
    ///
    /// # Errors
    /// * `Token` - Token signing failed
    async fn login(&self, identity: Identity) -> Result<AuthenticationResult, AuthError>;

    /// Register a new user and log them in.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Credential` - Password hashing failed
    /// * `Token` - Token signing failed
    async fn register(
        &self,
        email: EmailAddress,
        password: &str,
    ) -> Result<AuthenticationResult, AuthError>;

    /// Resolve credentials to an identity.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (one signal)
    async fn validate_user(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Identity, AuthError>;

    /// Fetch the identity behind a subject id.
    ///
    /// # Errors
    /// * `SubjectNotFound` - Subject no longer exists (surfaced as
    ///   unauthorized, not as a distinct not-found signal)
    async fn get_profile(&self, id: &UserId) -> Result<Identity, AuthError>;
}
