use std::sync::Arc;

use async_trait::async_trait;
use auth_core::TokenIssuer;

use crate::auth::errors::AuthError;
use crate::auth::models::AuthenticationResult;
use crate::auth::models::EmailAddress;
use crate::auth::models::Identity;
use crate::auth::models::UserId;
use crate::auth::ports::AuthServicePort;
use crate::auth::ports::UserProvider;

/// Authentication service implementation.
///
/// Orchestrates login, registration, and profile retrieval over the
/// user-provider port and the token issuer. Depends only on the provider
/// interface, never on a concrete store.
pub struct AuthService<UP>
where
    UP: UserProvider,
{
    provider: Arc<UP>,
    tokens: Arc<TokenIssuer>,
}

impl<UP> AuthService<UP>
where
    UP: UserProvider,
{
    /// Create a new auth service with injected dependencies.
    pub fn new(provider: Arc<UP>, tokens: Arc<TokenIssuer>) -> Self {
        Self { provider, tokens }
    }
}

#[async_trait]
impl<UP> AuthServicePort for AuthService<UP>
where
    UP: UserProvider,
{
    async fn login(&self, identity: Identity) -> Result<AuthenticationResult, AuthError> {
        let access_token =
            self.tokens
                .issue(identity.id.as_str(), identity.email.as_str(), &identity.roles)?;

        Ok(AuthenticationResult {
            access_token,
            identity,
        })
    }

    async fn register(
        &self,
        email: EmailAddress,
        password: &str,
    ) -> Result<AuthenticationResult, AuthError> {
        // Fast-path duplicate check; the provider still enforces uniqueness
        // on insert, so a racing registration cannot slip past both.
        if self.provider.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }

        let identity = self.provider.create_user(&email, password).await?;
        self.login(identity).await
    }

    async fn validate_user(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Identity, AuthError> {
        self.provider
            .validate_credentials(email, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)
    }

    async fn get_profile(&self, id: &UserId) -> Result<Identity, AuthError> {
        self.provider
            .find_by_id(id)
            .await?
            .ok_or(AuthError::SubjectNotFound)
    }
}
