use std::sync::Mutex;

use async_trait::async_trait;
use auth_core::CredentialValidator;

use crate::auth::errors::AuthError;
use crate::auth::models::EmailAddress;
use crate::auth::models::Identity;
use crate::auth::models::UserId;
use crate::auth::ports::UserProvider;

/// Role granted to every newly registered user.
const DEFAULT_ROLE: &str = "user";

/// Credential record owned by this provider, opaque to the auth core.
#[derive(Debug, Clone)]
struct UserRecord {
    id: UserId,
    email: EmailAddress,
    password_hash: String,
    roles: Vec<String>,
}

impl UserRecord {
    fn to_identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

struct Store {
    users: Vec<UserRecord>,
    id_counter: u64,
}

/// Reference user provider backed by a mutexed in-process list.
///
/// Ids are monotonically increasing counters rendered as decimal strings.
/// The duplicate-email check and the insert happen under one lock
/// acquisition, so the email-uniqueness invariant holds even for concurrent
/// registrations. Records live for the lifetime of the process.
pub struct InMemoryUserProvider {
    validator: CredentialValidator,
    store: Mutex<Store>,
}

impl InMemoryUserProvider {
    pub fn new() -> Self {
        Self {
            validator: CredentialValidator::new(),
            store: Mutex::new(Store {
                users: Vec::new(),
                id_counter: 0,
            }),
        }
    }
}

impl Default for InMemoryUserProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserProvider for InMemoryUserProvider {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Identity>, AuthError> {
        let store = self.store.lock().expect("user store lock poisoned");
        Ok(store
            .users
            .iter()
            .find(|record| &record.email == email)
            .map(UserRecord::to_identity))
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, AuthError> {
        let store = self.store.lock().expect("user store lock poisoned");
        Ok(store
            .users
            .iter()
            .find(|record| &record.id == id)
            .map(UserRecord::to_identity))
    }

    async fn validate_credentials(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Option<Identity>, AuthError> {
        // Copy the record out so the verify (slow by design) runs unlocked.
        let record = {
            let store = self.store.lock().expect("user store lock poisoned");
            store
                .users
                .iter()
                .find(|record| &record.email == email)
                .cloned()
        };

        let Some(record) = record else {
            return Ok(None);
        };

        let matches = self.validator.verify(password, &record.password_hash)?;
        Ok(matches.then(|| record.to_identity()))
    }

    async fn create_user(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<Identity, AuthError> {
        // Hash before taking the lock; the check and insert below must share
        // one acquisition to keep emails unique under concurrent creates.
        let password_hash = self.validator.hash(password)?;

        let mut store = self.store.lock().expect("user store lock poisoned");

        if store.users.iter().any(|record| &record.email == email) {
            return Err(AuthError::EmailAlreadyExists);
        }

        store.id_counter += 1;
        let record = UserRecord {
            id: UserId::new(store.id_counter.to_string()),
            email: email.clone(),
            password_hash,
            roles: vec![DEFAULT_ROLE.to_string()],
        };

        let identity = record.to_identity();
        store.users.push(record);

        Ok(identity)
    }
}
