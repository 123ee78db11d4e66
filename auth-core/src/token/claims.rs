use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a signed access token.
///
/// Every field is mandatory: a token without a subject or expiry is not a
/// token this system ever mints. `exp` is always `iat` plus the issuer's
/// configured time-to-live.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email of the subject at issuance time
    pub email: String,

    /// Roles held by the subject at issuance time
    pub roles: Vec<String>,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Build claims for a subject, stamping `iat` now and `exp` after `ttl`.
    pub fn new(
        subject: impl Into<String>,
        email: impl Into<String>,
        roles: Vec<String>,
        ttl: Duration,
    ) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.into(),
            email: email.into(),
            roles,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Whether the token was expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_follows_ttl() {
        let claims = AccessClaims::new(
            "42",
            "alice@example.com",
            vec!["user".to_string()],
            Duration::minutes(15),
        );

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_is_expired() {
        let claims = AccessClaims {
            sub: "42".to_string(),
            email: "alice@example.com".to_string(),
            roles: vec!["user".to_string()],
            iat: 900,
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }
}
