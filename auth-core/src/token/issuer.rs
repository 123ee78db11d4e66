use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Mints and verifies signed access tokens.
///
/// Holds the process-wide signing secret (as HS256 keys) and the configured
/// token time-to-live. Both are fixed at construction; there is no refresh
/// path, so a failed `verify` always means a fresh login.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer from the signing secret and token time-to-live.
    ///
    /// The secret should be at least 256 bits (32 bytes) for HS256 and come
    /// from configuration, never from source.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// Claims are stamped with `iat` now and `exp` after the configured TTL.
    ///
    /// # Errors
    /// * `SigningFailed` - Token could not be signed
    pub fn issue(
        &self,
        subject: &str,
        email: &str,
        roles: &[String],
    ) -> Result<String, TokenError> {
        let claims = AccessClaims::new(subject, email, roles.to_vec(), self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    /// * `Expired` - Token is past its `exp` claim
    /// * `Invalid` - Signature mismatch or malformed token
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}
