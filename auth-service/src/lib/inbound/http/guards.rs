use std::sync::Arc;

use auth_core::AccessClaims;
use auth_core::TokenIssuer;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::auth::models::EmailAddress;
use crate::auth::models::Identity;
use crate::auth::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Per-route access policy consulted by the guards.
///
/// Replaces per-handler metadata lookup: the router attaches one of these to
/// each route explicitly.
#[derive(Debug, Clone, Default)]
pub struct RoutePolicy {
    /// Public routes skip token validation entirely.
    pub public: bool,

    /// Roles of which the caller must hold at least one.
    /// Empty means no restriction.
    pub required_roles: Vec<String>,
}

impl RoutePolicy {
    /// Policy for routes anyone may call.
    pub fn open() -> Self {
        Self {
            public: true,
            required_roles: Vec::new(),
        }
    }

    /// Policy for routes requiring a valid bearer token.
    pub fn authenticated() -> Self {
        Self {
            public: false,
            required_roles: Vec::new(),
        }
    }

    /// Policy for routes requiring a valid token and one of `roles`.
    pub fn with_roles(roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            public: false,
            required_roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Authentication progress for a request.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// No authentication check has run yet.
    Unchecked,
    /// Route is public; no identity attached.
    Public,
    /// Bearer token verified; identity attached.
    Authenticated(Identity),
    /// Bearer token missing, invalid, or expired.
    Rejected,
}

/// Validates bearer tokens for non-public routes.
pub struct AuthenticationGuard {
    tokens: Arc<TokenIssuer>,
}

impl AuthenticationGuard {
    pub fn new(tokens: Arc<TokenIssuer>) -> Self {
        Self { tokens }
    }

    /// Decide a request's authentication state.
    ///
    /// Public routes short-circuit without touching the token. Anything else
    /// requires a bearer token that verifies; a missing or bad token ends in
    /// `Rejected`.
    pub fn check(&self, policy: &RoutePolicy, bearer: Option<&str>) -> AuthState {
        if policy.public {
            return AuthState::Public;
        }

        let Some(token) = bearer else {
            return AuthState::Rejected;
        };

        match self.tokens.verify(token) {
            Ok(claims) => match identity_from_claims(claims) {
                Some(identity) => AuthState::Authenticated(identity),
                None => AuthState::Rejected,
            },
            Err(e) => {
                tracing::warn!("Bearer token rejected: {}", e);
                AuthState::Rejected
            }
        }
    }
}

/// Role check over the identity attached by the authentication guard.
pub struct AuthorizationGuard;

impl AuthorizationGuard {
    /// Allow iff the policy has no role restriction, or the attached
    /// identity holds at least one required role. Any state without an
    /// identity fails closed.
    pub fn allows(policy: &RoutePolicy, state: &AuthState) -> bool {
        if policy.required_roles.is_empty() {
            return true;
        }

        match state {
            AuthState::Authenticated(identity) => identity.holds_any_role(&policy.required_roles),
            AuthState::Unchecked | AuthState::Public | AuthState::Rejected => false,
        }
    }
}

/// Middleware enforcing a route's policy: authentication first, then the
/// role check, then the identity lands in the request extensions.
pub async fn enforce_policy(
    State((state, policy)): State<(AppState, RoutePolicy)>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let bearer = bearer_token(&req);

    let auth_state = state.authentication.check(&policy, bearer);
    if auth_state == AuthState::Rejected {
        return Err(ApiError::Unauthorized("Invalid or expired token".to_string()).into_response());
    }

    if !AuthorizationGuard::allows(&policy, &auth_state) {
        return Err(ApiError::Forbidden("Insufficient role".to_string()).into_response());
    }

    if let AuthState::Authenticated(identity) = auth_state {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

/// Rebuild an identity from verified claims.
///
/// The email was validated at registration; a claim that no longer parses
/// means a token this system never minted, so the caller treats `None` as a
/// rejection.
fn identity_from_claims(claims: AccessClaims) -> Option<Identity> {
    let email = EmailAddress::new(claims.email).ok()?;

    Some(Identity {
        id: UserId::new(claims.sub),
        email,
        roles: claims.roles,
    })
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
