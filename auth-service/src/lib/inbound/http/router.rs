use std::sync::Arc;
use std::time::Duration;

use auth_core::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::guards::enforce_policy;
use super::guards::AuthenticationGuard;
use super::guards::RoutePolicy;
use super::handlers::login::login;
use super::handlers::profile::profile;
use super::handlers::register::register;
use crate::domain::auth::service::AuthService;
use crate::outbound::providers::InMemoryUserProvider;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserProvider>>,
    pub authentication: Arc<AuthenticationGuard>,
}

pub fn create_router(
    auth_service: Arc<AuthService<InMemoryUserProvider>>,
    tokens: Arc<TokenIssuer>,
) -> Router {
    let state = AppState {
        auth_service,
        authentication: Arc::new(AuthenticationGuard::new(tokens)),
    };

    let public_routes = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route_layer(middleware::from_fn_with_state(
            (state.clone(), RoutePolicy::open()),
            enforce_policy,
        ));

    let protected_routes = Router::new()
        .route("/auth/profile", get(profile))
        .route_layer(middleware::from_fn_with_state(
            (state.clone(), RoutePolicy::authenticated()),
            enforce_policy,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
