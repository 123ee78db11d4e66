use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::auth::models::Identity;
use crate::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Return the caller's identity, re-resolved through the provider so a
/// subject deleted after token issuance is refused like any other
/// unauthorized request.
pub async fn profile(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    state
        .auth_service
        .get_profile(&identity.id)
        .await
        .map_err(ApiError::from)
        .map(|ref identity| ApiSuccess::new(StatusCode::OK, identity.into()))
}
