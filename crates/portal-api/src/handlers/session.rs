//! Session handlers: token issue and logout.

use axum::extract::State;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use tracing::debug;
use validator::Validate;

use portal_models::Identity;

use crate::error::ApiResult;
use crate::state::AppState;

/// Body returned by both session endpoints.
#[derive(Serialize)]
pub struct SessionResponse {
    pub success: bool,
}

/// Issue a session token for the given identity and set it as an
/// HTTP-only cookie.
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(identity): Json<Identity>,
) -> ApiResult<(CookieJar, Json<SessionResponse>)> {
    identity.validate()?;

    let token = state.tokens.issue(&identity.email)?;
    let jar = jar.add(state.tokens.session_cookie(token));

    debug!(email = %identity.email, "session token issued");
    Ok((jar, Json(SessionResponse { success: true })))
}

/// Clear the session cookie.
///
/// Tokens are stateless, so this only removes the client-side cookie;
/// an already-issued token stays valid until it expires.
pub async fn clear_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<SessionResponse>)> {
    let jar = jar.remove(state.tokens.removal_cookie());
    Ok((jar, Json(SessionResponse { success: true })))
}
