//! Session tokens and the authorization guard.
//!
//! Identity is carried as a signed JWT in an HTTP-only cookie named
//! `token`. The token is stateless: logout only removes the cookie.
//! Every mutating and owner-scoped route extracts [`AuthUser`], which
//! rejects requests without a valid, unexpired token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Name of the session cookie.
pub const TOKEN_COOKIE: &str = "token";

/// Claims embedded in the session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identity email.
    pub email: String,
    /// Issued-at, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds.
    pub exp: i64,
}

/// Issues and verifies signed session tokens.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    production: bool,
}

impl TokenService {
    /// Create a token service signing with `secret` (HS256).
    pub fn new(secret: &str, ttl_secs: i64, production: bool) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
            production,
        }
    }

    /// Sign a token for `email`, expiring after the configured TTL.
    pub fn issue(&self, email: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("failed to sign token: {e}")))
    }

    /// Verify a token and return its claims.
    ///
    /// Malformed, tampered and expired tokens all come back as
    /// `Unauthorized`; callers never learn which.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::unauthorized("Invalid or expired token"))
    }

    /// Build the session cookie carrying `token`.
    ///
    /// Production serves the frontend cross-site, so the cookie needs
    /// `SameSite=None; Secure`; development runs over plain HTTP and
    /// uses `SameSite=Strict` instead.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = Cookie::new(TOKEN_COOKIE, token);
        cookie.set_http_only(true);
        cookie.set_path("/");
        if self.production {
            cookie.set_same_site(SameSite::None);
            cookie.set_secure(true);
        } else {
            cookie.set_same_site(SameSite::Strict);
            cookie.set_secure(false);
        }
        cookie
    }

    /// Cookie used to clear the session on logout.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::new(TOKEN_COOKIE, "");
        cookie.set_path("/");
        cookie
    }
}

/// Verified identity of the requester.
///
/// Extracting this is the authorization guard: absent or invalid
/// tokens reject the request with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

impl AuthUser {
    /// Require that the verified identity matches the owner email the
    /// request is scoped to; 403 on mismatch.
    pub fn require_owner(&self, email: &str) -> Result<(), ApiError> {
        if self.email != email {
            return Err(ApiError::forbidden("Forbidden Access!"));
        }
        Ok(())
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(TOKEN_COOKIE)
            .ok_or_else(|| ApiError::unauthorized("Missing token cookie"))?;

        let claims = state.tokens.verify(cookie.value())?;
        Ok(AuthUser {
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 3600, false)
    }

    #[test]
    fn test_issue_then_verify_round_trips_identity() {
        let tokens = service();
        let token = tokens.issue("user@example.com").unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_rejected() {
        let tokens = service();
        let token = tokens.issue("user@example.com").unwrap();

        // Flip a character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'a' { 'b' } else { 'a' });

        assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue("user@example.com").unwrap();
        let other = TokenService::new("another-secret", 3600, false);
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // TTL two hours in the past, well beyond validation leeway
        let tokens = TokenService::new("test-secret", -7200, false);
        let token = tokens.issue("user@example.com").unwrap();
        assert!(service().verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(service().verify("not-a-jwt").is_err());
    }

    #[test]
    fn test_development_cookie_flags() {
        let cookie = service().session_cookie("abc".to_string());
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_production_cookie_flags() {
        let tokens = TokenService::new("test-secret", 3600, true);
        let cookie = tokens.session_cookie("abc".to_string());
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn test_require_owner() {
        let user = AuthUser {
            email: "me@example.com".to_string(),
        };
        assert!(user.require_owner("me@example.com").is_ok());
        assert!(user.require_owner("you@example.com").is_err());
    }
}
