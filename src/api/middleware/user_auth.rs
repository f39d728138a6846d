//! Caller identity resolution from bearer tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::CurrentUser;

/// Extractor that resolves `Authorization: Bearer <jwt>` into the caller.
///
/// Missing, malformed, expired or badly signed tokens are rejected with 401.
#[derive(Debug, Clone)]
pub struct RequireUser(pub CurrentUser);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state.jwt_service.validate(&token).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            ApiError::unauthorized("Invalid or expired token")
        })?;

        let user = claims.current_user().map_err(ApiError::from)?;
        debug!(uid = %user.uid(), "Resolved caller");

        Ok(RequireUser(user))
    }
}

/// Token from an `Authorization: Bearer` header, or 401
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    match token {
        Some(token) => Ok(token.to_string()),
        None => Err(ApiError::unauthorized(
            "Authentication required. Provide a token via 'Authorization: Bearer <token>'",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let token = extract_bearer_token(&headers("Bearer eyJhbGciOiJIUzI1NiJ9.test")).unwrap();
        assert_eq!(token, "eyJhbGciOiJIUzI1NiJ9.test");
    }

    #[test]
    fn test_missing_token() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_other_scheme_is_rejected() {
        assert!(extract_bearer_token(&headers("Basic dXNlcjpwYXNz")).is_err());
    }

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(extract_bearer_token(&headers("Bearer    ")).is_err());
    }

    #[test]
    fn test_token_is_trimmed() {
        let token = extract_bearer_token(&headers("Bearer   abc.def   ")).unwrap();
        assert_eq!(token, "abc.def");
    }
}
