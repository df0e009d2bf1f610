use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::LedgerError;
use crate::router::AppState;

fn token_matches(supplied: &str, expected: &str) -> bool {
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}

/// Ensure the inbound request carries the shared-secret token.
/// Accepts any of:
/// - Query string: `?token=...`
/// - Header: `x-ledger-token: ...`
/// - Header: `Authorization: Bearer <token>`
///
/// Comparison is constant-time. Runs before any ledger operation; a mismatch
/// short-circuits the request with 401 and no side effects.
pub fn ensure_authorized(
    headers: &HeaderMap,
    query: Option<&str>,
    expected: &str,
) -> Result<(), LedgerError> {
    if let Some(hv) = headers.get("x-ledger-token").and_then(|v| v.to_str().ok())
        && token_matches(hv, expected)
    {
        return Ok(());
    }

    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        let auth = auth.trim();
        if let Some(token) = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            && token_matches(token, expected)
        {
            return Ok(());
        }
    }

    if let Some(qs) = query {
        for (k, v) in url::form_urlencoded::parse(qs.as_bytes()) {
            if k == "token" && token_matches(&v, expected) {
                return Ok(());
            }
        }
    }

    warn!("rejected request with invalid or missing token");
    Err(LedgerError::Unauthorized)
}

/// Extractor guarding every protected route. Place it before the body
/// extractor in handler signatures.
#[derive(Debug, Clone, Copy)]
pub struct RequireToken;

impl FromRequestParts<AppState> for RequireToken {
    type Rejection = LedgerError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        ensure_authorized(&parts.headers, parts.uri.query(), &state.token)?;
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_token_authorizes() {
        let headers = HeaderMap::new();
        assert!(ensure_authorized(&headers, Some("token=pwd"), "pwd").is_ok());
    }

    #[test]
    fn header_token_authorizes() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ledger-token", "pwd".parse().unwrap());
        assert!(ensure_authorized(&headers, None, "pwd").is_ok());
    }

    #[test]
    fn bearer_token_authorizes() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer pwd".parse().unwrap());
        assert!(ensure_authorized(&headers, None, "pwd").is_ok());
    }

    #[test]
    fn wrong_or_missing_token_is_unauthorized() {
        let headers = HeaderMap::new();
        assert!(matches!(
            ensure_authorized(&headers, Some("token=nope"), "pwd"),
            Err(LedgerError::Unauthorized)
        ));
        assert!(matches!(
            ensure_authorized(&headers, None, "pwd"),
            Err(LedgerError::Unauthorized)
        ));
    }
}
