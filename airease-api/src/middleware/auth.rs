use axum::http::HeaderMap;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

// ============================================================================
// JWT Claims
// ============================================================================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserClaims {
    pub sub: String,
    pub email: Option<String>,
    pub exp: usize,
}

/// Extracts the bearer token, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// A caller is authenticated when it presents a valid, unexpired token.
/// Anything else, including a malformed token, is treated as anonymous.
pub fn is_authenticated(headers: &HeaderMap, secret: &str) -> bool {
    let Some(token) = bearer_token(headers) else {
        return false;
    };

    match decode::<UserClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    ) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("Rejected bearer token: {}", e);
            false
        }
    }
}
