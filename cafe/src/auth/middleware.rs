//! Token validation on the way into protected handlers.
//!
//! `Claims` is an extractor: any handler that takes it only runs when the
//! request carries a bearer token that verifies against the configured
//! secret.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use super::{AuthError, Claims};
use crate::AppState;

#[async_trait]
impl FromRequestParts<AppState> for Claims {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::MalformedHeader)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MalformedHeader)?;

        let key = DecodingKey::from_secret(state.config.jwt_secret.as_bytes());
        let data = decode::<Claims>(token, &key, &Validation::new(Algorithm::HS256))
            .map_err(|err| {
                tracing::warn!(error = %err, "token rejected");
                AuthError::InvalidToken
            })?;
        Ok(data.claims)
    }
}
