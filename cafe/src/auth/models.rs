//! Claim structures carried by access tokens.

use serde::{Deserialize, Serialize};

use super::AuthError;

/// The claims a cafe access token carries. `exp` is checked during
/// decoding; `permissions` is checked per endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Claims {
    /// Rejects callers whose token does not grant `permission`.
    pub fn require(&self, permission: &str) -> Result<(), AuthError> {
        if self.permissions.iter().any(|p| p == permission) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(permission.to_owned()))
        }
    }
}
