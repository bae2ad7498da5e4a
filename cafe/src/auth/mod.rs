//! Bearer-token authorization for the cafe backend.
//!
//! Requests to protected endpoints carry a JWT whose `permissions` claim
//! lists what the caller may do; handlers check the permission they need
//! after extracting the claims.

pub mod errors;
pub mod middleware;
pub mod models;

pub use errors::AuthError;
pub use models::Claims;
