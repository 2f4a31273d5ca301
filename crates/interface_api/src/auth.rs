//! Admin authorization
//!
//! Mutating configuration requests carry an `x-admin-secret` header that must
//! equal the server-held secret. This is a deliberate single capability
//! check, not a session or token scheme.

use axum::http::HeaderMap;

/// Header carrying the admin capability
pub const ADMIN_SECRET_HEADER: &str = "x-admin-secret";

/// Checks the admin secret header against the configured secret
///
/// Returns false when the header is missing, not valid UTF-8, or does not
/// match the expected secret.
pub fn is_admin(headers: &HeaderMap, expected_secret: &str) -> bool {
    headers
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|secret| secret == expected_secret)
}
