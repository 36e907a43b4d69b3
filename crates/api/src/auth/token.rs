//! Opaque session and CSRF token generation.
//!
//! The session cookie value is random and opaque; only its SHA-256 hex
//! digest is stored, so a leaked database dump does not yield usable
//! cookies. The CSRF token is stored and compared in plaintext -- it is
//! only a proof that the caller can read responses for this session.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a new session token.
///
/// Returns `(plaintext, hash)`: the plaintext goes into the cookie, the
/// hash into the database.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie value against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Generate a random CSRF token, issued once per login session.
pub fn generate_csrf_token() -> String {
    Uuid::new_v4().simple().to_string()
}
