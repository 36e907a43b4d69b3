//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from the session
//!   cookie and enforces the CSRF check on mutating requests.

pub mod auth;
