//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `kalorio_db` and map errors
//! via [`crate::error::AppError`].

pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod entries;
pub mod published;
