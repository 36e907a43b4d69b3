//! Shared primitives for the Kalorio food diary service.
//!
//! Holds the types and error taxonomy used by both the data-access layer
//! (`kalorio-db`) and the HTTP service (`kalorio-api`).

pub mod error;
pub mod types;
