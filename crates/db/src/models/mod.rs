//! Entity models and DTOs, one module per table.

pub mod category;
pub mod comment;
pub mod entry;
pub mod published;
pub mod session;
pub mod user;
