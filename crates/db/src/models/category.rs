//! Category reference data model.

use serde::Serialize;
use sqlx::FromRow;

/// One `(code, label)` pair from the `categories` reference table.
///
/// The row id only fixes the display order and is not carried around.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub code: String,
    pub label: String,
}
