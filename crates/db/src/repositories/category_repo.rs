//! Repository for the `categories` reference table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Read-only access to the category reference data.
///
/// Callers normally go through [`crate::CategoryRegistry`], which memoizes
/// the result for the process lifetime.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in the table's natural (insertion) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT code, label FROM categories ORDER BY id")
            .fetch_all(pool)
            .await
    }
}
