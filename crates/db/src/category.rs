//! Process-lifetime cache over the category reference table.
//!
//! The table is tiny and effectively static, so it is loaded once on first
//! use and memoized for the rest of the process. Staleness after an
//! out-of-band table change is accepted; [`CategoryRegistry::invalidate`]
//! exists as the explicit reset hook. Concurrent first access may populate
//! twice, which is harmless because population is idempotent.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::models::category::Category;
use crate::repositories::CategoryRepo;

/// Code substituted for any candidate that does not match a known category.
pub const DEFAULT_CATEGORY: &str = "lunch";

/// Label paired with [`DEFAULT_CATEGORY`] when the reference table is empty.
const FALLBACK_LABEL: &str = "Lounas";

/// Lazily-initialized, read-mostly view of the `categories` table.
///
/// Owned by the application state rather than a process global, so tests
/// can construct independent instances.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    cache: RwLock<Option<Arc<Vec<Category>>>>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered `(code, label)` pairs for display.
    ///
    /// Loaded from the database on first call and cached afterwards. An
    /// empty reference table is not an error: it degrades to the single
    /// built-in fallback pair.
    pub async fn choices(&self, pool: &PgPool) -> Result<Arc<Vec<Category>>, sqlx::Error> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let mut categories = CategoryRepo::list(pool).await?;
        if categories.is_empty() {
            categories.push(Category {
                code: DEFAULT_CATEGORY.to_string(),
                label: FALLBACK_LABEL.to_string(),
            });
        }

        let categories = Arc::new(categories);
        *self.cache.write().await = Some(Arc::clone(&categories));
        Ok(categories)
    }

    /// Return `candidate` unchanged if it is a known code, else the default.
    ///
    /// Idempotent: normalizing an already-normalized code is a no-op.
    pub async fn normalize(&self, pool: &PgPool, candidate: &str) -> Result<String, sqlx::Error> {
        let choices = self.choices(pool).await?;
        if choices.iter().any(|c| c.code == candidate) {
            Ok(candidate.to_string())
        } else {
            Ok(DEFAULT_CATEGORY.to_string())
        }
    }

    /// Display label for a code, or the code itself when unknown.
    pub async fn label_for(&self, pool: &PgPool, code: &str) -> Result<String, sqlx::Error> {
        let choices = self.choices(pool).await?;
        Ok(choices
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.label.clone())
            .unwrap_or_else(|| code.to_string()))
    }

    /// Drop the cached table so the next call reloads it.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }
}
