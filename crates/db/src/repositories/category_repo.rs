//! Repository for the `categories` table.

use creatorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory};

const COLUMNS: &str = "id, name, description, icon_name, asset_count";

/// Provides create, lookup, and counter operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category with a zero asset count.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, description, icon_name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(&input.icon_name)
            .fetch_one(pool)
            .await
    }

    /// Find a category by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all categories in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Add one to `asset_count` in a single statement.
    ///
    /// Returns the new count, or `None` if no row with `id` exists.
    pub async fn increment_asset_count(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE categories SET asset_count = asset_count + 1 WHERE id = $1 \
             RETURNING asset_count",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
