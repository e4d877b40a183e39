//! Repository for the `assets` table.
//!
//! Provides insert, lookup, and the filtered/ordered catalog query.

use creatorhub_core::catalog::{like_pattern, AssetOrder};
use creatorhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetQuery, CreateAsset};

/// Column list for `assets` queries.
const ASSET_COLUMNS: &str = "\
    id, title, description, preview_url, price, \
    category_id, creator_id, created_at, \
    tags, featured, thumbnails, download_count, rating";

/// `ORDER BY` clause for each catalog ordering. `id` breaks ties so equal
/// keys come back in insertion order.
fn order_clause(order: AssetOrder) -> &'static str {
    match order {
        AssetOrder::Insertion => "id",
        AssetOrder::Newest => "created_at DESC, id",
        AssetOrder::MostDownloaded => "download_count DESC, id",
    }
}

/// Provides insert and query operations for assets.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset. Counters start at zero.
    pub async fn create(
        pool: &PgPool,
        creator_id: DbId,
        input: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let tags = input.tags.clone().unwrap_or_default();
        let thumbnails = input.thumbnails.clone().unwrap_or_default();

        let query = format!(
            "INSERT INTO assets (\
                title, description, preview_url, price, \
                category_id, creator_id, tags, featured, thumbnails\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {ASSET_COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(&input.title)
            .bind(input.description.as_deref())
            .bind(&input.preview_url)
            .bind(input.price)
            .bind(input.category_id)
            .bind(creator_id)
            .bind(&tags)
            .bind(input.featured.unwrap_or(false))
            .bind(&thumbnails)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Filter, order, and limit asset rows.
    pub async fn query(pool: &PgPool, params: &AssetQuery) -> Result<Vec<Asset>, sqlx::Error> {
        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if params.filter.category_id.is_some() {
            conditions.push(format!("category_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.filter.creator_id.is_some() {
            conditions.push(format!("creator_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.filter.featured.is_some() {
            conditions.push(format!("featured = ${bind_idx}"));
            bind_idx += 1;
        }
        if params.search.is_some() {
            conditions.push(format!(
                "(title ILIKE ${bind_idx} \
                  OR description ILIKE ${bind_idx} \
                  OR EXISTS (SELECT 1 FROM unnest(tags) AS tag WHERE tag ILIKE ${bind_idx}))"
            ));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // LIMIT NULL returns every row.
        let query = format!(
            "SELECT {ASSET_COLUMNS} FROM assets {where_clause} \
             ORDER BY {order} LIMIT ${bind_idx}",
            order = order_clause(params.order),
        );

        let mut q = sqlx::query_as::<_, Asset>(&query);

        // Bind dynamic parameters in order.
        if let Some(category_id) = params.filter.category_id {
            q = q.bind(category_id);
        }
        if let Some(creator_id) = params.filter.creator_id {
            q = q.bind(creator_id);
        }
        if let Some(featured) = params.filter.featured {
            q = q.bind(featured);
        }
        if let Some(ref needle) = params.search {
            q = q.bind(like_pattern(needle));
        }

        q = q.bind(params.limit);
        q.fetch_all(pool).await
    }
}
