//! Catalog aggregation: asset rows joined with creator and category summaries.
//!
//! The catalog only reads. Every call asks the store for fresh rows and
//! resolves references anew; nothing is cached between calls. A reference
//! that does not resolve aborts the whole call with
//! [`CoreError::IntegrityFault`] instead of dropping the asset.

use std::collections::HashMap;
use std::sync::Arc;

use creatorhub_core::catalog::{
    normalize_search_query, validate_limit, AssetOrder, DEFAULT_SHOWCASE_LIMIT,
};
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;

use crate::models::asset::{Asset, AssetFilter, AssetQuery, AssetWithDetails, CreatorSummary};
use crate::models::category::CategorySummary;
use crate::store::{EntityStore, StoreResult};

/// Read-side view over an [`EntityStore`].
#[derive(Clone)]
pub struct Catalog {
    store: Arc<dyn EntityStore>,
}

impl Catalog {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// List assets matching `filter` in insertion order.
    ///
    /// `limit` truncates after filtering and before details are attached.
    pub async fn list_assets(
        &self,
        filter: &AssetFilter,
        limit: Option<i64>,
    ) -> StoreResult<Vec<AssetWithDetails>> {
        self.run(AssetQuery {
            filter: filter.clone(),
            limit: validate_limit(limit)?,
            ..AssetQuery::default()
        })
        .await
    }

    /// Fetch one asset with details. `Ok(None)` when the asset does not exist.
    pub async fn get_asset_details(&self, id: DbId) -> StoreResult<Option<AssetWithDetails>> {
        match self.store.get_asset(id).await? {
            Some(asset) => {
                let mut details = self.attach_details(vec![asset]).await?;
                Ok(details.pop())
            }
            None => Ok(None),
        }
    }

    /// Featured assets in insertion order (default limit 4).
    pub async fn featured(&self, limit: Option<i64>) -> StoreResult<Vec<AssetWithDetails>> {
        self.showcase(
            AssetFilter {
                featured: Some(true),
                ..AssetFilter::default()
            },
            AssetOrder::Insertion,
            limit,
        )
        .await
    }

    /// Newest assets first (default limit 4).
    pub async fn recent(&self, limit: Option<i64>) -> StoreResult<Vec<AssetWithDetails>> {
        self.showcase(AssetFilter::default(), AssetOrder::Newest, limit)
            .await
    }

    /// Most-downloaded assets first (default limit 4).
    pub async fn trending(&self, limit: Option<i64>) -> StoreResult<Vec<AssetWithDetails>> {
        self.showcase(AssetFilter::default(), AssetOrder::MostDownloaded, limit)
            .await
    }

    /// Case-insensitive substring search over title, description and tags.
    ///
    /// An empty query is rejected with [`CoreError::Validation`] before the
    /// store is queried.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<AssetWithDetails>> {
        let needle = normalize_search_query(query)?;
        self.run(AssetQuery {
            search: Some(needle),
            ..AssetQuery::default()
        })
        .await
    }

    async fn showcase(
        &self,
        filter: AssetFilter,
        order: AssetOrder,
        limit: Option<i64>,
    ) -> StoreResult<Vec<AssetWithDetails>> {
        let limit = validate_limit(limit)?.unwrap_or(DEFAULT_SHOWCASE_LIMIT);
        self.run(AssetQuery {
            filter,
            order,
            limit: Some(limit),
            ..AssetQuery::default()
        })
        .await
    }

    async fn run(&self, query: AssetQuery) -> StoreResult<Vec<AssetWithDetails>> {
        let rows = self.store.query_assets(&query).await?;
        self.attach_details(rows).await
    }

    /// Join each asset with its creator and category, preserving order.
    ///
    /// Lookups are memoized for the duration of this call only.
    async fn attach_details(&self, rows: Vec<Asset>) -> StoreResult<Vec<AssetWithDetails>> {
        let mut creators: HashMap<DbId, CreatorSummary> = HashMap::new();
        let mut categories: HashMap<DbId, CategorySummary> = HashMap::new();
        let mut details = Vec::with_capacity(rows.len());

        for asset in rows {
            let creator = match creators.get(&asset.creator_id) {
                Some(summary) => summary.clone(),
                None => {
                    let user = self
                        .store
                        .get_user(asset.creator_id)
                        .await?
                        .ok_or_else(|| integrity_fault(&asset, "creator", asset.creator_id))?;
                    let summary = CreatorSummary::from(&user);
                    creators.insert(asset.creator_id, summary.clone());
                    summary
                }
            };

            let category = match categories.get(&asset.category_id) {
                Some(summary) => summary.clone(),
                None => {
                    let row = self
                        .store
                        .get_category(asset.category_id)
                        .await?
                        .ok_or_else(|| integrity_fault(&asset, "category", asset.category_id))?;
                    let summary = CategorySummary::from(&row);
                    categories.insert(asset.category_id, summary.clone());
                    summary
                }
            };

            details.push(AssetWithDetails {
                asset,
                creator,
                category,
            });
        }

        Ok(details)
    }
}

fn integrity_fault(asset: &Asset, entity: &'static str, missing_id: DbId) -> CoreError {
    tracing::error!(
        asset_id = asset.id,
        entity,
        missing_id,
        "Asset references a row that does not exist",
    );
    CoreError::IntegrityFault {
        asset_id: asset.id,
        entity,
        missing_id,
    }
}
