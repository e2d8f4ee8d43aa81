//! Record service: cached listing, search, summaries, and mutations.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use madrasa_cache::keys;
use madrasa_core::result::AppResult;
use madrasa_core::traits::CacheProvider;
use madrasa_entity::record::Record;
use madrasa_entity::search;

use crate::context::RequestContext;
use crate::scope::ScopeResolver;
use crate::traits::RecordStore;

/// CRUD for one record kind within the actor's madrasa.
///
/// Lists are cached per (kind, madrasa). Every successful mutation drops the
/// cached list before returning.
///
/// Each cache key carries a generation that mutations bump. A list read only
/// keeps what it cached if no mutation happened since it started reading.
#[derive(Debug, Clone)]
pub struct RecordService<R: Record> {
    store: Arc<dyn RecordStore<R>>,
    scope: Arc<ScopeResolver>,
    cache: Arc<dyn CacheProvider>,
    list_ttl: Duration,
    generations: Arc<DashMap<String, u64>>,
}

impl<R: Record> RecordService<R> {
    /// Creates a new record service.
    pub fn new(
        store: Arc<dyn RecordStore<R>>,
        scope: Arc<ScopeResolver>,
        cache: Arc<dyn CacheProvider>,
        list_ttl: Duration,
    ) -> Self {
        Self {
            store,
            scope,
            cache,
            list_ttl,
            generations: Arc::new(DashMap::new()),
        }
    }

    /// All records of the actor's madrasa in display order.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<R>> {
        let madrasa = self.scope.resolve(ctx).await?;
        self.list_for(&madrasa).await
    }

    /// Records matching `query` (case-insensitive substring over the kind's
    /// searchable fields), in display order.
    pub async fn search(&self, ctx: &RequestContext, query: &str) -> AppResult<Vec<R>> {
        let records = self.list(ctx).await?;
        Ok(search::filter(&records, query))
    }

    /// Totals for the list header, given the current search.
    pub async fn summary(&self, ctx: &RequestContext, query: &str) -> AppResult<R::Summary> {
        let all = self.list(ctx).await?;
        let matching = search::filter(&all, query);
        Ok(R::summarize(&all, &matching))
    }

    /// Validate and insert a record owned by the actor's madrasa.
    pub async fn create(&self, ctx: &RequestContext, data: R::Create) -> AppResult<R> {
        data.validate()?;
        let madrasa = self.scope.resolve(ctx).await?;

        let record = self
            .store
            .create(&madrasa, Some(ctx.actor_id), &data)
            .await?;
        self.invalidate(&madrasa).await;

        info!(
            kind = R::KIND,
            record_id = %record.id(),
            madrasa = %madrasa,
            actor_id = %ctx.actor_id,
            "Record created"
        );
        Ok(record)
    }

    /// Apply a partial update.
    pub async fn update(&self, ctx: &RequestContext, id: Uuid, patch: R::Patch) -> AppResult<R> {
        patch.validate()?;
        let madrasa = self.scope.resolve(ctx).await?;

        let record = self.store.update(&madrasa, id, &patch).await?;
        self.invalidate(&madrasa).await;

        info!(
            kind = R::KIND,
            record_id = %id,
            actor_id = %ctx.actor_id,
            "Record updated"
        );
        Ok(record)
    }

    /// Delete a record.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let madrasa = self.scope.resolve(ctx).await?;

        self.store.delete(&madrasa, id).await?;
        self.invalidate(&madrasa).await;

        info!(
            kind = R::KIND,
            record_id = %id,
            actor_id = %ctx.actor_id,
            "Record deleted"
        );
        Ok(())
    }

    async fn list_for(&self, madrasa: &str) -> AppResult<Vec<R>> {
        let key = keys::record_list(R::TABLE, madrasa);

        match self.cache.get(&key).await {
            Ok(Some(json)) => match serde_json::from_str::<Vec<R>>(&json) {
                Ok(records) => {
                    debug!(kind = R::KIND, %key, "List served from cache");
                    return Ok(records);
                }
                Err(e) => warn!(kind = R::KIND, %key, error = %e, "Discarding unreadable cached list"),
            },
            Ok(None) => {}
            Err(e) => warn!(kind = R::KIND, %key, error = %e, "List cache read failed"),
        }

        let started = self.generation(&key);
        let records = self.store.list(madrasa).await?;

        if self.generation(&key) != started {
            debug!(kind = R::KIND, %key, "List changed while loading; not caching");
            return Ok(records);
        }

        match serde_json::to_string(&records) {
            Ok(json) => {
                if let Err(e) = self.cache.set(&key, &json, self.list_ttl).await {
                    warn!(kind = R::KIND, %key, error = %e, "List cache write failed");
                }
                // A mutation may have landed between the check and the write.
                if self.generation(&key) != started {
                    self.drop_cached(&key).await;
                }
            }
            Err(e) => warn!(kind = R::KIND, error = %e, "Failed to serialize list for cache"),
        }

        Ok(records)
    }

    fn generation(&self, key: &str) -> u64 {
        self.generations.get(key).map(|g| *g).unwrap_or(0)
    }

    async fn invalidate(&self, madrasa: &str) {
        let key = keys::record_list(R::TABLE, madrasa);
        *self.generations.entry(key.clone()).or_insert(0) += 1;
        self.drop_cached(&key).await;
    }

    async fn drop_cached(&self, key: &str) {
        if let Err(e) = self.cache.delete(key).await {
            warn!(kind = R::KIND, %key, error = %e, "Failed to invalidate cached list");
        }
    }
}
