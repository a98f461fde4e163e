//! Per-guild memory cache over the guild store.
//!
//! Keeps the most frequently read per-guild values resident so hot paths do
//! not hit the database on every event. Two record families are cached: the
//! configured mute role (one optional value per guild) and the pending temp
//! actions (one map per guild, keyed by user id).
//!
//! Both caches fill lazily and never evict; entries live for the process
//! lifetime. Every write goes to the store first and is mirrored into memory
//! only after the store acknowledged it, so a crash between the two leaves
//! the cache stale, never ahead of the store.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::{debug, info};

use super::report::CacheReport;
use crate::database::{GuildStore, TempAction};
use crate::error::StoreError;

/// Process-wide cache for the hottest per-guild values.
///
/// Construct one instance at startup and share it; all methods take `&self`.
/// Reads are read-through, writes are write-through. A cached `None` mute
/// role means "loaded, confirmed unset upstream" and is served without a
/// store call; only a guild never looked up at all triggers a fetch.
///
/// Collection reads return an owned snapshot, never a live reference into
/// the cache: all mutation must funnel through [`add_temp_action`],
/// [`remove_temp_action`] or [`bulk_remove_temp_actions`] so the store is
/// always written first.
///
/// [`add_temp_action`]: MemoryCache::add_temp_action
/// [`remove_temp_action`]: MemoryCache::remove_temp_action
/// [`bulk_remove_temp_actions`]: MemoryCache::bulk_remove_temp_actions
pub struct MemoryCache<S> {
    store: S,
    /// Guild id -> configured mute role. A present `None` is a confirmed
    /// absence, distinct from a missing key (never loaded).
    mute_roles: DashMap<i64, Option<i64>>,
    /// Guild id -> pending temp actions by user id. A present empty map
    /// means "loaded, currently none pending".
    temp_actions: DashMap<i64, HashMap<u64, TempAction>>,
}

impl<S: GuildStore> MemoryCache<S> {
    /// Create an empty cache in front of `store`.
    pub fn new(store: S) -> Self {
        Self {
            store,
            mute_roles: DashMap::new(),
            temp_actions: DashMap::new(),
        }
    }

    /// Access the backing store directly, bypassing the cache.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the guild's mute role, loading it on first access.
    ///
    /// A store failure propagates and leaves no cache entry behind.
    pub async fn mute_role(&self, guild_id: i64) -> Result<Option<i64>, StoreError> {
        if let Some(role_id) = self.mute_roles.get(&guild_id) {
            return Ok(*role_id);
        }

        let role_id = self.store.mute_role(guild_id).await?;
        self.mute_roles.insert(guild_id, role_id);
        debug!("Loaded mute role for guild {}", guild_id);

        Ok(role_id)
    }

    /// Persist the guild's mute role, then mirror it into the cache.
    ///
    /// On store failure the cache keeps its previous value.
    pub async fn set_mute_role(&self, guild_id: i64, role_id: i64) -> Result<(), StoreError> {
        self.store.set_mute_role(guild_id, role_id).await?;
        self.mute_roles.insert(guild_id, Some(role_id));

        Ok(())
    }

    /// Get all pending temp actions for a guild, loading them on first
    /// access. Returns an owned snapshot of the cached map.
    pub async fn temp_actions(&self, guild_id: i64) -> Result<HashMap<u64, TempAction>, StoreError> {
        if let Some(actions) = self.temp_actions.get(&guild_id) {
            return Ok(actions.clone());
        }

        let actions = self.store.temp_actions(guild_id).await?;
        self.temp_actions.insert(guild_id, actions.clone());
        debug!(
            "Loaded {} temp actions for guild {}",
            actions.len(),
            guild_id
        );

        Ok(actions)
    }

    /// Get one member's pending temp action, if any. A miss is `None`,
    /// never an error.
    pub async fn temp_action(
        &self,
        guild_id: i64,
        user_id: u64,
    ) -> Result<Option<TempAction>, StoreError> {
        Ok(self.temp_actions(guild_id).await?.get(&user_id).cloned())
    }

    /// Persist one member's temp action, then patch the cached map.
    ///
    /// A guild with no cached collection gets seeded with just this entry;
    /// no reason to pull the whole collection right after writing one record.
    pub async fn add_temp_action(
        &self,
        guild_id: i64,
        user_id: u64,
        action: TempAction,
    ) -> Result<(), StoreError> {
        self.store
            .set_temp_action(guild_id, user_id, action.clone())
            .await?;
        self.temp_actions
            .entry(guild_id)
            .or_default()
            .insert(user_id, action);

        Ok(())
    }

    /// Delete one member's temp action from store and cache.
    ///
    /// Succeeds silently when the guild or member is not cached; an absent
    /// in-memory entry is a safe miss, and no entry is created for it.
    pub async fn remove_temp_action(&self, guild_id: i64, user_id: u64) -> Result<(), StoreError> {
        self.store.clear_temp_action(guild_id, user_id).await?;
        if let Some(mut actions) = self.temp_actions.get_mut(&guild_id) {
            actions.remove(&user_id);
        }

        Ok(())
    }

    /// Delete several members' temp actions in one store round-trip.
    ///
    /// The current collection is resolved (loading it if needed), filtered,
    /// written back to the store as a whole, and only then swapped into the
    /// cache wholesale. On store failure the cache keeps the pre-filter map.
    pub async fn bulk_remove_temp_actions(
        &self,
        guild_id: i64,
        user_ids: &[u64],
    ) -> Result<(), StoreError> {
        let mut actions = self.temp_actions(guild_id).await?;
        actions.retain(|user_id, _| !user_ids.contains(user_id));

        self.store.set_temp_actions(guild_id, actions.clone()).await?;
        self.temp_actions.insert(guild_id, actions);

        Ok(())
    }

    /// Compare cache population against a full store dump.
    ///
    /// Pulls every guild document in one call and counts both sides. The
    /// dump is diagnostic only and is never used to warm either cache. The
    /// report is logged at INFO and returned; mismatches are expected for a
    /// lazily filled cache and never an error.
    pub async fn debug_report(&self) -> Result<CacheReport, StoreError> {
        let snapshot = self.store.all_guilds().await?;

        let report = CacheReport {
            mute_roles_cached: self.mute_roles.len(),
            mute_roles_total: snapshot.values().filter(|g| g.mute_role.is_some()).count(),
            guild_temp_actions_cached: self.temp_actions.len(),
            guild_temp_actions_total: snapshot.len(),
            temp_actions_cached: self.temp_actions.iter().map(|e| e.value().len()).sum(),
            temp_actions_total: snapshot.values().map(|g| g.temp_actions.len()).sum(),
        };

        info!("Debug info requested\n{}", report);

        Ok(report)
    }
}
