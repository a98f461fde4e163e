//! Store abstraction consumed by the cache.
//!
//! The cache only ever talks to this trait. The production implementation is
//! [`MongoStore`](super::MongoStore); tests substitute an instrumented
//! in-memory double.
//!
//! Absence is a value everywhere: an unset mute role is `Ok(None)` and a
//! guild with no actions is `Ok(empty map)`. The only error any method may
//! return is [`StoreError::Unavailable`].

use std::collections::HashMap;

use async_trait::async_trait;

use crate::database::models::{GuildData, TempAction};
use crate::error::StoreError;

/// Asynchronous durable store holding one document per guild.
#[async_trait]
pub trait GuildStore: Send + Sync {
    /// Full snapshot of every known guild, keyed by guild id.
    ///
    /// Expensive; used only by the reconciliation report, never to warm the
    /// cache.
    async fn all_guilds(&self) -> Result<HashMap<i64, GuildData>, StoreError>;

    /// The guild's configured mute role, or `None` if unset.
    async fn mute_role(&self, guild_id: i64) -> Result<Option<i64>, StoreError>;

    /// Persist the guild's mute role. Idempotent upsert.
    async fn set_mute_role(&self, guild_id: i64, role_id: i64) -> Result<(), StoreError>;

    /// Full temp-action map for a guild; empty if none are pending.
    async fn temp_actions(&self, guild_id: i64) -> Result<HashMap<u64, TempAction>, StoreError>;

    /// Upsert one member's temp action.
    async fn set_temp_action(
        &self,
        guild_id: i64,
        user_id: u64,
        action: TempAction,
    ) -> Result<(), StoreError>;

    /// Delete one member's temp action. No-op if absent.
    async fn clear_temp_action(&self, guild_id: i64, user_id: u64) -> Result<(), StoreError>;

    /// Replace the guild's entire persisted temp-action map.
    async fn set_temp_actions(
        &self,
        guild_id: i64,
        actions: HashMap<u64, TempAction>,
    ) -> Result<(), StoreError>;
}
