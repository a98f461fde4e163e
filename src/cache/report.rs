//! Reconciliation report comparing cache population to the store.

use std::fmt;

/// Cached-vs-persisted counts, one pair per metric.
///
/// Produced by [`MemoryCache::debug_report`](super::MemoryCache::debug_report).
/// A mismatch between the two sides of a pair is diagnostic information, not
/// an error: the cache fills lazily, so cached counts normally trail the
/// persisted totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheReport {
    /// Guilds whose mute role is loaded in cache (including confirmed-unset).
    pub mute_roles_cached: usize,
    /// Guilds with a mute role configured in the store.
    pub mute_roles_total: usize,
    /// Guilds whose temp-action collection is loaded in cache.
    pub guild_temp_actions_cached: usize,
    /// Guilds known to the store.
    pub guild_temp_actions_total: usize,
    /// Temp actions held across all cached collections.
    pub temp_actions_cached: usize,
    /// Temp actions persisted across all guilds.
    pub temp_actions_total: usize,
}

impl fmt::Display for CacheReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}/{} mute roles loaded in cache.",
            self.mute_roles_cached, self.mute_roles_total
        )?;
        writeln!(
            f,
            "{}/{} guilds with temp actions loaded in cache.",
            self.guild_temp_actions_cached, self.guild_temp_actions_total
        )?;
        write!(
            f,
            "{}/{} temporary actions loaded in cache.",
            self.temp_actions_cached, self.temp_actions_total
        )
    }
}
