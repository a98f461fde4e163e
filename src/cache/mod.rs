//! Cache module - per-guild memory cache in front of the guild store.
//!
//! The hottest per-guild values (mute role, pending temp actions) are kept
//! resident for the process lifetime and filled lazily. Reads are
//! read-through, writes are write-through with the store acknowledged first.
//!
//! ## Usage
//!
//! ```ignore
//! let cache = MemoryCache::new(MongoStore::connect(&config).await?);
//!
//! let role_id = cache.mute_role(guild_id).await?;
//! cache.add_temp_action(guild_id, user_id, action).await?;
//! ```

mod memory;
mod report;

pub use memory::MemoryCache;
pub use report::CacheReport;
