//! Warden cache - per-guild memory cache for a moderation bot.
//!
//! Sits between the bot's hot paths and MongoDB, keeping the most frequently
//! read per-guild values (mute role, pending temporary actions) resident in
//! memory for the process lifetime.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - Store abstraction and MongoDB integration
//! - `cache` - The memory cache and its reconciliation report
//! - `error` - Store fault type

pub mod cache;
pub mod config;
pub mod database;
pub mod error;

pub use cache::{CacheReport, MemoryCache};
pub use config::Config;
pub use database::{ActionKind, GuildData, GuildStore, MongoStore, TempAction};
pub use error::StoreError;
