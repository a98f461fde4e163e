//! Database module exports.

mod models;
mod mongo;
mod store;

pub use models::{ActionKind, GuildData, TempAction};
pub use mongo::MongoStore;
pub use store::GuildStore;
