//! Persisted data models.

mod guild;
mod temp_action;

pub use guild::GuildData;
pub use temp_action::{ActionKind, TempAction};
