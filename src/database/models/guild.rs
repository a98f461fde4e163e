//! Per-guild persisted document.

use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use super::temp_action::TempAction;

/// Everything persisted for one guild.
///
/// Stored as one document per guild; `temp_actions` is keyed by the member's
/// user id. BSON requires string map keys, so the id is stringified on the
/// wire and parsed back when loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuildData {
    /// MongoDB document ID
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Discord guild ID (indexed)
    pub guild_id: i64,

    /// Configured mute role, if any.
    #[serde(default)]
    pub mute_role: Option<i64>,

    /// Pending temporary actions, keyed by stringified user id.
    #[serde(default)]
    pub temp_actions: HashMap<String, TempAction>,
}

impl GuildData {
    /// Create an empty document for a guild.
    pub fn new(guild_id: i64) -> Self {
        Self {
            id: None,
            guild_id,
            mute_role: None,
            temp_actions: HashMap::new(),
        }
    }

    /// Temp actions with user ids parsed back to integers.
    ///
    /// Entries whose key does not parse are skipped; they cannot address a
    /// real member.
    pub fn temp_actions_by_user(&self) -> HashMap<u64, TempAction> {
        self.temp_actions
            .iter()
            .filter_map(|(id, action)| Some((id.parse().ok()?, action.clone())))
            .collect()
    }
}
