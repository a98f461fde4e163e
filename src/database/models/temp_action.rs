//! Temporary moderation action models.
//!
//! A temp action is a mute or ban that must be lifted when its expiry passes.

use serde::{Deserialize, Serialize};

/// Kind of temporary action applied to a member.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Mute,
    Ban,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Ban => "ban",
        }
    }
}

/// A temporary action pending on one member of a guild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TempAction {
    /// What was applied to the member.
    pub kind: ActionKind,

    /// Unix timestamp at which the action must be lifted.
    pub until: i64,

    /// Reason given by the moderator (optional).
    #[serde(default)]
    pub reason: Option<String>,

    /// Admin who issued the action.
    pub author_id: u64,
}

impl TempAction {
    pub fn new(kind: ActionKind, until: i64, reason: Option<String>, author_id: u64) -> Self {
        Self {
            kind,
            until,
            reason,
            author_id,
        }
    }

    /// Check if the action is due to be lifted.
    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.until
    }
}
