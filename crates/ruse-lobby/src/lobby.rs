//! Lobby records and the snapshot types returned to callers.

use std::time::SystemTime;

use ruse_types::{LobbyId, Player, UserId};
use serde::{Deserialize, Serialize};

/// A named group of players waiting to play or mid-round.
///
/// Owned exclusively by the registry actor; callers only ever see
/// clones. `members` preserves insertion order — the first entry is
/// the creator, though that grants no special privilege. A lobby with
/// zero members never exists: the registry deletes it in the same
/// step that removes its last member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lobby {
    /// Unique id, never reused within the process lifetime.
    pub id: LobbyId,
    /// Display name, non-empty after trimming.
    pub name: String,
    /// Members in join order.
    pub members: Vec<Player>,
    /// Wall-clock creation time.
    pub created_at: SystemTime,
}

impl Lobby {
    /// Number of members.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the user is in this lobby's member list.
    pub fn contains(&self, user_id: UserId) -> bool {
        self.members.iter().any(|p| p.user_id == user_id)
    }

    /// Reduces this lobby to a listing row.
    pub fn summary(&self) -> LobbySummary {
        LobbySummary {
            id: self.id.clone(),
            name: self.name.clone(),
            member_count: self.members.len(),
        }
    }
}

/// One row of a lobby listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LobbySummary {
    /// The lobby's unique id.
    pub id: LobbyId,
    /// Display name.
    pub name: String,
    /// Number of members at snapshot time.
    pub member_count: usize,
}

/// The result of a successful leave.
///
/// Carries enough context for the transport to phrase its reply
/// ("you left X" vs "you left X and it was deleted") without another
/// registry call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveOutcome {
    /// The lobby that was left.
    pub lobby_id: LobbyId,
    /// Its display name.
    pub lobby_name: String,
    /// `true` if the leaver was the last member and the lobby is gone.
    pub lobby_deleted: bool,
}
