//! Error types for the lobby layer.

use ruse_types::{LobbyId, UserId};

/// Errors that can occur during lobby operations.
#[derive(Debug, thiserror::Error)]
pub enum LobbyError {
    /// The lobby name was empty after trimming.
    #[error("lobby name must not be empty")]
    InvalidName,

    /// The user is already in a lobby (possibly the one they tried to
    /// join — rejoining is an error, not a no-op).
    #[error("user {0} is already in a lobby")]
    AlreadyMember(UserId),

    /// No lobby with this id exists. Covers lobbies that were deleted
    /// after their last member left.
    #[error("lobby {0} not found")]
    NotFound(LobbyId),

    /// The user is not in any lobby.
    #[error("user {0} is not in any lobby")]
    NotMember(UserId),

    /// The registry task has stopped. Cannot happen while any handle
    /// is live; surfaced instead of panicking if it somehow does.
    #[error("lobby registry is unavailable")]
    Unavailable,
}
