//! Shared identity and membership types for Ruse.
//!
//! Every other crate in the workspace builds on these three types:
//!
//! - [`UserId`] — opaque per-user identifier, supplied by the transport
//! - [`LobbyId`] — generated identifier for a lobby
//! - [`Player`] — a membership record (user id + display name)
//!
//! The core never validates identity; a `UserId` is whatever the chat
//! transport says it is. Uniqueness and membership are enforced one
//! layer up, in the lobby registry.

mod types;

pub use types::{LobbyId, Player, UserId};
