//! Lobby registry for Ruse.
//!
//! The registry is the single owner of all lobby state: the map of
//! live lobbies and the membership index that pins each user to at
//! most one lobby. It runs as an isolated Tokio task (actor model) —
//! callers hold a cheap [`LobbyRegistry`] handle and talk to it
//! through a channel, so every mutation is applied in one step and no
//! interleaving of concurrent callers can observe partial state.
//!
//! # Key types
//!
//! - [`LobbyRegistry`] — cloneable handle to the registry actor
//! - [`Lobby`] — a named group of players (snapshot on reads)
//! - [`LobbySummary`] — one row of a lobby listing
//! - [`LeaveOutcome`] — what happened when a user left
//! - [`LobbyError`] — everything that can go wrong

mod error;
mod lobby;
mod registry;

pub use error::LobbyError;
pub use lobby::{LeaveOutcome, Lobby, LobbySummary};
pub use registry::LobbyRegistry;
