//! # Ruse
//!
//! Session core for a "liar" social-deduction word game: users form
//! named lobbies, join and leave them, and start rounds in which all
//! players but one receive the same secret word — the last one gets
//! the liar card and has to bluff their way through.
//!
//! This crate is the public surface. A chat transport (the bot layer,
//! out of scope here) maps its commands 1:1 onto [`SessionHub`]
//! operations and renders the returned values and errors for users.
//!
//! ```rust,no_run
//! use ruse::{Player, SessionHub, UserId, WordPool};
//!
//! # async fn demo() -> Result<(), ruse::RuseError> {
//! let pool = WordPool::from_path("words.txt")?;
//! let hub = SessionHub::new(pool);
//!
//! let alice = Player::new(UserId(1), "alice");
//! let lobby_id = hub.create_lobby("Movie Night", alice).await?;
//! hub.join_lobby(lobby_id.clone(), Player::new(UserId(2), "bob")).await?;
//! hub.join_lobby(lobby_id, Player::new(UserId(3), "carol")).await?;
//!
//! let cards = hub.start_round(UserId(1)).await?;
//! assert_eq!(cards.len(), 3);
//! # Ok(())
//! # }
//! ```

mod error;
mod hub;

pub use error::RuseError;
pub use hub::SessionHub;

pub use ruse_lobby::{LeaveOutcome, Lobby, LobbyError, LobbyRegistry, LobbySummary};
pub use ruse_round::{Card, RoundAssignment, RoundConfig, RoundError};
pub use ruse_types::{LobbyId, Player, UserId};
pub use ruse_words::{PoolError, WordPool};
