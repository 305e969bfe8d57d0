//! Error types for round dealing.

use ruse_words::PoolError;

/// Errors that can occur when dealing a round.
#[derive(Debug, thiserror::Error)]
pub enum RoundError {
    /// The roster is too small for a liar role to mean anything.
    #[error("need at least {min} players to start a round, got {got}")]
    InsufficientPlayers {
        /// Players in the roster.
        got: usize,
        /// Configured minimum.
        min: usize,
    },

    /// The word draw failed — in practice always pool exhaustion.
    #[error(transparent)]
    Pool(#[from] PoolError),
}
