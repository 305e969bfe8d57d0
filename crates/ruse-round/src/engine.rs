//! Dealing one round: draw a word, pick a liar, assign cards.

use rand::Rng;
use ruse_types::Player;
use ruse_words::WordPool;
use serde::{Deserialize, Serialize};

use crate::RoundError;

/// Round policy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Minimum roster size to deal a round. Below three players the
    /// liar role is meaningless, so that's the default.
    pub min_players: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self { min_players: 3 }
    }
}

/// The card a player receives for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    /// The shared secret word.
    Word(String),
    /// The liar marker: no word, just bluff.
    Liar,
}

impl Card {
    /// Returns `true` for the liar card.
    pub fn is_liar(&self) -> bool {
        matches!(self, Self::Liar)
    }
}

/// One player's card for one round. Ephemeral — dealt, delivered,
/// forgotten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAssignment {
    /// Who gets the card.
    pub player: Player,
    /// What they got.
    pub card: Card,
}

/// Deals one round for the given roster.
///
/// Checks the roster size first — an undersized roster fails before
/// the pool is touched. On success exactly one word is consumed from
/// the pool and exactly one roster entry (uniformly chosen) carries
/// [`Card::Liar`]; everyone else carries the same drawn word.
/// Assignments come back in roster order.
///
/// # Errors
/// - [`RoundError::InsufficientPlayers`] below `config.min_players`
/// - [`RoundError::Pool`] when the pool is exhausted
pub fn deal<R: Rng>(
    config: &RoundConfig,
    roster: &[Player],
    pool: &WordPool,
    rng: &mut R,
) -> Result<Vec<RoundAssignment>, RoundError> {
    if roster.len() < config.min_players {
        return Err(RoundError::InsufficientPlayers {
            got: roster.len(),
            min: config.min_players,
        });
    }

    let word = pool.draw(rng)?;
    let liar = rng.random_range(0..roster.len());

    tracing::info!(
        players = roster.len(),
        words_remaining = pool.remaining(),
        "round dealt"
    );

    Ok(roster
        .iter()
        .enumerate()
        .map(|(i, player)| RoundAssignment {
            player: player.clone(),
            card: if i == liar {
                Card::Liar
            } else {
                Card::Word(word.clone())
            },
        })
        .collect())
}

// =========================================================================
// Tests
// =========================================================================
