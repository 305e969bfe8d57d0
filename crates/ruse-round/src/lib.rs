//! Round dealing for Ruse.
//!
//! A round takes a roster snapshot and the word pool, draws one
//! secret word, and hands every player a card: the same word for
//! everyone except the one randomly chosen liar, who gets the liar
//! card and has to bluff. The engine keeps no state of its own — the
//! pool remembers consumed words, the registry remembers rosters.

mod engine;
mod error;

pub use engine::{Card, RoundAssignment, RoundConfig, deal};
pub use error::RoundError;
