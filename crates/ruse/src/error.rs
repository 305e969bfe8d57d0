//! Unified error type for the Ruse session core.

use ruse_lobby::LobbyError;
use ruse_round::RoundError;
use ruse_words::PoolError;

/// Top-level error that wraps all crate-specific errors.
///
/// The hub never recovers or retries — every domain error passes
/// through unchanged for the transport to phrase. `#[from]` gives the
/// `?` operator automatic conversion from each sub-crate's error.
#[derive(Debug, thiserror::Error)]
pub enum RuseError {
    /// A lobby/membership error.
    #[error(transparent)]
    Lobby(#[from] LobbyError),

    /// A word-pool error (load failure or exhaustion).
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// A round-dealing error.
    #[error(transparent)]
    Round(#[from] RoundError),
}

#[cfg(test)]
mod tests {
    use ruse_types::UserId;

    use super::*;

    #[test]
    fn test_from_lobby_error() {
        let err: RuseError = LobbyError::NotMember(UserId(1)).into();
        assert!(matches!(err, RuseError::Lobby(_)));
        assert!(err.to_string().contains("U-1"));
    }

    #[test]
    fn test_from_pool_error() {
        let err: RuseError = PoolError::Exhausted.into();
        assert!(matches!(err, RuseError::Pool(_)));
        assert_eq!(err.to_string(), "all words have been used");
    }

    #[test]
    fn test_from_round_error() {
        let err: RuseError =
            RoundError::InsufficientPlayers { got: 2, min: 3 }.into();
        assert!(matches!(err, RuseError::Round(_)));
        assert!(err.to_string().contains("at least 3"));
    }
}
