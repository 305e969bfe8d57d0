//! Identity newtypes and the `Player` membership record.

use std::fmt;

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// An opaque identifier for a user.
///
/// Newtype over `u64` so a `UserId` can never be confused with a
/// `LobbyId` (or any other number) in a signature. The transport layer
/// supplies these; the core only compares them for equality.
///
/// `#[serde(transparent)]` keeps the wire shape a plain number:
/// `UserId(42)` serializes as `42`, not `{"0": 42}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// A generated identifier for a lobby.
///
/// Short alphanumeric string, comfortable to paste into a chat command.
/// Generated by [`LobbyId::generate`]; the registry guarantees ids are
/// unique for the process lifetime and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LobbyId(pub String);

impl LobbyId {
    /// Length of a generated id, in characters.
    pub const LEN: usize = 10;

    /// Generates a random id from the given randomness source.
    ///
    /// 10 alphanumeric characters = 62^10 possibilities, so collisions
    /// are rare — but not impossible, which is why the registry checks
    /// each fresh id against the set of ids it has already issued.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let id = rng
            .sample_iter(Alphanumeric)
            .take(Self::LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A membership record: one user's presence in a lobby.
///
/// A `Player` is not a standalone entity — it is created when a user
/// joins a lobby and dropped when they leave. The display name is
/// carried along so rosters can be rendered without a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The transport-supplied user identifier.
    pub user_id: UserId,
    /// Human-readable name for rosters and card delivery.
    pub display_name: String,
}

impl Player {
    /// Creates a membership record for a user.
    pub fn new(user_id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_user_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&UserId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_user_id_deserializes_from_plain_number() {
        let uid: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(uid, UserId(42));
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(7).to_string(), "U-7");
    }

    #[test]
    fn test_lobby_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&LobbyId("abc123".into())).unwrap();
        assert_eq!(json, "\"abc123\"");
    }

    #[test]
    fn test_lobby_id_display_is_raw_string() {
        assert_eq!(LobbyId("xK3fQ".into()).to_string(), "xK3fQ");
    }

    #[test]
    fn test_generate_produces_alphanumeric_id_of_fixed_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = LobbyId::generate(&mut rng);
        assert_eq!(id.as_str().len(), LobbyId::LEN);
        assert!(id.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_same_seed_same_id() {
        let a = LobbyId::generate(&mut StdRng::seed_from_u64(9));
        let b = LobbyId::generate(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_successive_ids_differ() {
        let mut rng = StdRng::seed_from_u64(9);
        let a = LobbyId::generate(&mut rng);
        let b = LobbyId::generate(&mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_player_new_stores_fields() {
        let p = Player::new(UserId(1), "alice");
        assert_eq!(p.user_id, UserId(1));
        assert_eq!(p.display_name, "alice");
    }

    #[test]
    fn test_player_round_trip() {
        let p = Player::new(UserId(3), "bob");
        let bytes = serde_json::to_vec(&p).unwrap();
        let decoded: Player = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(p, decoded);
    }
}
