//! The session hub: the operation surface the transport calls.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use ruse_lobby::{LeaveOutcome, Lobby, LobbyRegistry, LobbySummary};
use ruse_round::{RoundAssignment, RoundConfig};
use ruse_types::{LobbyId, Player, UserId};
use ruse_words::WordPool;

use crate::RuseError;

/// Thin sequencing layer over the lobby registry, the word pool, and
/// the round engine.
///
/// Holds no game state of its own: lobbies live in the registry
/// actor, consumed words in the pool. The hub just orders the calls
/// and owns the randomness source for dealing. Cheap to clone and
/// share across transport handler tasks.
#[derive(Clone)]
pub struct SessionHub {
    registry: LobbyRegistry,
    pool: Arc<WordPool>,
    round: RoundConfig,
    rng: Arc<Mutex<StdRng>>,
}

impl SessionHub {
    /// Creates a hub with a fresh registry, default round policy, and
    /// an OS-seeded rng.
    pub fn new(pool: WordPool) -> Self {
        Self::with_parts(
            LobbyRegistry::spawn(),
            pool,
            RoundConfig::default(),
            StdRng::from_os_rng(),
        )
    }

    /// Creates a hub from explicit parts. Tests pass a seeded rng and
    /// a registry spawned with one for fully deterministic runs.
    pub fn with_parts(
        registry: LobbyRegistry,
        pool: WordPool,
        round: RoundConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            registry,
            pool: Arc::new(pool),
            round,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Creates a lobby with the caller as first member.
    pub async fn create_lobby(
        &self,
        name: impl Into<String>,
        creator: Player,
    ) -> Result<LobbyId, RuseError> {
        Ok(self.registry.create(name, creator).await?)
    }

    /// Lists all live lobbies, oldest first.
    pub async fn list_lobbies(&self) -> Result<Vec<LobbySummary>, RuseError> {
        Ok(self.registry.list().await?)
    }

    /// Adds the player to a lobby and returns the updated snapshot.
    pub async fn join_lobby(
        &self,
        lobby_id: LobbyId,
        player: Player,
    ) -> Result<Lobby, RuseError> {
        Ok(self.registry.join(lobby_id, player).await?)
    }

    /// Removes the caller from their lobby.
    pub async fn leave_lobby(
        &self,
        user_id: UserId,
    ) -> Result<LeaveOutcome, RuseError> {
        Ok(self.registry.leave(user_id).await?)
    }

    /// Returns the caller's lobby snapshot (id, name, members,
    /// creation time) for the `/players` style roster view.
    pub async fn roster_of(&self, user_id: UserId) -> Result<Lobby, RuseError> {
        Ok(self.registry.roster_of(user_id).await?)
    }

    /// Starts a round in the caller's lobby: snapshots the roster,
    /// draws one word, picks one liar, returns the dealt cards in
    /// roster order. Failures are presented to the initiating user;
    /// nothing is retried here.
    pub async fn start_round(
        &self,
        user_id: UserId,
    ) -> Result<Vec<RoundAssignment>, RuseError> {
        let lobby = self.registry.roster_of(user_id).await?;
        tracing::debug!(
            user_id = %user_id,
            lobby_id = %lobby.id,
            players = lobby.members.len(),
            "starting round"
        );

        let mut rng = self.rng_lock();
        let cards =
            ruse_round::deal(&self.round, &lobby.members, &self.pool, &mut *rng)?;
        Ok(cards)
    }

    /// Number of words not yet drawn, for operator visibility.
    pub fn words_remaining(&self) -> usize {
        self.pool.remaining()
    }

    fn rng_lock(&self) -> MutexGuard<'_, StdRng> {
        // The rng has no invariants a panicking holder could break.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
