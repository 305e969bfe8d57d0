//! Registry actor: an isolated Tokio task that owns all lobby state.
//!
//! The actor serializes every operation, so each one is atomic with
//! respect to concurrent callers. The two maps it owns must agree
//! bidirectionally at every point between commands: each membership
//! entry names a live lobby that lists that user, and each listed
//! member has a membership entry.

use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use rand::SeedableRng;
use rand::rngs::StdRng;
use ruse_types::{LobbyId, Player, UserId};
use tokio::sync::{mpsc, oneshot};

use crate::{LeaveOutcome, Lobby, LobbyError, LobbySummary};

/// Command channel size for the registry actor.
const COMMAND_CHANNEL_SIZE: usize = 64;

/// Commands sent to the registry actor through its channel.
///
/// Each variant carries a `oneshot::Sender` reply channel; the caller
/// sends the command and awaits the response on it.
enum RegistryCommand {
    Create {
        name: String,
        creator: Player,
        reply: oneshot::Sender<Result<LobbyId, LobbyError>>,
    },
    Join {
        lobby_id: LobbyId,
        player: Player,
        reply: oneshot::Sender<Result<Lobby, LobbyError>>,
    },
    Leave {
        user_id: UserId,
        reply: oneshot::Sender<Result<LeaveOutcome, LobbyError>>,
    },
    List {
        reply: oneshot::Sender<Vec<LobbySummary>>,
    },
    Roster {
        user_id: UserId,
        reply: oneshot::Sender<Result<Lobby, LobbyError>>,
    },
    Count {
        reply: oneshot::Sender<usize>,
    },
}

/// Handle to the running registry actor.
///
/// Cheap to clone — it's just an `mpsc::Sender` wrapper. The actor
/// runs until the last handle is dropped.
#[derive(Clone)]
pub struct LobbyRegistry {
    sender: mpsc::Sender<RegistryCommand>,
}

impl LobbyRegistry {
    /// Spawns a registry actor seeded from the operating system.
    pub fn spawn() -> Self {
        Self::spawn_with_rng(StdRng::from_os_rng())
    }

    /// Spawns a registry actor with the given randomness source for
    /// lobby-id generation. Tests use a seeded rng for reproducible
    /// ids.
    pub fn spawn_with_rng(rng: StdRng) -> Self {
        let (tx, rx) = mpsc::channel(COMMAND_CHANNEL_SIZE);

        let actor = RegistryActor {
            lobbies: HashMap::new(),
            memberships: HashMap::new(),
            issued: HashSet::new(),
            rng,
            receiver: rx,
        };
        tokio::spawn(actor.run());

        Self { sender: tx }
    }

    /// Creates a lobby with `creator` as its first member and returns
    /// the fresh lobby id.
    pub async fn create(
        &self,
        name: impl Into<String>,
        creator: Player,
    ) -> Result<LobbyId, LobbyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Create {
                name: name.into(),
                creator,
                reply: reply_tx,
            })
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        reply_rx.await.map_err(|_| LobbyError::Unavailable)?
    }

    /// Adds `player` to the lobby and returns the post-join snapshot.
    pub async fn join(
        &self,
        lobby_id: LobbyId,
        player: Player,
    ) -> Result<Lobby, LobbyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Join {
                lobby_id,
                player,
                reply: reply_tx,
            })
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        reply_rx.await.map_err(|_| LobbyError::Unavailable)?
    }

    /// Removes the user from their lobby, deleting the lobby if they
    /// were its last member.
    pub async fn leave(
        &self,
        user_id: UserId,
    ) -> Result<LeaveOutcome, LobbyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Leave {
                user_id,
                reply: reply_tx,
            })
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        reply_rx.await.map_err(|_| LobbyError::Unavailable)?
    }

    /// Lists all live lobbies, oldest first. A consistent snapshot —
    /// never reflects a half-applied mutation.
    pub async fn list(&self) -> Result<Vec<LobbySummary>, LobbyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::List { reply: reply_tx })
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        reply_rx.await.map_err(|_| LobbyError::Unavailable)
    }

    /// Returns a snapshot of the lobby the user is currently in.
    pub async fn roster_of(&self, user_id: UserId) -> Result<Lobby, LobbyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Roster {
                user_id,
                reply: reply_tx,
            })
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        reply_rx.await.map_err(|_| LobbyError::Unavailable)?
    }

    /// Number of live lobbies.
    pub async fn lobby_count(&self) -> Result<usize, LobbyError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.sender
            .send(RegistryCommand::Count { reply: reply_tx })
            .await
            .map_err(|_| LobbyError::Unavailable)?;
        reply_rx.await.map_err(|_| LobbyError::Unavailable)
    }
}

/// The internal actor state. Runs inside a Tokio task.
struct RegistryActor {
    /// Live lobbies, keyed by id.
    lobbies: HashMap<LobbyId, Lobby>,
    /// Maps each user to the one lobby they are in.
    memberships: HashMap<UserId, LobbyId>,
    /// Every id ever handed out, so deleted ids are never reused.
    issued: HashSet<LobbyId>,
    /// Randomness source for id generation.
    rng: StdRng,
    receiver: mpsc::Receiver<RegistryCommand>,
}

impl RegistryActor {
    /// Runs the actor loop until every handle is gone.
    async fn run(mut self) {
        tracing::debug!("lobby registry started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                RegistryCommand::Create {
                    name,
                    creator,
                    reply,
                } => {
                    let _ = reply.send(self.handle_create(name, creator));
                }
                RegistryCommand::Join {
                    lobby_id,
                    player,
                    reply,
                } => {
                    let _ = reply.send(self.handle_join(lobby_id, player));
                }
                RegistryCommand::Leave { user_id, reply } => {
                    let _ = reply.send(self.handle_leave(user_id));
                }
                RegistryCommand::List { reply } => {
                    let _ = reply.send(self.handle_list());
                }
                RegistryCommand::Roster { user_id, reply } => {
                    let _ = reply.send(self.handle_roster(user_id));
                }
                RegistryCommand::Count { reply } => {
                    let _ = reply.send(self.lobbies.len());
                }
            }
        }

        tracing::debug!("lobby registry stopped");
    }

    fn handle_create(
        &mut self,
        name: String,
        creator: Player,
    ) -> Result<LobbyId, LobbyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LobbyError::InvalidName);
        }
        if self.memberships.contains_key(&creator.user_id) {
            return Err(LobbyError::AlreadyMember(creator.user_id));
        }

        let lobby_id = self.fresh_id();
        let lobby = Lobby {
            id: lobby_id.clone(),
            name: name.to_string(),
            members: vec![creator.clone()],
            created_at: SystemTime::now(),
        };

        self.memberships.insert(creator.user_id, lobby_id.clone());
        self.lobbies.insert(lobby_id.clone(), lobby);

        tracing::info!(
            lobby_id = %lobby_id,
            name,
            user_id = %creator.user_id,
            "lobby created"
        );
        Ok(lobby_id)
    }

    fn handle_join(
        &mut self,
        lobby_id: LobbyId,
        player: Player,
    ) -> Result<Lobby, LobbyError> {
        if !self.lobbies.contains_key(&lobby_id) {
            return Err(LobbyError::NotFound(lobby_id));
        }
        if self.memberships.contains_key(&player.user_id) {
            return Err(LobbyError::AlreadyMember(player.user_id));
        }

        let lobby = self
            .lobbies
            .get_mut(&lobby_id)
            .expect("checked above that the lobby exists");
        lobby.members.push(player.clone());
        self.memberships.insert(player.user_id, lobby_id.clone());

        tracing::info!(
            lobby_id = %lobby_id,
            user_id = %player.user_id,
            members = lobby.members.len(),
            "player joined"
        );
        Ok(lobby.clone())
    }

    fn handle_leave(&mut self, user_id: UserId) -> Result<LeaveOutcome, LobbyError> {
        let lobby_id = self
            .memberships
            .remove(&user_id)
            .ok_or(LobbyError::NotMember(user_id))?;

        let lobby = self
            .lobbies
            .get_mut(&lobby_id)
            .expect("membership index points at a live lobby");
        lobby.members.retain(|p| p.user_id != user_id);

        let lobby_name = lobby.name.clone();
        let lobby_deleted = lobby.members.is_empty();
        let members = lobby.members.len();

        if lobby_deleted {
            // Same atomic step as the removal: an empty lobby is never
            // observable through any other command.
            self.lobbies.remove(&lobby_id);
            tracing::info!(
                lobby_id = %lobby_id,
                user_id = %user_id,
                "last player left, lobby deleted"
            );
        } else {
            tracing::info!(
                lobby_id = %lobby_id,
                user_id = %user_id,
                members,
                "player left"
            );
        }

        Ok(LeaveOutcome {
            lobby_id,
            lobby_name,
            lobby_deleted,
        })
    }

    fn handle_list(&self) -> Vec<LobbySummary> {
        let mut lobbies: Vec<&Lobby> = self.lobbies.values().collect();
        lobbies.sort_by(|a, b| {
            (a.created_at, &a.id.0).cmp(&(b.created_at, &b.id.0))
        });
        lobbies.iter().map(|l| l.summary()).collect()
    }

    fn handle_roster(&self, user_id: UserId) -> Result<Lobby, LobbyError> {
        let lobby_id = self
            .memberships
            .get(&user_id)
            .ok_or(LobbyError::NotMember(user_id))?;
        let lobby = self
            .lobbies
            .get(lobby_id)
            .expect("membership index points at a live lobby");
        Ok(lobby.clone())
    }

    /// Generates an id no earlier lobby has used, re-rolling on the
    /// (rare) collision.
    fn fresh_id(&mut self) -> LobbyId {
        loop {
            let id = LobbyId::generate(&mut self.rng);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LobbyRegistry {
        LobbyRegistry::spawn_with_rng(StdRng::seed_from_u64(42))
    }

    fn player(id: u64) -> Player {
        Player::new(UserId(id), format!("player-{id}"))
    }

    #[tokio::test]
    async fn test_create_returns_id_and_lists_one_lobby() {
        let reg = registry();

        let id = reg.create("Movie Night", player(1)).await.unwrap();

        let listing = reg.list().await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, id);
        assert_eq!(listing[0].name, "Movie Night");
        assert_eq!(listing[0].member_count, 1);
    }

    #[tokio::test]
    async fn test_create_trims_name() {
        let reg = registry();

        let id = reg.create("  Movie Night  ", player(1)).await.unwrap();

        let lobby = reg.roster_of(UserId(1)).await.unwrap();
        assert_eq!(lobby.id, id);
        assert_eq!(lobby.name, "Movie Night");
    }

    #[tokio::test]
    async fn test_create_blank_name_returns_invalid_name() {
        let reg = registry();

        let result = reg.create("   ", player(1)).await;

        assert!(matches!(result, Err(LobbyError::InvalidName)));
        assert_eq!(reg.lobby_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_while_in_a_lobby_returns_already_member() {
        let reg = registry();
        reg.create("First", player(1)).await.unwrap();

        let result = reg.create("Second", player(1)).await;

        assert!(
            matches!(result, Err(LobbyError::AlreadyMember(u)) if u == UserId(1))
        );
        assert_eq!(reg.lobby_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_ids_are_unique() {
        let reg = registry();
        let a = reg.create("A", player(1)).await.unwrap();
        let b = reg.create("B", player(2)).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_join_appends_in_order() {
        let reg = registry();
        let id = reg.create("Table", player(1)).await.unwrap();

        reg.join(id.clone(), player(2)).await.unwrap();
        let lobby = reg.join(id, player(3)).await.unwrap();

        let ids: Vec<UserId> =
            lobby.members.iter().map(|p| p.user_id).collect();
        assert_eq!(ids, vec![UserId(1), UserId(2), UserId(3)]);
    }

    #[tokio::test]
    async fn test_join_unknown_lobby_returns_not_found() {
        let reg = registry();

        let missing = LobbyId("nope".into());
        let result = reg.join(missing.clone(), player(1)).await;

        assert!(matches!(result, Err(LobbyError::NotFound(l)) if l == missing));
    }

    #[tokio::test]
    async fn test_join_twice_same_lobby_returns_already_member() {
        let reg = registry();
        let id = reg.create("Table", player(1)).await.unwrap();
        reg.join(id.clone(), player(2)).await.unwrap();

        let result = reg.join(id, player(2)).await;

        assert!(
            matches!(result, Err(LobbyError::AlreadyMember(u)) if u == UserId(2))
        );
    }

    #[tokio::test]
    async fn test_join_while_in_other_lobby_returns_already_member() {
        let reg = registry();
        reg.create("First", player(1)).await.unwrap();
        let second = reg.create("Second", player(2)).await.unwrap();

        let result = reg.join(second, player(1)).await;

        assert!(
            matches!(result, Err(LobbyError::AlreadyMember(u)) if u == UserId(1))
        );
    }

    #[tokio::test]
    async fn test_leave_removes_member_and_reports_name() {
        let reg = registry();
        let id = reg.create("Table", player(1)).await.unwrap();
        reg.join(id, player(2)).await.unwrap();

        let outcome = reg.leave(UserId(2)).await.unwrap();

        assert_eq!(outcome.lobby_name, "Table");
        assert!(!outcome.lobby_deleted);
        let lobby = reg.roster_of(UserId(1)).await.unwrap();
        assert!(!lobby.contains(UserId(2)));
        assert_eq!(lobby.member_count(), 1);
    }

    #[tokio::test]
    async fn test_leave_last_member_deletes_lobby() {
        let reg = registry();
        let id = reg.create("Table", player(1)).await.unwrap();

        let outcome = reg.leave(UserId(1)).await.unwrap();

        assert!(outcome.lobby_deleted);
        assert!(reg.list().await.unwrap().is_empty());
        let result = reg.join(id.clone(), player(2)).await;
        assert!(matches!(result, Err(LobbyError::NotFound(l)) if l == id));
    }

    #[tokio::test]
    async fn test_leave_without_membership_returns_not_member() {
        let reg = registry();

        let result = reg.leave(UserId(9)).await;

        assert!(matches!(result, Err(LobbyError::NotMember(u)) if u == UserId(9)));
    }

    #[tokio::test]
    async fn test_leave_twice_returns_not_member_second_time() {
        let reg = registry();
        let id = reg.create("Table", player(1)).await.unwrap();
        reg.join(id, player(2)).await.unwrap();
        reg.leave(UserId(2)).await.unwrap();

        let result = reg.leave(UserId(2)).await;

        assert!(matches!(result, Err(LobbyError::NotMember(u)) if u == UserId(2)));
    }

    #[tokio::test]
    async fn test_roster_of_non_member_returns_not_member() {
        let reg = registry();

        let result = reg.roster_of(UserId(1)).await;

        assert!(matches!(result, Err(LobbyError::NotMember(u)) if u == UserId(1)));
    }

    #[tokio::test]
    async fn test_roster_of_member_returns_full_snapshot() {
        let reg = registry();
        let id = reg.create("Table", player(1)).await.unwrap();
        reg.join(id.clone(), player(2)).await.unwrap();

        let lobby = reg.roster_of(UserId(2)).await.unwrap();

        assert_eq!(lobby.id, id);
        assert_eq!(lobby.name, "Table");
        assert_eq!(lobby.member_count(), 2);
    }

    #[tokio::test]
    async fn test_list_orders_by_creation() {
        let reg = registry();
        reg.create("First", player(1)).await.unwrap();
        reg.create("Second", player(2)).await.unwrap();
        reg.create("Third", player(3)).await.unwrap();

        let names: Vec<String> = reg
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn test_lobby_id_not_reused_after_deletion() {
        let reg = registry();
        let first = reg.create("A", player(1)).await.unwrap();
        reg.leave(UserId(1)).await.unwrap();

        let second = reg.create("B", player(1)).await.unwrap();

        assert_ne!(first, second);
    }
}
