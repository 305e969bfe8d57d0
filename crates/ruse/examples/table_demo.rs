//! Drives one table through a full session, standing in for the chat
//! transport: create, join, list, roster, deal a round, leave.
//!
//! ```sh
//! RUST_LOG=debug cargo run -p ruse --example table_demo
//! ```

use ruse::{Card, Player, RuseError, SessionHub, UserId, WordPool};

#[tokio::main]
async fn main() -> Result<(), RuseError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let pool = WordPool::from_words([
        "lighthouse",
        "submarine",
        "campfire",
        "orchestra",
        "avalanche",
    ])?;
    let hub = SessionHub::new(pool);

    let alice = Player::new(UserId(1), "alice");
    let bob = Player::new(UserId(2), "bob");
    let carol = Player::new(UserId(3), "carol");

    let lobby_id = hub.create_lobby("Friday Table", alice).await?;
    println!("created lobby {lobby_id}");

    hub.join_lobby(lobby_id.clone(), bob).await?;
    hub.join_lobby(lobby_id, carol).await?;

    for summary in hub.list_lobbies().await? {
        println!(
            "lobby {} \"{}\" with {} players",
            summary.id, summary.name, summary.member_count
        );
    }

    let roster = hub.roster_of(UserId(1)).await?;
    let names: Vec<&str> =
        roster.members.iter().map(|p| p.display_name.as_str()).collect();
    println!("roster: {}", names.join(", "));

    // Deal a round; in the real bot each card goes out as a private
    // message to its player.
    for assignment in hub.start_round(UserId(1)).await? {
        match assignment.card {
            Card::Word(word) => {
                println!("{} -> word \"{word}\"", assignment.player.display_name);
            }
            Card::Liar => {
                println!("{} -> LIAR card", assignment.player.display_name);
            }
        }
    }
    println!("words remaining: {}", hub.words_remaining());

    for user in [UserId(1), UserId(2), UserId(3)] {
        let outcome = hub.leave_lobby(user).await?;
        if outcome.lobby_deleted {
            println!("{user} left, lobby \"{}\" deleted", outcome.lobby_name);
        } else {
            println!("{user} left \"{}\"", outcome.lobby_name);
        }
    }

    Ok(())
}
