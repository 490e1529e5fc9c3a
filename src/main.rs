//! Headless demo driver
//!
//! Runs one scripted session in the terminal: a simple bot chases falling
//! objects for up to two minutes of simulated time, then the final score
//! lands on the leaderboard in `catchfall_scores.json`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use catchfall::persistence::FileStore;
    use catchfall::sim::{GameEvent, GamePhase, TickInput};
    use catchfall::{GameConfig, Session};

    catchfall::platform::init_logging();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let store = Box::new(FileStore::new("catchfall_scores.json"));
    let mut session = Session::new(GameConfig::default(), seed, store);

    log::info!("catchfall demo starting (seed {seed})");
    session.start();

    let mut input = TickInput::default();
    // Two minutes at 60 ticks/s, or until the bot takes one on the head
    for _ in 0..7200 {
        let snapshot = session.frame(&input);
        for event in &session.state().events {
            match event {
                GameEvent::Caught { points, .. } => log::info!("caught one (+{points})"),
                GameEvent::GameOver { score } => log::info!("bonked at {score} points"),
            }
        }
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        input = demo_input(session.state());
    }

    let score = session.state().score;
    println!("final score: {score}");

    if session.is_high_score() {
        match session.submit_score("Demo Bot") {
            Ok(Some(rank)) => println!("new high score, rank {rank}"),
            Ok(None) => {}
            Err(err) => log::warn!("could not save the score: {err}"),
        }
    }

    if !session.leaderboard().is_empty() {
        println!("\nhigh scores:");
        for (i, record) in session.leaderboard().entries().iter().enumerate() {
            println!(
                "{:>2}. {:<16} {:>6}  {}",
                i + 1,
                record.name,
                record.score,
                record.date
            );
        }
    }
}

/// Steer toward the lowest object still above the hand line, keeping the
/// left hand under its center
#[cfg(not(target_arch = "wasm32"))]
fn demo_input(state: &catchfall::sim::GameState) -> catchfall::sim::TickInput {
    use catchfall::sim::TickInput;

    let mut input = TickInput::default();
    let hand_line = state.player.left_hand.y;
    let target = state
        .objects
        .iter()
        .filter(|o| o.y < hand_line)
        .max_by(|a, b| a.y.total_cmp(&b.y));
    if let Some(obj) = target {
        let hand_offset = state.config.player.hand_overhang - state.config.player.hand_width / 2.0;
        let desired = obj.x + state.config.object.width / 2.0 + hand_offset;
        if state.player.pos.x > desired + 2.0 {
            input.move_left = true;
        } else if state.player.pos.x < desired - 2.0 {
            input.move_right = true;
        }
    }
    input
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser embeddings drive the library through `catchfall::web::WebSession`
}
