use std::cell::Cell;

use snake_common::games::StateObserver;
use snake_common::games::snake::{EngineSnapshot, GameOverSummary};
use snake_common::log;

/// Logs a one-line summary per tick and a full report when a game ends.
#[derive(Default)]
pub struct ConsoleObserver {
    last_logged_tick: Cell<Option<u64>>,
}

impl ConsoleObserver {
    pub fn new() -> Self {
        Self {
            last_logged_tick: Cell::new(None),
        }
    }
}

pub fn describe(snapshot: &EngineSnapshot) -> String {
    let snakes: Vec<String> = snapshot
        .state
        .snake_ids()
        .filter_map(|id| snapshot.state.snake(id).map(|s| (id, s)))
        .map(|(id, s)| {
            let head = s.head();
            format!(
                "{} score {} len {} head ({}, {}){}",
                id,
                s.score,
                s.len(),
                head.x,
                head.y,
                if s.is_alive() { "" } else { " dead" }
            )
        })
        .collect();

    let flags = match (snapshot.is_paused, snapshot.is_game_over) {
        (_, true) => " [game over]",
        (true, false) => " [paused]",
        (false, false) => "",
    };

    format!(
        "[tick {}] {} | food {} | high {}{}",
        snapshot.tick,
        snakes.join(" | "),
        snapshot.state.food.len(),
        snapshot.score_board.high_score,
        flags
    )
}

impl StateObserver for ConsoleObserver {
    async fn on_state(&self, snapshot: EngineSnapshot) {
        // Commands re-send the current tick; only log those when paused or over.
        let repeated = self.last_logged_tick.get() == Some(snapshot.tick);
        if repeated && !snapshot.is_paused && !snapshot.is_game_over {
            return;
        }
        self.last_logged_tick.set(Some(snapshot.tick));
        log!("{}", describe(&snapshot));
    }

    async fn on_game_over(&self, summary: GameOverSummary) {
        let winner = summary
            .winner
            .map(|id| id.to_string())
            .unwrap_or_else(|| "nobody".to_string());
        log!("Game over after {} ticks, winner: {}", summary.tick, winner);
        for (id, reason) in &summary.deaths {
            log!("  {} {}", id, reason);
        }
        for (id, score) in &summary.scores {
            log!("  {} scored {}", id, score);
        }
        log!("  high score {}. Type 'restart' to play again.", summary.high_score);
    }
}
