use std::future::Future;

use super::snake::{EngineSnapshot, GameOverSummary};

/// Read-only consumer of engine state, e.g. a renderer.
pub trait StateObserver {
    fn on_state(&self, snapshot: EngineSnapshot) -> impl Future<Output = ()>;

    fn on_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()>;
}
