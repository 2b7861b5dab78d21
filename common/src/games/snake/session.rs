use tokio::sync::mpsc;

use crate::games::{StateObserver, TickSource};
use crate::log;
use crate::persistence::ScoreStore;
use super::engine::SnakeEngine;
use super::types::{Direction, SnakeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineCommand {
    Turn(SnakeId, Direction),
    Pause,
    Resume,
    TogglePause,
    Restart,
    ResetStats,
    Shutdown,
}

pub struct SnakeSession;

impl SnakeSession {
    /// Drives `engine` until the command channel closes or `Shutdown` arrives,
    /// then hands it back. Ticks are only awaited while the engine is running,
    /// and commands are handled before a tick that is ready at the same time.
    pub async fn run<S, T, O>(
        mut engine: SnakeEngine<S>,
        mut ticker: T,
        mut commands: mpsc::UnboundedReceiver<EngineCommand>,
        observer: O,
    ) -> SnakeEngine<S>
    where
        S: ScoreStore,
        T: TickSource,
        O: StateObserver,
    {
        observer.on_state(engine.snapshot()).await;

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => {
                    let Some(command) = command else {
                        log!("Command channel closed, stopping session");
                        break;
                    };
                    if command == EngineCommand::Shutdown {
                        log!("Shutdown requested");
                        break;
                    }

                    let was_running = engine.is_running();
                    Self::apply(&mut engine, command);
                    if !was_running && engine.is_running() {
                        ticker.reset();
                    }
                    observer.on_state(engine.snapshot()).await;
                }
                _ = ticker.tick(), if engine.is_running() => {
                    let Some(report) = engine.advance() else { continue };
                    observer.on_state(engine.snapshot()).await;
                    if report.game_over
                        && let Some(summary) = engine.game_over_summary()
                    {
                        observer.on_game_over(summary).await;
                    }
                }
            }
        }

        engine
    }

    pub fn apply<S: ScoreStore>(engine: &mut SnakeEngine<S>, command: EngineCommand) {
        match command {
            EngineCommand::Turn(id, direction) => engine.set_direction(id, direction),
            EngineCommand::Pause => engine.pause(),
            EngineCommand::Resume => engine.resume(),
            EngineCommand::TogglePause => engine.toggle_pause(),
            EngineCommand::Restart => engine.restart(),
            EngineCommand::ResetStats => engine.reset_stats(),
            EngineCommand::Shutdown => {}
        }
    }
}
