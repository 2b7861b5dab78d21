use crate::config::Validate;
use crate::games::SessionRng;
use crate::log;
use crate::persistence::{ScoreBoard, ScoreStore};
use super::game_state::{SnakeGameState, TickReport};
use super::settings::EngineSettings;
use super::types::{DeathReason, Direction, SnakeId};

/// Everything a renderer needs after a tick or a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineSnapshot {
    pub tick: u64,
    pub state: SnakeGameState,
    pub score_board: ScoreBoard,
    pub is_paused: bool,
    pub is_game_over: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub tick: u64,
    /// Only set in a duel where exactly one snake survived.
    pub winner: Option<SnakeId>,
    pub scores: Vec<(SnakeId, u32)>,
    pub deaths: Vec<(SnakeId, DeathReason)>,
    pub high_score: u32,
}

/// Owns one game: the board, pause/game-over flags, and the persisted score
/// board. All mutation happens in the command methods below.
pub struct SnakeEngine<S: ScoreStore> {
    settings: EngineSettings,
    state: SnakeGameState,
    rng: SessionRng,
    store: S,
    score_board: ScoreBoard,
    is_paused: bool,
    is_game_over: bool,
    tick: u64,
}

impl<S: ScoreStore> SnakeEngine<S> {
    pub fn new(settings: EngineSettings, store: S, mut rng: SessionRng) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid engine settings: {}", e))?;

        let score_board = ScoreBoard::load(&store);
        let state = SnakeGameState::new(&settings, &mut rng);

        log!(
            "Engine ready: {}x{} grid, {} snake(s), {:?} boundary, seed {}",
            settings.grid_size,
            settings.grid_size,
            settings.snake_count,
            settings.boundary_policy,
            rng.seed()
        );

        Ok(Self {
            settings,
            state,
            rng,
            store,
            score_board,
            is_paused: false,
            is_game_over: false,
            tick: 0,
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn score_board(&self) -> &ScoreBoard {
        &self.score_board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Whether `advance` would do anything.
    pub fn is_running(&self) -> bool {
        !self.is_paused && !self.is_game_over
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            tick: self.tick,
            state: self.state.clone(),
            score_board: self.score_board,
            is_paused: self.is_paused,
            is_game_over: self.is_game_over,
        }
    }

    /// Reversals and turns for absent or dead snakes are silently dropped.
    pub fn set_direction(&mut self, id: SnakeId, direction: Direction) {
        if self.state.snake(id).is_none() {
            log!("Ignoring turn for {}: not in this game", id);
            return;
        }
        self.state.set_direction(id, direction);
    }

    /// Runs one tick. Returns `None` without touching anything while paused or over.
    pub fn advance(&mut self) -> Option<TickReport> {
        if !self.is_running() {
            return None;
        }

        let (next, report) = self.state.advance(&mut self.rng);
        self.state = next;
        self.tick += 1;

        for eaten in &report.eaten {
            log!(
                "[tick {}] {} ate food at ({}, {}). Score: {}",
                self.tick,
                eaten.snake,
                eaten.at.x,
                eaten.at.y,
                eaten.score
            );
            if self.score_board.offer_score(eaten.score, &mut self.store) {
                log!("[tick {}] New high score: {}", self.tick, eaten.score);
            }
        }

        for (id, reason) in &report.deaths {
            log!("[tick {}] {} {}", self.tick, id, reason);
        }

        if report.game_over {
            self.is_game_over = true;
            if self.settings.snake_count == 2 {
                let player_alive = self.is_alive(SnakeId::Player);
                let bot_alive = self.is_alive(SnakeId::Bot);
                self.score_board
                    .record_outcome(player_alive, bot_alive, &mut self.store);
            }
            log!(
                "[tick {}] Game over. Tally: {:?}",
                self.tick,
                self.score_board.tally
            );
        }

        Some(report)
    }

    /// New board and scores; high score and tallies are kept.
    pub fn restart(&mut self) {
        self.state = SnakeGameState::new(&self.settings, &mut self.rng);
        self.is_paused = false;
        self.is_game_over = false;
        self.tick = 0;
        log!("Game restarted");
    }

    pub fn pause(&mut self) {
        self.is_paused = true;
    }

    pub fn resume(&mut self) {
        self.is_paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
    }

    /// Zeroes the win/loss tallies. High score and the running game are untouched.
    pub fn reset_stats(&mut self) {
        self.score_board.reset_tally(&mut self.store);
        log!("Win/loss stats reset");
    }

    pub fn game_over_summary(&self) -> Option<GameOverSummary> {
        if !self.is_game_over {
            return None;
        }

        let winner = if self.settings.snake_count == 2 {
            let alive: Vec<SnakeId> = self
                .state
                .snake_ids()
                .filter(|&id| self.is_alive(id))
                .collect();
            match alive.as_slice() {
                [only] => Some(*only),
                _ => None,
            }
        } else {
            None
        };

        let scores = self
            .state
            .snake_ids()
            .filter_map(|id| self.state.snake(id).map(|s| (id, s.score)))
            .collect();
        let deaths = self
            .state
            .snake_ids()
            .filter_map(|id| {
                self.state
                    .snake(id)
                    .and_then(|s| s.death_reason)
                    .map(|reason| (id, reason))
            })
            .collect();

        Some(GameOverSummary {
            tick: self.tick,
            winner,
            scores,
            deaths,
            high_score: self.score_board.high_score,
        })
    }

    fn is_alive(&self, id: SnakeId) -> bool {
        self.state.snake(id).is_some_and(|s| s.is_alive())
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SnakeGameState {
        &mut self.state
    }
}
