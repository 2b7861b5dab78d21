use crate::defaults::{
    BOT_LOSSES_KEY, BOT_WINS_KEY, HIGH_SCORE_KEY, PLAYER_LOSSES_KEY, PLAYER_WINS_KEY,
};
use super::ScoreStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinLossTally {
    pub player_wins: u32,
    pub player_losses: u32,
    pub bot_wins: u32,
    pub bot_losses: u32,
}

impl WinLossTally {
    /// Applies the outcome of a finished duel. Both sides dead is a loss for both.
    pub fn record(&mut self, player_alive: bool, bot_alive: bool) {
        match (player_alive, bot_alive) {
            (false, true) => {
                self.player_losses = self.player_losses.saturating_add(1);
                self.bot_wins = self.bot_wins.saturating_add(1);
            }
            (true, false) => {
                self.player_wins = self.player_wins.saturating_add(1);
                self.bot_losses = self.bot_losses.saturating_add(1);
            }
            (false, false) => {
                self.player_losses = self.player_losses.saturating_add(1);
                self.bot_losses = self.bot_losses.saturating_add(1);
            }
            (true, true) => {}
        }
    }

    fn entries(&self) -> [(&'static str, u32); 4] {
        [
            (PLAYER_WINS_KEY, self.player_wins),
            (PLAYER_LOSSES_KEY, self.player_losses),
            (BOT_WINS_KEY, self.bot_wins),
            (BOT_LOSSES_KEY, self.bot_losses),
        ]
    }
}

/// High score and win/loss tallies, mirrored to a `ScoreStore` on every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub high_score: u32,
    pub tally: WinLossTally,
}

impl ScoreBoard {
    /// Absent keys read as zero.
    pub fn load(store: &impl ScoreStore) -> Self {
        let read = |key: &str| store.get(key).unwrap_or(0);
        Self {
            high_score: read(HIGH_SCORE_KEY),
            tally: WinLossTally {
                player_wins: read(PLAYER_WINS_KEY),
                player_losses: read(PLAYER_LOSSES_KEY),
                bot_wins: read(BOT_WINS_KEY),
                bot_losses: read(BOT_LOSSES_KEY),
            },
        }
    }

    /// Raises and persists the high score if `score` beats it.
    pub fn offer_score(&mut self, score: u32, store: &mut impl ScoreStore) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        store.set(HIGH_SCORE_KEY, score);
        true
    }

    pub fn record_outcome(
        &mut self,
        player_alive: bool,
        bot_alive: bool,
        store: &mut impl ScoreStore,
    ) {
        self.tally.record(player_alive, bot_alive);
        store.set_many(&self.tally.entries());
    }

    pub fn reset_tally(&mut self, store: &mut impl ScoreStore) {
        self.tally = WinLossTally::default();
        store.set_many(&self.tally.entries());
    }
}
