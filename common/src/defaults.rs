pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 120;

pub const HIGH_SCORE_KEY: &str = "highScore";
pub const PLAYER_WINS_KEY: &str = "playerWins";
pub const PLAYER_LOSSES_KEY: &str = "playerLosses";
pub const BOT_WINS_KEY: &str = "botWins";
pub const BOT_LOSSES_KEY: &str = "botLosses";
