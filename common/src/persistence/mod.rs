mod score_board;
mod score_store;
mod yaml_score_store;

pub use score_board::{ScoreBoard, WinLossTally};
pub use score_store::{MemoryScoreStore, NullScoreStore, ScoreStore};
pub use yaml_score_store::YamlScoreStore;
