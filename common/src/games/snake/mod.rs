mod engine;
mod entity;
mod game_state;
mod session;
mod settings;
mod types;

pub use engine::{EngineSnapshot, GameOverSummary, SnakeEngine};
pub use entity::Snake;
pub use game_state::{FoodEaten, SnakeGameState, TickReport};
pub use session::{EngineCommand, SnakeSession};
pub use settings::EngineSettings;
pub use types::{BoundaryPolicy, DeathReason, Direction, Point, SnakeId};
