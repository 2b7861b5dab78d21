mod observer;
mod scheduler;
mod session_rng;

pub mod snake;

pub use observer::StateObserver;
pub use scheduler::{IntervalTicker, ManualTickHandle, ManualTicker, TickSource};
pub use session_rng::SessionRng;
