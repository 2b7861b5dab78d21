//! Tick-based snake simulation: one snake on a walled grid or a player/bot
//! duel on a wrapping grid, with persisted high score and win/loss tallies.

pub mod config;
pub mod defaults;
pub mod games;
pub mod logger;
pub mod persistence;
