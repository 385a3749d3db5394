//! Core game state, timing and the engine that ties the systems together.

pub mod constants;
pub mod engine;
pub mod events;
pub mod game_state;
pub mod scheduler;

pub use engine::{Command, EngineOptions, GameEngine};
pub use events::{GameEvent, TickResult};
pub use game_state::{GameState, Player, Settings};
pub use scheduler::{Scheduler, TimerEvent};
