//! Hero's Path - incremental RPG progression and combat engine.
//!
//! The library holds every game rule. [`core::GameEngine`] owns one game:
//! feed it [`core::Command`]s and advance its clock, then read the state and
//! drained [`core::GameEvent`]s to render. The `heropath` binary is a
//! terminal front end; `simulate` drives the engine headless.

pub mod achievements;
pub mod build_info;
pub mod catalog;
pub mod character;
pub mod combat;
pub mod core;
pub mod economy;
pub mod error;
pub mod utils;

pub use crate::core::{Command, EngineOptions, GameEngine, GameEvent};
pub use crate::error::{ActionRejected, PersistenceError};
