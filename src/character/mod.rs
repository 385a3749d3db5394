//! Player progression, rebirth, hidden triggers and persistence.

pub mod prestige;
pub mod progression;
pub mod save;
pub mod secrets;

pub use prestige::{can_rebirth, perform_rebirth, required_level};
pub use progression::gain_experience;
pub use save::{LoadOutcome, SaveManager, SaveSnapshot};
pub use secrets::SecretKeyBuffer;
