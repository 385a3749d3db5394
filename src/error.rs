//! Error taxonomy for the engine.
//!
//! Nothing here is fatal. Rejected actions leave state untouched and are
//! shown to the player as a notice; persistence failures are logged and the
//! game keeps running on in-memory state.

use crate::economy::types::Currency;
use std::io;
use thiserror::Error;

/// A player action that was refused. No state was mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionRejected {
    #[error("there is no enemy to fight")]
    NoLiveEnemy,
    #[error("you are down and cannot act")]
    PlayerDown,
    #[error("ability is on cooldown ({remaining}s left)")]
    AbilityNotReady { remaining: u32 },
    #[error("not enough {currency}: need {cost}, have {balance}")]
    InsufficientFunds {
        currency: Currency,
        cost: u64,
        balance: u64,
    },
    #[error("no such item: {id}")]
    UnknownItem { id: String },
    #[error("that category is not sold in this shop")]
    CategoryNotInShop,
    #[error("rebirth requires level {required_level} (currently {level})")]
    RebirthLocked { required_level: u32, level: u32 },
}

/// Failure while reading or writing the save snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("save data could not be encoded or decoded: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("save storage is unavailable")]
    StoreUnavailable,
    #[error("could not determine home directory")]
    NoHomeDir,
}
