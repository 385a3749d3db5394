use crate::achievements::AchievementId;
use crate::core::constants::SAVE_VERSION;
use crate::core::game_state::{GameState, GameStats, Player};
use crate::error::PersistenceError;
use crate::utils::persistence::SnapshotStore;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Everything that survives a restart. Enemy, settings and timers are not
/// part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveSnapshot {
    pub player: Player,
    #[serde(default)]
    pub game_stats: GameStats,
    #[serde(default, deserialize_with = "known_achievements")]
    pub unlocked_achievements: Vec<AchievementId>,
    #[serde(default)]
    pub unlocked_easter_eggs: Vec<String>,
    pub version: String,
    /// Unix milliseconds at save time.
    #[serde(default)]
    pub save_timestamp: i64,
}

impl SaveSnapshot {
    /// Copies the persistent parts of `state`.
    pub fn capture(state: &GameState, save_timestamp: i64) -> Self {
        Self {
            player: state.player.clone(),
            game_stats: state.game_stats.clone(),
            unlocked_achievements: state.unlocked_achievements.iter().copied().collect(),
            unlocked_easter_eggs: state.unlocked_easter_eggs.iter().cloned().collect(),
            version: SAVE_VERSION.to_string(),
            save_timestamp,
        }
    }

    /// Overwrites player and stats wholesale and replaces both unlock sets.
    /// Fields missing from the snapshot already fell back to defaults
    /// during deserialization, so readiness and health are re-derived here.
    pub fn apply_to(self, state: &mut GameState) {
        state.player = self.player;
        let player = &mut state.player;
        player.special_ready = player.special_cooldown == 0;
        player.health = player.health.min(player.max_health);
        state.game_stats = self.game_stats;
        state.unlocked_achievements = self.unlocked_achievements.into_iter().collect();
        state.unlocked_easter_eggs = self.unlocked_easter_eggs.into_iter().collect();
    }
}

/// Keeps the achievement ids this build knows. Ids from other builds are
/// dropped rather than failing the whole load; `null` reads as empty.
fn known_achievements<'de, D>(deserializer: D) -> Result<Vec<AchievementId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|value| match AchievementId::deserialize(&value) {
            Ok(id) => Some(id),
            Err(_) => {
                warn!(id = %value, "ignoring unknown achievement in save");
                None
            }
        })
        .collect())
}

/// What a load attempt found.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Nothing saved yet.
    Fresh,
    Restored(Box<SaveSnapshot>),
    /// A save exists but was written by a different version. It is ignored.
    VersionMismatch { found: String },
}

/// Reads and writes the snapshot through a [`SnapshotStore`].
pub struct SaveManager {
    store: Box<dyn SnapshotStore>,
}

impl SaveManager {
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Serializes the persistent state and writes it out.
    pub fn save(&mut self, state: &GameState, save_timestamp: i64) -> Result<(), PersistenceError> {
        let snapshot = SaveSnapshot::capture(state, save_timestamp);
        let json = serde_json::to_string_pretty(&snapshot)?;
        self.store.write(&json)
    }

    /// Reads the stored snapshot.
    ///
    /// The version is checked before the rest is decoded, so a save from
    /// another version is reported as a mismatch even if its shape changed.
    pub fn load(&self) -> Result<LoadOutcome, PersistenceError> {
        let Some(json) = self.store.read()? else {
            return Ok(LoadOutcome::Fresh);
        };

        let value: Value = serde_json::from_str(&json)?;
        let found = value
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default();
        if found != SAVE_VERSION {
            return Ok(LoadOutcome::VersionMismatch {
                found: found.to_string(),
            });
        }

        let snapshot: SaveSnapshot = serde_json::from_value(value)?;
        Ok(LoadOutcome::Restored(Box::new(snapshot)))
    }

    /// Whether anything has been saved.
    pub fn save_exists(&self) -> bool {
        matches!(self.store.read(), Ok(Some(_)))
    }
}
