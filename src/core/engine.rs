//! The game engine: one explicitly owned instance holding all state.
//!
//! Commands from the player and timers from the [`Scheduler`] are the only
//! two ways state changes. Each runs to completion, and anything it asked
//! to persist is written once at the end of the step.

use crate::achievements::{check_achievements, AchievementDef, ALL_ACHIEVEMENTS};
use crate::character::prestige::{perform_rebirth, refresh_rebirth_ready};
use crate::character::save::{LoadOutcome, SaveManager};
use crate::character::secrets::{activate_secret_mode, enable_dev_mode, SecretKeyBuffer};
use crate::combat::logic::{
    resolve_enemy_attack, resolve_player_attack, spawn_enemy, tick_cooldown, use_special_ability,
    AttackOutcome,
};
use crate::core::constants::*;
use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::{GameState, Settings};
use crate::core::scheduler::{Scheduler, TimerEvent};
use crate::economy::logic::{purchase, ShopListing, ShopView};
use crate::economy::types::{ShopCategory, ShopKind};
use crate::error::{ActionRejected, PersistenceError};
use crate::utils::persistence::SnapshotStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use tracing::{debug, info, warn};

/// A discrete input from the player.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Attack,
    UseSpecialAbility,
    Buy { shop: ShopKind, item_id: String },
    SwitchShop,
    SwitchCategory {
        shop: ShopKind,
        category: ShopCategory,
    },
    ConfirmRebirth,
    ConfirmSettings(Settings),
    /// Hidden developer shortcut.
    DevMode,
    /// Any other keystroke, fed to the secret-code buffer.
    KeyPressed(char),
}

/// How an engine starts up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Read the stored snapshot at startup. Turning this off starts a new
    /// game that will overwrite the old save on its first write.
    pub load_save: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            seed: None,
            load_save: true,
        }
    }
}

pub struct GameEngine {
    state: GameState,
    rng: StdRng,
    scheduler: Scheduler,
    now_ms: u64,
    saves: SaveManager,
    shop_view: ShopView,
    secret_keys: SecretKeyBuffer,
    log: VecDeque<String>,
    events: Vec<GameEvent>,
}

impl GameEngine {
    pub fn new(store: Box<dyn SnapshotStore>) -> Self {
        Self::with_options(store, EngineOptions::default())
    }

    /// Deterministic engine for tests and simulation.
    pub fn with_seed(store: Box<dyn SnapshotStore>, seed: u64) -> Self {
        Self::with_options(
            store,
            EngineOptions {
                seed: Some(seed),
                ..EngineOptions::default()
            },
        )
    }

    /// Builds the engine, loads the save (once, before any timer runs),
    /// spawns the first enemy and starts the periodic timers.
    pub fn with_options(store: Box<dyn SnapshotStore>, options: EngineOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut engine = Self {
            state: GameState::new(chrono::Utc::now().timestamp()),
            rng,
            scheduler: Scheduler::new(),
            now_ms: 0,
            saves: SaveManager::new(store),
            shop_view: ShopView::default(),
            secret_keys: SecretKeyBuffer::default(),
            log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            events: Vec::new(),
        };

        let mut result = TickResult::default();
        if options.load_save {
            engine.load(&mut result);
        }
        spawn_enemy(&mut engine.state, &mut engine.rng, &mut result);
        for timer in [
            TimerEvent::SecondTick,
            TimerEvent::ReadinessCheck,
            TimerEvent::Autosave,
        ] {
            if let Some(period) = timer.period_ms() {
                engine.scheduler.schedule_at(period, timer);
            }
        }
        engine.finish_step(result);
        engine
    }

    fn load(&mut self, result: &mut TickResult) {
        match self.saves.load() {
            Ok(LoadOutcome::Fresh) => info!("no save found, starting a new game"),
            Ok(LoadOutcome::Restored(snapshot)) => {
                info!(
                    level = snapshot.player.level,
                    rebirths = snapshot.player.rebirth_count,
                    "save loaded"
                );
                snapshot.apply_to(&mut self.state);
                result.push(GameEvent::Loaded);
            }
            Ok(LoadOutcome::VersionMismatch { found }) => {
                info!(%found, expected = SAVE_VERSION, "save version differs, starting a new game");
            }
            Err(e) => {
                warn!(error = %e, "could not load save");
                result.push(GameEvent::LoadFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    /// Applies one player command. A rejected command changes nothing.
    pub fn execute(&mut self, command: Command) -> Result<(), ActionRejected> {
        let mut result = TickResult::default();
        let outcome = self.dispatch(command, &mut result);
        if let Err(rejection) = &outcome {
            debug!(%rejection, "command rejected");
        }
        self.finish_step(result);
        outcome
    }

    fn dispatch(
        &mut self,
        command: Command,
        result: &mut TickResult,
    ) -> Result<(), ActionRejected> {
        match command {
            Command::Attack => {
                match resolve_player_attack(&mut self.state, &mut self.rng, result)? {
                    AttackOutcome::EnemySurvived => {
                        self.schedule_in(
                            ENEMY_COUNTER_ATTACK_DELAY_MS,
                            TimerEvent::EnemyCounterAttack,
                        )
                    }
                    AttackOutcome::EnemyDefeated => {
                        self.schedule_in(VICTORY_RESPAWN_DELAY_MS, TimerEvent::RespawnEnemy)
                    }
                }
                Ok(())
            }
            Command::UseSpecialAbility => use_special_ability(&mut self.state, result),
            Command::Buy { shop, item_id } => {
                purchase(&mut self.state, shop, &item_id, result).map(|_| ())
            }
            Command::SwitchShop => {
                self.shop_view.switch_shop();
                Ok(())
            }
            Command::SwitchCategory { shop, category } => {
                self.shop_view.select_category(shop, category)
            }
            Command::ConfirmRebirth => perform_rebirth(&mut self.state, result),
            Command::ConfirmSettings(settings) => {
                self.state.settings = settings.sanitized();
                result.push(GameEvent::SettingsChanged);
                Ok(())
            }
            Command::DevMode => {
                enable_dev_mode(&mut self.state, result);
                Ok(())
            }
            Command::KeyPressed(key) => {
                if self.secret_keys.push(key) {
                    activate_secret_mode(&mut self.state, result);
                }
                Ok(())
            }
        }
    }

    /// Moves the clock forward, firing every timer that comes due on the
    /// way, each as its own step.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let target = self.now_ms.saturating_add(elapsed_ms);
        while let Some((due_ms, timer)) = self.scheduler.pop_due(target) {
            self.now_ms = self.now_ms.max(due_ms);
            let mut result = TickResult::default();
            self.handle_timer(timer, &mut result);
            if let Some(period) = timer.period_ms() {
                self.scheduler.schedule_at(due_ms + period, timer);
            }
            self.finish_step(result);
        }
        self.now_ms = target;
    }

    fn handle_timer(&mut self, timer: TimerEvent, result: &mut TickResult) {
        match timer {
            TimerEvent::EnemyCounterAttack => {
                if let Some(strike) = resolve_enemy_attack(&mut self.state, result) {
                    if strike.player_defeated {
                        self.schedule_in(DEFEAT_RESPAWN_DELAY_MS, TimerEvent::RespawnEnemy);
                    }
                }
            }
            TimerEvent::RespawnEnemy => spawn_enemy(&mut self.state, &mut self.rng, result),
            TimerEvent::SecondTick => {
                tick_cooldown(&mut self.state, result);
                self.state.player.stats.seconds_played += 1;
            }
            TimerEvent::ReadinessCheck => {
                refresh_rebirth_ready(&mut self.state, result);
                check_achievements(&mut self.state, result);
            }
            TimerEvent::Autosave => result.request_save(),
        }
    }

    fn schedule_in(&mut self, delay_ms: u64, timer: TimerEvent) {
        self.scheduler
            .schedule_at(self.now_ms.saturating_add(delay_ms), timer);
    }

    fn finish_step(&mut self, mut result: TickResult) {
        if result.save_requested {
            let _ = self.save_into(&mut result);
        }
        for event in result.events {
            if event.is_logged() {
                if self.log.len() == EVENT_LOG_CAPACITY {
                    self.log.pop_front();
                }
                self.log.push_back(event.message());
            }
            self.events.push(event);
        }
    }

    fn save_into(&mut self, result: &mut TickResult) -> Result<(), PersistenceError> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        match self.saves.save(&self.state, timestamp) {
            Ok(()) => {
                debug!("game saved");
                result.push(GameEvent::Saved);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                result.push(GameEvent::SaveFailed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Saves right away, e.g. on exit.
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        let mut result = TickResult::default();
        let outcome = self.save_into(&mut result);
        self.finish_step(result);
        outcome
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tools and tests that need to set up a
    /// scenario. Bypasses every rule.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Milliseconds since the engine started.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// When the next timer fires.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    pub fn pending_timers(&self, timer: TimerEvent) -> usize {
        self.scheduler.pending(timer)
    }

    pub fn shop_view(&self) -> &ShopView {
        &self.shop_view
    }

    /// Items in the open shop's current category.
    pub fn shop_listing(&self) -> Vec<ShopListing> {
        self.shop_view.listing(&self.state.player)
    }

    /// Every achievement with whether it is unlocked.
    pub fn achievements(&self) -> impl Iterator<Item = (&'static AchievementDef, bool)> + '_ {
        ALL_ACHIEVEMENTS
            .iter()
            .map(|def| (def, self.state.unlocked_achievements.contains(&def.id)))
    }

    /// Recent log lines, oldest first.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Takes every event emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::MemoryStore;

    fn engine() -> (GameEngine, MemoryStore) {
        let store = MemoryStore::new();
        (GameEngine::with_seed(Box::new(store.clone()), 7), store)
    }

    #[test]
    fn test_engine_starts_with_enemy_and_timers() {
        let (mut engine, _) = engine();
        assert!(engine.state().live_enemy().is_some());
        assert_eq!(engine.next_due_ms(), Some(SECOND_TICK_MS));

        let events = engine.drain_events();
        assert!(matches!(events[0], GameEvent::EnemySpawned { .. }));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_attack_schedules_counter_attack() {
        let (mut engine, _) = engine();
        engine.state_mut().current_enemy.as_mut().unwrap().health = 10_000;
        engine.state_mut().current_enemy.as_mut().unwrap().max_health = 10_000;

        engine.execute(Command::Attack).unwrap();
        assert_eq!(engine.pending_timers(TimerEvent::EnemyCounterAttack), 1);

        let health_before = engine.state().player.health;
        engine.advance(ENEMY_COUNTER_ATTACK_DELAY_MS);
        assert!(engine.state().player.health < health_before);
        assert_eq!(engine.pending_timers(TimerEvent::EnemyCounterAttack), 0);
    }

    #[test]
    fn test_heal_before_counter_attack_lands() {
        let (mut engine, _) = engine();
        engine.state_mut().current_enemy.as_mut().unwrap().health = 10_000;
        engine.execute(Command::Attack).unwrap();
        engine.state_mut().player.health = 1;
        engine.execute(Command::UseSpecialAbility).unwrap();
        assert_eq!(engine.state().player.health, 100);

        engine.advance(ENEMY_COUNTER_ATTACK_DELAY_MS);
        assert!(engine.state().player.health < 100);
        assert!(engine.state().player.is_alive());
    }

    #[test]
    fn test_periodic_timers_reschedule() {
        let (mut engine, store) = engine();
        engine.advance(AUTOSAVE_INTERVAL_MS);
        assert_eq!(engine.state().player.stats.seconds_played, 15);
        assert_eq!(store.write_count(), 1);

        engine.advance(AUTOSAVE_INTERVAL_MS);
        assert_eq!(engine.state().player.stats.seconds_played, 30);
        assert_eq!(store.write_count(), 2);
        assert_eq!(engine.now_ms(), 2 * AUTOSAVE_INTERVAL_MS);
    }

    #[test]
    fn test_rejected_command_has_no_side_effects() {
        let (mut engine, store) = engine();
        engine.drain_events();
        let before = engine.state().clone();

        let err = engine.execute(Command::Buy {
            shop: ShopKind::Gold,
            item_id: "dragonslayer".to_string(),
        });
        assert!(matches!(err, Err(ActionRejected::InsufficientFunds { .. })));
        assert_eq!(engine.state(), &before);
        assert!(engine.drain_events().is_empty());
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_purchase_saves_once() {
        let (mut engine, store) = engine();
        engine.execute(Command::Buy {
            shop: ShopKind::Gold,
            item_id: "health_potion".to_string(),
        })
        .unwrap();
        assert_eq!(store.write_count(), 1);
        assert_eq!(engine.state().player.gold, 0);
    }

    #[test]
    fn test_secret_code_through_key_presses() {
        let (mut engine, _) = engine();
        for c in SECRET_CODE.chars() {
            engine.execute(Command::KeyPressed(c)).unwrap();
        }
        assert!(engine.state().game_stats.special_unlocks.secret_mode);
        assert_eq!(engine.state().player.max_health, 500);

        for c in SECRET_CODE.chars() {
            engine.execute(Command::KeyPressed(c)).unwrap();
        }
        assert_eq!(engine.state().player.max_health, 500);
    }

    #[test]
    fn test_settings_are_clamped() {
        let (mut engine, _) = engine();
        engine
            .execute(Command::ConfirmSettings(Settings {
                sound_effects: false,
                background_music: true,
                animation_speed: 0.01,
            }))
            .unwrap();
        let settings = engine.state().settings;
        assert!(!settings.sound_effects);
        assert_eq!(settings.animation_speed, MIN_ANIMATION_SPEED);
    }

    #[test]
    fn test_log_is_bounded() {
        let (mut engine, _) = engine();
        for _ in 0..(EVENT_LOG_CAPACITY + 10) {
            engine
                .execute(Command::ConfirmSettings(Settings::default()))
                .unwrap();
        }
        assert_eq!(engine.log().count(), EVENT_LOG_CAPACITY);
    }

    #[test]
    fn test_shop_commands() {
        let (mut engine, _) = engine();
        engine.execute(Command::SwitchShop).unwrap();
        assert_eq!(engine.shop_view().active, ShopKind::Soul);

        assert_eq!(
            engine.execute(Command::SwitchCategory {
                shop: ShopKind::Soul,
                category: ShopCategory::Potions,
            }),
            Err(ActionRejected::CategoryNotInShop)
        );
        engine
            .execute(Command::SwitchCategory {
                shop: ShopKind::Soul,
                category: ShopCategory::Upgrades,
            })
            .unwrap();
        assert_eq!(engine.shop_listing().len(), 4);
    }
}
