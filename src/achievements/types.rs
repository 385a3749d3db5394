//! Achievement system types and data structures.

use crate::core::game_state::Player;
use crate::economy::types::ShopKind;
use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement. Serialized as the snake_case id
/// stored in save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Combat
    FirstKill,
    TenKills,
    Survivor,
    HundredKills,
    Damager,
    LuckyBastard,
    DeathDefier,
    TreasureHunter,
    // Level
    #[serde(rename = "level_10")]
    Level10,
    #[serde(rename = "level_25")]
    Level25,
    #[serde(rename = "level_50")]
    Level50,
    // Rebirth
    FirstReincarnation,
    SpeedRunner,
    // Wealth and shopping
    RichPlayer,
    BigSpender,
    Collector,
    Completionist,
    // Time played
    Dedicated,
    Veteran,
    // Meta
    MasterCollector,
}

/// A pure predicate over the player. Evaluating one never mutates state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    EnemiesKilled(u64),
    LevelReached(u32),
    RebirthsCompleted(u32),
    GoldHeld(u64),
    GoldEarned(u64),
    Purchases(u64),
    DamageDealt(u64),
    SecondsPlayed(u64),
    AchievementsUnlocked(u32),
    ItemsFound(u64),
    CriticalStreak(u32),
    Deaths(u64),
    /// Reach a level again after at least one rebirth.
    LevelAfterRebirth { level: u32, rebirths: u32 },
    /// Buy at least one item from every category of the gold shop.
    AllShopCategoriesUsed,
}

impl Condition {
    pub fn satisfied(&self, player: &Player) -> bool {
        let stats = &player.stats;
        match *self {
            Condition::EnemiesKilled(n) => stats.enemies_killed >= n,
            Condition::LevelReached(level) => player.level >= level,
            Condition::RebirthsCompleted(n) => player.rebirth_count >= n,
            Condition::GoldHeld(n) => player.gold >= n,
            Condition::GoldEarned(n) => stats.gold_earned >= n,
            Condition::Purchases(n) => stats.purchases >= n,
            Condition::DamageDealt(n) => stats.total_damage_dealt >= n,
            Condition::SecondsPlayed(n) => stats.seconds_played >= n,
            Condition::AchievementsUnlocked(n) => stats.achievements_unlocked >= n,
            Condition::ItemsFound(n) => stats.items_found >= n,
            Condition::CriticalStreak(n) => stats.critical_streak >= n,
            Condition::Deaths(n) => stats.deaths >= n,
            Condition::LevelAfterRebirth { level, rebirths } => {
                player.level >= level && player.rebirth_count >= rebirths
            }
            Condition::AllShopCategoriesUsed => ShopKind::Gold
                .categories()
                .iter()
                .all(|c| stats.categories_purchased.contains(c)),
        }
    }
}

/// Currency granted on unlock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reward {
    pub gold: u64,
    pub soul_stones: u64,
}

impl Reward {
    pub const fn gold(amount: u64) -> Self {
        Self {
            gold: amount,
            soul_stones: 0,
        }
    }

    pub const fn soul_stones(amount: u64) -> Self {
        Self {
            gold: 0,
            soul_stones: amount,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: Condition,
    pub reward: Reward,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::types::ShopCategory;

    #[test]
    fn test_ids_serialize_as_save_keys() {
        assert_eq!(
            serde_json::to_string(&AchievementId::FirstKill).unwrap(),
            "\"first_kill\""
        );
        assert_eq!(
            serde_json::to_string(&AchievementId::Level25).unwrap(),
            "\"level_25\""
        );
        let id: AchievementId = serde_json::from_str("\"lucky_bastard\"").unwrap();
        assert_eq!(id, AchievementId::LuckyBastard);
    }

    #[test]
    fn test_conditions_read_player() {
        let mut player = Player::default();
        assert!(!Condition::EnemiesKilled(1).satisfied(&player));
        player.stats.enemies_killed = 1;
        assert!(Condition::EnemiesKilled(1).satisfied(&player));

        assert!(Condition::GoldHeld(50).satisfied(&player));
        assert!(!Condition::GoldHeld(51).satisfied(&player));

        let speed = Condition::LevelAfterRebirth {
            level: 25,
            rebirths: 1,
        };
        player.level = 30;
        assert!(!speed.satisfied(&player));
        player.rebirth_count = 1;
        assert!(speed.satisfied(&player));
    }

    #[test]
    fn test_all_shop_categories_needs_every_gold_category() {
        let mut player = Player::default();
        let cond = Condition::AllShopCategoriesUsed;
        assert!(!cond.satisfied(&player));

        for category in [
            ShopCategory::Weapons,
            ShopCategory::Armor,
            ShopCategory::Potions,
        ] {
            player.stats.categories_purchased.insert(category);
        }
        assert!(!cond.satisfied(&player));

        player.stats.categories_purchased.insert(ShopCategory::Special);
        assert!(cond.satisfied(&player));
    }
}
