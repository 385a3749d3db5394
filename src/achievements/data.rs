//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId, Condition, Reward};

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstKill,
        name: "First Blood",
        description: "Defeat your first enemy",
        icon: "⚔️",
        condition: Condition::EnemiesKilled(1),
        reward: Reward::gold(100),
    },
    AchievementDef {
        id: AchievementId::TenKills,
        name: "Hunter",
        description: "Defeat 10 enemies",
        icon: "🏹",
        condition: Condition::EnemiesKilled(10),
        reward: Reward::gold(500),
    },
    AchievementDef {
        id: AchievementId::HundredKills,
        name: "Mass Slayer",
        description: "Defeat 100 enemies",
        icon: "💀",
        condition: Condition::EnemiesKilled(100),
        reward: Reward::gold(5_000),
    },
    AchievementDef {
        id: AchievementId::Level10,
        name: "Novice",
        description: "Reach level 10",
        icon: "⭐",
        condition: Condition::LevelReached(10),
        reward: Reward::gold(1_000),
    },
    AchievementDef {
        id: AchievementId::Level25,
        name: "Veteran Adventurer",
        description: "Reach level 25",
        icon: "🌟",
        condition: Condition::LevelReached(25),
        reward: Reward::gold(5_000),
    },
    AchievementDef {
        id: AchievementId::Level50,
        name: "Legend",
        description: "Reach level 50",
        icon: "👑",
        condition: Condition::LevelReached(50),
        reward: Reward::gold(20_000),
    },
    AchievementDef {
        id: AchievementId::FirstReincarnation,
        name: "Eternal Cycle",
        description: "Be reborn for the first time",
        icon: "🔄",
        condition: Condition::RebirthsCompleted(1),
        reward: Reward::soul_stones(1),
    },
    AchievementDef {
        id: AchievementId::RichPlayer,
        name: "Moneybags",
        description: "Hold 10,000 gold",
        icon: "💰",
        condition: Condition::GoldHeld(10_000),
        reward: Reward::gold(2_000),
    },
    AchievementDef {
        id: AchievementId::BigSpender,
        name: "Generous Trader",
        description: "Earn 25,000 gold in total",
        icon: "🛒",
        condition: Condition::GoldEarned(25_000),
        reward: Reward::gold(1_000),
    },
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Buy 20 items",
        icon: "📦",
        condition: Condition::Purchases(20),
        reward: Reward::gold(2_000),
    },
    AchievementDef {
        id: AchievementId::Survivor,
        name: "Survivor",
        description: "Win 50 battles",
        icon: "🛡️",
        condition: Condition::EnemiesKilled(50),
        reward: Reward::gold(3_000),
    },
    AchievementDef {
        id: AchievementId::Damager,
        name: "Master of Damage",
        description: "Deal 100,000 damage",
        icon: "⚡",
        condition: Condition::DamageDealt(100_000),
        reward: Reward::gold(5_000),
    },
    AchievementDef {
        id: AchievementId::Dedicated,
        name: "Dedicated",
        description: "Play for 1 hour",
        icon: "⏰",
        condition: Condition::SecondsPlayed(3_600),
        reward: Reward::gold(1_000),
    },
    AchievementDef {
        id: AchievementId::Veteran,
        name: "Veteran",
        description: "Play for 5 hours",
        icon: "🏆",
        condition: Condition::SecondsPlayed(18_000),
        reward: Reward::gold(5_000),
    },
    AchievementDef {
        id: AchievementId::MasterCollector,
        name: "Grand Collector",
        description: "Unlock 14 other achievements",
        icon: "🎖️",
        condition: Condition::AchievementsUnlocked(14),
        reward: Reward::soul_stones(5),
    },
    AchievementDef {
        id: AchievementId::SpeedRunner,
        name: "Speedrunner",
        description: "Reach level 25 again after a rebirth",
        icon: "💨",
        condition: Condition::LevelAfterRebirth {
            level: 25,
            rebirths: 1,
        },
        reward: Reward::gold(10_000),
    },
    AchievementDef {
        id: AchievementId::TreasureHunter,
        name: "Treasure Hunter",
        description: "Find 10 items on enemies",
        icon: "💎",
        condition: Condition::ItemsFound(10),
        reward: Reward::gold(3_000),
    },
    AchievementDef {
        id: AchievementId::LuckyBastard,
        name: "Lucky Streak",
        description: "Land 10 critical hits in a row",
        icon: "🍀",
        condition: Condition::CriticalStreak(10),
        reward: Reward::gold(2_000),
    },
    AchievementDef {
        id: AchievementId::DeathDefier,
        name: "Death Defier",
        description: "Survive 5 defeats",
        icon: "💀",
        condition: Condition::Deaths(5),
        reward: Reward::gold(2_500),
    },
    AchievementDef {
        id: AchievementId::Completionist,
        name: "Completionist",
        description: "Buy from every shop category",
        icon: "✅",
        condition: Condition::AllShopCategoriesUsed,
        reward: Reward::soul_stones(2),
    },
];

/// Looks up an achievement definition by id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}
