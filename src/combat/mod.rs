//! Combat system types and logic.

pub mod logic;
pub mod types;

pub use logic::{
    on_player_defeated, resolve_enemy_attack, resolve_player_attack, spawn_enemy, tick_cooldown,
    use_special_ability, win_battle, AttackOutcome, EnemyStrike,
};
pub use types::{DamageRange, Enemy, EnemyTemplate};
