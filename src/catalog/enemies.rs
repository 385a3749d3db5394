//! Enemy templates.

use crate::combat::types::EnemyTemplate;

pub const ENEMY_TEMPLATES: &[EnemyTemplate] = &[
    EnemyTemplate {
        id: "slime",
        name: "Slime",
        description: "An ordinary green slime. Very slow.",
        base_level: 1,
        base_health: 30,
        base_damage: 5,
        base_gold_reward: 15,
        base_exp_reward: 25,
    },
    EnemyTemplate {
        id: "goblin",
        name: "Goblin",
        description: "A sly goblin with a wooden club.",
        base_level: 2,
        base_health: 45,
        base_damage: 8,
        base_gold_reward: 25,
        base_exp_reward: 40,
    },
    EnemyTemplate {
        id: "wolf",
        name: "Wolf",
        description: "A wild wolf. Fast and dangerous.",
        base_level: 3,
        base_health: 60,
        base_damage: 12,
        base_gold_reward: 35,
        base_exp_reward: 55,
    },
    EnemyTemplate {
        id: "orc",
        name: "Orc",
        description: "A strong orc with a heavy cudgel.",
        base_level: 5,
        base_health: 100,
        base_damage: 20,
        base_gold_reward: 60,
        base_exp_reward: 80,
    },
    EnemyTemplate {
        id: "skeleton",
        name: "Skeleton",
        description: "A risen corpse. Resists magic.",
        base_level: 7,
        base_health: 80,
        base_damage: 15,
        base_gold_reward: 45,
        base_exp_reward: 70,
    },
    EnemyTemplate {
        id: "spider",
        name: "Spider",
        description: "A venomous spider.",
        base_level: 4,
        base_health: 50,
        base_damage: 10,
        base_gold_reward: 30,
        base_exp_reward: 45,
    },
    EnemyTemplate {
        id: "bandit",
        name: "Bandit",
        description: "A seasoned bandit with a dagger.",
        base_level: 6,
        base_health: 90,
        base_damage: 18,
        base_gold_reward: 55,
        base_exp_reward: 75,
    },
    EnemyTemplate {
        id: "dragonling",
        name: "Dragonling",
        description: "A young dragon. Deadly for beginners!",
        base_level: 15,
        base_health: 300,
        base_damage: 50,
        base_gold_reward: 200,
        base_exp_reward: 300,
    },
    EnemyTemplate {
        id: "ancient_tree",
        name: "Ancient Tree",
        description: "A very strong opponent. Bring experience!",
        base_level: 25,
        base_health: 800,
        base_damage: 80,
        base_gold_reward: 500,
        base_exp_reward: 600,
    },
    EnemyTemplate {
        id: "shadow_wraith",
        name: "Shadow Wraith",
        description: "A spirit of darkness. Extremely dangerous!",
        base_level: 35,
        base_health: 1200,
        base_damage: 120,
        base_gold_reward: 800,
        base_exp_reward: 1000,
    },
];

pub fn get_enemy_template(id: &str) -> Option<&'static EnemyTemplate> {
    ENEMY_TEMPLATES.iter().find(|t| t.id == id)
}
