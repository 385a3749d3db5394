//! Gold-shop and soul-shop inventories.

use crate::combat::types::DamageRange;
use crate::economy::types::{Artifact, ItemKind, ShopCategory, ShopItem, SoulUpgrade};

pub const GOLD_SHOP_ITEMS: &[ShopItem] = &[
    // ═══════════════════════════════════════════════════════════════
    // WEAPONS
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "wooden_sword",
        name: "Wooden Sword",
        description: "A simple wooden sword. 5-10 damage",
        cost: 100,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(5, 10),
        },
    },
    ShopItem {
        id: "iron_sword",
        name: "Iron Sword",
        description: "A reliable iron sword. 15-25 damage",
        cost: 500,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(15, 25),
        },
    },
    ShopItem {
        id: "steel_sword",
        name: "Steel Sword",
        description: "A sharp steel sword. 30-50 damage",
        cost: 2_000,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(30, 50),
        },
    },
    ShopItem {
        id: "mithril_blade",
        name: "Mithril Blade",
        description: "A legendary mithril blade! 60-100 damage",
        cost: 10_000,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(60, 100),
        },
    },
    ShopItem {
        id: "dragonslayer",
        name: "Dragonslayer",
        description: "A sword that can fell a dragon! 120-200 damage",
        cost: 50_000,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(120, 200),
        },
    },
    // ═══════════════════════════════════════════════════════════════
    // ARMOR
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "leather_armor",
        name: "Leather Armor",
        description: "Light leather armor. +5 defense",
        cost: 150,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 5 },
    },
    ShopItem {
        id: "chainmail",
        name: "Chainmail",
        description: "Sturdy chainmail. +15 defense",
        cost: 750,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 15 },
    },
    ShopItem {
        id: "plate_armor",
        name: "Plate Armor",
        description: "Heavy plate armor. +35 defense",
        cost: 3_000,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 35 },
    },
    ShopItem {
        id: "dragon_scale",
        name: "Dragon Scale",
        description: "Armor of dragon scales! +70 defense",
        cost: 15_000,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 70 },
    },
    ShopItem {
        id: "void_armor",
        name: "Void Armor",
        description: "Mystic armor of the Void! +150 defense",
        cost: 75_000,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 150 },
    },
    // ═══════════════════════════════════════════════════════════════
    // POTIONS
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "health_potion",
        name: "Health Potion",
        description: "Restores 50 health",
        cost: 50,
        category: ShopCategory::Potions,
        kind: ItemKind::Consumable,
    },
    ShopItem {
        id: "big_health_potion",
        name: "Large Health Potion",
        description: "Restores 150 health",
        cost: 150,
        category: ShopCategory::Potions,
        kind: ItemKind::Consumable,
    },
    ShopItem {
        id: "strength_potion",
        name: "Strength Potion",
        description: "Increases damage for 10 minutes",
        cost: 200,
        category: ShopCategory::Potions,
        kind: ItemKind::Consumable,
    },
    ShopItem {
        id: "luck_potion",
        name: "Luck Potion",
        description: "Increases critical chance for 10 minutes",
        cost: 300,
        category: ShopCategory::Potions,
        kind: ItemKind::Consumable,
    },
    // ═══════════════════════════════════════════════════════════════
    // SPECIAL
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "amulet_power",
        name: "Amulet of Power",
        description: "Permanently increases damage by 25%",
        cost: 5_000,
        category: ShopCategory::Special,
        kind: ItemKind::Accessory,
    },
    ShopItem {
        id: "ring_wisdom",
        name: "Ring of Wisdom",
        description: "Permanently increases experience gained by 20%",
        cost: 8_000,
        category: ShopCategory::Special,
        kind: ItemKind::Accessory,
    },
    ShopItem {
        id: "charm_luck",
        name: "Lucky Charm",
        description: "Increases gold gained by 30%",
        cost: 12_000,
        category: ShopCategory::Special,
        kind: ItemKind::Accessory,
    },
    ShopItem {
        id: "book_ancient",
        name: "Ancient Tome",
        description: "Reveals secret knowledge. +50% to all stats!",
        cost: 25_000,
        category: ShopCategory::Special,
        kind: ItemKind::Special,
    },
];

pub const SOUL_SHOP_ITEMS: &[ShopItem] = &[
    // ═══════════════════════════════════════════════════════════════
    // WEAPONS
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "soul_blade",
        name: "Soul Blade",
        description: "A legendary blade of frozen souls. 200-400 damage",
        cost: 3,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(200, 400),
        },
    },
    ShopItem {
        id: "void_scythe",
        name: "Void Scythe",
        description: "The weapon of destruction itself. 500-1000 damage",
        cost: 8,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(500, 1000),
        },
    },
    ShopItem {
        id: "soul_reaper",
        name: "Soul Reaper",
        description: "An artifact scythe of death. 1000-2000 damage",
        cost: 15,
        category: ShopCategory::Weapons,
        kind: ItemKind::Weapon {
            damage: DamageRange::new(1000, 2000),
        },
    },
    // ═══════════════════════════════════════════════════════════════
    // ARMOR
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "soul_armor",
        name: "Soul Armor",
        description: "Armor of frozen souls. +200 defense",
        cost: 5,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 200 },
    },
    ShopItem {
        id: "void_shield",
        name: "Void Shield",
        description: "A shield that swallows attacks. +500 defense",
        cost: 12,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 500 },
    },
    ShopItem {
        id: "eternal_guard",
        name: "Eternal Guard",
        description: "Legendary protection of eternity. +1000 defense",
        cost: 25,
        category: ShopCategory::Armor,
        kind: ItemKind::Armor { defense: 1000 },
    },
    // ═══════════════════════════════════════════════════════════════
    // UPGRADES
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "soul_power",
        name: "Soul Power",
        description: "Permanently increases damage by 50%",
        cost: 10,
        category: ShopCategory::Upgrades,
        kind: ItemKind::Upgrade(SoulUpgrade::Power),
    },
    ShopItem {
        id: "soul_wisdom",
        name: "Soul Wisdom",
        description: "Permanently increases experience by 50%",
        cost: 10,
        category: ShopCategory::Upgrades,
        kind: ItemKind::Upgrade(SoulUpgrade::Wisdom),
    },
    ShopItem {
        id: "soul_fortune",
        name: "Soul Fortune",
        description: "Permanently increases gold by 50%",
        cost: 10,
        category: ShopCategory::Upgrades,
        kind: ItemKind::Upgrade(SoulUpgrade::Fortune),
    },
    ShopItem {
        id: "soul_vitality",
        name: "Soul Vitality",
        description: "Permanently increases max health by 100",
        cost: 15,
        category: ShopCategory::Upgrades,
        kind: ItemKind::Upgrade(SoulUpgrade::Vitality),
    },
    // ═══════════════════════════════════════════════════════════════
    // ARTIFACTS
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "soul_orb",
        name: "Soul Orb",
        description: "Empowers your rebirths",
        cost: 20,
        category: ShopCategory::Artifacts,
        kind: ItemKind::Artifact(Artifact::SoulOrb),
    },
    ShopItem {
        id: "time_crystal",
        name: "Time Crystal",
        description: "Instantly recharges your ability",
        cost: 30,
        category: ShopCategory::Artifacts,
        kind: ItemKind::Artifact(Artifact::TimeCrystal),
    },
    ShopItem {
        id: "void_essence",
        name: "Void Essence",
        description: "Wards off death once per hour",
        cost: 50,
        category: ShopCategory::Artifacts,
        kind: ItemKind::Artifact(Artifact::VoidEssence),
    },
    // ═══════════════════════════════════════════════════════════════
    // MATERIALS
    // ═══════════════════════════════════════════════════════════════
    ShopItem {
        id: "soul_fragment",
        name: "Soul Fragment",
        description: "A rare crafting material",
        cost: 2,
        category: ShopCategory::Materials,
        kind: ItemKind::Material,
    },
    ShopItem {
        id: "void_crystal",
        name: "Void Crystal",
        description: "A valuable upgrade material",
        cost: 5,
        category: ShopCategory::Materials,
        kind: ItemKind::Material,
    },
    ShopItem {
        id: "eternal_shard",
        name: "Eternal Shard",
        description: "A material of legendary quality",
        cost: 8,
        category: ShopCategory::Materials,
        kind: ItemKind::Material,
    },
];
