//! Shop, item and currency types.

use crate::combat::types::DamageRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two independent currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Gold,
    SoulStones,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Gold => write!(f, "gold"),
            Currency::SoulStones => write!(f, "soul stones"),
        }
    }
}

/// Which shop an item is sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopKind {
    Gold,
    Soul,
}

impl ShopKind {
    pub fn currency(&self) -> Currency {
        match self {
            ShopKind::Gold => Currency::Gold,
            ShopKind::Soul => Currency::SoulStones,
        }
    }

    /// Categories in display order.
    pub fn categories(&self) -> &'static [ShopCategory] {
        match self {
            ShopKind::Gold => &[
                ShopCategory::Weapons,
                ShopCategory::Armor,
                ShopCategory::Potions,
                ShopCategory::Special,
            ],
            ShopKind::Soul => &[
                ShopCategory::Weapons,
                ShopCategory::Armor,
                ShopCategory::Upgrades,
                ShopCategory::Artifacts,
                ShopCategory::Materials,
            ],
        }
    }

    pub fn sells(&self, category: ShopCategory) -> bool {
        self.categories().contains(&category)
    }

    pub fn other(&self) -> ShopKind {
        match self {
            ShopKind::Gold => ShopKind::Soul,
            ShopKind::Soul => ShopKind::Gold,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShopKind::Gold => "Shop",
            ShopKind::Soul => "Soul Shop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopCategory {
    Weapons,
    Armor,
    Potions,
    Special,
    Upgrades,
    Artifacts,
    Materials,
}

impl ShopCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ShopCategory::Weapons => "Weapons",
            ShopCategory::Armor => "Armor",
            ShopCategory::Potions => "Potions",
            ShopCategory::Special => "Special",
            ShopCategory::Upgrades => "Upgrades",
            ShopCategory::Artifacts => "Artifacts",
            ShopCategory::Materials => "Materials",
        }
    }
}

/// Permanent soul-shop stat upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoulUpgrade {
    /// Damage multiplier x1.5.
    Power,
    /// Experience multiplier x1.5.
    Wisdom,
    /// Gold multiplier x1.5.
    Fortune,
    /// +100 max health and a full heal.
    Vitality,
}

/// One-off soul-shop artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    SoulOrb,
    TimeCrystal,
    VoidEssence,
}

/// What an item is, with its kind-specific payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    Weapon { damage: DamageRange },
    Armor { defense: u32 },
    Consumable,
    Accessory,
    Special,
    Upgrade(SoulUpgrade),
    Artifact(Artifact),
    Material,
}

impl ItemKind {
    pub fn is_equipment(&self) -> bool {
        matches!(self, ItemKind::Weapon { .. } | ItemKind::Armor { .. })
    }
}

/// Static shop entry from the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: u64,
    pub category: ShopCategory,
    pub kind: ItemKind,
}

/// How a balance compares to an item's price, for shop listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordability {
    Unaffordable,
    Affordable,
    /// Balance covers at least twice the cost.
    Comfortable,
}

impl Affordability {
    pub fn of(cost: u64, balance: u64) -> Self {
        if balance < cost {
            Affordability::Unaffordable
        } else if balance >= cost.saturating_mul(2) {
            Affordability::Comfortable
        } else {
            Affordability::Affordable
        }
    }
}
