//! Purchases, item effects and shop browsing.

use crate::achievements::check_achievements;
use crate::catalog::{find_item, items_in_category};
use crate::core::constants::*;
use crate::core::events::{GameEvent, TickResult};
use crate::core::game_state::{Armor, GameState, Player, Weapon};
use crate::economy::types::{
    Affordability, Artifact, ItemKind, ShopCategory, ShopItem, ShopKind, SoulUpgrade,
};
use crate::error::ActionRejected;
use tracing::{debug, info};

/// Grants gold scaled by the gold multiplier and counts it as earned.
/// Returns the amount actually added.
pub fn add_gold(player: &mut Player, amount: u64) -> u64 {
    let gained = (amount as f64 * player.multipliers.gold).floor() as u64;
    player.gold = player.gold.saturating_add(gained);
    player.stats.gold_earned = player.stats.gold_earned.saturating_add(gained);
    gained
}

/// Buys `item_id` from `shop`.
///
/// On rejection nothing is mutated and no follow-up fires. On success the
/// cost is deducted, the item's effect is applied once, the purchase is
/// counted, achievements are checked and a save is requested.
pub fn purchase(
    state: &mut GameState,
    shop: ShopKind,
    item_id: &str,
    result: &mut TickResult,
) -> Result<&'static ShopItem, ActionRejected> {
    let item = find_item(shop, item_id).ok_or_else(|| ActionRejected::UnknownItem {
        id: item_id.to_string(),
    })?;

    let currency = shop.currency();
    let balance = state.player.balance(currency);
    if balance < item.cost {
        debug!(item = item.id, cost = item.cost, balance, "purchase rejected");
        return Err(ActionRejected::InsufficientFunds {
            currency,
            cost: item.cost,
            balance,
        });
    }

    *state.player.balance_mut(currency) -= item.cost;
    apply_item_effect(&mut state.player, item);

    let stats = &mut state.player.stats;
    stats.purchases += 1;
    if shop == ShopKind::Gold {
        stats.categories_purchased.insert(item.category);
    }

    info!(item = item.id, cost = item.cost, %currency, "item purchased");
    result.push(GameEvent::Purchased {
        item_name: item.name,
        cost: item.cost,
        currency,
    });

    check_achievements(state, result);
    result.request_save();
    Ok(item)
}

/// Applies what an item does to the player. Items without a mechanical
/// effect (potions, accessories, materials) are accepted and change nothing.
pub fn apply_item_effect(player: &mut Player, item: &ShopItem) {
    match item.kind {
        ItemKind::Weapon { damage } => {
            player.weapon = Some(Weapon {
                name: item.name.to_string(),
                damage,
            });
        }
        ItemKind::Armor { defense } => {
            player.armor = Some(Armor {
                name: item.name.to_string(),
                defense,
            });
        }
        ItemKind::Upgrade(upgrade) => apply_soul_upgrade(player, upgrade),
        ItemKind::Artifact(artifact) => activate_artifact(player, artifact),
        ItemKind::Consumable | ItemKind::Accessory | ItemKind::Special | ItemKind::Material => {}
    }
}

fn apply_soul_upgrade(player: &mut Player, upgrade: SoulUpgrade) {
    match upgrade {
        SoulUpgrade::Power => player.multipliers.damage *= SOUL_UPGRADE_MULTIPLIER,
        SoulUpgrade::Wisdom => player.multipliers.experience *= SOUL_UPGRADE_MULTIPLIER,
        SoulUpgrade::Fortune => player.multipliers.gold *= SOUL_UPGRADE_MULTIPLIER,
        SoulUpgrade::Vitality => {
            player.max_health = player.max_health.saturating_add(SOUL_VITALITY_HEALTH_BONUS);
            player.heal_full();
        }
    }
}

fn activate_artifact(player: &mut Player, artifact: Artifact) {
    match artifact {
        // Stacks on top of rebirth bonuses.
        Artifact::SoulOrb => {
            player.multipliers.damage *= SOUL_ORB_DAMAGE_BONUS;
            player.multipliers.experience *= SOUL_ORB_EXPERIENCE_BONUS;
        }
        Artifact::TimeCrystal => {
            player.special_cooldown = 0;
            player.special_ready = true;
        }
        // Nothing consumes this flag yet.
        Artifact::VoidEssence => player.void_protection = true,
    }
}

/// One row of a shop listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopListing {
    pub item: &'static ShopItem,
    pub affordability: Affordability,
}

/// Which shop is open and which category each shop shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopView {
    pub active: ShopKind,
    gold_category: ShopCategory,
    soul_category: ShopCategory,
}

impl Default for ShopView {
    fn default() -> Self {
        Self {
            active: ShopKind::Gold,
            gold_category: ShopCategory::Weapons,
            soul_category: ShopCategory::Weapons,
        }
    }
}

impl ShopView {
    pub fn category(&self, shop: ShopKind) -> ShopCategory {
        match shop {
            ShopKind::Gold => self.gold_category,
            ShopKind::Soul => self.soul_category,
        }
    }

    pub fn switch_shop(&mut self) {
        self.active = self.active.other();
    }

    pub fn select_category(
        &mut self,
        shop: ShopKind,
        category: ShopCategory,
    ) -> Result<(), ActionRejected> {
        if !shop.sells(category) {
            return Err(ActionRejected::CategoryNotInShop);
        }
        match shop {
            ShopKind::Gold => self.gold_category = category,
            ShopKind::Soul => self.soul_category = category,
        }
        Ok(())
    }

    /// The category before or after the active shop's current one, wrapping.
    pub fn adjacent_category(&self, forward: bool) -> ShopCategory {
        let categories = self.active.categories();
        let current = self.category(self.active);
        let idx = categories.iter().position(|c| *c == current).unwrap_or(0);
        let len = categories.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        categories[next]
    }

    /// Items of the active shop's current category, with affordability
    /// against the player's balance in that shop's currency.
    pub fn listing(&self, player: &Player) -> Vec<ShopListing> {
        let balance = player.balance(self.active.currency());
        items_in_category(self.active, self.category(self.active))
            .map(|item| ShopListing {
                item,
                affordability: Affordability::of(item.cost, balance),
            })
            .collect()
    }
}
