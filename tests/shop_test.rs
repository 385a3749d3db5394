//! Integration test: buying from both shops through engine commands.

use heropath::achievements::AchievementId;
use heropath::combat::types::DamageRange;
use heropath::economy::{Currency, ShopCategory, ShopKind};
use heropath::utils::persistence::MemoryStore;
use heropath::{ActionRejected, Command, GameEngine, GameEvent};

fn engine_with_store() -> (GameEngine, MemoryStore) {
    let store = MemoryStore::new();
    let mut engine = GameEngine::with_seed(Box::new(store.clone()), 21);
    engine.drain_events();
    (engine, store)
}

fn buy(engine: &mut GameEngine, shop: ShopKind, id: &str) -> Result<(), ActionRejected> {
    engine.execute(Command::Buy {
        shop,
        item_id: id.to_string(),
    })
}

#[test]
fn test_buying_a_weapon_equips_it_and_saves() {
    let (mut engine, store) = engine_with_store();
    engine.state_mut().player.gold = 1_000;

    buy(&mut engine, ShopKind::Gold, "iron_sword").unwrap();

    let player = &engine.state().player;
    assert_eq!(player.gold, 500);
    assert_eq!(player.damage_range(), DamageRange::new(15, 25));
    assert_eq!(player.weapon.as_ref().unwrap().name, "Iron Sword");
    assert_eq!(player.stats.purchases, 1);
    assert!(player.stats.categories_purchased.contains(&ShopCategory::Weapons));
    assert_eq!(store.write_count(), 1);

    let events = engine.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::Purchased {
            item_name: "Iron Sword",
            cost: 500,
            currency: Currency::Gold,
        }
    )));
}

#[test]
fn test_new_armor_replaces_old() {
    let (mut engine, _) = engine_with_store();
    engine.state_mut().player.gold = 1_000;

    buy(&mut engine, ShopKind::Gold, "leather_armor").unwrap();
    assert_eq!(engine.state().player.defense(), 7);
    buy(&mut engine, ShopKind::Gold, "chainmail").unwrap();
    assert_eq!(engine.state().player.defense(), 17);
    assert_eq!(engine.state().player.armor.as_ref().unwrap().name, "Chainmail");
    assert_eq!(engine.state().player.gold, 100);
}

#[test]
fn test_unaffordable_purchase_changes_nothing() {
    let (mut engine, store) = engine_with_store();
    let before = engine.state().clone();

    let err = buy(&mut engine, ShopKind::Gold, "steel_sword").unwrap_err();
    assert_eq!(
        err,
        ActionRejected::InsufficientFunds {
            currency: Currency::Gold,
            cost: 2_000,
            balance: 50,
        }
    );
    assert_eq!(engine.state(), &before);
    assert!(engine.drain_events().is_empty());
    assert_eq!(store.write_count(), 0);

    let err = buy(&mut engine, ShopKind::Soul, "soul_blade").unwrap_err();
    assert!(matches!(
        err,
        ActionRejected::InsufficientFunds {
            currency: Currency::SoulStones,
            ..
        }
    ));
}

#[test]
fn test_unknown_or_wrong_shop_item_is_rejected() {
    let (mut engine, _) = engine_with_store();
    engine.state_mut().player.gold = 1_000_000;
    engine.state_mut().player.soul_stones = 100;

    assert!(matches!(
        buy(&mut engine, ShopKind::Gold, "excalibur"),
        Err(ActionRejected::UnknownItem { .. })
    ));
    // Soul items are not sold for gold.
    assert!(matches!(
        buy(&mut engine, ShopKind::Gold, "soul_blade"),
        Err(ActionRejected::UnknownItem { .. })
    ));
    assert_eq!(engine.state().player.stats.purchases, 0);
}

#[test]
fn test_soul_upgrades_compound() {
    let (mut engine, _) = engine_with_store();
    engine.state_mut().player.soul_stones = 20;

    buy(&mut engine, ShopKind::Soul, "soul_power").unwrap();
    buy(&mut engine, ShopKind::Soul, "soul_power").unwrap();

    let player = &engine.state().player;
    assert!((player.multipliers.damage - 2.25).abs() < 1e-9);
    assert_eq!(player.soul_stones, 0);
    // Soul purchases do not count toward gold-shop categories.
    assert!(player.stats.categories_purchased.is_empty());
}

#[test]
fn test_vitality_raises_max_health_and_heals() {
    let (mut engine, _) = engine_with_store();
    engine.state_mut().player.soul_stones = 15;
    engine.state_mut().player.health = 20;

    buy(&mut engine, ShopKind::Soul, "soul_vitality").unwrap();
    assert_eq!(engine.state().player.max_health, 200);
    assert_eq!(engine.state().player.health, 200);
}

#[test]
fn test_time_crystal_recharges_ability() {
    let (mut engine, _) = engine_with_store();
    engine.state_mut().player.soul_stones = 30;
    engine.execute(Command::UseSpecialAbility).unwrap();
    assert!(!engine.state().player.special_ready);

    buy(&mut engine, ShopKind::Soul, "time_crystal").unwrap();
    assert!(engine.state().player.special_ready);
    assert_eq!(engine.state().player.special_cooldown, 0);
    engine.execute(Command::UseSpecialAbility).unwrap();
}

#[test]
fn test_inert_items_are_still_purchases() {
    let (mut engine, _) = engine_with_store();
    engine.state_mut().player.gold = 300;
    let before = engine.state().player.clone();

    buy(&mut engine, ShopKind::Gold, "health_potion").unwrap();

    let player = &engine.state().player;
    assert_eq!(player.gold, 250);
    assert_eq!(player.stats.purchases, 1);
    assert_eq!(player.health, before.health);
    assert_eq!(player.multipliers, before.multipliers);
}

#[test]
fn test_one_of_each_gold_category_unlocks_completionist() {
    let (mut engine, _) = engine_with_store();
    // wooden_sword + leather_armor + health_potion + amulet_power
    engine.state_mut().player.gold = 5_300;

    for id in ["wooden_sword", "leather_armor", "health_potion"] {
        buy(&mut engine, ShopKind::Gold, id).unwrap();
        assert!(!engine
            .state()
            .unlocked_achievements
            .contains(&AchievementId::Completionist));
    }
    buy(&mut engine, ShopKind::Gold, "amulet_power").unwrap();

    let state = engine.state();
    assert!(state.unlocked_achievements.contains(&AchievementId::Completionist));
    assert_eq!(state.player.gold, 0);
    assert_eq!(state.player.soul_stones, 2);
}

#[test]
fn test_shop_browsing() {
    let (mut engine, _) = engine_with_store();
    assert_eq!(engine.shop_view().active, ShopKind::Gold);
    let weapons: Vec<&str> = engine.shop_listing().iter().map(|l| l.item.id).collect();
    assert_eq!(weapons[0], "wooden_sword");
    assert_eq!(weapons.len(), 5);

    engine.execute(Command::SwitchShop).unwrap();
    engine
        .execute(Command::SwitchCategory {
            shop: ShopKind::Soul,
            category: ShopCategory::Upgrades,
        })
        .unwrap();
    let upgrades: Vec<&str> = engine.shop_listing().iter().map(|l| l.item.id).collect();
    assert_eq!(
        upgrades,
        vec!["soul_power", "soul_wisdom", "soul_fortune", "soul_vitality"]
    );

    assert_eq!(
        engine.execute(Command::SwitchCategory {
            shop: ShopKind::Gold,
            category: ShopCategory::Materials,
        }),
        Err(ActionRejected::CategoryNotInShop)
    );

    // Each shop remembers its own category.
    engine.execute(Command::SwitchShop).unwrap();
    assert_eq!(engine.shop_view().category(ShopKind::Gold), ShopCategory::Weapons);
    assert_eq!(engine.shop_view().category(ShopKind::Soul), ShopCategory::Upgrades);
}
