//! Static game data: enemies and shop inventories.
//!
//! Achievement definitions live in [`crate::achievements::data`].

pub mod enemies;
pub mod shop;

pub use enemies::{get_enemy_template, ENEMY_TEMPLATES};
pub use shop::{GOLD_SHOP_ITEMS, SOUL_SHOP_ITEMS};

use crate::economy::types::{ShopCategory, ShopItem, ShopKind};

/// All items sold in a shop, in display order.
pub fn shop_items(shop: ShopKind) -> &'static [ShopItem] {
    match shop {
        ShopKind::Gold => GOLD_SHOP_ITEMS,
        ShopKind::Soul => SOUL_SHOP_ITEMS,
    }
}

/// Looks up an item by id within one shop.
pub fn find_item(shop: ShopKind, id: &str) -> Option<&'static ShopItem> {
    shop_items(shop).iter().find(|item| item.id == id)
}

/// Items of one category within a shop.
pub fn items_in_category(
    shop: ShopKind,
    category: ShopCategory,
) -> impl Iterator<Item = &'static ShopItem> {
    shop_items(shop)
        .iter()
        .filter(move |item| item.category == category)
}

/// Gold-shop weapons and armor, the pool for victory drops.
pub fn droppable_items() -> impl Iterator<Item = &'static ShopItem> {
    GOLD_SHOP_ITEMS.iter().filter(|item| item.kind.is_equipment())
}
