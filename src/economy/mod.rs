//! Gold shop and soul shop.

pub mod logic;
pub mod types;

pub use logic::{add_gold, purchase, ShopListing, ShopView};
pub use types::{Affordability, Currency, ItemKind, ShopCategory, ShopItem, ShopKind};
