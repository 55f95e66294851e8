//! Player character: class table, stats, leveling and inventory.

pub mod class;
pub mod player;
pub mod stats;

pub use class::{CharacterClass, ClassProfile};
pub use player::{Character, InventoryList, StatSheet};
pub use stats::{StatType, Stats};
