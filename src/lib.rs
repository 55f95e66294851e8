//! Adventure - a text-based RPG
//!
//! Game logic is exposed as a library so sessions can be driven from tests
//! with scripted input and a seeded random number generator.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod locations;

pub use character::{Character, CharacterClass, StatType};
pub use combat::Monster;
pub use crate::core::{Console, Game, GameConfig, GameError, SessionEnd};
pub use locations::Location;
