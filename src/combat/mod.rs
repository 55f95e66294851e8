//! Monsters and battle resolution.

pub mod logic;
pub mod types;

pub use logic::{
    award_victory, battle, monster_attack, strike, BattleAction, BattleOutcome, BattleReport,
    CombatEvent,
};
pub use types::{Monster, MonsterStats};
