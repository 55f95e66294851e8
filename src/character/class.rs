//! Character classes and their fixed stat profiles.

use super::stats::StatType;
use crate::core::error::GameError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
}

/// Base stats and damage attribute for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProfile {
    pub strength: i32,
    pub agility: i32,
    pub magic: i32,
    /// Stat added to every attack roll
    pub primary: StatType,
}

const WARRIOR: ClassProfile = ClassProfile {
    strength: 15,
    agility: 10,
    magic: 5,
    primary: StatType::Strength,
};

const MAGE: ClassProfile = ClassProfile {
    strength: 5,
    agility: 8,
    magic: 15,
    primary: StatType::Magic,
};

const ROGUE: ClassProfile = ClassProfile {
    strength: 10,
    agility: 15,
    magic: 5,
    primary: StatType::Agility,
};

impl CharacterClass {
    pub fn all() -> [CharacterClass; 3] {
        [
            CharacterClass::Warrior,
            CharacterClass::Mage,
            CharacterClass::Rogue,
        ]
    }

    pub fn profile(&self) -> &'static ClassProfile {
        match self {
            CharacterClass::Warrior => &WARRIOR,
            CharacterClass::Mage => &MAGE,
            CharacterClass::Rogue => &ROGUE,
        }
    }

    pub fn primary_stat(&self) -> StatType {
        self.profile().primary
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterClass {
    type Err = GameError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CharacterClass::all()
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::UnknownClass(wanted.to_string()))
    }
}
