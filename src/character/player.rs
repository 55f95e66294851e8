use super::class::CharacterClass;
use super::stats::{StatType, Stats};
use crate::core::constants::*;
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

/// The player's character. Created once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub experience: u32,
    pub inventory: Vec<String>,
    pub stats: Stats,
}

impl Character {
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Self {
        let mut character = Self {
            name: name.into(),
            class,
            level: STARTING_LEVEL,
            experience: 0,
            inventory: Vec::new(),
            stats: Stats::new(),
        };
        character.set_stats();
        character
    }

    /// Applies the class base stats and resets HP.
    fn set_stats(&mut self) {
        let profile = self.class.profile();
        self.stats.set(StatType::Strength, profile.strength);
        self.stats.set(StatType::Agility, profile.agility);
        self.stats.set(StatType::Magic, profile.magic);
        self.stats.set(StatType::Hp, STARTING_HP);
    }

    /// Damage roll plus the class's primary stat.
    pub fn attack(&self, rng: &mut impl Rng) -> i32 {
        let roll = rng.gen_range(PLAYER_ATTACK_ROLL_MIN..=PLAYER_ATTACK_ROLL_MAX);
        let damage = roll + self.stats.get(self.class.primary_stat());
        debug!(roll, damage, class = %self.class, "player attack");
        damage
    }

    /// Damage reduction for the next incoming hit.
    pub fn defend(&self, rng: &mut impl Rng) -> i32 {
        let reduction = rng.gen_range(DEFEND_ROLL_MIN..=DEFEND_ROLL_MAX);
        debug!(reduction, "player defends");
        reduction
    }

    /// Adds experience, leveling up at most once per call.
    /// Returns the new level when a level-up happened.
    pub fn gain_experience(&mut self, points: u32) -> Option<u32> {
        self.experience = self.experience.saturating_add(points);
        if self.experience >= LEVEL_UP_XP_THRESHOLD {
            self.level_up();
            self.experience = 0;
            Some(self.level)
        } else {
            None
        }
    }

    pub fn level_up(&mut self) {
        self.level += 1;
        self.stats.add(StatType::Strength, LEVEL_UP_ATTRIBUTE_GAIN);
        self.stats.add(StatType::Agility, LEVEL_UP_ATTRIBUTE_GAIN);
        self.stats.add(StatType::Magic, LEVEL_UP_ATTRIBUTE_GAIN);
        self.stats.add(StatType::Hp, LEVEL_UP_HP_GAIN);
        info!(name = %self.name, level = self.level, "level up");
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.stats.add(StatType::Hp, -amount);
    }

    pub fn is_defeated(&self) -> bool {
        self.stats.hp() <= 0
    }

    /// Read-only stat sheet for display.
    pub fn show_stats(&self) -> StatSheet<'_> {
        StatSheet(self)
    }

    pub fn show_inventory(&self) -> InventoryList<'_> {
        InventoryList(&self.inventory)
    }
}

pub struct StatSheet<'a>(&'a Character);

impl fmt::Display for StatSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let character = self.0;
        writeln!(f, "{} the {} - Stats:", character.name, character.class)?;
        writeln!(f, "Level: {}", character.level)?;
        for (stat, value) in character.stats.iter() {
            writeln!(f, "{}: {}", stat, value)?;
        }
        write!(f, "\n{}", character.show_inventory())
    }
}

pub struct InventoryList<'a>(&'a [String]);

impl fmt::Display for InventoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "Inventory: (empty)")
        } else {
            write!(f, "Inventory: {}", self.0.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_warrior_rex_starting_stats() {
        let rex = Character::new("Rex", CharacterClass::Warrior);
        assert_eq!(rex.level, 1);
        assert_eq!(rex.experience, 0);
        assert!(rex.inventory.is_empty());
        assert_eq!(rex.stats.get(StatType::Strength), 15);
        assert_eq!(rex.stats.get(StatType::Agility), 10);
        assert_eq!(rex.stats.get(StatType::Magic), 5);
        assert_eq!(rex.stats.hp(), 100);
    }

    #[test]
    fn test_every_class_starts_at_100_hp_with_its_triple() {
        for class in CharacterClass::all() {
            let c = Character::new("Hero", class);
            let p = class.profile();
            assert_eq!(c.stats.get(StatType::Strength), p.strength);
            assert_eq!(c.stats.get(StatType::Agility), p.agility);
            assert_eq!(c.stats.get(StatType::Magic), p.magic);
            assert_eq!(c.stats.hp(), 100);
        }
    }

    #[test]
    fn test_attack_adds_primary_stat() {
        let mut rng = create_test_rng();
        for class in CharacterClass::all() {
            let c = Character::new("Hero", class);
            let primary = c.stats.get(class.primary_stat());
            for _ in 0..200 {
                let damage = c.attack(&mut rng);
                assert!(
                    (primary + 5..=primary + 10).contains(&damage),
                    "{class} damage {damage} outside range"
                );
            }
        }
    }

    #[test]
    fn test_defend_rolls_between_3_and_7() {
        let mut rng = create_test_rng();
        let c = Character::new("Hero", CharacterClass::Rogue);
        for _ in 0..200 {
            assert!((3..=7).contains(&c.defend(&mut rng)));
        }
    }

    #[test]
    fn test_level_up_n_times() {
        for n in [1, 2, 5, 20] {
            let mut c = Character::new("Hero", CharacterClass::Mage);
            for _ in 0..n {
                c.level_up();
            }
            assert_eq!(c.level, 1 + n as u32);
            assert_eq!(c.stats.get(StatType::Strength), 5 + 2 * n);
            assert_eq!(c.stats.get(StatType::Agility), 8 + 2 * n);
            assert_eq!(c.stats.get(StatType::Magic), 15 + 2 * n);
            assert_eq!(c.stats.hp(), 100 + 10 * n);
        }
    }

    #[test]
    fn test_gain_experience_exactly_at_threshold() {
        let mut c = Character::new("Hero", CharacterClass::Warrior);
        assert_eq!(c.gain_experience(10), Some(2));
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
        assert_eq!(c.stats.get(StatType::Strength), 17);
        assert_eq!(c.stats.get(StatType::Agility), 12);
        assert_eq!(c.stats.get(StatType::Magic), 7);
        assert_eq!(c.stats.hp(), 110);
    }

    #[test]
    fn test_gain_experience_accumulates_below_threshold() {
        let mut c = Character::new("Hero", CharacterClass::Warrior);
        assert_eq!(c.gain_experience(4), None);
        assert_eq!(c.gain_experience(4), None);
        assert_eq!(c.experience, 8);
        assert_eq!(c.gain_experience(4), Some(2));
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_large_gain_levels_only_once() {
        let mut c = Character::new("Hero", CharacterClass::Warrior);
        assert_eq!(c.gain_experience(35), Some(2));
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_huge_gain_saturates_instead_of_overflowing() {
        let mut c = Character::new("Hero", CharacterClass::Warrior);
        assert_eq!(c.gain_experience(5), None);
        assert_eq!(c.gain_experience(u32::MAX), Some(2));
        assert_eq!(c.level, 2);
        assert_eq!(c.experience, 0);
    }

    #[test]
    fn test_defeated_at_zero_or_below() {
        let mut c = Character::new("Hero", CharacterClass::Rogue);
        c.take_damage(99);
        assert!(!c.is_defeated());
        c.take_damage(1);
        assert!(c.is_defeated());
        c.take_damage(5);
        assert_eq!(c.stats.hp(), -5);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_stat_sheet_lists_everything() {
        let mut c = Character::new("Rex", CharacterClass::Warrior);
        c.inventory.push("Potion".to_string());
        c.inventory.push("Potion".to_string());
        let sheet = c.show_stats().to_string();
        assert!(sheet.starts_with("Rex the Warrior - Stats:"));
        assert!(sheet.contains("Level: 1"));
        assert!(sheet.contains("Strength: 15"));
        assert!(sheet.contains("Agility: 10"));
        assert!(sheet.contains("Magic: 5"));
        assert!(sheet.contains("HP: 100"));
        assert!(sheet.ends_with("Inventory: Potion, Potion"));
    }

    #[test]
    fn test_empty_inventory_display() {
        let c = Character::new("Rex", CharacterClass::Warrior);
        assert_eq!(c.show_inventory().to_string(), "Inventory: (empty)");
    }
}
