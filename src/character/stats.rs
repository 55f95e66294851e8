use crate::core::constants::{NUM_STATS, STARTING_HP};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Agility,
    Magic,
    Hp,
}

impl StatType {
    pub fn all() -> [StatType; NUM_STATS] {
        [
            StatType::Strength,
            StatType::Agility,
            StatType::Magic,
            StatType::Hp,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatType::Strength => "Strength",
            StatType::Agility => "Agility",
            StatType::Magic => "Magic",
            StatType::Hp => "HP",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            StatType::Strength => 0,
            StatType::Agility => 1,
            StatType::Magic => 2,
            StatType::Hp => 3,
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four player stats. Values are signed because HP can drop below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    values: [i32; NUM_STATS],
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl Stats {
    /// All zeroes except HP, which starts at full health.
    pub fn new() -> Self {
        let mut values = [0; NUM_STATS];
        values[StatType::Hp.index()] = STARTING_HP;
        Self { values }
    }

    pub fn get(&self, stat: StatType) -> i32 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: i32) {
        self.values[stat.index()] = value;
    }

    pub fn add(&mut self, stat: StatType, amount: i32) {
        self.values[stat.index()] += amount;
    }

    pub fn hp(&self) -> i32 {
        self.get(StatType::Hp)
    }

    pub fn strength(&self) -> i32 {
        self.get(StatType::Strength)
    }

    /// Iterates stats in display order.
    pub fn iter(&self) -> impl Iterator<Item = (StatType, i32)> + '_ {
        StatType::all().into_iter().map(|stat| (stat, self.get(stat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_start_at_full_hp() {
        let stats = Stats::new();
        assert_eq!(stats.hp(), 100);
        assert_eq!(stats.get(StatType::Strength), 0);
        assert_eq!(stats.get(StatType::Agility), 0);
        assert_eq!(stats.get(StatType::Magic), 0);
    }

    #[test]
    fn test_add_allows_negative_hp() {
        let mut stats = Stats::new();
        stats.add(StatType::Hp, -130);
        assert_eq!(stats.hp(), -30);
    }

    #[test]
    fn test_index_returns_unique_values() {
        for (i, stat) in StatType::all().iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }

    #[test]
    fn test_iter_follows_display_order() {
        let labels: Vec<_> = Stats::new().iter().map(|(s, _)| s.label()).collect();
        assert_eq!(labels, ["Strength", "Agility", "Magic", "HP"]);
    }
}
