use crate::core::constants::*;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterStats {
    pub strength: i32,
    pub hp: i32,
}

impl MonsterStats {
    /// Ranks beyond `i32::MAX` saturate, as do the derived stats.
    pub fn for_rank(rank: u32) -> Self {
        let rank = i32::try_from(rank).unwrap_or(i32::MAX);
        Self {
            strength: MONSTER_STRENGTH_PER_RANK.saturating_mul(rank),
            hp: MONSTER_HP_PER_RANK.saturating_mul(rank),
        }
    }
}

/// Opponent for a single encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monster {
    pub name: String,
    pub rank: u32,
    pub stats: MonsterStats,
    drop_item: Option<&'static str>,
}

impl Monster {
    /// Stats follow from `rank` (raised to at least 1); the drop item is
    /// rolled once here and only for ranks above 1.
    pub fn new(name: impl Into<String>, rank: u32, rng: &mut impl Rng) -> Self {
        let rank = rank.max(MONSTER_RANK_MIN);
        let drop_item = if rank >= MONSTER_DROP_MIN_RANK {
            MONSTER_DROP_TABLE.choose(rng).copied()
        } else {
            None
        };
        Self {
            name: name.into(),
            rank,
            stats: MonsterStats::for_rank(rank),
            drop_item,
        }
    }

    /// Spawns "<location> Monster" with a random rank.
    pub fn spawn_for(location_name: &str, rng: &mut impl Rng) -> Self {
        let rank = rng.gen_range(MONSTER_RANK_MIN..=MONSTER_RANK_MAX);
        let monster = Self::new(format!("{} Monster", location_name), rank, rng);
        debug!(
            name = %monster.name,
            rank,
            drop = ?monster.drop_item,
            "monster spawned"
        );
        monster
    }

    pub fn drop_item(&self) -> Option<&'static str> {
        self.drop_item
    }

    /// Damage against a player, reduced by a quarter of their strength but
    /// never below 1.
    pub fn attack(&self, player_strength: i32, rng: &mut impl Rng) -> i32 {
        let rank = i32::try_from(self.rank).unwrap_or(i32::MAX);
        let base = rng
            .gen_range(MONSTER_ATTACK_ROLL_MIN..=MONSTER_ATTACK_ROLL_MAX)
            .saturating_add(MONSTER_ATTACK_PER_RANK.saturating_mul(rank));
        let mitigation = player_strength.div_euclid(STRENGTH_MITIGATION_DIVISOR);
        base.saturating_sub(mitigation).max(MONSTER_MIN_DAMAGE)
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.stats.hp -= amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.stats.hp <= 0
    }
}
