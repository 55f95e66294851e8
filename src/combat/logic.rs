use super::types::Monster;
use crate::character::Character;
use crate::core::console::{Narrate, Tone};
use crate::core::constants::XP_PER_MONSTER_RANK;
use rand::Rng;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Defend,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        player: String,
        damage: i32,
    },
    PlayerDefends {
        player: String,
        reduction: i32,
    },
    MonsterDefeated {
        monster: String,
    },
    ExperienceGained {
        player: String,
        points: u32,
    },
    LeveledUp {
        player: String,
        level: u32,
    },
    LootFound {
        item: String,
    },
    MonsterAttack {
        monster: String,
        damage: i32,
    },
    PlayerDefeated,
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::PlayerAttack { player, damage } => {
                write!(f, "{} attacks and deals {} damage!", player, damage)
            }
            CombatEvent::PlayerDefends { player, reduction } => {
                write!(
                    f,
                    "{} defends, reducing damage by {} points!",
                    player, reduction
                )
            }
            CombatEvent::MonsterDefeated { monster } => write!(f, "The {} is defeated!", monster),
            CombatEvent::ExperienceGained { player, points } => {
                write!(f, "{} gained {} experience!", player, points)
            }
            CombatEvent::LeveledUp { player, level } => write!(
                f,
                "Congratulations! {} leveled up to Level {}!\nYour stats have increased!",
                player, level
            ),
            CombatEvent::LootFound { item } => write!(f, "You found a {}!", item),
            CombatEvent::MonsterAttack { monster, damage } => {
                write!(f, "The {} attacks and deals {} damage!", monster, damage)
            }
            CombatEvent::PlayerDefeated => write!(f, "You have been defeated! Game over."),
        }
    }
}

impl Narrate for CombatEvent {
    fn tone(&self) -> Tone {
        match self {
            CombatEvent::MonsterDefeated { .. }
            | CombatEvent::LeveledUp { .. }
            | CombatEvent::LootFound { .. } => Tone::Good,
            CombatEvent::MonsterAttack { .. } | CombatEvent::PlayerDefeated => Tone::Bad,
            _ => Tone::Plain,
        }
    }

    fn spaced(&self) -> bool {
        matches!(
            self,
            CombatEvent::LeveledUp { .. } | CombatEvent::PlayerDefeated
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Monster still stands; the encounter continues.
    Ongoing,
    /// Monster is dead and its rewards were granted.
    MonsterDefeated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub events: Vec<CombatEvent>,
    pub outcome: BattleOutcome,
}

/// Resolves one player action against the current monster.
pub fn battle(
    player: &mut Character,
    monster: &mut Monster,
    action: BattleAction,
    rng: &mut impl Rng,
) -> BattleReport {
    let mut events = Vec::new();
    let outcome = match action {
        BattleAction::Attack => {
            let damage = player.attack(rng);
            strike(player, monster, damage, rng, &mut events)
        }
        BattleAction::Defend => {
            let reduction = player.defend(rng);
            events.push(CombatEvent::PlayerDefends {
                player: player.name.clone(),
                reduction,
            });
            monster_attack(player, monster, reduction, rng, &mut events);
            BattleOutcome::Ongoing
        }
    };
    BattleReport { events, outcome }
}

/// Applies `damage` from the player. A surviving monster hits back with no
/// defense applied.
pub fn strike(
    player: &mut Character,
    monster: &mut Monster,
    damage: i32,
    rng: &mut impl Rng,
    events: &mut Vec<CombatEvent>,
) -> BattleOutcome {
    events.push(CombatEvent::PlayerAttack {
        player: player.name.clone(),
        damage,
    });
    monster.take_damage(damage);
    debug!(monster = %monster.name, hp = monster.stats.hp, "monster hit");

    if monster.is_defeated() {
        award_victory(player, monster, events);
        BattleOutcome::MonsterDefeated
    } else {
        monster_attack(player, monster, 0, rng, events);
        BattleOutcome::Ongoing
    }
}

/// Experience and loot for a defeated monster.
pub fn award_victory(player: &mut Character, monster: &Monster, events: &mut Vec<CombatEvent>) {
    info!(monster = %monster.name, rank = monster.rank, "monster defeated");
    events.push(CombatEvent::MonsterDefeated {
        monster: monster.name.clone(),
    });

    let points = monster.rank.saturating_mul(XP_PER_MONSTER_RANK);
    events.push(CombatEvent::ExperienceGained {
        player: player.name.clone(),
        points,
    });
    if let Some(level) = player.gain_experience(points) {
        events.push(CombatEvent::LeveledUp {
            player: player.name.clone(),
            level,
        });
    }

    if let Some(item) = monster.drop_item() {
        player.inventory.push(item.to_string());
        events.push(CombatEvent::LootFound {
            item: item.to_string(),
        });
    }
}

/// Monster retaliation; `defense` is subtracted from the hit, floored at 0.
pub fn monster_attack(
    player: &mut Character,
    monster: &Monster,
    defense: i32,
    rng: &mut impl Rng,
    events: &mut Vec<CombatEvent>,
) {
    let raw = monster.attack(player.stats.strength(), rng);
    let damage = (raw - defense).max(0);
    player.take_damage(damage);
    debug!(raw, defense, damage, hp = player.stats.hp(), "monster attack");

    events.push(CombatEvent::MonsterAttack {
        monster: monster.name.clone(),
        damage,
    });
    if player.is_defeated() {
        info!(name = %player.name, "player defeated");
        events.push(CombatEvent::PlayerDefeated);
    }
}
