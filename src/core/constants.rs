// Character creation
pub const STARTING_LEVEL: u32 = 1;
pub const STARTING_HP: i32 = 100;
pub const NUM_STATS: usize = 4;

// Leveling
pub const LEVEL_UP_XP_THRESHOLD: u32 = 10;
pub const LEVEL_UP_ATTRIBUTE_GAIN: i32 = 2;
pub const LEVEL_UP_HP_GAIN: i32 = 10;

// Player rolls (inclusive)
pub const PLAYER_ATTACK_ROLL_MIN: i32 = 5;
pub const PLAYER_ATTACK_ROLL_MAX: i32 = 10;
pub const DEFEND_ROLL_MIN: i32 = 3;
pub const DEFEND_ROLL_MAX: i32 = 7;

// Monster stats scale linearly with rank
pub const MONSTER_STRENGTH_PER_RANK: i32 = 5;
pub const MONSTER_HP_PER_RANK: i32 = 20;
pub const MONSTER_RANK_MIN: u32 = 1;
pub const MONSTER_RANK_MAX: u32 = 3;
pub const MONSTER_ATTACK_ROLL_MIN: i32 = 3;
pub const MONSTER_ATTACK_ROLL_MAX: i32 = 6;
pub const MONSTER_ATTACK_PER_RANK: i32 = 2;
pub const MONSTER_MIN_DAMAGE: i32 = 1;
/// Player strength is divided by this before it is subtracted from monster damage.
pub const STRENGTH_MITIGATION_DIVISOR: i32 = 4;

// Monster loot
pub const MONSTER_DROP_MIN_RANK: u32 = 2;
pub const MONSTER_DROP_TABLE: [&str; 3] = ["Potion", "Elixir", "Magic Scroll"];
pub const XP_PER_MONSTER_RANK: u32 = 2;

// Location outcomes
pub const CHALLENGE_MONSTER_CHANCE: f64 = 0.5;
pub const HIDDEN_PASSAGE_CHANCE: f64 = 0.5;
