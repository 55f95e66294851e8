//! Session orchestration: the main command loop.

use super::console::{Console, Tone};
use super::error::{GameError, Result};
use crate::character::{Character, CharacterClass};
use crate::combat::{battle, BattleAction, BattleOutcome, Monster};
use crate::locations::{
    get_all_locations, get_location, select_location, Location, LocationChoice, LocationVisit,
    VisitState,
};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// A player command from the main loop prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Explore,
    CheckStats,
    Inventory,
    Attack,
    Defend,
    Quit,
}

impl Command {
    /// Trimmed and case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "explore" => Some(Command::Explore),
            "check stats" => Some(Command::CheckStats),
            "inventory" => Some(Command::Inventory),
            "attack" => Some(Command::Attack),
            "defend" => Some(Command::Defend),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Where the session stands; derived from the player and monster slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Exploring,
    InCombat,
    Defeated,
}

impl GamePhase {
    pub fn accepts(&self, command: Command) -> bool {
        match self {
            GamePhase::Defeated => command == Command::Quit,
            GamePhase::InCombat => matches!(
                command,
                Command::Attack | Command::Defend | Command::CheckStats | Command::Quit
            ),
            GamePhase::Exploring => matches!(
                command,
                Command::Explore | Command::CheckStats | Command::Inventory | Command::Quit
            ),
        }
    }

    fn actions_hint(&self) -> &'static str {
        match self {
            GamePhase::Defeated => "The only option now is to 'Quit'.",
            GamePhase::InCombat => "Actions: 'Attack', 'Defend', 'Check Stats', 'Quit'",
            GamePhase::Exploring => "Actions: 'Explore', 'Check Stats', 'Inventory', 'Quit'",
        }
    }
}

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    InputClosed,
}

/// Whether the main loop keeps going.
enum Flow {
    Continue,
    Stop(SessionEnd),
}

pub const PROMPT_ACTION: &str = "What would you like to do? ";
pub const PROMPT_LOCATION: &str = "Enter the number of the location you want to explore: ";
pub const PROMPT_CHOICE: &str = "What will you do? ";

pub struct Game<R> {
    pub player: Character,
    pub locations: Vec<Location>,
    /// The one active encounter, if any.
    pub current_monster: Option<Monster>,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(player: Character, rng: R) -> Self {
        Self {
            player,
            locations: get_all_locations(),
            current_monster: None,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.player.is_defeated() {
            GamePhase::Defeated
        } else if self.current_monster.is_some() {
            GamePhase::InCombat
        } else {
            GamePhase::Exploring
        }
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        get_location(&self.locations, name)
    }

    /// Welcome banner, initial stats, then the main loop.
    pub fn start_game<I: BufRead, W: Write>(
        &mut self,
        console: &mut Console<I, W>,
    ) -> Result<SessionEnd> {
        info!(name = %self.player.name, class = %self.player.class, "game started");
        console.say_toned("Welcome to the RPG Adventure!", Tone::Heading)?;
        console.blank()?;
        console.say(self.player.show_stats())?;
        self.choose_action(console)
    }

    /// Main loop: one command per iteration until quit or end of input.
    pub fn choose_action<I: BufRead, W: Write>(
        &mut self,
        console: &mut Console<I, W>,
    ) -> Result<SessionEnd> {
        loop {
            let phase = self.phase();
            console.blank()?;
            if phase == GamePhase::Defeated {
                console.say_toned("You have been defeated! Game over.", Tone::Bad)?;
            }
            console.say(phase.actions_hint())?;

            let Some(input) = console.prompt(PROMPT_ACTION)? else {
                debug!("input closed at main prompt");
                return Ok(SessionEnd::InputClosed);
            };

            let command = Command::parse(&input).filter(|command| phase.accepts(*command));
            let Some(command) = command else {
                debug!(?phase, input = %input.trim(), "rejected command");
                console.say_toned("Invalid command. Please try again.", Tone::Warning)?;
                continue;
            };

            if let Flow::Stop(end) = self.dispatch(command, console)? {
                return Ok(end);
            }
        }
    }

    fn dispatch<I: BufRead, W: Write>(
        &mut self,
        command: Command,
        console: &mut Console<I, W>,
    ) -> Result<Flow> {
        match command {
            Command::Quit => {
                info!("player quit");
                console.say("Exiting game. Goodbye!")?;
                Ok(Flow::Stop(SessionEnd::Quit))
            }
            Command::CheckStats => {
                console.blank()?;
                console.say(self.player.show_stats())?;
                Ok(Flow::Continue)
            }
            Command::Inventory => {
                console.say(self.player.show_inventory())?;
                Ok(Flow::Continue)
            }
            Command::Explore => self.explore(console),
            Command::Attack => {
                self.battle(BattleAction::Attack, console)?;
                Ok(Flow::Continue)
            }
            Command::Defend => {
                self.battle(BattleAction::Defend, console)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Location menu, then a visit to the chosen location.
    fn explore<I: BufRead, W: Write>(&mut self, console: &mut Console<I, W>) -> Result<Flow> {
        let index = loop {
            console.blank()?;
            console.say_toned("Choose a location to explore:", Tone::Heading)?;
            for (i, location) in self.locations.iter().enumerate() {
                console.say(format!("{}. {}", i + 1, location.name))?;
            }

            let Some(input) = console.prompt(PROMPT_LOCATION)? else {
                return Ok(Flow::Stop(SessionEnd::InputClosed));
            };
            match select_location(&input, self.locations.len()) {
                Some(index) => break index,
                None => {
                    debug!(input = %input.trim(), "invalid location selection");
                    console.say_toned("Invalid choice. Try again.", Tone::Warning)?;
                }
            }
        };

        let location = &self.locations[index];
        let mut visit = LocationVisit::new(location);
        console.narrate_all(&visit.enter_location())?;

        while !visit.is_finished() {
            console.blank()?;
            console.say("You have several choices:")?;
            for line in LocationChoice::MENU {
                console.say(line)?;
            }

            let Some(input) = console.prompt(PROMPT_CHOICE)? else {
                return Ok(Flow::Stop(SessionEnd::InputClosed));
            };
            match LocationChoice::parse(&input) {
                Some(choice) => {
                    let events = visit.choose(choice, &mut self.rng);
                    console.narrate_all(&events)?;
                }
                None => console.say_toned("Invalid choice. Try again.", Tone::Warning)?,
            }
        }

        if visit.fruitless_explorations() > 0 {
            debug!(
                location = location.name,
                misses = visit.fruitless_explorations(),
                "exploration misses"
            );
        }

        match visit.state() {
            VisitState::MonsterEncounter => {
                let monster = Monster::spawn_for(location.name, &mut self.rng);
                console.say_toned(format!("A {} has appeared!", monster.name), Tone::Bad)?;
                self.current_monster = Some(monster);
            }
            VisitState::Ended { ending, treasure } => {
                debug!(location = location.name, ending, ?treasure, "visit ended");
                if let Some(item) = treasure {
                    self.player.inventory.push(item.to_string());
                }
                self.current_monster = None;
            }
            VisitState::Choosing => {
                warn!(location = location.name, "visit ended without an outcome");
                self.current_monster = None;
            }
        }
        Ok(Flow::Continue)
    }

    /// Runs one combat round against the current monster.
    pub fn battle<I: BufRead, W: Write>(
        &mut self,
        action: BattleAction,
        console: &mut Console<I, W>,
    ) -> Result<()> {
        let Some(monster) = self.current_monster.as_mut() else {
            warn!(?action, "battle requested without a monster");
            return Ok(());
        };

        let report = battle(&mut self.player, monster, action, &mut self.rng);
        console.narrate_all(&report.events)?;

        if report.outcome == BattleOutcome::MonsterDefeated {
            self.current_monster = None;
        }
        Ok(())
    }
}

/// Prompts for a name and class. `None` if input ends first.
pub fn create_character<I: BufRead, W: Write>(
    console: &mut Console<I, W>,
) -> Result<Option<Character>> {
    let Some(name) = console.prompt("Enter your character's name: ")? else {
        return Ok(None);
    };
    let Some(class_input) = console.prompt("Choose your class (Warrior, Mage, Rogue): ")? else {
        return Ok(None);
    };

    let class = match class_input.parse::<CharacterClass>() {
        Ok(class) => class,
        Err(GameError::UnknownClass(input)) => {
            debug!(%input, "unknown class, using default");
            console.say_toned("Invalid class. Defaulting to Warrior.", Tone::Warning)?;
            CharacterClass::Warrior
        }
        Err(err) => return Err(err),
    };

    Ok(Some(Character::new(name, class)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::StatType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<String>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.to_string()), Vec::new(), false)
    }

    fn transcript(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn new_game() -> Game<ChaCha8Rng> {
        Game::new(
            Character::new("Rex", CharacterClass::Warrior),
            ChaCha8Rng::seed_from_u64(12345),
        )
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("  EXPLORE "), Some(Command::Explore));
        assert_eq!(Command::parse("Check Stats"), Some(Command::CheckStats));
        assert_eq!(Command::parse("check  stats"), None);
        assert_eq!(Command::parse("run"), None);
    }

    #[test]
    fn test_phase_command_tables() {
        assert!(GamePhase::Exploring.accepts(Command::Inventory));
        assert!(!GamePhase::Exploring.accepts(Command::Attack));
        assert!(GamePhase::InCombat.accepts(Command::Defend));
        assert!(!GamePhase::InCombat.accepts(Command::Explore));
        assert!(!GamePhase::InCombat.accepts(Command::Inventory));
        assert!(GamePhase::Defeated.accepts(Command::Quit));
        assert!(!GamePhase::Defeated.accepts(Command::CheckStats));
    }

    #[test]
    fn test_phase_follows_state() {
        let mut game = new_game();
        assert_eq!(game.phase(), GamePhase::Exploring);

        let monster = Monster::spawn_for("Dragon's Lair", &mut game.rng);
        game.current_monster = Some(monster);
        assert_eq!(game.phase(), GamePhase::InCombat);

        game.player.stats.set(StatType::Hp, 0);
        assert_eq!(game.phase(), GamePhase::Defeated);
    }

    #[test]
    fn test_location_lookup() {
        let game = new_game();
        assert_eq!(game.location("King's Castle").unwrap().items.len(), 2);
        assert!(game.location("Moon").is_none());
    }

    #[test]
    fn test_quit_ends_session() {
        let mut game = new_game();
        let mut c = console("quit\n");
        assert_eq!(game.choose_action(&mut c).unwrap(), SessionEnd::Quit);
        assert!(transcript(c).contains("Exiting game. Goodbye!"));
    }

    #[test]
    fn test_input_end_closes_session() {
        let mut game = new_game();
        let mut c = console("check stats\n");
        assert_eq!(game.choose_action(&mut c).unwrap(), SessionEnd::InputClosed);
    }

    #[test]
    fn test_battle_without_monster_is_noop() {
        let mut game = new_game();
        let mut c = console("");
        game.battle(BattleAction::Attack, &mut c).unwrap();
        assert_eq!(game.player.stats.hp(), 100);
        assert!(transcript(c).is_empty());
    }

    #[test]
    fn test_create_character_defaults_to_warrior() {
        let mut c = console("Zed\nbard\n");
        let character = create_character(&mut c).unwrap().unwrap();
        assert_eq!(character.name, "Zed");
        assert_eq!(character.class, CharacterClass::Warrior);
        assert!(transcript(c).contains("Invalid class. Defaulting to Warrior."));
    }

    #[test]
    fn test_create_character_normalizes_class() {
        let mut c = console("Mira\n  mAgE\n");
        let character = create_character(&mut c).unwrap().unwrap();
        assert_eq!(character.class, CharacterClass::Mage);
        assert_eq!(character.stats.get(StatType::Magic), 15);
    }

    #[test]
    fn test_create_character_keeps_name_as_typed() {
        let mut c = console("  Sir Rex  \nrogue\n");
        let character = create_character(&mut c).unwrap().unwrap();
        assert_eq!(character.name, "  Sir Rex  ");
        assert_eq!(character.class, CharacterClass::Rogue);
    }

    #[test]
    fn test_create_character_without_input() {
        let mut c = console("Mira\n");
        assert!(create_character(&mut c).unwrap().is_none());
    }
}
