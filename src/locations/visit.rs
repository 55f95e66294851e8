//! A single visit to a location: challenge, explore or leave.

use super::data::Location;
use crate::core::console::{Narrate, Tone};
use crate::core::constants::{CHALLENGE_MONSTER_CHANCE, HIDDEN_PASSAGE_CHANCE};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationChoice {
    Challenge,
    Explore,
    Leave,
}

impl LocationChoice {
    pub const MENU: [&'static str; 3] = [
        "1. Continue the challenge",
        "2. Explore more",
        "3. Leave the location",
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(LocationChoice::Challenge),
            "2" => Some(LocationChoice::Explore),
            "3" => Some(LocationChoice::Leave),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitState {
    /// Waiting for the player's next choice.
    Choosing,
    /// The challenge summoned a monster; the game takes over.
    MonsterEncounter,
    /// The visit is over.
    Ended {
        ending: &'static str,
        treasure: Option<&'static str>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationEvent {
    Entering(&'static str),
    Description(&'static str),
    Challenge(&'static str),
    ItemsHere(&'static [&'static str]),
    ChallengeAccepted,
    MonsterAppears,
    ChallengeOvercome,
    TreasureFound(&'static str),
    ExploringFurther,
    HiddenPassage,
    FoundNothing,
    Leaving,
    LocationEnds,
    Ending(&'static str),
}

impl fmt::Display for LocationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationEvent::Entering(name) => write!(f, "Entering {}...", name),
            LocationEvent::Description(text) | LocationEvent::Challenge(text) => {
                f.write_str(text)
            }
            LocationEvent::ItemsHere(items) => {
                write!(f, "Items to be found here: {}", items.join(", "))
            }
            LocationEvent::ChallengeAccepted => {
                f.write_str("You choose to face the challenge head-on!")
            }
            LocationEvent::MonsterAppears => f.write_str("A monster appears! Prepare for battle."),
            LocationEvent::ChallengeOvercome => {
                f.write_str("You overcome the challenge and gain treasure!")
            }
            LocationEvent::TreasureFound(item) => write!(f, "You found {}!", item),
            LocationEvent::ExploringFurther => f.write_str("You decide to explore further."),
            LocationEvent::HiddenPassage => f.write_str("You find a hidden passage!"),
            LocationEvent::FoundNothing => {
                f.write_str("You find nothing and return to your path.")
            }
            LocationEvent::Leaving => f.write_str("You decide to leave the location."),
            LocationEvent::LocationEnds => {
                f.write_str("The location has come to an end.\nYour adventure continues...")
            }
            LocationEvent::Ending(text) => write!(f, "Ending: {}", text),
        }
    }
}

impl Narrate for LocationEvent {
    fn tone(&self) -> Tone {
        match self {
            LocationEvent::Entering(_) | LocationEvent::Ending(_) => Tone::Heading,
            LocationEvent::MonsterAppears => Tone::Bad,
            LocationEvent::TreasureFound(_) | LocationEvent::HiddenPassage => Tone::Good,
            _ => Tone::Plain,
        }
    }

    fn spaced(&self) -> bool {
        matches!(
            self,
            LocationEvent::Entering(_) | LocationEvent::LocationEnds | LocationEvent::Ending(_)
        )
    }
}

/// Drives one visit. Each choice returns the events to narrate; the visit is
/// finished once it leaves [`VisitState::Choosing`].
#[derive(Debug, Clone)]
pub struct LocationVisit<'a> {
    location: &'a Location,
    state: VisitState,
    fruitless_explorations: u32,
}

impl<'a> LocationVisit<'a> {
    pub fn new(location: &'a Location) -> Self {
        Self {
            location,
            state: VisitState::Choosing,
            fruitless_explorations: 0,
        }
    }

    pub fn state(&self) -> VisitState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state != VisitState::Choosing
    }

    /// Times "explore more" came up empty during this visit.
    pub fn fruitless_explorations(&self) -> u32 {
        self.fruitless_explorations
    }

    /// Arrival narration.
    pub fn enter_location(&self) -> Vec<LocationEvent> {
        let mut events = vec![
            LocationEvent::Entering(self.location.name),
            LocationEvent::Description(self.location.description),
            LocationEvent::Challenge(self.location.challenge),
        ];
        if !self.location.items.is_empty() {
            events.push(LocationEvent::ItemsHere(self.location.items));
        }
        events
    }

    /// Applies a choice. Does nothing once the visit is finished.
    pub fn choose(&mut self, choice: LocationChoice, rng: &mut impl Rng) -> Vec<LocationEvent> {
        let mut events = Vec::new();
        if self.is_finished() {
            return events;
        }
        debug!(location = self.location.name, ?choice, "location choice");
        match choice {
            LocationChoice::Challenge => self.handle_challenge(rng, &mut events),
            LocationChoice::Explore => self.handle_exploration(rng, &mut events),
            LocationChoice::Leave => self.handle_leave(rng, &mut events),
        }
        events
    }

    fn handle_challenge(&mut self, rng: &mut impl Rng, events: &mut Vec<LocationEvent>) {
        events.push(LocationEvent::ChallengeAccepted);
        if rng.gen_bool(CHALLENGE_MONSTER_CHANCE) {
            events.push(LocationEvent::MonsterAppears);
            self.state = VisitState::MonsterEncounter;
            return;
        }

        events.push(LocationEvent::ChallengeOvercome);
        let treasure = self.location.items.choose(rng).copied();
        if let Some(item) = treasure {
            events.push(LocationEvent::TreasureFound(item));
        }
        self.end_location(treasure, rng, events);
    }

    fn handle_exploration(&mut self, rng: &mut impl Rng, events: &mut Vec<LocationEvent>) {
        events.push(LocationEvent::ExploringFurther);
        if rng.gen_bool(HIDDEN_PASSAGE_CHANCE) {
            events.push(LocationEvent::HiddenPassage);
            self.end_location(None, rng, events);
        } else {
            self.fruitless_explorations += 1;
            events.push(LocationEvent::FoundNothing);
        }
    }

    fn handle_leave(&mut self, rng: &mut impl Rng, events: &mut Vec<LocationEvent>) {
        events.push(LocationEvent::Leaving);
        self.end_location(None, rng, events);
    }

    fn end_location(
        &mut self,
        treasure: Option<&'static str>,
        rng: &mut impl Rng,
        events: &mut Vec<LocationEvent>,
    ) {
        events.push(LocationEvent::LocationEnds);
        let ending = self.trigger_ending(rng);
        events.push(LocationEvent::Ending(ending));
        self.state = VisitState::Ended { ending, treasure };
    }

    fn trigger_ending(&self, rng: &mut impl Rng) -> &'static str {
        self.location
            .possible_endings
            .choose(rng)
            .copied()
            .unwrap_or("Your adventure continues.")
    }
}
