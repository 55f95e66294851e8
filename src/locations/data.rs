//! The fixed game world.

/// A place the player can visit. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub name: &'static str,
    pub description: &'static str,
    pub challenge: &'static str,
    pub items: &'static [&'static str],
    pub possible_endings: &'static [&'static str],
}

/// Returns every location in menu order.
pub fn get_all_locations() -> Vec<Location> {
    vec![
        Location {
            name: "Dragon's Lair",
            description: "A terrifying cave filled with smoke and the scent of fire.",
            challenge: "Defeat the Dragon and claim its treasure.",
            items: &["Gold Chest", "Dragon Scale"],
            possible_endings: &[
                "You bravely slay the dragon and take its hoard, becoming the hero of the land.",
                "You attempt to fight the dragon but are overwhelmed. Your adventure ends here.",
                "You discover the dragon's weakness and escape with its treasure, becoming a legend.",
            ],
        },
        Location {
            name: "The Black Forest",
            description: "A dense, eerie forest with creatures lurking in the shadows.",
            challenge: "Survive the forest and defeat the mythical beasts.",
            items: &["Healing Herb", "Enchanted Leaf"],
            possible_endings: &[
                "You survive the forest's dangers and become the guardian of its secrets.",
                "The creatures of the forest overpower you. Your journey ends here.",
                "You discover an ancient relic hidden in the forest, gaining great power.",
            ],
        },
        Location {
            name: "King's Castle",
            description: "A grand castle, now threatened by traitorous nobles.",
            challenge: "Defeat the traitors and restore the kingdom.",
            items: &["Royal Sword", "Crown of the King"],
            possible_endings: &[
                "You defeat the traitors and restore peace to the kingdom, becoming a hero.",
                "You fail to defeat the traitors and are betrayed. The kingdom falls into ruin.",
                "You uncover the real plot behind the treason and expose the truth, saving the kingdom.",
            ],
        },
    ]
}

/// Finds a location by exact name.
pub fn get_location<'a>(locations: &'a [Location], name: &str) -> Option<&'a Location> {
    locations.iter().find(|location| location.name == name)
}

/// Parses a 1-based menu selection.
pub fn select_location(input: &str, count: usize) -> Option<usize> {
    let choice: usize = input.trim().parse().ok()?;
    (1..=count).contains(&choice).then(|| choice - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_locations_in_order() {
        let names: Vec<_> = get_all_locations().iter().map(|l| l.name).collect();
        assert_eq!(names, ["Dragon's Lair", "The Black Forest", "King's Castle"]);
    }

    #[test]
    fn test_every_location_has_content() {
        for location in get_all_locations() {
            assert!(!location.description.is_empty());
            assert!(!location.challenge.is_empty());
            assert_eq!(location.items.len(), 2, "{}", location.name);
            assert_eq!(location.possible_endings.len(), 3, "{}", location.name);
        }
    }

    #[test]
    fn test_get_location_by_name() {
        let locations = get_all_locations();
        let forest = get_location(&locations, "The Black Forest").unwrap();
        assert!(forest.items.contains(&"Healing Herb"));
        assert!(get_location(&locations, "Atlantis").is_none());
    }

    #[test]
    fn test_select_location_bounds() {
        assert_eq!(select_location("1", 3), Some(0));
        assert_eq!(select_location(" 3 ", 3), Some(2));
        assert_eq!(select_location("0", 3), None);
        assert_eq!(select_location("4", 3), None);
        assert_eq!(select_location("9", 3), None);
        assert_eq!(select_location("-1", 3), None);
        assert_eq!(select_location("two", 3), None);
        assert_eq!(select_location("", 3), None);
    }
}
