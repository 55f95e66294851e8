//! Game loop, console, configuration and shared constants.

pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;

pub use config::{CliCommand, GameConfig, USAGE};
pub use console::{Console, Narrate, Tone};
pub use error::{GameError, Result};
pub use game::{create_character, Command, Game, GamePhase, SessionEnd};
