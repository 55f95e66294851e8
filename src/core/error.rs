//! Error types surfaced by the game session.

use thiserror::Error;

/// Faults that abort a session or reject a value at the edges.
///
/// Invalid in-game input is never an error; it is reported to the player and
/// re-prompted.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown class '{0}' (expected Warrior, Mage or Rogue)")]
    UnknownClass(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
