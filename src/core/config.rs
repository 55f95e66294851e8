//! Session configuration and command-line parsing.

use super::error::{GameError, Result};

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Random seed for a reproducible session (None = entropy)
    pub seed: Option<u64>,

    /// Style narration with terminal colours
    pub color: bool,

    /// Emit debug logs on stderr
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            color: true,
            verbose: false,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(GameConfig),
    Help,
    Version,
}

pub const USAGE: &str = "\
Adventure - a text-based RPG

Usage: adventure [options]

Options:
  --seed <n>     Use a fixed random seed (reproducible session)
  --no-color     Disable coloured output
  -V, --verbose  Log game internals to stderr
  -v, --version  Show version information
  -h, --help     Show this help message";

impl CliCommand {
    /// Parses arguments, excluding the program name.
    ///
    /// `--help` and `--version` win over everything after them.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = GameConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--version" | "-v" => return Ok(CliCommand::Version),
                "--no-color" => config.color = false,
                "--verbose" | "-V" => config.verbose = true,
                "--seed" => {
                    let value = args.next().ok_or_else(|| {
                        GameError::InvalidArgument("--seed requires a value".to_string())
                    })?;
                    config.seed = Some(parse_seed(value.as_ref())?);
                }
                other => {
                    if let Some(value) = other.strip_prefix("--seed=") {
                        config.seed = Some(parse_seed(value)?);
                    } else {
                        return Err(GameError::InvalidArgument(format!(
                            "unknown option '{}'",
                            other
                        )));
                    }
                }
            }
        }

        Ok(CliCommand::Play(config))
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| GameError::InvalidArgument(format!("seed must be an integer, got '{value}'")))
}
