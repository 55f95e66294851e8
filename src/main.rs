use adventure::build_info;
use adventure::core::{create_character, CliCommand, Console, Game, GameConfig, Result, USAGE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = match CliCommand::parse(std::env::args().skip(1)) {
        Ok(CliCommand::Play(config)) => config,
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'adventure --help' for usage.");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with the story on stdout.
fn init_tracing(config: &GameConfig) {
    let default_level = if config.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: GameConfig) -> Result<()> {
    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let color = config.color && io::stdout().is_terminal();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), color);

    let Some(player) = create_character(&mut console)? else {
        return Ok(());
    };

    let mut game = Game::new(player, rng);
    let end = game.start_game(&mut console)?;
    info!(?end, seed = ?config.seed, "session finished");
    Ok(())
}
