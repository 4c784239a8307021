//! Tic-Tac-Toe against the computer, best of N rounds.
//!
//! Options: --rounds, --first, --seed, --no-pause, -v

use clap::{Parser, ValueEnum};
use parlor::core::{FirstPlayer, MatchConfig};
use parlor::shell;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Opener {
    Player,
    Computer,
    Random,
}

impl From<Opener> for FirstPlayer {
    fn from(opener: Opener) -> Self {
        match opener {
            Opener::Player => FirstPlayer::Player,
            Opener::Computer => FirstPlayer::Computer,
            Opener::Random => FirstPlayer::Random,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tictactoe", about = "Play Tic-Tac-Toe against the computer")]
struct Args {
    /// Round wins needed to take the match
    #[arg(long, default_value_t = 2)]
    rounds: u32,

    /// Who opens the first round (asked interactively when omitted)
    #[arg(long, value_enum)]
    first: Option<Opener>,

    /// Seed for the computer's random moves
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses between screens
    #[arg(long)]
    no_pause: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    shell::log(shell::level_for(args.verbose))?;

    let mut config = MatchConfig::default().with_rounds_needed(args.rounds);
    if let Some(first) = args.first {
        config = config.with_first_player(first.into());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_pause {
        config = config.with_pacing_ms(0);
    }

    shell::tictactoe::run(config, args.first.is_none())
}
