//! Twenty-One against a dealer who hits below 17.
//!
//! Options: --seed, --no-pause, -v

use clap::Parser;
use parlor::core::TableConfig;
use parlor::shell;

#[derive(Debug, Parser)]
#[command(name = "twenty-one", about = "Play Twenty-One against the dealer")]
struct Args {
    /// Seed for deck shuffles
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

    let mut config = TableConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_pause {
        config = config.with_pacing_ms(0);
    }

    shell::twenty_one::run(config)
}
