//! Interactive Tic-Tac-Toe matches.

use anyhow::{anyhow, Result};
use log::info;

use super::{clear, prompt, render, text, Pacing};
use crate::core::{GameRng, MatchConfig, Side};
use crate::games::tictactoe::{choose_computer_move, Match, Round};

/// Play matches until the user declines another.
///
/// With `ask_first` the opener is asked for at the start of every match;
/// otherwise `config.first_player` is used as given.
pub fn run(config: MatchConfig, ask_first: bool) -> Result<()> {
    config.validate().map_err(|e| anyhow!(e))?;
    let pacing = Pacing::new(config.pacing_ms);
    let mut moves = GameRng::seeded_or_random(config.seed).for_context("moves");

    clear()?;
    println!("{}", text::TICTACTOE_WELCOME);
    println!(
        "The final winner is the first to reach {} round wins!\n\nGood luck and have fun!\n",
        config.rounds_needed
    );
    prompt::press_enter()?;

    loop {
        let mut config = config.clone();
        if ask_first {
            clear()?;
            config.first_player = prompt::first_player()?;
        }

        let mut game = Match::new(config, &mut moves);
        while !game.is_over() {
            clear()?;
            println!("{}", render::score(game.score(), game.config().rounds_needed));
            pacing.pause();

            let round = play_round(game.start_round(), &mut moves)?;
            println!("{}", render::round_result(round.status()));
            pacing.pause();
            game.finish_round(&round);
        }

        clear()?;
        println!("{}", render::score(game.score(), game.config().rounds_needed));
        if let Some(side) = game.champion() {
            println!("{}\n", render::champion(side));
        }
        info!("match finished after {} rounds", game.rounds_played());

        if !prompt::play_again("Play again?")? {
            break;
        }
    }

    println!("=> Thanks for playing! Good-bye!");
    Ok(())
}

fn play_round(mut round: Round, moves: &mut GameRng) -> Result<Round> {
    while !round.status().is_over() {
        clear()?;
        println!("{}", render::board(round.board()));
        let square = match round.to_move() {
            Side::Player => prompt::square(round.board())?,
            Side::Computer => choose_computer_move(round.board(), moves),
        };
        round.play(square);
    }
    clear()?;
    println!("{}", render::board(round.board()));
    Ok(round)
}
