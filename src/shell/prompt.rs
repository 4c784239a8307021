//! Interactive prompts.
//!
//! Input is validated here, so the engines only ever see legal moves.

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Select};

use super::text::joinor;
use crate::core::FirstPlayer;
use crate::games::tictactoe::{Board, Square};

/// Player's choice on their Twenty-One turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stay,
}

/// Block until the user presses enter.
pub fn press_enter() -> Result<()> {
    Input::<String>::new()
        .with_prompt("Press enter to continue")
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(())
}

/// Ask who opens the match.
pub fn first_player() -> Result<FirstPlayer> {
    let choices = ["Player", "Computer", "Random"];
    let selection = Select::new()
        .with_prompt("Please decide who should go first (order alternates between rounds)")
        .report(false)
        .items(&choices)
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => FirstPlayer::Player,
        1 => FirstPlayer::Computer,
        _ => FirstPlayer::Random,
    })
}

/// Ask for an open square, re-prompting until one is given.
pub fn square(board: &Board) -> Result<Square> {
    let open = board.empty_squares();
    let answer = Input::<String>::new()
        .with_prompt(format!(
            "=> Choose a position to place a piece: {}",
            joinor(&open, ", ", "or")
        ))
        .report(false)
        .validate_with(|input: &String| -> Result<(), &str> {
            match input.trim().parse::<u8>().ok().and_then(Square::checked) {
                Some(square) if open.contains(&square) => Ok(()),
                _ => Err("Sorry, that's not a valid option."),
            }
        })
        .interact_text()?;

    answer
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Square::checked)
        .with_context(|| format!("unexpected square {answer:?}"))
}

/// Ask whether to take another card.
pub fn hit_or_stay() -> Result<Decision> {
    let selection = Select::new()
        .with_prompt("Please choose")
        .report(false)
        .items(&["Hit", "Stay"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 { Decision::Hit } else { Decision::Stay })
}

/// Ask whether to start over.
pub fn play_again(question: &str) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(question)
        .default(true)
        .interact()?)
}
