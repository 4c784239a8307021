//! Plain-text screens for both games.
//!
//! Every function returns a `String`. Printing and clearing happen in the
//! game loops.

use colored::Colorize;

use crate::core::Side;
use crate::games::tictactoe::{Board, Cell, RoundScore, RoundStatus, Square};
use crate::games::twenty_one::{Hand, HandOutcome};

pub const PLAYER_MARKER: &str = "X";
pub const COMPUTER_MARKER: &str = "O";

fn marker(board: &Board, square: Square) -> String {
    match board.cell(square) {
        Cell::Player => PLAYER_MARKER.green().bold().to_string(),
        Cell::Computer => COMPUTER_MARKER.red().bold().to_string(),
        Cell::Empty => square.to_string().dimmed().to_string(),
    }
}

/// The board with each open square showing its number.
pub fn board(board: &Board) -> String {
    let mut out = format!("You're a {PLAYER_MARKER}. Computer is {COMPUTER_MARKER}.\n\n");
    let rows: Vec<String> = [1u8, 4, 7]
        .iter()
        .map(|&start| {
            let cells: Vec<String> = (start..start + 3)
                .map(|n| marker(board, Square::new(n)))
                .collect();
            format!(
                "     |     |\n  {}  |  {}  |  {}\n     |     |\n",
                cells[0], cells[1], cells[2]
            )
        })
        .collect();
    out.push_str(&rows.join("-----+-----+-----\n"));
    out
}

/// Running match score.
pub fn score(score: &RoundScore, rounds_needed: u32) -> String {
    format!(
        "We're playing to {} round wins!\n\n\
         The current score for the player is {}.\n\n\
         The current score for the computer is {}.\n",
        rounds_needed,
        score.wins(Side::Player),
        score.wins(Side::Computer)
    )
}

/// End-of-round announcement.
pub fn round_result(status: RoundStatus) -> String {
    match status {
        RoundStatus::Won(side) => format!("=> {side} won this round!"),
        RoundStatus::Tie => "=> It's a tie!".to_string(),
        RoundStatus::InProgress => String::new(),
    }
}

/// End-of-match announcement.
pub fn champion(side: Side) -> String {
    match side {
        Side::Player => "The Player is the final winner!".green().bold().to_string(),
        Side::Computer => "The Computer has defeated you!".red().bold().to_string(),
    }
}

pub fn divider() -> &'static str {
    "-----------------"
}

/// Every card in `hand` and its total.
pub fn hand(owner: &str, holding: &str, hand: &Hand) -> String {
    let mut out = format!("{holding} currently holding:\n");
    for card in hand.cards() {
        out.push_str(&format!("{card}.\n"));
    }
    out.push_str(&format!("{owner}'s current hand's total is {}.", hand.total()));
    out
}

/// The dealer's up card with the hole card hidden.
pub fn dealer_showing(dealer: &Hand) -> String {
    match dealer.up_card() {
        Some(card) => format!("Dealer is currently holding:\n{card} and an unknown card."),
        None => "Dealer is currently holding nothing.".to_string(),
    }
}

pub fn bust(owner: &str) -> String {
    format!("It's a bust for the {owner}!").yellow().to_string()
}

/// Outcome line for a finished hand.
pub fn outcome(outcome: HandOutcome) -> String {
    match outcome {
        HandOutcome::PlayerWin => "You win this hand!".green().bold().to_string(),
        HandOutcome::DealerWin => "The Dealer wins this hand!".red().bold().to_string(),
        HandOutcome::Tie => "Your hands are tied!".bold().to_string(),
    }
}
