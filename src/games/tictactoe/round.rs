//! Rounds and best-of-N matches.
//!
//! A round is one board played to a win or a full board. A match is a
//! sequence of rounds that ends when one side reaches the configured number
//! of round wins. The opening side alternates between rounds.

use log::info;
use serde::{Deserialize, Serialize};

use super::board::{Board, Square};
use crate::core::{MatchConfig, Picker, Side, SideMap};

/// State of a round in progress or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    InProgress,
    Won(Side),
    Tie,
}

impl RoundStatus {
    /// Whether the round is over.
    #[must_use]
    pub fn is_over(self) -> bool {
        self != RoundStatus::InProgress
    }

    /// The round winner, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}

/// One board and the side to move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    board: Board,
    to_move: Side,
}

impl Round {
    /// Start a round on an empty board.
    #[must_use]
    pub fn new(first: Side) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
        }
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Place the mover's mark and pass the turn.
    ///
    /// Panics if the square is taken or the round is already over.
    pub fn play(&mut self, square: Square) {
        assert!(!self.status().is_over(), "Round is already over");
        self.board.place(square, self.to_move);
        self.to_move = self.to_move.opponent();
    }

    /// Win, tie or still going. A win on the last square counts as a win.
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        match self.board.detect_winner() {
            Some(side) => RoundStatus::Won(side),
            None if self.board.is_full() => RoundStatus::Tie,
            None => RoundStatus::InProgress,
        }
    }
}

/// Round wins per side within one match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    wins: SideMap<u32>,
}

impl RoundScore {
    /// A fresh score, zero for both sides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished round. Ties leave the score alone.
    pub fn record(&mut self, winner: Option<Side>) {
        if let Some(side) = winner {
            self.wins[side] += 1;
        }
    }

    /// Round wins for one side.
    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side]
    }
}

/// A best-of-N match against the computer.
#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    score: RoundScore,
    starter: Side,
    rounds_played: u32,
}

impl Match {
    /// Start a match, resolving a random opener with `picker`.
    pub fn new(config: MatchConfig, picker: &mut impl Picker) -> Self {
        let starter = config.first_player.resolve(picker);
        info!("new match to {} round wins, {} opens", config.rounds_needed, starter);
        Self {
            config,
            score: RoundScore::new(),
            starter,
            rounds_played: 0,
        }
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The running score.
    #[must_use]
    pub fn score(&self) -> &RoundScore {
        &self.score
    }

    /// Side that opens the next round.
    #[must_use]
    pub fn starter(&self) -> Side {
        self.starter
    }

    /// Rounds finished so far, ties included.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Begin the next round with the current opener.
    #[must_use]
    pub fn start_round(&self) -> Round {
        Round::new(self.starter)
    }

    /// Score a finished round and hand the opening move to the other side.
    ///
    /// Panics if the round is still in progress.
    pub fn finish_round(&mut self, round: &Round) {
        let status = round.status();
        assert!(status.is_over(), "Round is still in progress");

        self.score.record(status.winner());
        self.starter = self.starter.opponent();
        self.rounds_played += 1;
        info!(
            "round {} over ({:?}), score {}-{}",
            self.rounds_played,
            status,
            self.score.wins(Side::Player),
            self.score.wins(Side::Computer)
        );
    }

    /// The side that reached the required round wins, if any.
    #[must_use]
    pub fn champion(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.score.wins(side) >= self.config.rounds_needed)
    }

    /// Whether the match has been decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.champion().is_some()
    }
}
