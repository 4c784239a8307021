//! The computer's one-ply heuristic.
//!
//! Priority order:
//! 1. **Block**: the first line (in `LINES` order) holding two player marks
//!    and one open square gets that square.
//! 2. **Center**: take square 5 if open.
//! 3. **Random**: any open square, chosen by the injected picker.
//!
//! The opponent never looks for its own winning line. Only blocking is
//! considered.

use log::debug;

use super::board::{Board, Cell, Square, LINES};
use crate::core::Picker;

/// Which rule produced a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveReason {
    Block,
    Center,
    Random,
}

/// Square the player would complete next turn, if any.
///
/// Only the first threatening line is reported. A double threat is not
/// resolved beyond that.
#[must_use]
pub fn find_block(board: &Board) -> Option<Square> {
    LINES.iter().find_map(|line| {
        if board.count_in(line, Cell::Player) == 2 && board.count_in(line, Cell::Empty) == 1 {
            line.iter().copied().find(|&sq| board.is_empty(sq))
        } else {
            None
        }
    })
}

/// Choose the computer's square and report which rule chose it.
///
/// Panics on a full board.
pub fn choose_with_reason(board: &Board, picker: &mut impl Picker) -> (Square, MoveReason) {
    if let Some(square) = find_block(board) {
        return (square, MoveReason::Block);
    }

    if board.is_empty(Square::CENTER) {
        return (Square::CENTER, MoveReason::Center);
    }

    let open = board.empty_squares();
    assert!(!open.is_empty(), "No move available on a full board");
    (open[picker.pick(open.len())], MoveReason::Random)
}

/// Choose the computer's square.
///
/// Panics on a full board.
///
/// ```
/// use parlor::core::{GameRng, Side};
/// use parlor::games::tictactoe::{choose_computer_move, Board, Square};
///
/// let mut board = Board::new();
/// board.place(Square::new(1), Side::Player);
/// board.place(Square::new(2), Side::Player);
///
/// let square = choose_computer_move(&board, &mut GameRng::new(0));
/// assert_eq!(square, Square::new(3));
/// ```
pub fn choose_computer_move(board: &Board, picker: &mut impl Picker) -> Square {
    let (square, reason) = choose_with_reason(board, picker);
    debug!("computer takes square {} ({:?})", square, reason);
    square
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScriptedPicker, Side};

    fn board_with(player: &[u8], computer: &[u8]) -> Board {
        let mut board = Board::new();
        for &n in player {
            board.place(Square::new(n), Side::Player);
        }
        for &n in computer {
            board.place(Square::new(n), Side::Computer);
        }
        board
    }

    #[test]
    fn test_blocks_top_row() {
        let board = board_with(&[1, 2], &[5]);
        let mut picker = ScriptedPicker::default();
        assert_eq!(
            choose_with_reason(&board, &mut picker),
            (Square::new(3), MoveReason::Block)
        );
    }

    #[test]
    fn test_block_beats_center() {
        let board = board_with(&[1, 7], &[]);
        let mut picker = ScriptedPicker::default();
        assert_eq!(
            choose_with_reason(&board, &mut picker),
            (Square::new(4), MoveReason::Block)
        );
    }

    #[test]
    fn test_gap_in_middle_of_line_is_blocked() {
        let board = board_with(&[3, 9], &[5]);
        assert_eq!(find_block(&board), Some(Square::new(6)));
    }

    #[test]
    fn test_first_threat_in_line_order_wins() {
        // Threats on row [4,5,6] (needs 6) and column [1,4,7] (needs 1)
        let board = board_with(&[4, 5, 7], &[2, 9]);
        assert_eq!(find_block(&board), Some(Square::new(6)));
    }

    #[test]
    fn test_blocked_line_is_ignored() {
        let board = board_with(&[1, 2], &[3]);
        assert_eq!(find_block(&board), None);
    }

    #[test]
    fn test_no_offense() {
        // Computer could win at 3 but the heuristic only blocks or centers
        let board = board_with(&[4, 7], &[1, 2]);
        let mut picker = ScriptedPicker::default();
        assert_eq!(
            choose_with_reason(&board, &mut picker),
            (Square::CENTER, MoveReason::Center)
        );
    }

    #[test]
    fn test_center_on_opening() {
        let board = Board::new();
        let mut picker = ScriptedPicker::default();
        assert_eq!(choose_computer_move(&board, &mut picker), Square::CENTER);
    }

    #[test]
    fn test_random_uses_picker_over_empty_squares() {
        let board = board_with(&[5], &[]);
        // Open squares: 1 2 3 4 6 7 8 9
        let mut picker = ScriptedPicker::new([4]);
        assert_eq!(
            choose_with_reason(&board, &mut picker),
            (Square::new(6), MoveReason::Random)
        );
        assert_eq!(picker.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_panics() {
        let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        choose_computer_move(&board, &mut ScriptedPicker::default());
    }
}
