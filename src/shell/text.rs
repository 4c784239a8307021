//! Fixed screen text and list phrasing.

use std::fmt::Display;

pub const TICTACTOE_WELCOME: &str = r#"Welcome to "Tic-Tac-Toe"!

Tic-Tac-Toe is played by two players. Your piece is 'X', the computer's piece is 'O'.

The board is divided into 9 squares, numbered 1 through 9 from top left to bottom right:

                                   1 | 2 | 3
                                  ---+---+---
                                   4 | 5 | 6
                                  ---+---+---
                                   7 | 8 | 9

To win a round, place your piece on three squares in a row, diagonals included.
"#;

pub const TWENTY_ONE_RULES: &str = "\
+------------------------------+ The rules are simple! +-------------------------------------+
|  The goal of '21' is to beat the dealer's hand without going over 21.                      |
|  Face cards are worth 10. Aces are worth 1 or 11, whichever makes a better hand.           |
|  Each player starts with two cards, one of the dealer's cards is hidden until the end.     |
|  To 'Hit' is to ask for another card. To 'Stay' is to hold your total and end your turn.   |
|  If you go over 21 you bust, and the dealer wins regardless of the dealer's hand.          |
|  Dealer will hit until his/her cards total 17 or higher.                                   |
+--------------------------------------------------------------------------------------------+
";

/// Phrase a list for a prompt: `1`, `1 or 2`, `1, 2, or 3`.
///
/// ```
/// use parlor::shell::joinor;
///
/// assert_eq!(joinor(&[1, 2, 3], ", ", "or"), "1, 2, or 3");
/// assert_eq!(joinor(&[4, 9], ", ", "or"), "4 or 9");
/// ```
pub fn joinor<T: Display>(items: &[T], separator: &str, last: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {last} {second}"),
        [init @ .., tail] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}{separator}{last} {tail}", head.join(separator))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joinor_shapes() {
        let none: [u8; 0] = [];
        assert_eq!(joinor(&none, ", ", "or"), "");
        assert_eq!(joinor(&[1], ", ", "or"), "1");
        assert_eq!(joinor(&[1, 2], ", ", "or"), "1 or 2");
        assert_eq!(joinor(&[1, 2, 3, 4], ", ", "or"), "1, 2, 3, or 4");
    }

    #[test]
    fn test_joinor_custom_words() {
        assert_eq!(joinor(&["a", "b", "c"], "; ", "and"), "a; b; and c");
    }
}
