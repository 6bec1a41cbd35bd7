//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player, Square};

/// Every line of three, in checking order: rows, columns, the
/// top-left to bottom-right diagonal, then the top-right to bottom-left one.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the owner of a line, if all three squares hold the same mark.
fn line_owner(board: &Board, line: [(usize, usize); 3]) -> Option<Player> {
    let [a, b, c] = line.map(|(row, col)| board.rows()[row][col]);
    match a {
        Square::Occupied(player) if a == b && b == c => Some(player),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in checking order. On a
/// reachable board at most one player can own a line, so the order only
/// matters for hand-built boards.
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|line| line_owner(board, *line))
}

/// Checks whether `player` owns at least one complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line_owner(board, *line) == Some(player))
}

/// Returns the squares of every line `player` has completed.
pub fn winning_lines(board: &Board, player: Player) -> Vec<[Move; 3]> {
    LINES
        .iter()
        .filter(|line| line_owner(board, **line) == Some(player))
        .filter_map(|line| {
            let [a, b, c] = (*line).map(|(row, col)| Move::new(row, col));
            Some([a?, b?, c?])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert!(has_line(&board, Player::X));
        assert!(!has_line(&board, Player::O));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.OX".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "OX./XO./X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(
            winning_lines(&board, Player::X),
            vec![[
                Move::new(0, 2).unwrap(),
                Move::new(1, 1).unwrap(),
                Move::new(2, 0).unwrap(),
            ]]
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../O..".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_fixed_checking_order() {
        // Not reachable in play: both players own a line.
        let board: Board = "OOO/XXX/...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));

        let board: Board = "XOO/XOO/X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }
}
