use crate::models::game_move::{Move, Symbol};

/// A 3x3 grid of placed symbols, indexed `[row][col]`.
pub type Grid = [[Option<Symbol>; 3]; 3];

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardOutcome {
    Ongoing,
    Won(Symbol),
    Draw,
}

/// The symbol expected at the given zero-based turn: X opens, then the
/// symbol flips every turn.
pub fn expected_symbol(turn_number: i64) -> Symbol {
    if turn_number % 2 == 0 {
        Symbol::X
    } else {
        Symbol::O
    }
}

/// Reduces a move history to its grid. Rows and columns are trusted to be
/// in range here; the move validator rejects out-of-range input before any
/// move is recorded.
pub fn grid(moves: &[Move]) -> Grid {
    let mut grid: Grid = [[None; 3]; 3];
    for mv in moves {
        grid[mv.row as usize][mv.col as usize] = Some(mv.symbol);
    }
    grid
}

/// Evaluates a board: a uniform winning line wins, a full board with no
/// winner is a draw, anything else is still ongoing. Pure function of the
/// grid, so re-evaluating a finished game yields the same result.
pub fn evaluate(grid: &Grid, move_count: usize) -> BoardOutcome {
    for line in &WINNING_LINES {
        let [a, b, c] = line.map(|(row, col)| grid[row][col]);
        if let (Some(first), Some(second), Some(third)) = (a, b, c) {
            if first == second && second == third {
                return BoardOutcome::Won(first);
            }
        }
    }

    if move_count >= 9 {
        BoardOutcome::Draw
    } else {
        BoardOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn grid_of(cells: &[(usize, usize, Symbol)]) -> Grid {
        let mut grid: Grid = [[None; 3]; 3];
        for (row, col, symbol) in cells {
            grid[*row][*col] = Some(*symbol);
        }
        grid
    }

    #[test]
    fn test_expected_symbol_alternates() {
        assert_eq!(expected_symbol(0), Symbol::X);
        assert_eq!(expected_symbol(1), Symbol::O);
        assert_eq!(expected_symbol(2), Symbol::X);
        assert_eq!(expected_symbol(8), Symbol::X);
    }

    #[test_case(&[(0, 0), (0, 1), (0, 2)]; "top row")]
    #[test_case(&[(1, 0), (1, 1), (1, 2)]; "middle row")]
    #[test_case(&[(2, 0), (2, 1), (2, 2)]; "bottom row")]
    #[test_case(&[(0, 0), (1, 0), (2, 0)]; "left column")]
    #[test_case(&[(0, 1), (1, 1), (2, 1)]; "middle column")]
    #[test_case(&[(0, 2), (1, 2), (2, 2)]; "right column")]
    #[test_case(&[(0, 0), (1, 1), (2, 2)]; "main diagonal")]
    #[test_case(&[(0, 2), (1, 1), (2, 0)]; "anti diagonal")]
    fn test_each_winning_line(line: &[(usize, usize)]) {
        let cells: Vec<(usize, usize, Symbol)> =
            line.iter().map(|(r, c)| (*r, *c, Symbol::X)).collect();
        let grid = grid_of(&cells);

        assert_eq!(evaluate(&grid, 3), BoardOutcome::Won(Symbol::X));
    }

    #[test]
    fn test_won_line_with_other_moves_on_board() {
        let grid = grid_of(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::X),
            (0, 2, Symbol::X),
            (1, 0, Symbol::O),
            (1, 1, Symbol::O),
        ]);

        assert_eq!(evaluate(&grid, 5), BoardOutcome::Won(Symbol::X));
    }

    #[test]
    fn test_o_can_win() {
        let grid = grid_of(&[
            (0, 1, Symbol::O),
            (1, 1, Symbol::O),
            (2, 1, Symbol::O),
            (0, 0, Symbol::X),
            (2, 2, Symbol::X),
            (2, 0, Symbol::X),
        ]);

        assert_eq!(evaluate(&grid, 6), BoardOutcome::Won(Symbol::O));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let grid = grid_of(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::O),
            (0, 2, Symbol::X),
            (1, 0, Symbol::X),
            (1, 1, Symbol::O),
            (1, 2, Symbol::O),
            (2, 0, Symbol::O),
            (2, 1, Symbol::X),
            (2, 2, Symbol::X),
        ]);

        assert_eq!(evaluate(&grid, 9), BoardOutcome::Draw);
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let grid = grid_of(&[(0, 0, Symbol::X), (1, 1, Symbol::O)]);

        assert_eq!(evaluate(&grid, 2), BoardOutcome::Ongoing);
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        let grid: Grid = [[None; 3]; 3];

        assert_eq!(evaluate(&grid, 0), BoardOutcome::Ongoing);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let grid = grid_of(&[(0, 0, Symbol::X), (0, 1, Symbol::X), (0, 2, Symbol::X)]);

        let first = evaluate(&grid, 3);
        let second = evaluate(&grid, 3);
        assert_eq!(first, second);
        assert_eq!(first, BoardOutcome::Won(Symbol::X));
    }
}
