use super::board::Board;
use super::types::{Line, Mark, WinningLine};

/// Every line that wins, in scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    Line([0, 1, 2]),
    Line([3, 4, 5]),
    Line([6, 7, 8]),
    Line([0, 3, 6]),
    Line([1, 4, 7]),
    Line([2, 5, 8]),
    Line([0, 4, 8]),
    Line([2, 4, 6]),
];

/// Returns the first complete line in scan order, or `None` while the game continues.
///
/// `None` on a full board is a draw. Boards with impossible mark counts are
/// still scanned; the first complete line wins.
pub fn evaluate(board: Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.cells();
        let mark = board.get(a)?;
        if mark != Mark::Empty && board.get(b) == Some(mark) && board.get(c) == Some(mark) {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn winner(board: Board) -> Option<Mark> {
    evaluate(board).map(|winning| winning.mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate(Board::new()), None);
    }

    #[test]
    fn test_detects_every_line() {
        for (mark, other) in [(Mark::X, Mark::O), (Mark::O, Mark::X)] {
            for line in LINES {
                let mut b = Board::new();
                for index in line.cells() {
                    b = b.with_mark(index, mark);
                }
                // a stray opponent mark off the line must not matter
                if let Some(free) = b.available_moves().first() {
                    b = b.with_mark(*free, other);
                }
                assert_eq!(evaluate(b), Some(WinningLine::new(mark, line)));
            }
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        assert_eq!(evaluate(board("XX./OO./...")), None);
    }

    #[test]
    fn test_full_board_without_line_is_none() {
        let full = board("XOX/OXO/OXO");
        assert!(full.is_full());
        assert_eq!(evaluate(full), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_on_illegal_board() {
        // rows 0 and 2 are both complete
        let b = board("XXX/.../OOO");
        assert_eq!(evaluate(b), Some(WinningLine::new(Mark::X, Line([0, 1, 2]))));

        // column 0 and the anti-diagonal; the column comes first
        let b = board("O.O/OO./O..");
        assert_eq!(evaluate(b), Some(WinningLine::new(Mark::O, Line([0, 3, 6]))));
    }

    #[test]
    fn test_diagonal_win_reports_line() {
        let b = board("X.O/.XO/..X");
        assert_eq!(evaluate(b), Some(WinningLine::new(Mark::X, Line([0, 4, 8]))));
        assert_eq!(winner(b), Some(Mark::X));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let b = board("OX./XO./X.O");
        let first = evaluate(b);
        let second = evaluate(b);
        assert_eq!(first, second);
        assert_eq!(b, board("OX./XO./X.O"));
    }

    #[test]
    fn test_winner_iff_some_line_all_equal() {
        // exhaustive over every assignment of {Empty, X, O} to 9 cells
        let marks = [Mark::Empty, Mark::X, Mark::O];
        for code in 0..3usize.pow(9) {
            let mut cells = [Mark::Empty; 9];
            let mut rest = code;
            for cell in cells.iter_mut() {
                *cell = marks[rest % 3];
                rest /= 3;
            }
            let b = Board::from_cells(cells);
            let expected = LINES.iter().find(|line| {
                let [a, b2, c] = line.cells();
                cells[a] != Mark::Empty && cells[a] == cells[b2] && cells[a] == cells[c]
            });
            match (evaluate(b), expected) {
                (None, None) => {}
                (Some(found), Some(line)) => {
                    assert_eq!(found.line, *line);
                    assert_eq!(found.mark, cells[line.cells()[0]]);
                }
                (found, expected) => panic!("board {}: {:?} vs {:?}", b, found, expected),
            }
        }
    }
}
