use super::board::Board;
use super::types::{Mark, Position, WinningLine};

const fn line(a: (usize, usize), b: (usize, usize), c: (usize, usize)) -> [Position; 3] {
    [
        Position::new(a.0, a.1),
        Position::new(b.0, b.1),
        Position::new(c.0, c.1),
    ]
}

/// Rows, then columns, then the main and anti diagonals.
pub const LINES: [[Position; 3]; 8] = [
    line((0, 0), (0, 1), (0, 2)),
    line((1, 0), (1, 1), (1, 2)),
    line((2, 0), (2, 1), (2, 2)),
    line((0, 0), (1, 0), (2, 0)),
    line((0, 1), (1, 1), (2, 1)),
    line((0, 2), (1, 2), (2, 2)),
    line((0, 0), (1, 1), (2, 2)),
    line((0, 2), (1, 1), (2, 0)),
];

pub fn check_winner(board: &Board) -> Option<Mark> {
    check_winner_with_line(board).map(|line| line.mark)
}

pub fn check_winner_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&cells| {
        let mark = board.get(cells[0]);
        if mark != Mark::Empty && cells[1..].iter().all(|&pos| board.get(pos) == mark) {
            Some(WinningLine::new(mark, cells))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for cells in LINES {
                let mut b = Board::new();
                for pos in cells {
                    b.set(pos, mark);
                }
                assert_eq!(check_winner(&b), Some(mark), "line {cells:?}");
                assert_eq!(check_winner_with_line(&b), Some(WinningLine::new(mark, cells)));
            }
        }
    }

    #[test]
    fn test_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
        assert_eq!(check_winner(&board("XX.\nOO.\n...")), None);
        assert_eq!(check_winner(&board("XOX\nXOO\nOXX")), None);
        assert_eq!(check_winner(&board("XOX\nOXO\nOXO")), None);
    }

    #[test]
    fn test_winning_line_on_full_board() {
        let line = check_winner_with_line(&board("XOX\nOXO\nOOX")).unwrap();
        assert_eq!(line.mark, Mark::X);
        assert_eq!(line.start(), Position::new(0, 0));
        assert_eq!(line.end(), Position::new(2, 2));
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        // row 0 and column 0 both complete; rows are scanned first
        let line = check_winner_with_line(&board("XXX\nXO.\nXOO")).unwrap();
        assert_eq!(line.cells, LINES[0]);

        let line = check_winner_with_line(&board("OXX\nOX.\nO.X")).unwrap();
        assert_eq!(line.mark, Mark::O);
        assert_eq!(line.cells, LINES[3]);
    }
}
