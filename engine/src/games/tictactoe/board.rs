use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::games::RandomSource;
use super::error::BoardError;
use super::types::{BOARD_SIZE, Mark, Position};

/// A 3x3 grid of marks in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a nested vector, rejecting anything but 3x3.
    pub fn from_rows(rows: Vec<Vec<Mark>>) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::InvalidShape {
                rows: rows.len(),
                cols: rows.first().map_or(0, Vec::len),
            });
        }
        if let Some(row) = rows.iter().find(|row| row.len() != BOARD_SIZE) {
            return Err(BoardError::InvalidShape {
                rows: rows.len(),
                cols: row.len(),
            });
        }

        let mut board = Self::new();
        for (row, marks) in rows.into_iter().enumerate() {
            for (col, mark) in marks.into_iter().enumerate() {
                board.cells[row][col] = mark;
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Places `mark` at `pos` until the returned guard is dropped.
    ///
    /// The guard dereferences to the board, so simulations nest. Dropping it
    /// puts back whatever the cell held before, on every exit path.
    pub fn simulate(&mut self, pos: Position, mark: Mark) -> SimulatedMove<'_> {
        let previous = self.get(pos);
        debug_assert_eq!(previous, Mark::Empty, "simulating onto occupied cell {pos}");
        self.set(pos, mark);
        SimulatedMove {
            board: self,
            position: pos,
            previous,
        }
    }
}

pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    position: Position,
    previous: Mark,
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for SimulatedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, self.previous);
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses three rows of three cells, e.g. `"XX.\nOO.\n..."` or `"XX./OO./..."`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['\n', '/'])
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| *c != ' ' && *c != '\t')
                    .map(|c| Mark::from_char(c).ok_or(BoardError::InvalidCell(c)))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

pub fn is_board_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

pub fn get_random_move<R: RandomSource + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Position, BoardError> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return Err(BoardError::NoAvailableMoves);
    }
    let idx = rng.pick_index(available_moves.len());
    Ok(available_moves[idx])
}
