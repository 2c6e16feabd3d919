use thiserror::Error;

use super::types::{Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("no empty cells left on the board")]
    NoAvailableMoves,
    #[error("game is already over, {0} has won")]
    GameOver(Mark),
    #[error("player marker must be X or O, got {0:?}")]
    InvalidPlayer(Mark),
    #[error("board must be 3x3, got {rows} rows with a row of {cols} cells")]
    InvalidShape { rows: usize, cols: usize },
    #[error("invalid board cell character {0:?}")]
    InvalidCell(char),
    #[error("position ({row}, {col}) is outside the 3x3 board")]
    PositionOutOfBounds { row: usize, col: usize },
    #[error("cell {0} is already marked")]
    CellOccupied(Position),
}
