use super::board::{Board, is_board_full};
use super::error::BoardError;
use super::types::{GameStatus, Mark, Position, WinningLine};
use super::win_detector::check_winner_with_line;

/// One game from the empty board until a win or a draw. X always moves first.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub winning_line: Option<WinningLine>,
    pub move_count: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
            move_count: 0,
        }
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<(), BoardError> {
        if let Some(line) = self.winning_line {
            return Err(BoardError::GameOver(line.mark));
        }
        if self.status != GameStatus::InProgress {
            return Err(BoardError::NoAvailableMoves);
        }

        let pos = Position::try_new(pos.row, pos.col)?;
        if !self.board.is_empty_at(pos) {
            return Err(BoardError::CellOccupied(pos));
        }

        self.board.set(pos, self.current_mark);
        self.last_move = Some(pos);
        self.move_count += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(line) = check_winner_with_line(&self.board) {
            self.winning_line = Some(line);
            self.status = match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if is_board_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}
