mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, SimulatedMove, get_available_moves, get_random_move, is_board_full};
pub use bot_controller::{
    BotType, ScoredMove, calculate_move, find_winning_move, get_medium_move, get_minimax_move,
    get_minimax_move_with_score, score_moves,
};
pub use error::BoardError;
pub use game_state::GameState;
pub use types::{BOARD_SIZE, FirstPlayerMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{LINES, check_winner, check_winner_with_line};
