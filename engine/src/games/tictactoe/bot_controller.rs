use serde::{Deserialize, Serialize};

use crate::games::RandomSource;
use super::board::{Board, get_available_moves, get_random_move, is_board_full};
use super::error::BoardError;
use super::types::{Mark, Position};
use super::win_detector::check_winner;

const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Random,
    #[default]
    Medium,
    Minimax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

pub fn calculate_move<R: RandomSource + ?Sized>(
    bot_type: BotType,
    board: &Board,
    player: Mark,
    rng: &mut R,
) -> Result<Position, BoardError> {
    match bot_type {
        BotType::Random => {
            ensure_playable(board, player)?;
            get_random_move(board, rng)
        }
        BotType::Medium => get_medium_move(board, player, rng),
        BotType::Minimax => get_minimax_move(board, player),
    }
}

/// Rejects inputs no selector can answer: an empty player marker, a decided
/// game, or a full board. Returns the opponent's mark.
fn ensure_playable(board: &Board, player: Mark) -> Result<Mark, BoardError> {
    let opponent = player.opponent().ok_or(BoardError::InvalidPlayer(player))?;
    if let Some(winner) = check_winner(board) {
        return Err(BoardError::GameOver(winner));
    }
    if is_board_full(board) {
        return Err(BoardError::NoAvailableMoves);
    }
    Ok(opponent)
}

/// First empty cell, in row-major order, that wins on the spot for `mark`.
pub fn find_winning_move(board: &Board, mark: Mark) -> Option<Position> {
    let mut scratch = *board;
    get_available_moves(board).into_iter().find(|&pos| {
        let probe = scratch.simulate(pos, mark);
        check_winner(&probe) == Some(mark)
    })
}

/// Win if possible, else block the opponent's immediate win, else play randomly.
pub fn get_medium_move<R: RandomSource + ?Sized>(
    board: &Board,
    player: Mark,
    rng: &mut R,
) -> Result<Position, BoardError> {
    let opponent = ensure_playable(board, player)?;

    if let Some(pos) = find_winning_move(board, player) {
        return Ok(pos);
    }

    if let Some(pos) = find_winning_move(board, opponent) {
        return Ok(pos);
    }

    get_random_move(board, rng)
}

pub fn get_minimax_move(board: &Board, player: Mark) -> Result<Position, BoardError> {
    get_minimax_move_with_score(board, player).map(|best| best.position)
}

/// Best move with its score. Ties go to the earliest cell in row-major order.
pub fn get_minimax_move_with_score(board: &Board, player: Mark) -> Result<ScoredMove, BoardError> {
    let scored = score_moves(board, player)?;

    let mut best: Option<ScoredMove> = None;
    for candidate in scored {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(candidate);
        }
    }

    best.ok_or(BoardError::NoAvailableMoves)
}

/// Scores every empty cell for `player`, in row-major order, by full-depth minimax.
pub fn score_moves(board: &Board, player: Mark) -> Result<Vec<ScoredMove>, BoardError> {
    let opponent = ensure_playable(board, player)?;
    let search = Search { player, opponent };
    let mut scratch = *board;

    let scored = get_available_moves(board)
        .into_iter()
        .map(|position| {
            let mut next = scratch.simulate(position, player);
            let score = search.score(&mut next, 0, false);
            ScoredMove { position, score }
        })
        .collect();

    Ok(scored)
}

struct Search {
    player: Mark,
    opponent: Mark,
}

impl Search {
    fn score(&self, board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
        match check_winner(board) {
            Some(winner) if winner == self.player => return WIN_SCORE - depth,
            Some(_) => return depth - WIN_SCORE,
            None => {}
        }
        if is_board_full(board) {
            return 0;
        }

        let (mark, mut best) = if is_maximizing {
            (self.player, i32::MIN)
        } else {
            (self.opponent, i32::MAX)
        };

        for pos in get_available_moves(board) {
            let mut next = board.simulate(pos, mark);
            let eval = self.score(&mut next, depth + 1, !is_maximizing);
            best = if is_maximizing { best.max(eval) } else { best.min(eval) };
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::{GameState, GameStatus};

    /// Replays a fixed list of indices, then falls back to the first candidate.
    struct ScriptedSource {
        picks: Vec<usize>,
        calls: usize,
    }

    impl ScriptedSource {
        fn new(picks: &[usize]) -> Self {
            Self { picks: picks.to_vec(), calls: 0 }
        }
    }

    impl RandomSource for ScriptedSource {
        fn pick_index(&mut self, len: usize) -> usize {
            let idx = self.picks.get(self.calls).copied().unwrap_or(0);
            self.calls += 1;
            idx % len
        }
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn play_game(x_bot: BotType, o_bot: BotType, rng: &mut SessionRng) -> GameStatus {
        let mut game = GameState::new();
        while !game.status.is_over() {
            let bot = if game.current_mark == Mark::X { x_bot } else { o_bot };
            let before = game.board;
            let pos = calculate_move(bot, &game.board, game.current_mark, rng).unwrap();
            assert_eq!(game.board, before);
            game.place_mark(pos).unwrap();
        }
        game.status
    }

    #[test]
    fn test_find_winning_move_first_in_scan_order() {
        // X can finish row 0 at (0, 2) or column 0 at (2, 0)
        let b = board("XX.\nXO.\n.O.");
        assert_eq!(find_winning_move(&b, Mark::X), Some(Position::new(0, 2)));
        assert_eq!(find_winning_move(&b, Mark::O), None);
        assert_eq!(find_winning_move(&board("...\n...\n..."), Mark::X), None);
    }

    #[test]
    fn test_medium_completes_own_line() {
        let b = board("XX.\nOO.\n...");
        let mut rng = ScriptedSource::new(&[]);
        assert_eq!(get_medium_move(&b, Mark::X, &mut rng), Ok(Position::new(0, 2)));
        assert_eq!(get_medium_move(&b, Mark::O, &mut rng), Ok(Position::new(1, 2)));
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_medium_blocks_opponent() {
        let b = board("X..\nOO.\nX..");
        let mut rng = ScriptedSource::new(&[]);
        assert_eq!(get_medium_move(&b, Mark::X, &mut rng), Ok(Position::new(1, 2)));

        let b = board("O.X\n.X.\n...");
        assert_eq!(get_medium_move(&b, Mark::O, &mut rng), Ok(Position::new(2, 0)));
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn test_medium_falls_back_to_random() {
        let b = board("X..\n.O.\n...");
        let mut rng = ScriptedSource::new(&[3]);
        let empty = get_available_moves(&b);
        assert_eq!(get_medium_move(&b, Mark::X, &mut rng), Ok(empty[3]));
        assert_eq!(rng.calls, 1);
    }

    #[test]
    fn test_minimax_takes_win_over_block() {
        let b = board("XX.\nOO.\n...");
        assert_eq!(get_minimax_move(&b, Mark::X), Ok(Position::new(0, 2)));
        let best = get_minimax_move_with_score(&b, Mark::X).unwrap();
        assert_eq!(best.score, WIN_SCORE);
    }

    #[test]
    fn test_minimax_blocks_forced_loss() {
        let b = board("X..\nOO.\nX..");
        assert_eq!(get_minimax_move(&b, Mark::X), Ok(Position::new(1, 2)));
    }

    #[test]
    fn test_minimax_prefers_fastest_win() {
        // (2, 0) and (2, 2) win at once, anything else lets O finish column 2
        let b = board("X.O\nXXO\n.O.");
        let best = get_minimax_move_with_score(&b, Mark::X).unwrap();
        assert_eq!(best, ScoredMove { position: Position::new(2, 0), score: WIN_SCORE });

        let scored = score_moves(&b, Mark::X).unwrap();
        let slow = scored.iter().find(|m| m.position == Position::new(0, 1)).unwrap();
        assert!(slow.score < 0);
    }

    #[test]
    fn test_minimax_delays_unavoidable_loss() {
        // blocking column 2 only postpones the loss, the rest lose at once
        let b = board("XXO\n..O\n...");
        let scored = score_moves(&b, Mark::X).unwrap();
        assert!(scored.iter().all(|m| m.score < 0));
        let best = get_minimax_move_with_score(&b, Mark::X).unwrap();
        assert_eq!(best, ScoredMove { position: Position::new(2, 2), score: -7 });
        let others: Vec<i32> = scored
            .iter()
            .filter(|m| m.position != best.position)
            .map(|m| m.score)
            .collect();
        assert_eq!(others, vec![-9; 4]);
    }

    #[test]
    fn test_minimax_empty_board_draws() {
        let b = Board::new();
        let best = get_minimax_move_with_score(&b, Mark::X).unwrap();
        assert_eq!(best.score, 0);
        assert_eq!(best.position, Position::new(0, 0));
        let corners_and_center = [
            Position::new(0, 0),
            Position::new(0, 2),
            Position::new(1, 1),
            Position::new(2, 0),
            Position::new(2, 2),
        ];
        assert!(corners_and_center.contains(&best.position));
        assert!(score_moves(&b, Mark::X).unwrap().iter().all(|m| m.score <= 0));
    }

    #[test]
    fn test_minimax_answers_corner_opening_with_center() {
        let b = board("X..\n...\n...");
        let scored = score_moves(&b, Mark::O).unwrap();
        let center = scored.iter().find(|m| m.position == Position::new(1, 1)).unwrap();
        assert_eq!(center.score, 0);
        assert_eq!(get_minimax_move(&b, Mark::O), Ok(Position::new(1, 1)));
    }

    #[test]
    fn test_selectors_leave_board_untouched() {
        let boards = ["XX.\nOO.\n...", "X..\n.O.\n...", "...\n...\n...", "XOX\nOX.\n..O"];
        let mut rng = SessionRng::new(7);
        for s in boards {
            let b = board(s);
            let original = b;
            let _ = get_random_move(&b, &mut rng);
            let _ = get_medium_move(&b, Mark::X, &mut rng);
            let _ = get_minimax_move(&b, Mark::O);
            let _ = score_moves(&b, Mark::X);
            assert_eq!(b, original);
        }
    }

    #[test]
    fn test_selectors_reject_unplayable_input() {
        let mut rng = SessionRng::new(3);
        let full = board("XOX\nXOO\nOXX");
        let won = board("XXX\nOO.\n...");
        for bot in [BotType::Random, BotType::Medium, BotType::Minimax] {
            assert_eq!(calculate_move(bot, &full, Mark::X, &mut rng), Err(BoardError::NoAvailableMoves));
            assert_eq!(calculate_move(bot, &won, Mark::O, &mut rng), Err(BoardError::GameOver(Mark::X)));
            assert_eq!(
                calculate_move(bot, &Board::new(), Mark::Empty, &mut rng),
                Err(BoardError::InvalidPlayer(Mark::Empty))
            );
        }
    }

    #[test]
    fn test_minimax_self_play_always_draws() {
        let mut rng = SessionRng::new(0);
        assert_eq!(play_game(BotType::Minimax, BotType::Minimax, &mut rng), GameStatus::Draw);
    }

    #[test]
    fn test_minimax_never_loses_to_weaker_bots() {
        let mut rng = SessionRng::new(99);
        for _ in 0..5 {
            for weaker in [BotType::Random, BotType::Medium] {
                assert_ne!(play_game(BotType::Minimax, weaker, &mut rng), GameStatus::OWon);
                assert_ne!(play_game(weaker, BotType::Minimax, &mut rng), GameStatus::XWon);
            }
        }
    }

    #[test]
    fn test_minimax_never_loses_from_any_reply() {
        // Minimax as X against every possible O reply sequence.
        fn explore(board: &mut Board, to_move: Mark) {
            if check_winner(board).is_some() || is_board_full(board) {
                assert_ne!(check_winner(board), Some(Mark::O), "X lost on\n{board}");
                return;
            }
            if to_move == Mark::X {
                let pos = get_minimax_move(board, Mark::X).unwrap();
                let mut next = board.simulate(pos, Mark::X);
                explore(&mut next, Mark::O);
            } else {
                for pos in get_available_moves(board) {
                    let mut next = board.simulate(pos, Mark::O);
                    explore(&mut next, Mark::X);
                }
            }
        }

        let mut b = Board::new();
        b.set(Position::new(1, 1), Mark::X);
        explore(&mut b, Mark::O);
    }
}
