use tictactoe_engine::games::tictactoe::{
    BoardError, BotType, FirstPlayerMode, GameState, GameStatus, Mark, calculate_move,
};
use tictactoe_engine::games::{RandomSource, SessionRng};
use tictactoe_engine::log;

use crate::arena_config::ArenaConfig;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArenaStats {
    pub first_bot_wins: u32,
    pub second_bot_wins: u32,
    pub draws: u32,
}

impl ArenaStats {
    pub fn games(&self) -> u32 {
        self.first_bot_wins + self.second_bot_wins + self.draws
    }
}

/// Seat assignment for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Seats {
    x_bot: BotType,
    o_bot: BotType,
    first_bot_mark: Mark,
}

pub struct Arena {
    config: ArenaConfig,
    rng: SessionRng,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        Self { config, rng }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn run(&mut self) -> Result<ArenaStats, BoardError> {
        let mut stats = ArenaStats::default();

        for game_index in 1..=self.config.games {
            let seats = self.assign_seats();
            let game = play_game(seats.x_bot, seats.o_bot, &mut self.rng)?;

            match game.winner() {
                Some(mark) if mark == seats.first_bot_mark => stats.first_bot_wins += 1,
                Some(_) => stats.second_bot_wins += 1,
                None => stats.draws += 1,
            }

            if self.config.show_boards {
                log!(
                    "Game {}: X={:?} O={:?} {} after {} moves\n{}",
                    game_index,
                    seats.x_bot,
                    seats.o_bot,
                    describe_status(game.status),
                    game.move_count,
                    game.board
                );
            }
        }

        Ok(stats)
    }

    fn assign_seats(&mut self) -> Seats {
        let swap = match self.config.first_player {
            FirstPlayerMode::Fixed => false,
            FirstPlayerMode::Random => self.rng.random_bool(),
        };

        if swap {
            Seats {
                x_bot: self.config.second_bot,
                o_bot: self.config.first_bot,
                first_bot_mark: Mark::O,
            }
        } else {
            Seats {
                x_bot: self.config.first_bot,
                o_bot: self.config.second_bot,
                first_bot_mark: Mark::X,
            }
        }
    }
}

pub fn play_game<R: RandomSource + ?Sized>(
    x_bot: BotType,
    o_bot: BotType,
    rng: &mut R,
) -> Result<GameState, BoardError> {
    let mut game = GameState::new();

    while !game.status.is_over() {
        let bot = if game.current_mark == Mark::X { x_bot } else { o_bot };
        let pos = calculate_move(bot, &game.board, game.current_mark, rng)?;
        game.place_mark(pos)?;
    }

    Ok(game)
}

fn describe_status(status: GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "in progress",
        GameStatus::XWon => "X won",
        GameStatus::OWon => "O won",
        GameStatus::Draw => "draw",
    }
}
