use serde::{Deserialize, Serialize};
use tictactoe_engine::config::Validate;
use tictactoe_engine::games::tictactoe::{BotType, FirstPlayerMode};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "tictactoe_arena.yaml";
pub const MAX_GAMES: u32 = 100_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ArenaConfig {
    /// Bot that plays X unless `first_player` is `random`.
    pub first_bot: BotType,
    pub second_bot: BotType,
    pub games: u32,
    pub seed: Option<u64>,
    pub show_boards: bool,
    pub first_player: FirstPlayerMode,
}

impl Validate for ArenaConfig {
    fn validate(&self) -> Result<(), String> {
        if self.games == 0 || self.games > MAX_GAMES {
            return Err(format!("games must be between 1 and {}", MAX_GAMES));
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            first_bot: BotType::Minimax,
            second_bot: BotType::Medium,
            games: 100,
            seed: None,
            show_boards: false,
            first_player: FirstPlayerMode::Fixed,
        }
    }
}
