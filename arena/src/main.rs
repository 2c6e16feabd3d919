mod arena;
mod arena_config;

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::games::tictactoe::{BotType, FirstPlayerMode};
use tictactoe_engine::{log, logger};

use arena::Arena;
use arena_config::{ArenaConfig, DEFAULT_CONFIG_FILE_NAME};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BotArg {
    Random,
    Medium,
    Minimax,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Random => BotType::Random,
            BotArg::Medium => BotType::Medium,
            BotArg::Minimax => BotType::Minimax,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe_arena", about = "Plays tic-tac-toe bots against each other")]
struct Args {
    /// YAML config; missing file means defaults
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: String,
    #[arg(long, value_enum)]
    first_bot: Option<BotArg>,
    #[arg(long, value_enum)]
    second_bot: Option<BotArg>,
    #[arg(long)]
    games: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// Seat the two bots randomly each game instead of first bot on X
    #[arg(long)]
    random_first_player: bool,
    #[arg(long)]
    show_boards: bool,
    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut ArenaConfig) {
        if let Some(bot) = self.first_bot {
            config.first_bot = bot.into();
        }
        if let Some(bot) = self.second_bot {
            config.second_bot = bot.into();
        }
        if let Some(games) = self.games {
            config.games = games;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.random_first_player {
            config.first_player = FirstPlayerMode::Random;
        }
        if self.show_boards {
            config.show_boards = true;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Arena".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ArenaConfig, YamlConfigSerializer> =
        ConfigManager::from_yaml_file(args.config.as_str());
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    let mut arena = Arena::new(config.clone());
    log!(
        "Playing {} games: {:?} vs {:?} (first player {:?}, seed {})",
        config.games,
        config.first_bot,
        config.second_bot,
        config.first_player,
        arena.seed()
    );

    let stats = arena.run()?;

    log!(
        "{:?}: {} wins, {:?}: {} wins, draws: {}",
        config.first_bot,
        stats.first_bot_wins,
        config.second_bot,
        stats.second_bot_wins,
        stats.draws
    );

    Ok(())
}
