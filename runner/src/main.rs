mod command_parser;
mod console_observer;

use std::io::BufRead;

use clap::Parser;
use tokio::sync::mpsc;

use snake_common::config::ConfigManager;
use snake_common::games::snake::{
    BoundaryPolicy, EngineCommand, EngineSettings, SnakeEngine, SnakeSession,
};
use snake_common::games::{IntervalTicker, SessionRng};
use snake_common::persistence::YamlScoreStore;
use snake_common::{log, logger};

use command_parser::parse_command;
use console_observer::ConsoleObserver;

#[derive(Parser)]
#[command(name = "snake_runner", about = "Headless driver for the snake engine")]
struct Args {
    /// Engine settings (YAML). Missing file means the default duel.
    #[arg(long, default_value = "snake_engine.yaml")]
    config: String,

    /// Where high score and win/loss tallies are kept.
    #[arg(long, default_value = "snake_stats.yaml")]
    stats: String,

    /// Single snake on a walled grid, overriding snake count and boundary from the config.
    #[arg(long)]
    solo: bool,

    /// Seed for food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write the effective settings back to the config file and exit.
    #[arg(long)]
    write_config: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<_, EngineSettings> =
        ConfigManager::from_yaml_file(&args.config);
    let mut settings = config_manager.get_config()?;
    if args.solo {
        settings.snake_count = 1;
        settings.boundary_policy = BoundaryPolicy::Wall;
        settings.food_count = 1;
    }

    if args.write_config {
        config_manager.set_config(&settings)?;
        log!("Settings written to {}", args.config);
        return Ok(());
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let store = YamlScoreStore::from_yaml_file(&args.stats);
    let engine = SnakeEngine::new(settings.clone(), store, rng)?;

    let (command_tx, command_rx) = mpsc::unbounded_channel();

    // Blocking reads stay off the runtime.
    let stdin_tx = command_tx.clone();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(command) => {
                    if stdin_tx.send(command).is_err() {
                        return;
                    }
                }
                Err(e) => log!("{}", e),
            }
        }
        log!("Input closed");
        let _ = stdin_tx.send(EngineCommand::Shutdown);
    });

    let signal_tx = command_tx;
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log!("Shutdown signal received");
            let _ = signal_tx.send(EngineCommand::Shutdown);
        }
    });

    log!(
        "Commands: 'player|bot up|down|left|right', 'pause', 'resume', 'toggle', \
         'restart', 'reset-stats', 'quit'"
    );

    let ticker = IntervalTicker::new(settings.tick_interval());
    let engine = SnakeSession::run(engine, ticker, command_rx, ConsoleObserver::new()).await;

    let board = engine.score_board();
    log!(
        "Final stats: high score {}, player {}W/{}L, bot {}W/{}L",
        board.high_score,
        board.tally.player_wins,
        board.tally.player_losses,
        board.tally.bot_wins,
        board.tally.bot_losses
    );

    Ok(())
}
