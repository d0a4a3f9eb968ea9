use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::ProgressBar;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use connect4_minimax::config::GameConfig;
use connect4_minimax::*;

mod display;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Connect 4 against a minimax opponent", long_about = None)]
struct Args {
    /// TOML configuration file, defaults are used if it does not exist
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,
    /// Plies the computer looks ahead
    #[arg(long)]
    depth: Option<usize>,
    /// Search every branch instead of pruning with alpha-beta
    #[arg(long)]
    no_alpha_beta: bool,
    /// Let the computer play player 1
    #[arg(long)]
    ai_one: bool,
    /// Let the computer play player 2
    #[arg(long, conflicts_with = "human_two")]
    ai_two: bool,
    /// Let a human play player 2
    #[arg(long)]
    human_two: bool,
    /// Shortest time a computer move takes, in milliseconds
    #[arg(long)]
    min_think_ms: Option<u64>,
    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

enum Input {
    Column(usize),
    Reset,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: LevelFilter = args
        .log_level
        .parse()
        .map_err(|_| anyhow!("unknown log level '{}'", args.log_level))?;
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|err| anyhow!("failed to install logger: {}", err))?;

    let config = load_config(&args)?;
    let mut game = Game::new(config.player_one_ai, config.player_two_ai);

    println!("Welcome to Connect 4\n");
    println!("Enter a column (1-{}) to play, 'r' to restart, 'q' to quit\n", WIDTH);

    // game loop
    loop {
        display::draw(game.board())?;

        match game.outcome() {
            GameOutcome::Ongoing => {
                let player = game.current_player();
                let column = if game.is_ai_turn() {
                    ai_move(&game, &config)?
                } else {
                    print!(
                        "{} to move > ",
                        display::colour_name(player.to_cell())
                    );
                    stdout().flush()?;
                    match read_input()? {
                        Ok(Input::Column(column)) => column,
                        Ok(Input::Reset) => {
                            game.reset();
                            continue;
                        }
                        Ok(Input::Quit) => break,
                        Err(message) => {
                            println!("{}", message);
                            continue;
                        }
                    }
                };

                if let Err(err) = game.play(column) {
                    println!("Invalid move: {}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameOutcome::Won(player) => {
                println!(
                    "Player {} ({}) wins!",
                    player.number(),
                    display::colour_name(player.to_cell())
                );
                if !ask_yes_no("Play again? y/n: ")? {
                    break;
                }
                game.reset();
            }
            GameOutcome::Drawn => {
                println!("Draw!");
                if !ask_yes_no("Play again? y/n: ")? {
                    break;
                }
                game.reset();
            }
        }
    }
    Ok(())
}

/// Reads the config file and applies command line overrides
fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&args.config)?;
    if let Some(depth) = args.depth {
        config.search.depth = depth;
    }
    if args.no_alpha_beta {
        config.search.alpha_beta = false;
    }
    if args.ai_one {
        config.player_one_ai = true;
    }
    if args.ai_two {
        config.player_two_ai = true;
    }
    if args.human_two {
        config.player_two_ai = false;
    }
    if let Some(min_think_ms) = args.min_think_ms {
        config.min_think_ms = min_think_ms;
    }
    config.validate()?;
    Ok(config)
}

/// Runs the search off the input thread, padding fast answers up to the
/// configured thinking time
fn ai_move(game: &Game, config: &GameConfig) -> Result<usize> {
    let player = game.current_player();
    let pending = game.request_ai_move(config.search)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(&format!(
        "{} is thinking...",
        display::colour_name(player.to_cell())
    ));
    spinner.enable_steady_tick(100);

    let report = loop {
        if let Some(result) = pending.try_take() {
            break result?;
        }
        thread::sleep(Duration::from_millis(10));
    };

    let elapsed = pending.elapsed();
    let min_think_time = config.min_think_time();
    if elapsed < min_think_time {
        thread::sleep(min_think_time - elapsed);
    }
    spinner.finish_and_clear();

    println!(
        "{} plays column {}",
        display::colour_name(player.to_cell()),
        report.column + 1
    );
    Ok(report.column)
}

/// Reads one line of human input; the inner error is a message for the player
fn read_input() -> Result<std::result::Result<Input, String>> {
    let mut input_str = String::new();
    if stdin().read_line(&mut input_str)? == 0 {
        // end of input
        return Ok(Ok(Input::Quit));
    }
    let input = input_str.trim();

    Ok(match input.to_lowercase().as_str() {
        "r" => Ok(Input::Reset),
        "q" => Ok(Input::Quit),
        _ => match input.parse::<usize>() {
            Ok(column @ 1..=WIDTH) => Ok(Input::Column(column - 1)),
            Ok(column) => Err(format!(
                "Column {} out of range. Columns must be between 1 and {}",
                column, WIDTH
            )),
            Err(_) => Err(format!("Invalid number: {}", input)),
        },
    })
}

fn ask_yes_no(question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin().read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
