//! Interactive terminal referee.
//!
//! Reads one move per line. `new game`, `restart` or `reset` starts over;
//! `quit`, `exit` or `bye` leaves.

use std::io::{self, BufRead, Write};

use clap::Parser;
use log::info;

use rps_plus::{Game, GameConfig, GameRng, Referee};

#[derive(Parser, Debug)]
#[command(name = "referee", about = "Play rock, paper, scissors, bomb against the bot")]
struct Args {
    /// Seed for a reproducible opponent (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, default_value_t = rps_plus::MAX_ROUNDS)]
    rounds: u32,

    /// Chance the bot spends its bomb on an eligible round
    #[arg(long, default_value_t = rps_plus::core::BOT_BOMB_PROBABILITY)]
    bomb_chance: f64,

    /// Print the game snapshot as JSON after each reply
    #[arg(long)]
    json: bool,
}

enum Command<'a> {
    Reset,
    Quit,
    Move(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(match trimmed.to_lowercase().as_str() {
        "new game" | "restart" | "reset" => Command::Reset,
        "quit" | "exit" | "bye" => Command::Quit,
        _ => Command::Move(trimmed),
    })
}

fn print_snapshot(game: &Game, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "{}", serde_json::to_string(&game.snapshot())?)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = GameConfig::new()
        .with_max_rounds(args.rounds)
        .with_bot_bomb_probability(args.bomb_chance);
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!("starting referee with seed {}", rng.seed());

    let mut game = Game::new(config, rng)?;
    let referee = Referee::new();

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    writeln!(out, "\n{}", referee.welcome(game.config().max_rounds))?;
    if args.json {
        print_snapshot(&game, &mut out)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let reply = match parse_command(&line) {
            None => continue,
            Some(Command::Quit) => {
                writeln!(out, "\n{}", referee.farewell())?;
                break;
            }
            Some(Command::Reset) => {
                game.reset();
                format!("\n{}", referee.reset(game.config().max_rounds))
            }
            Some(Command::Move(raw)) => referee.respond(&mut game, raw),
        };

        writeln!(out, "{}", reply)?;
        if args.json {
            print_snapshot(&game, &mut out)?;
        }
    }

    Ok(())
}
