use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use zapador::{Coord, Coord2, Game, MoveOutcome, PlayerAction, snapshot, view};

#[derive(Parser, Debug)]
#[command(about = "Square-board mine-detection puzzle")]
struct Args {
    /// Board size (the board is size x size)
    #[arg(long, default_value_t = 9)]
    size: Coord,

    /// Resume a previously saved game
    #[arg(long)]
    load: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(PlayerAction, Coord2),
    Save(PathBuf),
    Load(PathBuf),
    Quit,
}

/// Parses one input line. Coordinates are 1-based on the prompt and
/// converted to the engine's 0-based positions here.
fn parse_command(line: &str) -> Option<Command> {
    let mut tokens = line.split_whitespace();

    let command = match tokens.next()? {
        "q" | "quit" => Command::Quit,
        "save" => Command::Save(PathBuf::from(tokens.next()?)),
        "load" => Command::Load(PathBuf::from(tokens.next()?)),
        action @ ("r" | "f") => {
            let row: Coord = tokens.next()?.parse().ok()?;
            let col: Coord = tokens.next()?.parse().ok()?;
            let coords = (row.checked_sub(1)?, col.checked_sub(1)?);
            let action = if action == "r" {
                PlayerAction::Reveal
            } else {
                PlayerAction::Flag
            };
            Command::Move(action, coords)
        }
        _ => return None,
    };

    if tokens.next().is_some() {
        return None;
    }
    Some(command)
}

fn prompt() -> io::Result<()> {
    println!("(save <file>, load <file>, quit)");
    print!("move: r <row> <col> to reveal, f <row> <col> to flag> ");
    io::stdout().flush()
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = match args.load {
        Some(path) => match snapshot::load_from_path(&path) {
            Ok(game) => game,
            Err(err) => {
                eprintln!("could not resume {}: {}", path.display(), err);
                return Ok(());
            }
        },
        None => Game::new(args.size),
    };

    let mut lines = io::stdin().lock().lines();
    loop {
        println!("{}", view::render(&game));
        prompt()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        let Some(command) = parse_command(&line) else {
            println!("input unparsable or out of bounds");
            continue;
        };

        match command {
            Command::Quit => return Ok(()),
            Command::Save(path) => match snapshot::save_to_path(&game, &path) {
                Ok(()) => println!("game saved!"),
                Err(err) => println!("could not save: {}", err),
            },
            Command::Load(path) => match snapshot::load_from_path(&path) {
                Ok(loaded) => game = loaded,
                Err(err) => println!("could not load: {}", err),
            },
            Command::Move(action, coords) => match game.apply_move(coords, action) {
                Ok(MoveOutcome::Won) => {
                    println!("{}", view::render(&game));
                    println!("You are a winner!!!");
                    return Ok(());
                }
                Ok(MoveOutcome::Lost) => {
                    println!("{}", view::render(&game));
                    println!("You are a loser!!");
                    return Ok(());
                }
                Ok(_) => {}
                Err(err) => println!("{}", err),
            },
        }
    }
}
