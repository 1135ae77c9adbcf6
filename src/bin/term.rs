//! Terminal front end
//!
//! Prints the board after every move and reads human moves as `row col`.
//! `u` takes back the last exchange, `q` quits.

use std::io::{self, BufRead, Write};

use gomoku::{AIEngine, AppConfig, Game, GameMode, GameOutcome, MoveResult, Stone};
use tracing_subscriber::EnvFilter;

type BoxResult<T> = Result<T, Box<dyn std::error::Error>>;

enum Command {
    Play(i32, i32),
    Undo,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    match line {
        "q" | "quit" => return Some(Command::Quit),
        "u" | "undo" => return Some(Command::Undo),
        _ => {}
    }

    let mut parts = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Play(row, col))
}

fn prompt(input: &mut impl BufRead, text: &str) -> BoxResult<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn choose_mode(input: &mut impl BufRead) -> BoxResult<Option<GameMode>> {
    println!("1) Human vs AI");
    println!("2) AI vs AI");
    println!("3) Human vs Human");
    loop {
        let Some(choice) = prompt(input, "Mode: ")? else {
            return Ok(None);
        };
        let mode = match choice.as_str() {
            "1" => {
                let Some(color) = prompt(input, "Play as (b)lack or (w)hite? ")? else {
                    return Ok(None);
                };
                let human = if color.starts_with(['w', 'W']) { Stone::White } else { Stone::Black };
                GameMode::HumanVsAi { human }
            }
            "2" => GameMode::AiVsAi,
            "3" => GameMode::HumanVsHuman,
            _ => {
                println!("Please enter 1, 2 or 3");
                continue;
            }
        };
        return Ok(Some(mode));
    }
}

fn report(result: &MoveResult, stone: Stone) {
    if let Some(pos) = result.best_move {
        println!(
            "{} plays {pos}  [{:?}, score {}, {} nodes, {} cutoffs, {}ms]",
            stone.name(),
            result.search_type,
            result.score,
            result.nodes,
            result.cutoffs,
            result.time_ms
        );
    }
}

fn main() -> BoxResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load_from_env()?;
    let search = config.search;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let Some(mode) = choose_mode(&mut input)? else {
        return Ok(());
    };
    tracing::info!(mode = %mode.label(), "new game");

    let mut game = Game::new(search.board_size, search.win_length);

    while !game.is_over() {
        println!("\n{}", game.board());
        let turn = game.current_turn();

        if mode.is_ai(turn) {
            let mut engine = AIEngine::new(search.for_stone(turn))?;
            let result = engine.get_move_with_stats(game.board());
            report(&result, turn);
            let Some(pos) = result.best_move else {
                println!("No move available");
                break;
            };
            game.play(pos)?;
            continue;
        }

        let Some(line) = prompt(&mut input, &format!("{} ({}) row col: ", turn.name(), turn.symbol()))? else {
            return Ok(());
        };
        match parse_command(&line) {
            Some(Command::Quit) => return Ok(()),
            Some(Command::Undo) => {
                let count = if matches!(mode, GameMode::HumanVsAi { .. }) { 2 } else { 1 };
                game.undo(count);
            }
            Some(Command::Play(row, col)) => {
                if let Err(e) = game.checked_pos(row, col).and_then(|pos| game.play(pos)) {
                    println!("Invalid move: {e}");
                }
            }
            None => println!("Enter a move as `row col`, `u` to undo or `q` to quit"),
        }
    }

    println!("\n{}", game.board());
    match game.outcome() {
        Some(GameOutcome::Win { winner, .. }) => println!("{} wins!", winner.name()),
        Some(GameOutcome::Draw) => println!("Draw."),
        None => {}
    }
    Ok(())
}
