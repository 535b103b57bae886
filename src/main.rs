use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Stdin, Write};
use std::time::Duration;

use connect4_3d::{
    board::Player,
    game::{Game, GameState},
    solver::{moves_within_horizon, Solver},
    AI_DEPTH,
};

mod display;
use display::*;

/// Connect 4 on a 4x4x4 board against a minimax AI
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Starting position as column moves, two digits (x then y, 1-4) per move
    #[arg(long)]
    moves: Option<String>,

    /// Pause before each AI move, in milliseconds
    #[arg(long, default_value_t = 400)]
    delay_ms: u64,
}

fn ask_yes_no(stdin: &Stdin, question: &str, default: bool) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{} y/n [{}]: ", question, if default { "y" } else { "n" });
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.trim().to_lowercase().chars().next() {
            None => return Ok(default),
            Some(_letter @ 'y') => return Ok(true),
            Some(_letter @ 'n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_ai_control(stdin: &Stdin, player: Player, default: bool) -> Result<bool> {
    ask_yes_no(
        stdin,
        &format!("Is player {} AI controlled?", player.number()),
        default,
    )
}

fn parse_column(input: &str) -> Result<(usize, usize)> {
    let digits: Vec<usize> = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .ok_or_else(|| anyhow!("Invalid column: {}", input))
        })
        .collect::<Result<_>>()?;
    match digits.as_slice() {
        [x, y] => Ok((*x, *y)),
        _ => Err(anyhow!("Invalid column: {}, expected 'x y'", input)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = match &args.moves {
        Some(moves) => Game::from_moves(moves)?,
        None => Game::new(),
    };
    let mut solver = Solver::new();

    let stdin = stdin();

    println!("Welcome to 3D Connect 4\n");

    // by default the human moves first and the AI replies
    let ai_players = (
        ask_ai_control(&stdin, Player::One, false)?,
        ask_ai_control(&stdin, Player::Two, true)?,
    );
    info!("AI control: {:?}", ai_players);

    // game loop
    loop {
        display(&game)?;

        match game.state {
            GameState::Playing => {
                let player = game.to_move();
                let ai_turn = match player {
                    Player::One => ai_players.0,
                    Player::Two => ai_players.1,
                };

                // AI player
                if ai_turn {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                    spinner.set_message("AI is thinking...");
                    spinner.enable_steady_tick(100);

                    std::thread::sleep(Duration::from_millis(args.delay_ms));
                    let result = game.play_ai(&mut solver)?;
                    spinner.finish_and_clear();

                    match result {
                        Some((score, position)) => {
                            match score.cmp(&0) {
                                Ordering::Greater => println!(
                                    "Player {} can force a win within {} of their moves.",
                                    player.number(),
                                    moves_within_horizon(AI_DEPTH, true)
                                ),
                                Ordering::Less => println!(
                                    "Player {} can force a win within {} of their moves.",
                                    player.other().number(),
                                    moves_within_horizon(AI_DEPTH, false)
                                ),
                                Ordering::Equal => {}
                            }
                            println!(
                                "Player {} plays column ({}, {}), landing at z={}",
                                player.number(),
                                position.x + 1,
                                position.y + 1,
                                position.z
                            );
                        }
                        None => {
                            println!("AI found no move to play");
                            if !ask_yes_no(&stdin, "Play again?", true)? {
                                break;
                            }
                            game.reset();
                        }
                    }

                // human player
                } else {
                    print!("Player {} move (x y, 'hint', 'reset' or 'quit') > ", player.number());
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim() {
                        "quit" => break,
                        "reset" => {
                            game.reset();
                            println!("New game");
                            continue;
                        }
                        "hint" => {
                            for (position, score) in
                                solver.analyse(game.board(), player, AI_DEPTH)
                            {
                                println!(
                                    "column ({}, {}): {}",
                                    position.x + 1,
                                    position.y + 1,
                                    score
                                );
                            }
                            continue;
                        }
                        input => match parse_column(input) {
                            Err(err) => {
                                println!("{}", err);
                                continue;
                            }
                            Ok((x, y)) => {
                                if let Err(err) = game.play_column_checked(x, y) {
                                    println!("{}", err);
                                    // try the move again
                                    continue;
                                }
                            }
                        },
                    }
                }
            }

            // end states
            GameState::Won(winner) => {
                println!("Player {} wins!", winner.number());
                if !ask_yes_no(&stdin, "Play again?", true)? {
                    break;
                }
                game.reset();
            }
            GameState::Draw => {
                println!("Draw!");
                if !ask_yes_no(&stdin, "Play again?", true)? {
                    break;
                }
                game.reset();
            }
        }
    }
    Ok(())
}
