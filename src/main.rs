// CLI Helltaker puzzle solver.
// Modes: solve (default) finds and replays a move sequence, play is an
// interactive ratatui session, graph exports the explored state graph.
// Tiles: '#' wall, '.' floor, 'H' Helltaker, 'R' rock, 'U' undead, 'G' girl,
// 'K' key, 'L' lock, 'C' code under a rock.

mod console_interface;
mod core;
mod level_loader;
mod models;
mod search;
mod solution;
mod state_graph;
#[cfg(test)]
mod test;

use std::io::Write;
use std::path::Path;

use crate::console_interface::ConsoleInput::*;
use crate::console_interface::{
    cleanup_terminal, handle_input, render_game, render_level_to_string, setup_terminal,
};
use crate::core::{step, Direction, GameUpdate, Level};
use crate::level_loader::{load_level, parse_level};
use crate::models::GameRenderState;
use crate::search::search_with_graph;
use crate::solution::format_solution;
use crate::state_graph::{get_graph_info, get_json_data, write_dot};

// A small built-in level exercising a rock push and a spike cell.
const DEMO_LEVEL: &str = "
6

grid
######
#H.R.#
#....#
######

spikes
......
......
..s...
......

objectives
......
......
....O.
......
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mode = std::env::args().nth(1).unwrap_or("solve".to_string());
    let level_path = std::env::args().nth(2);

    let (level, level_name) = match &level_path {
        Some(path) => (load_level(Path::new(path))?, level_stem(path)),
        None => (parse_level(DEMO_LEVEL)?, "demo".to_string()),
    };

    match mode.as_str() {
        "solve" => run_solve(&level)?,
        "play" => run_interactive(level)?,
        "graph" => run_graph(&level, &level_name)?,
        _ => {
            eprintln!(
                "Unknown mode: {}. Use 'solve', 'play' or 'graph'. Defaulting to solve.",
                mode
            );
            run_solve(&level)?;
        }
    }

    Ok(())
}

fn level_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or("level".to_string())
}

fn run_solve(level: &Level) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", render_level_to_string(level));

    let (solution, graph, _initial_id) = search_with_graph(level);
    println!("{}", get_graph_info(&graph));

    match solution {
        Some(moves) => {
            replay(level, &moves)?;
            println!("Solution: {}", format_solution(&moves));
        }
        None => println!("No solution within the move budget."),
    }

    Ok(())
}

/// Re-applies a found solution from the initial state, printing each board.
fn replay(level: &Level, moves: &[Direction]) -> Result<(), Box<dyn std::error::Error>> {
    let mut current = level.clone();
    for &direction in moves {
        match step(&current, crate::core::UserAction::Move(direction)) {
            GameUpdate::NextState(next, _) => {
                println!("{}", render_level_to_string(&next));
                current = next;
            }
            GameUpdate::Illegal(reason) => {
                return Err(format!("solution replay failed on {:?}: {}", direction, reason).into());
            }
        }
    }
    Ok(())
}

fn run_graph(level: &Level, level_name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let (solution, graph, initial_id) = search_with_graph(level);
    println!("{}", get_graph_info(&graph));
    match solution {
        Some(moves) => println!("Solution: {}", format_solution(&moves)),
        None => println!("No solution within the move budget."),
    }

    std::fs::create_dir_all("exports")?;

    let dot_path = format!("exports/{}.dot", level_name);
    let mut dot_file = std::fs::File::create(&dot_path)?;
    dot_file.write_all(write_dot(&graph, initial_id, level_name).as_bytes())?;
    println!("State graph exported to {}", dot_path);

    let json_path = format!("exports/{}.json", level_name);
    let mut json_file = std::fs::File::create(&json_path)?;
    json_file.write_all(get_json_data(&graph).as_bytes())?;
    println!("State graph exported to {}", json_path);

    Ok(())
}

fn run_interactive(level: Level) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = setup_terminal()?;
    let mut game_state = level;

    let first_render = GameRenderState {
        won: game_state.is_goal(),
        out_of_moves: false,
        game: game_state.clone(),
        error: None,
        last_change: None,
    };
    render_game(&mut terminal, &first_render)?;

    loop {
        match handle_input() {
            Ok(Quit) => break,
            Ok(UserAction(user_action)) => {
                let game_update = step(&game_state, user_action);
                let mut change = None;
                let mut error = None;
                match game_update {
                    GameUpdate::NextState(new_state, change_type) => {
                        game_state = new_state;
                        change = Some(change_type);
                    }
                    GameUpdate::Illegal(reason) => {
                        error = Some(reason);
                    }
                }

                let to_render = GameRenderState {
                    won: game_state.is_goal(),
                    out_of_moves: game_state.moves_left <= 0 && !game_state.is_goal(),
                    game: game_state.clone(),
                    error,
                    last_change: change,
                };
                render_game(&mut terminal, &to_render)?;

                if to_render.won || to_render.out_of_moves {
                    // Keep showing the final screen until the user inputs
                    loop {
                        match handle_input() {
                            Ok(Timeout) => {}
                            Ok(_) => break,
                            Err(_) => {
                                println!("error reading input");
                                break;
                            }
                        }
                    }
                    break;
                }
            }
            Ok(_) => {
                // No input, continue polling
            }
            Err(_) => {
                println!("error reading input");
                break;
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
