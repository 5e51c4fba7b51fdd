use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;

use plysearch::agents::{Agent, RandomAgent};
use plysearch::game::{Maze, Outcome};
use plysearch::logging;
use plysearch::search::Position;

const LAYOUT: &str = r#"
    %%%%%%%%%%%%%%%%%%%%
    %o...%........%....%
    %.%%.%.%%%%%%.%.%%.%
    %.%..............%.%
    %.%.%%.%%  %%.%%.%.%
    %......%G  G%......%
    %.%.%%.%%%%%%.%.%%.%
    %.%..............%.%
    %.%%.%.%%%%%%.%.%%.%
    %....%...P....%...o%
    %%%%%%%%%%%%%%%%%%%%"#;

#[derive(Parser)]
#[command(
    name = "plysearch simulator",
    about = "Play games of pacman against random ghosts."
)]
struct Opts {
    /// Layout file, a builtin maze is used if missing.
    #[arg(long)]
    layout: Option<PathBuf>,
    #[arg(short, long, default_value_t = 1)]
    game_count: usize,
    /// Games that last longer are aborted and counted as lost.
    #[arg(long, default_value_t = 500)]
    max_turns: usize,
    #[arg(short, long)]
    verbose: bool,
    /// Configuration of pacman.
    #[arg(default_value_t)]
    agent: Agent,
}

fn main() {
    logging();

    if let Err(e) = run(Opts::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(opts: Opts) -> plysearch::Result<()> {
    let Opts {
        layout,
        game_count,
        max_turns,
        verbose,
        agent,
    } = opts;

    let layout = match layout {
        Some(path) => std::fs::read_to_string(path)?,
        None => LAYOUT.to_string(),
    };
    let maze = Maze::parse(&layout)?;
    info!("agent {agent}");

    let start = Instant::now();
    let mut wins = 0;
    let mut total = 0.0;

    for i in 0..game_count {
        let (outcome, score) = play_game(&agent, maze.clone(), max_turns, verbose)?;
        let result = match outcome {
            Outcome::Won => {
                wins += 1;
                "Won".bright_green().to_string()
            }
            Outcome::Lost => "Lost".bright_red().to_string(),
            Outcome::None => "Aborted".bright_yellow().to_string(),
        };
        total += score;
        println!(
            "{}: {} {result} score={score} {}ms",
            "Finish Game".bright_green(),
            i,
            start.elapsed().as_millis()
        );
    }

    println!(
        "Result: {}/{} avg score {:.1}",
        wins,
        game_count,
        total / game_count.max(1) as f64
    );
    Ok(())
}

fn play_game(
    agent: &Agent,
    mut maze: Maze,
    max_turns: usize,
    verbose: bool,
) -> plysearch::Result<(Outcome, f64)> {
    if verbose {
        println!("init: {maze:?}");
    }

    for turn in 0..max_turns {
        let response = agent.step(&maze)?;
        maze.step(0, response.r#move);

        for ghost in 1..maze.num_agents() {
            if maze.is_terminal() {
                break;
            }
            let dir = RandomAgent.choose(&maze, ghost)?;
            maze.step(ghost, dir);
        }

        if verbose {
            println!("{turn}: {:?} {maze:?}", response.r#move);
        }

        if maze.is_terminal() {
            println!("game: {:?} after {} turns", maze.outcome(), turn + 1);
            break;
        }
    }
    Ok((maze.outcome(), maze.score))
}
