use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use plysearch::agents::Agent;
use plysearch::env::MoveRequest;
use plysearch::game::Maze;
use plysearch::logging;

#[derive(Parser)]
#[command(name = "plysearch move", about = "Choose a move for a single position.")]
struct Opts {
    /// Default configuration.
    #[arg(long, default_value_t)]
    config: Agent,
    /// JSON move request.
    #[arg(value_parser = parse_request, required_unless_present = "file")]
    request: Option<MoveRequest>,
    /// Read the JSON move request from a file.
    #[arg(long, conflicts_with = "request")]
    file: Option<PathBuf>,
}

fn parse_request(s: &str) -> serde_json::Result<MoveRequest> {
    serde_json::from_str(s)
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
        config,
        request,
        file,
    } = opts;

    let request = match (request, file) {
        (Some(request), _) => request,
        (None, Some(file)) => serde_json::from_str(&std::fs::read_to_string(file)?)?,
        (None, None) => unreachable!("clap requires a request or a file"),
    };

    let maze = Maze::from_request(&request)?;
    info!("{maze:?}");

    let agent = request.config.unwrap_or(config);
    agent.validate()?;
    info!("agent {agent}");

    let step = agent.step(&maze)?;
    info!("Step: {step:?}");
    println!("{}", serde_json::to_string(&step)?);
    Ok(())
}
