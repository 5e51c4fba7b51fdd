use std::fmt;
use std::str::FromStr;

mod heuristic;
pub use heuristic::*;
mod random;
pub use random::*;
mod reflex;
pub use reflex::*;
mod tree;
pub use tree::*;

use crate::env::MoveResponse;
use crate::game::Maze;
use crate::search::Policy;
use crate::{Error, Result};

/// Pacman agents, selected by their JSON configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Minimax(TreeConfig),
    AlphaBeta(TreeConfig),
    Expectimax(TreeConfig),
    Reflex(ReflexAgent),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::AlphaBeta(TreeConfig::default())
    }
}

impl Agent {
    /// Chooses the next move of pacman.
    pub fn step(&self, maze: &Maze) -> Result<MoveResponse> {
        match self {
            Agent::Minimax(config) => config.step(Policy::Minimax, maze),
            Agent::AlphaBeta(config) => config.step(Policy::AlphaBeta, maze),
            Agent::Expectimax(config) => config.step(Policy::Expectimax, maze),
            Agent::Reflex(agent) => agent.step(maze).map(MoveResponse::new),
            Agent::Random(agent) => agent.choose(maze, 0).map(MoveResponse::new),
        }
    }

    /// Rejects configurations that cannot search.
    pub fn validate(&self) -> Result<()> {
        match self {
            Agent::Minimax(config) | Agent::AlphaBeta(config) | Agent::Expectimax(config)
                if config.depth == 0 =>
            {
                Err(Error::InvalidDepth)
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for Agent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let agent: Agent = serde_json::from_str(s)?;
        agent.validate()?;
        Ok(agent)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
