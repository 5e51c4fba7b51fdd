use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use super::MazeHeuristic;
use crate::env::MoveResponse;
use crate::game::Maze;
use crate::search::{self, Heuristic, Policy, Position, SearchResult};
use crate::{Error, Result};

/// Chooses the actions of agent 0 with a depth limited tree search.
#[derive(Debug, Clone)]
pub struct SearchAgent<H> {
    policy: Policy,
    depth: usize,
    heuristic: H,
}

impl<H> SearchAgent<H> {
    /// The depth is counted in rounds and has to be at least one.
    pub fn new(policy: Policy, depth: usize, heuristic: H) -> Result<Self> {
        if depth == 0 {
            return Err(Error::InvalidDepth);
        }
        Ok(Self {
            policy,
            depth,
            heuristic,
        })
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Runs the search from `position` and returns the root result.
    pub fn search<P>(&self, position: &P) -> Result<SearchResult<P::Action>>
    where
        P: Position,
        H: Heuristic<P>,
    {
        let start = Instant::now();
        let result = search::search(self.policy, position, self.depth, &self.heuristic)?;
        debug!(
            "{:?} depth={} {}ms: {:?} value={} nodes={}",
            self.policy,
            self.depth,
            start.elapsed().as_millis(),
            result.action,
            result.value,
            result.nodes
        );
        Ok(result)
    }

    /// Returns the best action of agent 0.
    pub fn choose_action<P>(&self, position: &P) -> Result<P::Action>
    where
        P: Position,
        H: Heuristic<P>,
    {
        self.search(position)?.action.ok_or(Error::NoDecision)
    }
}

/// Configuration of the tree search agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    /// Search depth in rounds.
    pub depth: usize,
    pub heuristic: MazeHeuristic,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            heuristic: MazeHeuristic::default(),
        }
    }
}

impl TreeConfig {
    pub fn agent(&self, policy: Policy) -> Result<SearchAgent<MazeHeuristic>> {
        SearchAgent::new(policy, self.depth, self.heuristic.clone())
    }

    pub fn step(&self, policy: Policy, maze: &Maze) -> Result<MoveResponse> {
        let result = self.agent(policy)?.search(maze)?;
        let action = result.action.ok_or(Error::NoDecision)?;
        Ok(MoveResponse::valued(action, result.value))
    }
}
