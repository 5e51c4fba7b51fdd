use rand::rngs::SmallRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use super::heuristic::{closest, manhattan};
use crate::env::Direction;
use crate::game::{Cell, Maze};
use crate::search::Position;
use crate::util::max_value;
use crate::{Error, Result};

/// Looks a single move ahead without modelling the ghosts.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ReflexAgent;

impl ReflexAgent {
    /// Rates a move of pacman by the position it leads to.
    pub fn evaluate(maze: &Maze, action: Direction) -> f64 {
        let next = maze.successor(0, action);

        let ghost = closest(next.ghosts.iter().map(|g| (g.pos - next.pacman).euclidean()));
        if next.is_lose() || ghost.is_some_and(|d| d < 1.0) {
            return f64::NEG_INFINITY;
        }
        if maze.grid[next.pacman] == Cell::Food {
            return f64::INFINITY;
        }

        match closest(next.food().map(|p| manhattan(p, next.pacman))) {
            Some(distance) => 1.0 / distance,
            None => 0.0,
        }
    }

    /// Chooses randomly between the best rated moves.
    pub fn step(&self, maze: &Maze) -> Result<Direction> {
        let moves = maze.legal_actions(0);
        let values = moves
            .iter()
            .map(|&d| Self::evaluate(maze, d))
            .collect::<Vec<_>>();
        let best = max_value(values.iter().copied()).ok_or(Error::NoDecision)?;

        let mut rng = SmallRng::from_entropy();
        moves
            .into_iter()
            .zip(values)
            .filter(|&(_, v)| v == best)
            .map(|(d, _)| d)
            .choose(&mut rng)
            .ok_or(Error::NoDecision)
    }
}
