//! Multi-agent game tree search.
//!
//! Agent 0 is the controlled (maximizing) agent, every other agent is an
//! opponent. Agents move one after another, a ply is a single move and a
//! round is one move of every agent. The depth of a search is counted in
//! rounds.

mod alphabeta;
pub use alphabeta::*;
mod expectimax;
pub use expectimax::*;
mod minimax;
pub use minimax::*;
pub mod turn;
mod walk;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Game state as seen by the tree search.
///
/// A position is never modified by the search, transitions produce new positions.
pub trait Position: Sized {
    type Action: Copy + PartialEq + Debug;

    /// Number of agents, at least one.
    fn num_agents(&self) -> usize;
    /// Legal actions of an agent in a deterministic order.
    /// Terminal positions have no legal actions.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;
    /// Position after `agent` executed a legal `action`.
    fn successor(&self, agent: usize, action: Self::Action) -> Self;
    fn is_win(&self) -> bool;
    fn is_lose(&self) -> bool;
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
    /// Current game score.
    fn score(&self) -> f64;
}

/// A heuristic that evaluates the game state at the leafs of a tree search.
///
/// Has to be finite for running games, wins and losses may be infinite.
pub trait Heuristic<P: Position>: Debug {
    fn eval(&self, position: &P) -> f64;
}

/// Evaluates positions by their game score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score;

impl<P: Position> Heuristic<P> for Score {
    fn eval(&self, position: &P) -> f64 {
        position.score()
    }
}

/// How the values of the opponents moves are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Opponents minimize.
    Minimax,
    /// Opponents minimize, irrelevant subtrees are pruned.
    #[default]
    AlphaBeta,
    /// Opponents choose uniformly at random.
    Expectimax,
}

/// Result of a (sub)tree search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<A> {
    /// Chosen action, `None` for leafs, pruned nodes and chance nodes.
    pub action: Option<A>,
    pub value: f64,
    /// Number of visited nodes, including the leafs.
    pub nodes: usize,
}

/// Searches `depth` rounds with the given policy.
pub fn search<P, H>(
    policy: Policy,
    position: &P,
    depth: usize,
    heuristic: &H,
) -> Result<SearchResult<P::Action>>
where
    P: Position,
    H: Heuristic<P> + ?Sized,
{
    match policy {
        Policy::Minimax => minimax(position, depth, heuristic),
        Policy::AlphaBeta => alphabeta(position, depth, heuristic),
        Policy::Expectimax => expectimax(position, depth, heuristic),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::tree::{branch, leaf, lose, win, TreeGame};

    #[test]
    fn policies_agree_without_opponents() {
        let root = branch([leaf(3.0), leaf(7.0)]);
        let game = TreeGame::new(&root, 1);
        for policy in [Policy::Minimax, Policy::AlphaBeta, Policy::Expectimax] {
            let result = search(policy, &game, 1, &Score).unwrap();
            assert_eq!(result.action, Some(1), "{policy:?}");
            assert_eq!(result.value, 7.0, "{policy:?}");
        }
    }

    #[test]
    fn depth_zero_is_a_leaf() {
        let root = branch([leaf(3.0), leaf(7.0)]);
        let game = TreeGame::new(&root, 2);
        for policy in [Policy::Minimax, Policy::AlphaBeta, Policy::Expectimax] {
            let result = search(policy, &game, 0, &Score).unwrap();
            assert_eq!(
                result,
                SearchResult {
                    action: None,
                    value: 0.0,
                    nodes: 1
                }
            );
        }
    }

    #[test]
    fn terminal_root_is_a_leaf() {
        for (root, value) in [(win(500.0), 500.0), (lose(-500.0), -500.0)] {
            let game = TreeGame::new(&root, 3);
            for policy in [Policy::Minimax, Policy::AlphaBeta, Policy::Expectimax] {
                let result = search(policy, &game, 4, &Score).unwrap();
                assert_eq!(result.action, None);
                assert_eq!(result.value, value);
                assert_eq!(result.nodes, 1);
            }
        }
    }

    #[test]
    fn policy_config() {
        assert_eq!(Policy::default(), Policy::AlphaBeta);
        let policy: Policy = serde_json::from_str(r#""expectimax""#).unwrap();
        assert_eq!(policy, Policy::Expectimax);
    }
}
