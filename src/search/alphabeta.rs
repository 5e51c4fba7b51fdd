use super::walk::walk;
use super::{Heuristic, Policy, Position, SearchResult};
use crate::Result;

/// Alpha-Beta tree search.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
/// - Assumes the maximizing agent has id 0, all others are minimizing
/// - Returns the same value and action as [`super::minimax`] while skipping
///   subtrees that cannot change the decision
pub fn alphabeta<P, H>(
    position: &P,
    depth: usize,
    heuristic: &H,
) -> Result<SearchResult<P::Action>>
where
    P: Position,
    H: Heuristic<P> + ?Sized,
{
    walk(Policy::AlphaBeta, position, depth, heuristic)
}
