use super::walk::walk;
use super::{Heuristic, Policy, Position, SearchResult};
use crate::Result;

/// Expectimax tree search.
///
/// The agent with id 0 maximizes, all other agents are expected to choose
/// uniformly at random from their legal actions. Their nodes are rated with
/// the mean of their children and do not report an action.
pub fn expectimax<P, H>(
    position: &P,
    depth: usize,
    heuristic: &H,
) -> Result<SearchResult<P::Action>>
where
    P: Position,
    H: Heuristic<P> + ?Sized,
{
    walk(Policy::Expectimax, position, depth, heuristic)
}
