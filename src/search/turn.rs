//! Turn order of the agents.

use super::Position;

/// Agent that moves at the given ply.
pub fn agent_index(ply: usize, num_agents: usize) -> usize {
    ply % num_agents
}

/// If the search has to evaluate instead of expanding.
/// This is the case for terminal positions or after `depth` full rounds.
pub fn is_cutoff<P: Position>(position: &P, ply: usize, depth: usize, num_agents: usize) -> bool {
    position.is_terminal() || ply >= depth * num_agents
}
