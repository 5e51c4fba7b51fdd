use log::trace;

use super::turn::{agent_index, is_cutoff};
use super::{Heuristic, Policy, Position, SearchResult};
use crate::util::mean;
use crate::{Error, Result};

/// How a node combines the values of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    Maximize,
    Minimize,
    Average,
}

/// Lower and upper bound of the values that still matter to the ancestors.
#[derive(Debug, Clone, Copy)]
struct Window {
    alpha: f64,
    beta: f64,
}

impl Window {
    const FULL: Window = Window {
        alpha: f64::NEG_INFINITY,
        beta: f64::INFINITY,
    };
}

type Node<A> = (Option<A>, f64);

/// Depth first walk over the implicit game tree, shared by all policies.
struct Walk<'a, H: ?Sized> {
    heuristic: &'a H,
    policy: Policy,
    depth: usize,
    num_agents: usize,
    nodes: usize,
}

pub(super) fn walk<P, H>(
    policy: Policy,
    position: &P,
    depth: usize,
    heuristic: &H,
) -> Result<SearchResult<P::Action>>
where
    P: Position,
    H: Heuristic<P> + ?Sized,
{
    let mut walk = Walk {
        heuristic,
        policy,
        depth,
        num_agents: position.num_agents(),
        nodes: 0,
    };
    let (action, value) = walk.visit(position, 0, Window::FULL)?;
    Ok(SearchResult {
        action,
        value,
        nodes: walk.nodes,
    })
}

impl<'a, H: ?Sized> Walk<'a, H> {
    fn visit<P>(&mut self, position: &P, ply: usize, window: Window) -> Result<Node<P::Action>>
    where
        P: Position,
        H: Heuristic<P>,
    {
        self.nodes += 1;

        if is_cutoff(position, ply, self.depth, self.num_agents) {
            return Ok((None, self.leaf(position, ply)?));
        }

        let agent = agent_index(ply, self.num_agents);
        let actions = position.legal_actions(agent);
        if actions.is_empty() {
            return Err(Error::NoLegalActions { agent, ply });
        }

        match self.combine(agent) {
            Combine::Maximize => self.maximize(position, agent, ply, actions, window),
            Combine::Minimize => self.minimize(position, agent, ply, actions, window),
            Combine::Average => self.average(position, agent, ply, actions, window),
        }
    }

    fn leaf<P>(&self, position: &P, ply: usize) -> Result<f64>
    where
        P: Position,
        H: Heuristic<P>,
    {
        let value = self.heuristic.eval(position);
        // Only decided games may be rated infinitely good or bad
        if value.is_nan() || (value.is_infinite() && !position.is_terminal()) {
            return Err(Error::NonFiniteEvaluation { value, ply });
        }
        Ok(value)
    }

    fn combine(&self, agent: usize) -> Combine {
        match (agent, self.policy) {
            (0, _) => Combine::Maximize,
            (_, Policy::Expectimax) => Combine::Average,
            _ => Combine::Minimize,
        }
    }

    fn pruning(&self) -> bool {
        self.policy == Policy::AlphaBeta
    }

    fn maximize<P>(
        &mut self,
        position: &P,
        agent: usize,
        ply: usize,
        actions: Vec<P::Action>,
        mut window: Window,
    ) -> Result<Node<P::Action>>
    where
        P: Position,
        H: Heuristic<P>,
    {
        let mut best = None;
        let mut v = f64::NEG_INFINITY;
        for action in actions {
            let child = position.successor(agent, action);
            let (_, value) = self.visit(&child, ply + 1, window)?;
            // ties keep the first action
            if best.is_none() || value > v {
                best = Some(action);
                v = value;
            }
            if self.pruning() {
                if v > window.beta {
                    trace!("cut max at ply {ply}: {v} > {}", window.beta);
                    return Ok((None, v));
                }
                window.alpha = window.alpha.max(v);
            }
        }
        Ok((best, v))
    }

    fn minimize<P>(
        &mut self,
        position: &P,
        agent: usize,
        ply: usize,
        actions: Vec<P::Action>,
        mut window: Window,
    ) -> Result<Node<P::Action>>
    where
        P: Position,
        H: Heuristic<P>,
    {
        let mut best = None;
        let mut v = f64::INFINITY;
        for action in actions {
            let child = position.successor(agent, action);
            let (_, value) = self.visit(&child, ply + 1, window)?;
            if best.is_none() || value < v {
                best = Some(action);
                v = value;
            }
            if self.pruning() {
                if v < window.alpha {
                    trace!("cut min at ply {ply}: {v} < {}", window.alpha);
                    return Ok((None, v));
                }
                window.beta = window.beta.min(v);
            }
        }
        Ok((best, v))
    }

    fn average<P>(
        &mut self,
        position: &P,
        agent: usize,
        ply: usize,
        actions: Vec<P::Action>,
        window: Window,
    ) -> Result<Node<P::Action>>
    where
        P: Position,
        H: Heuristic<P>,
    {
        let values = actions
            .into_iter()
            .map(|action| {
                let child = position.successor(agent, action);
                self.visit(&child, ply + 1, window).map(|(_, value)| value)
            })
            .collect::<Result<Vec<_>>>()?;
        let value = mean(&values);
        // a possible win and a possible loss have no mean, the loss outweighs
        if value.is_nan() {
            trace!("undefined mean at ply {ply}, counted as a loss");
            return Ok((None, f64::NEG_INFINITY));
        }
        Ok((None, value))
    }
}
