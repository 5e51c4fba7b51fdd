use super::walk::walk;
use super::{Heuristic, Policy, Position, SearchResult};
use crate::Result;

/// Minimax tree search with multiple agents.
/// The agent with id 0 is maximizing, all others are minimizing.
///
/// Searches `depth` full rounds. Of actions with equal values the first one
/// is chosen.
pub fn minimax<P, H>(position: &P, depth: usize, heuristic: &H) -> Result<SearchResult<P::Action>>
where
    P: Position,
    H: Heuristic<P> + ?Sized,
{
    walk(Policy::Minimax, position, depth, heuristic)
}

#[cfg(test)]
mod test {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::game::tree::{branch, leaf, lose, win, TreeGame};
    use crate::search::Score;
    use crate::Error;

    #[test]
    fn minimax_two_agents() {
        let root = branch([
            branch([leaf(3.0), leaf(12.0), leaf(8.0)]),
            branch([leaf(2.0), leaf(4.0), leaf(6.0)]),
            branch([leaf(14.0), leaf(5.0), leaf(2.0)]),
        ]);
        let result = minimax(&TreeGame::new(&root, 2), 1, &Score).unwrap();
        assert_eq!(result.action, Some(0));
        assert_eq!(result.value, 3.0);
        assert_eq!(result.nodes, root.size());
    }

    #[test]
    fn minimax_ties_keep_first() {
        let root = branch([leaf(4.0), leaf(4.0), leaf(1.0)]);
        let result = minimax(&TreeGame::new(&root, 1), 1, &Score).unwrap();
        assert_eq!(result.action, Some(0));
        assert_eq!(result.value, 4.0);

        let root = branch([leaf(1.0), leaf(4.0), leaf(4.0)]);
        let result = minimax(&TreeGame::new(&root, 1), 1, &Score).unwrap();
        assert_eq!(result.action, Some(1));

        // all losing: still the first action
        let root = branch([lose(f64::NEG_INFINITY), lose(f64::NEG_INFINITY)]);
        let result = minimax(&TreeGame::new(&root, 1), 1, &Score).unwrap();
        assert_eq!(result.action, Some(0));
        assert_eq!(result.value, f64::NEG_INFINITY);
    }

    #[test]
    fn minimax_terminal_subtrees() {
        // winning early beats the deeper subtree
        let root = branch([
            branch([leaf(5.0), leaf(7.0)]),
            win(100.0),
            branch([lose(-100.0), leaf(50.0)]),
        ]);
        let result = minimax(&TreeGame::new(&root, 2), 1, &Score).unwrap();
        assert_eq!(result.action, Some(1));
        assert_eq!(result.value, 100.0);
    }

    #[test]
    fn minimax_three_agents() {
        // 0 maximizes over the minimum of both opponents
        let root = branch([
            branch([branch([leaf(1.0), leaf(9.0)]), branch([leaf(8.0), leaf(7.0)])]),
            branch([branch([leaf(6.0), leaf(5.0)]), branch([leaf(4.0), leaf(3.0)])]),
        ]);
        let result = minimax(&TreeGame::new(&root, 3), 1, &Score).unwrap();
        assert_eq!(result.action, Some(1));
        assert_eq!(result.value, 3.0);
    }

    #[test]
    fn minimax_missing_actions() {
        let root = branch([leaf(1.0)]);
        let result = minimax(&TreeGame::new(&root, 1), 2, &Score);
        assert!(matches!(
            result,
            Err(Error::NoLegalActions { agent: 0, ply: 1 })
        ));
    }

    #[test]
    fn minimax_non_finite() {
        #[derive(Debug)]
        struct Infinite;
        impl<P: Position> Heuristic<P> for Infinite {
            fn eval(&self, _position: &P) -> f64 {
                f64::INFINITY
            }
        }

        let root = branch([leaf(1.0)]);
        let result = minimax(&TreeGame::new(&root, 1), 1, &Infinite);
        assert!(matches!(
            result,
            Err(Error::NonFiniteEvaluation { ply: 1, .. })
        ));

        // allowed for decided games
        let root = branch([win(1.0)]);
        let result = minimax(&TreeGame::new(&root, 1), 1, &Infinite).unwrap();
        assert_eq!(result.value, f64::INFINITY);
    }

    /// Endless game that records which agent is asked for its moves.
    #[derive(Debug, Clone)]
    struct Recorder {
        ply: usize,
        turns: Rc<RefCell<Vec<usize>>>,
        leafs: Rc<RefCell<Vec<usize>>>,
    }

    impl Position for Recorder {
        type Action = u8;

        fn num_agents(&self) -> usize {
            3
        }
        fn legal_actions(&self, agent: usize) -> Vec<u8> {
            self.turns.borrow_mut().push(agent);
            vec![0, 1]
        }
        fn successor(&self, agent: usize, _action: u8) -> Self {
            assert_eq!(agent, self.ply % 3);
            Recorder {
                ply: self.ply + 1,
                ..self.clone()
            }
        }
        fn is_win(&self) -> bool {
            false
        }
        fn is_lose(&self) -> bool {
            false
        }
        fn score(&self) -> f64 {
            self.leafs.borrow_mut().push(self.ply);
            self.ply as f64
        }
    }

    #[test]
    fn minimax_turn_order() {
        let game = Recorder {
            ply: 0,
            turns: Default::default(),
            leafs: Default::default(),
        };
        let result = minimax(&game, 2, &Score).unwrap();
        assert_eq!(result.action, Some(0));
        assert_eq!(result.value, 6.0);

        let turns = game.turns.borrow();
        assert_eq!(turns[..6], [0, 1, 2, 0, 1, 2]);
        // every inner node asks exactly once
        assert_eq!(turns.len(), 63);
        let leafs = game.leafs.borrow();
        assert_eq!(leafs.len(), 64);
        assert!(leafs.iter().all(|&ply| ply == 6));
        assert_eq!(result.nodes, 127);
    }
}
