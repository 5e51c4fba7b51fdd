//! Explicitly stored game trees.
//!
//! Every branch is a decision of the agent whose turn it is, actions are the
//! child indices.

use serde::{Deserialize, Serialize};

use crate::search::Position;

/// Node of an explicit game tree.
///
/// In json a leaf is a number, a branch an array of nodes and a terminal
/// node an object like `{"win": 500}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Running game without further moves in this tree.
    Leaf(f64),
    Branch(Vec<Node>),
    Terminal(Terminal),
}

/// Decided game with its final score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terminal {
    Win(f64),
    Lose(f64),
}

pub fn leaf(value: f64) -> Node {
    Node::Leaf(value)
}

pub fn branch(children: impl IntoIterator<Item = Node>) -> Node {
    Node::Branch(children.into_iter().collect())
}

pub fn win(value: f64) -> Node {
    Node::Terminal(Terminal::Win(value))
}

pub fn lose(value: f64) -> Node {
    Node::Terminal(Terminal::Lose(value))
}

impl Node {
    /// Number of nodes in this subtree.
    pub fn size(&self) -> usize {
        match self {
            Node::Branch(children) => 1 + children.iter().map(Node::size).sum::<usize>(),
            _ => 1,
        }
    }
}

/// Position within a borrowed game tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeGame<'a> {
    node: &'a Node,
    num_agents: usize,
}

impl<'a> TreeGame<'a> {
    pub fn new(root: &'a Node, num_agents: usize) -> TreeGame<'a> {
        assert!(num_agents > 0, "a game needs at least one agent");
        TreeGame { node: root, num_agents }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }
}

impl<'a> Position for TreeGame<'a> {
    type Action = usize;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: usize) -> Vec<usize> {
        match self.node {
            Node::Branch(children) => (0..children.len()).collect(),
            _ => Vec::new(),
        }
    }

    /// # Panics
    /// If `action` is not a child index of this node.
    fn successor(&self, _agent: usize, action: usize) -> TreeGame<'a> {
        match self.node {
            Node::Branch(children) => TreeGame {
                node: &children[action],
                num_agents: self.num_agents,
            },
            _ => panic!("no action {action} at {:?}", self.node),
        }
    }

    fn is_win(&self) -> bool {
        matches!(self.node, Node::Terminal(Terminal::Win(_)))
    }

    fn is_lose(&self) -> bool {
        matches!(self.node, Node::Terminal(Terminal::Lose(_)))
    }

    /// Leafs and terminals score their value, branches zero.
    fn score(&self) -> f64 {
        match self.node {
            Node::Leaf(value) => *value,
            Node::Terminal(Terminal::Win(value) | Terminal::Lose(value)) => *value,
            Node::Branch(_) => 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tree_json() {
        let root: Node = serde_json::from_str(r#"[[3, 12], [{"lose": -500}, 4.5], {"win": 10}]"#)
            .unwrap();
        assert_eq!(
            root,
            branch([
                branch([leaf(3.0), leaf(12.0)]),
                branch([lose(-500.0), leaf(4.5)]),
                win(10.0),
            ])
        );
        assert_eq!(root.size(), 8);
    }

    #[test]
    fn tree_position() {
        let root = branch([branch([leaf(3.0), lose(-1.0)]), win(2.0)]);
        let game = TreeGame::new(&root, 2);
        assert_eq!(game.legal_actions(0), [0, 1]);
        assert!(!game.is_terminal());
        assert_eq!(game.score(), 0.0);

        let first = game.successor(0, 0);
        assert_eq!(first.legal_actions(1), [0, 1]);
        assert_eq!(first.successor(1, 0).score(), 3.0);
        assert!(first.successor(1, 1).is_lose());
        assert!(first.successor(1, 1).legal_actions(0).is_empty());

        let second = game.successor(0, 1);
        assert!(second.is_win());
        assert!(second.is_terminal());
        assert_eq!(second.score(), 2.0);
    }
}
