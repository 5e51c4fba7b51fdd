use thiserror::Error;

/// Errors of the tree search and the surrounding game and agent layers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("search depth must be at least one round")]
    InvalidDepth,

    #[error("agent {agent} has no legal actions at ply {ply} of a running game")]
    NoLegalActions { agent: usize, ply: usize },

    #[error("heuristic returned {value} at ply {ply}")]
    NonFiniteEvaluation { value: f64, ply: usize },

    #[error("the game is already over, there is no action to choose")]
    NoDecision,

    #[error("invalid layout in line {line}: expected {expected} cells, got {got}")]
    InvalidLayout {
        line: usize,
        expected: usize,
        got: usize,
    },

    #[error("layout has no pacman")]
    MissingPacman,

    #[error("layout has more than one pacman")]
    MultiplePacman,

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
