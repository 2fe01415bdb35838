use crate::graph::Node;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input graph cannot be decomposed (no nodes, unknown endpoints, bad weights)
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A ranking produced a score mapping the driver cannot consume
    #[error("invalid ranking result: {0}")]
    InvalidRankingResult(String),

    /// Internal invariant violation: the edge to be removed does not exist
    #[error("edge ({u}, {v}) not found")]
    EdgeNotFound { u: Node, v: Node },

    /// A ranking function reported a failure of its own
    #[error("ranking failed: {0}")]
    RankingFailed(String),
}

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: std::error::Error> {
    fn is_correct(&self) -> std::result::Result<(), E>;
}
