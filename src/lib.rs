//! Hierarchical community detection by iterative edge removal.
//!
//! [`girvan_newman`](sequence::girvan_newman) repeatedly removes the edges of maximal
//! [betweenness](ranking::EdgeBetweenness) (or any other [ranking](ranking::EdgeRanking)) from
//! a private copy of a graph and lazily reports each finer partition into weakly connected
//! components.

pub mod errors;
pub mod graph;
pub mod ranking;
pub mod sequence;

pub mod prelude {
    pub use super::errors::*;
    pub use super::graph::*;
    pub use super::ranking::*;
    pub use super::sequence::*;
}

#[cfg(test)]
mod testing;
