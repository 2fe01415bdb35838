pub mod connectivity;
pub mod edge;
pub mod labeled;
pub mod partition;
pub mod traversal;

pub type Node = u32;
pub type NumNodes = Node;
pub type NumEdges = u64;
pub type Weight = f64;

/// Weight assumed for edges inserted without an explicit weight
pub const DEFAULT_WEIGHT: Weight = 1.0;

use std::ops::Range;

pub use connectivity::*;
pub use edge::*;
pub use labeled::*;
pub use partition::*;
pub use traversal::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum GraphKind {
    Undirected,
    Directed,
}

/// Provides getters pertaining to the size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all node ids. In contrast to a borrowing iterator, the range
    /// does not borrow self and hence may be used where a mutable reference of self is needed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns true if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph, including self-loops. An undirected edge
    /// is counted once.
    fn number_of_edges(&self) -> NumEdges;
}

/// Neighborhoods of the underlying undirected skeleton, i.e. edge directions are ignored.
/// Used to decide weak connectivity.
pub trait WeakAdjacency: GraphNodeOrder {
    /// Returns every node joined to `u` by an edge in either direction. Nodes may be
    /// reported more than once and `u` itself is reported if it carries a self-loop.
    /// ** Panics if u >= n **
    fn weak_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;
}
