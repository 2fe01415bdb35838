use super::*;
use crate::errors::*;
use fxhash::FxHashMap;
use std::hash::Hash;

/// Labels may be any opaque, hashable identifier
pub trait Label: Clone + Eq + Hash {}
impl<T: Clone + Eq + Hash> Label for T {}

/// Weighted adjacency storage for directed or undirected graphs with arbitrary node labels.
///
/// Labels are interned into dense ids (`0..n` in insertion order) and all algorithms operate
/// on these ids. Neighborhoods keep their insertion order, also across edge removals; this
/// makes the order in which shortest paths are discovered (and hence any floating point
/// accumulation over them) reproducible.
///
/// Self-loops are stored like any other edge; they are merely filtered out by
/// [`Graph::candidate_edges`].
#[derive(Clone, Debug)]
pub struct Graph<N> {
    kind: GraphKind,
    labels: Vec<N>,
    ids: FxHashMap<N, Node>,
    // undirected: both directions are stored (a self-loop once)
    out_adj: Vec<Vec<(Node, Weight)>>,
    // only maintained for directed graphs
    in_adj: Vec<Vec<Node>>,
    number_of_edges: NumEdges,
}

impl<N> GraphNodeOrder for Graph<N> {
    fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }
}

impl<N> GraphEdgeOrder for Graph<N> {
    fn number_of_edges(&self) -> NumEdges {
        self.number_of_edges
    }
}

impl<N> WeakAdjacency for Graph<N> {
    fn weak_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_adj[u as usize]
            .iter()
            .map(|&(v, _)| v)
            .chain(self.in_adj[u as usize].iter().copied())
    }
}

impl<N: Label> Graph<N> {
    /// Creates an empty graph
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            ids: FxHashMap::default(),
            out_adj: Vec::new(),
            in_adj: Vec::new(),
            number_of_edges: 0,
        }
    }

    /// Shorthand for `Graph::new(GraphKind::Undirected)`
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Shorthand for `Graph::new(GraphKind::Directed)`
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Builds a graph from an explicit node set and an edge list. Each edge carries an optional
    /// weight (defaults to [`DEFAULT_WEIGHT`]). In contrast to [`Graph::add_edge`], endpoints
    /// are not inserted on demand: an edge referencing a node missing from `nodes` is rejected.
    ///
    /// # Example
    /// ```
    /// use divisive::prelude::*;
    /// let graph = Graph::from_edges(GraphKind::Undirected, ["a", "b"], [("a", "b", None)]).unwrap();
    /// assert_eq!(graph.number_of_edges(), 1);
    /// assert!(Graph::from_edges(GraphKind::Undirected, ["a"], [("a", "b", None)]).is_err());
    /// ```
    pub fn from_edges(
        kind: GraphKind,
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N, Option<Weight>)>,
    ) -> Result<Self> {
        let mut graph = Self::new(kind);
        for label in nodes {
            graph.add_node(label);
        }

        for (u, v, weight) in edges {
            let (Some(iu), Some(iv)) = (graph.id_of(&u), graph.id_of(&v)) else {
                return Err(Error::InvalidGraph(format!(
                    "edge endpoint is not among the {} declared nodes",
                    graph.number_of_nodes()
                )));
            };
            graph.try_add_edge(iu, iv, weight.unwrap_or(DEFAULT_WEIGHT));
        }

        Ok(graph)
    }

    /// Inserts a node (if not yet present) and returns its dense id.
    /// Dense ids are `u32`, so a graph holds fewer than `Node::MAX` nodes.
    pub fn add_node(&mut self, label: N) -> Node {
        if let Some(&id) = self.ids.get(&label) {
            return id;
        }

        debug_assert!(self.labels.len() < Node::MAX as usize);
        let id = self.labels.len() as Node;
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        id
    }

    /// Adds the edge *(u,v)* with [`DEFAULT_WEIGHT`]; missing endpoints are inserted.
    /// If the edge exists, its weight is reset.
    pub fn add_edge(&mut self, u: N, v: N) {
        self.add_weighted_edge(u, v, DEFAULT_WEIGHT);
    }

    /// Adds the edge *(u,v)* with weight `weight`; missing endpoints are inserted.
    /// If the edge exists, its weight is overwritten.
    pub fn add_weighted_edge(&mut self, u: N, v: N, weight: Weight) {
        let u = self.add_node(u);
        let v = self.add_node(v);
        self.try_add_edge(u, v, weight);
    }

    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (N, N)>) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    pub fn add_weighted_edges(&mut self, edges: impl IntoIterator<Item = (N, N, Weight)>) {
        for (u, v, w) in edges {
            self.add_weighted_edge(u, v, w);
        }
    }

    pub fn add_nodes(&mut self, nodes: impl IntoIterator<Item = N>) {
        for u in nodes {
            self.add_node(u);
        }
    }

    /// Returns the dense id of `label` or `None` if the graph does not contain it
    pub fn id_of(&self, label: &N) -> Option<Node> {
        self.ids.get(label).copied()
    }

    /// Returns a directed copy in which each undirected edge *{u,v}* is replaced by the arcs
    /// *(u,v)* and *(v,u)* of the same weight. A directed graph is copied as is.
    pub fn to_directed(&self) -> Self {
        if self.is_directed() {
            return self.clone();
        }

        let mut result = Self::new(GraphKind::Directed);
        result.add_nodes(self.labels.iter().cloned());
        for u in self.vertices_range() {
            for &(v, w) in &self.out_adj[u as usize] {
                result.try_add_edge(u, v, w);
            }
        }
        result
    }
}

impl<N> Graph<N> {
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Returns the label of node `u`
    /// ** Panics if u >= n **
    pub fn label_of(&self, u: Node) -> &N {
        &self.labels[u as usize]
    }

    /// Returns all labels indexed by their dense ids
    pub fn labels(&self) -> &[N] {
        &self.labels
    }

    /// Iterates over the (weighted) out-neighbors of `u` in insertion order. For undirected
    /// graphs this is the full neighborhood.
    /// ** Panics if u >= n **
    pub fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.out_adj[u as usize].iter().copied()
    }

    /// Returns the identifier used for edge *(u,v)*, i.e. the normalized edge for undirected graphs
    pub fn edge_key(&self, u: Node, v: Node) -> Edge {
        if self.kind == GraphKind::Directed {
            Edge(u, v)
        } else {
            Edge(u, v).normalized()
        }
    }

    /// Returns the weight of edge *(u,v)* or `None` if the edge does not exist
    pub fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.out_adj
            .get(u as usize)?
            .iter()
            .find_map(|&(x, w)| (x == v).then_some(w))
    }

    /// Returns *true* exactly if the graph contains the edge *(u,v)*
    pub fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Iterates over all edges which are not self-loops. Undirected edges are reported once
    /// in normalized form.
    pub fn candidate_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.kind == GraphKind::Directed;
        self.vertices_range().flat_map(move |u| {
            self.out_adj[u as usize]
                .iter()
                .filter(move |&&(v, _)| if directed { u != v } else { u < v })
                .map(move |&(v, _)| Edge(u, v))
        })
    }

    /// Returns *true* exactly if at least one edge is not a self-loop
    pub fn has_candidate_edges(&self) -> bool {
        self.candidate_edges().next().is_some()
    }

    /// Adds the edge *(u,v)* between existing nodes and returns the previous weight
    /// (`None` if the edge is new).
    /// ** Panics if u, v >= n **
    pub fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight> {
        if let Some(slot) = self.out_adj[u as usize].iter_mut().find(|(x, _)| *x == v) {
            let prev = std::mem::replace(&mut slot.1, weight);
            if self.kind == GraphKind::Undirected && u != v {
                for slot in self.out_adj[v as usize].iter_mut().filter(|(x, _)| *x == u) {
                    slot.1 = weight;
                }
            }
            return Some(prev);
        }

        self.out_adj[u as usize].push((v, weight));
        match self.kind {
            GraphKind::Directed => self.in_adj[v as usize].push(u),
            GraphKind::Undirected if u != v => self.out_adj[v as usize].push((u, weight)),
            GraphKind::Undirected => {}
        }
        self.number_of_edges += 1;

        None
    }

    /// Removes the edge *(u,v)* and returns its weight, or `None` if it did not exist.
    /// The relative order of the remaining neighbors is preserved.
    /// ** Panics if u, v >= n **
    pub fn try_remove_edge(&mut self, u: Node, v: Node) -> Option<Weight> {
        let pos = self.out_adj[u as usize].iter().position(|&(x, _)| x == v)?;
        let (_, weight) = self.out_adj[u as usize].remove(pos);

        match self.kind {
            GraphKind::Directed => {
                let list = &mut self.in_adj[v as usize];
                let pos = list.iter().position(|&x| x == u);
                debug_assert!(pos.is_some());
                if let Some(pos) = pos {
                    list.remove(pos);
                }
            }
            GraphKind::Undirected if u != v => {
                let list = &mut self.out_adj[v as usize];
                let pos = list.iter().position(|&(x, _)| x == u);
                debug_assert!(pos.is_some());
                if let Some(pos) = pos {
                    list.remove(pos);
                }
            }
            GraphKind::Undirected => {}
        }
        self.number_of_edges -= 1;

        Some(weight)
    }

    /// Removes all given edges. Fails on the first edge not present; edges removed
    /// before that point stay removed.
    pub fn remove_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Result<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            if u >= self.number_of_nodes() || v >= self.number_of_nodes() {
                return Err(Error::EdgeNotFound { u, v });
            }
            self.try_remove_edge(u, v)
                .ok_or(Error::EdgeNotFound { u, v })?;
        }
        Ok(())
    }
}

impl<N> InvariantCheck<Error> for Graph<N> {
    fn is_correct(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(Error::InvalidGraph("graph has no nodes".into()));
        }

        for (u, neighbors) in self.out_adj.iter().enumerate() {
            if let Some(&(v, w)) = neighbors.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
                return Err(Error::InvalidGraph(format!(
                    "edge ({u}, {v}) has weight {w}; weights must be finite and non-negative"
                )));
            }
        }

        Ok(())
    }
}
