//! Edge betweenness centrality.
//!
//! The betweenness of an edge `e` is the sum over all ordered pairs `(s, t)` of distinct nodes
//! of the fraction of shortest `s`-`t` paths passing through `e`. We never enumerate paths;
//! instead, for each source `s` we build the shortest-path DAG rooted at `s` (BFS for hop
//! distances, Dijkstra if weights are costs), count shortest paths `sigma` top-down and then
//! back-propagate the dependencies `delta` bottom-up (Brandes' accumulation). This requires
//! `O(n + m)` (unweighted) or `O(n + m log n)` (weighted) time per source.
//!
//! Self-loops never lie on a shortest path and are skipped entirely.

use super::*;
use crate::graph::labeled::Label;
use log::trace;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use std::{cmp::Ordering, cmp::Reverse, collections::BinaryHeap, collections::VecDeque};

/// Ranks edges by their (optionally normalized, weighted or sampled) betweenness centrality.
///
/// # Example
/// ```
/// use divisive::prelude::*;
/// let mut graph = Graph::undirected();
/// graph.add_edges([(0, 1), (1, 2), (2, 3)]);
///
/// let scores = EdgeBetweenness::new().normalized(false).compute(&graph);
/// assert_eq!(scores[&Edge(1, 2)], 4.0); // {0,1} x {2,3}
/// assert_eq!(scores[&Edge(0, 1)], 3.0); // {0} x {1,2,3}
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeBetweenness {
    weighted: bool,
    normalized: bool,
    sampling: Option<Sampling>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Sampling {
    sources: NumNodes,
    seed: u64,
}

impl Default for EdgeBetweenness {
    fn default() -> Self {
        Self {
            weighted: false,
            normalized: true,
            sampling: None,
        }
    }
}

impl EdgeBetweenness {
    /// Unweighted, normalized and exact betweenness
    pub fn new() -> Self {
        Self::default()
    }

    /// If set, edge weights are interpreted as path costs; otherwise every edge has cost 1
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    /// If set (default), scores are divided by `n(n-1)`. Otherwise, scores of undirected graphs
    /// are halved as each unordered pair is accounted for in both directions.
    pub fn normalized(mut self, normalized: bool) -> Self {
        self.normalized = normalized;
        self
    }

    /// Approximates betweenness using only `sources` randomly sampled source nodes (all nodes if
    /// `sources >= n`); scores are extrapolated by `n / sources`. The sample is drawn from a
    /// PRNG seeded with `seed` on each invocation, so the ranking remains a pure function of
    /// the graph.
    /// ** Panics if sources == 0 **
    pub fn sample_sources(mut self, sources: NumNodes, seed: u64) -> Self {
        assert!(sources > 0);
        self.sampling = Some(Sampling { sources, seed });
        self
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Computes the score of every candidate edge of `graph`
    pub fn compute<N>(&self, graph: &Graph<N>) -> EdgeScores {
        let n = graph.number_of_nodes();
        let mut scores: EdgeScores = graph.candidate_edges().map(|e| (e, 0.0)).collect();
        if n == 0 {
            return scores;
        }

        let sources = self.sources(n);
        let mut paths = ShortestPaths::new(n);

        for &s in &sources {
            if self.weighted {
                paths.dijkstra_from(graph, s);
            } else {
                paths.bfs_from(graph, s);
            }
            trace!("source {s} reaches {} nodes", paths.order.len());
            paths.accumulate_edges_into(graph, &mut scores);
        }

        self.rescale(graph, sources.len() as NumNodes, &mut scores);
        scores
    }

    fn sources(&self, n: NumNodes) -> Vec<Node> {
        match self.sampling {
            Some(Sampling { sources, seed }) if sources < n => {
                let mut rng = Pcg64Mcg::seed_from_u64(seed);
                rand::seq::index::sample(&mut rng, n as usize, sources as usize)
                    .into_iter()
                    .map(|u| u as Node)
                    .collect()
            }
            _ => (0..n).collect(),
        }
    }

    fn rescale<N>(&self, graph: &Graph<N>, number_of_sources: NumNodes, scores: &mut EdgeScores) {
        let n = graph.number_of_nodes() as f64;

        let scale = if self.normalized {
            (n > 1.0).then(|| 1.0 / (n * (n - 1.0)))
        } else {
            (!graph.is_directed()).then_some(0.5)
        };

        let Some(mut scale) = scale else {
            return;
        };

        if self.sampling.is_some() {
            scale = scale * n / number_of_sources as f64;
        }

        for score in scores.values_mut() {
            *score *= scale;
        }
    }
}

impl<N: Label> EdgeRanking<N> for EdgeBetweenness {
    fn rank(&self, graph: &Graph<N>) -> Result<EdgeScores> {
        Ok(self.compute(graph))
    }
}

/// Min-heap entry of Dijkstra's algorithm: tentative distance of `node` via `pred`. Ties in
/// distance are broken by insertion order (`count`), which keeps the settle order deterministic.
#[derive(Clone, Copy, Debug)]
struct QueueEntry {
    dist: Weight,
    count: u64,
    pred: Node,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then(self.count.cmp(&other.count))
    }
}

/// Single-source shortest-path DAG. Buffers are allocated once and reused for every source;
/// only the nodes reached from the previous source are reset.
struct ShortestPaths {
    // nodes in non-decreasing distance from the source (settle order)
    order: Vec<Node>,
    preds: Vec<SmallVec<[Node; 4]>>,
    sigma: Vec<f64>,
    dist: Vec<Option<Weight>>,
    // tentative distances (Dijkstra only)
    seen: Vec<Option<Weight>>,
    delta: Vec<f64>,
    queue: VecDeque<Node>,
    heap: BinaryHeap<Reverse<QueueEntry>>,
}

impl ShortestPaths {
    fn new(n: NumNodes) -> Self {
        let n = n as usize;
        Self {
            order: Vec::with_capacity(n),
            preds: vec![SmallVec::new(); n],
            sigma: vec![0.0; n],
            dist: vec![None; n],
            seen: vec![None; n],
            delta: vec![0.0; n],
            queue: VecDeque::with_capacity(n),
            heap: BinaryHeap::new(),
        }
    }

    fn reset(&mut self) {
        for &u in &self.order {
            let u = u as usize;
            self.preds[u].clear();
            self.sigma[u] = 0.0;
            self.dist[u] = None;
            self.seen[u] = None;
            self.delta[u] = 0.0;
        }
        self.order.clear();
    }

    /// Shortest paths in terms of hops
    fn bfs_from<N>(&mut self, graph: &Graph<N>, s: Node) {
        self.reset();

        self.sigma[s as usize] = 1.0;
        self.dist[s as usize] = Some(0.0);
        self.queue.push_back(s);

        while let Some(v) = self.queue.pop_front() {
            self.order.push(v);
            let dv = self.dist[v as usize].unwrap_or_default();
            let sigma_v = self.sigma[v as usize];

            for (w, _) in graph.out_neighbors_of(v) {
                if w == v {
                    continue;
                }

                if self.dist[w as usize].is_none() {
                    self.dist[w as usize] = Some(dv + 1.0);
                    self.queue.push_back(w);
                }

                if self.dist[w as usize] == Some(dv + 1.0) {
                    self.sigma[w as usize] += sigma_v;
                    self.preds[w as usize].push(v);
                }
            }
        }
    }

    /// Shortest paths where edge weights are path costs
    fn dijkstra_from<N>(&mut self, graph: &Graph<N>, s: Node) {
        self.reset();

        let mut count = 0;
        self.sigma[s as usize] = 1.0;
        self.seen[s as usize] = Some(0.0);
        self.heap.push(Reverse(QueueEntry {
            dist: 0.0,
            count,
            pred: s,
            node: s,
        }));

        while let Some(Reverse(QueueEntry {
            dist, pred, node: v, ..
        })) = self.heap.pop()
        {
            // stale entry; v was settled via a shorter (or earlier) path
            if self.dist[v as usize].is_some() {
                continue;
            }

            if v != pred {
                self.sigma[v as usize] += self.sigma[pred as usize];
            }
            self.order.push(v);
            self.dist[v as usize] = Some(dist);

            for (w, weight) in graph.out_neighbors_of(v) {
                if w == v {
                    continue;
                }

                let vw_dist = dist + weight;
                let w = w as usize;

                if self.dist[w].is_none() && self.seen[w].is_none_or(|d| vw_dist < d) {
                    self.seen[w] = Some(vw_dist);
                    count += 1;
                    self.heap.push(Reverse(QueueEntry {
                        dist: vw_dist,
                        count,
                        pred: v,
                        node: w as Node,
                    }));
                    self.sigma[w] = 0.0;
                    self.preds[w].clear();
                    self.preds[w].push(v);
                } else if self.dist[w].is_none() && self.seen[w] == Some(vw_dist) {
                    self.sigma[w] += self.sigma[v as usize];
                    self.preds[w].push(v);
                }
            }
        }
    }

    /// Back-propagates dependencies in reverse settle order and adds the share of each
    /// DAG edge to `scores`
    fn accumulate_edges_into<N>(&mut self, graph: &Graph<N>, scores: &mut EdgeScores) {
        for &w in self.order.iter().rev() {
            let w = w as usize;
            let coeff = (1.0 + self.delta[w]) / self.sigma[w];

            for &v in &self.preds[w] {
                let c = self.sigma[v as usize] * coeff;
                *scores.entry(graph.edge_key(v, w as Node)).or_insert(0.0) += c;
                self.delta[v as usize] += c;
            }
        }
    }
}
