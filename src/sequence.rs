//! Divisive hierarchical community detection (Girvan-Newman).
//!
//! Starting from a private copy of the input graph, we repeatedly rank all candidate edges
//! (i.e. edges that are not self-loops) and remove every edge of maximal score. Whenever the
//! number of weakly connected components increases, the components are reported as the next,
//! finer partition. The result is a lazy sequence: no work is carried out until the next
//! partition is requested, and dropping the sequence abandons the remaining decomposition.
//!
//! # Example
//! ```
//! use divisive::prelude::*;
//! let mut graph = Graph::undirected();
//! graph.add_edges([(0, 1), (1, 2), (2, 3)]);
//!
//! let mut partitions = girvan_newman(&graph).unwrap();
//! assert_eq!(partitions.next().unwrap().unwrap(), vec![vec![0, 1], vec![2, 3]]);
//! assert_eq!(partitions.next().unwrap().unwrap().len(), 4);
//! assert!(partitions.next().is_none());
//! ```

use crate::{
    errors::*,
    graph::{labeled::Label, *},
    ranking::*,
};
use log::{debug, info};
use std::iter::FusedIterator;

/// Outcome of a single removal round, see [`CommunitySequence::step`]
#[derive(Clone, Debug, PartialEq)]
pub enum Step<N> {
    /// The removal increased the number of components; carries the new partition
    Split(Communities<N>),
    /// Edges were removed, but the graph did not fall apart any further
    Unchanged,
    /// No candidate edges are left; the sequence is complete
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceState {
    /// No round was carried out yet
    Ready,
    Producing,
    /// Exhausted or failed; no further rounds will be carried out
    Done,
}

/// Lazy sequence of increasingly fine partitions of a graph's node set.
///
/// Each item is either the next partition (whose number of communities strictly exceeds that
/// of its predecessor) or the error that stopped the sequence. After an error, the sequence is
/// `Done` and only returns `None`.
pub struct CommunitySequence<N, R = EdgeBetweenness> {
    graph: Graph<N>,
    ranking: R,
    state: SequenceState,
    number_of_communities: NumNodes,
    rounds: usize,
}

/// Shorthand for [`CommunitySequence::new`] with the default ranking ([`EdgeBetweenness`])
pub fn girvan_newman<N: Label>(graph: &Graph<N>) -> Result<CommunitySequence<N>> {
    CommunitySequence::new(graph, EdgeBetweenness::default())
}

/// Shorthand for [`CommunitySequence::new`]
pub fn girvan_newman_with<N: Label, R: EdgeRanking<N>>(
    graph: &Graph<N>,
    ranking: R,
) -> Result<CommunitySequence<N, R>> {
    CommunitySequence::new(graph, ranking)
}

impl<N: Label, R: EdgeRanking<N>> CommunitySequence<N, R> {
    /// Validates `graph` and copies it; `graph` itself is never modified. Fails with
    /// [`Error::InvalidGraph`] if the graph has no nodes or carries a negative or
    /// non-finite weight.
    pub fn new(graph: &Graph<N>, ranking: R) -> Result<Self> {
        graph.is_correct()?;

        let graph = graph.clone();
        let number_of_communities = graph.number_of_weak_components();
        debug!(
            "start decomposition of {} nodes, {} edges and {number_of_communities} components",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );

        Ok(Self {
            graph,
            ranking,
            state: SequenceState::Ready,
            number_of_communities,
            rounds: 0,
        })
    }

    /// Carries out a single removal round: rank the candidate edges of the working graph,
    /// remove all edges of maximal score and check whether the graph split. Unlike
    /// [`Iterator::next`], this returns after each round even if no new partition emerged.
    pub fn step(&mut self) -> Result<Step<N>> {
        match self.state {
            SequenceState::Done => return Ok(Step::Exhausted),
            SequenceState::Ready => self.state = SequenceState::Producing,
            SequenceState::Producing => {}
        }

        let result = self.remove_most_central_edges();
        if matches!(result, Ok(Step::Exhausted) | Err(_)) {
            self.state = SequenceState::Done;
        }
        result
    }

    fn remove_most_central_edges(&mut self) -> Result<Step<N>> {
        if !self.graph.has_candidate_edges() {
            debug!("no candidate edges left after {} rounds", self.rounds);
            return Ok(Step::Exhausted);
        }

        let scores = self.ranking.rank(&self.graph)?;
        let (max_score, ties) = max_score_ties(&self.graph, &scores)?;

        self.rounds += 1;
        debug!(
            "round {}: remove {} edge(s) with score {max_score}",
            self.rounds,
            ties.len()
        );
        self.graph.remove_edges(&ties)?;

        let partition = self.graph.partition_into_weak_components();
        if partition.number_of_classes() <= self.number_of_communities {
            return Ok(Step::Unchanged);
        }

        self.number_of_communities = partition.number_of_classes();
        info!(
            "split into {} communities after {} rounds",
            self.number_of_communities, self.rounds
        );

        Ok(Step::Split(partition.to_communities(self.graph.labels())))
    }
}

impl<N, R> CommunitySequence<N, R> {
    /// Number of communities of the partition yielded last (or of the input graph if none
    /// was yielded yet)
    pub fn number_of_communities(&self) -> NumNodes {
        self.number_of_communities
    }

    /// Number of removal rounds carried out so far
    pub fn number_of_rounds(&self) -> usize {
        self.rounds
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SequenceState::Done
    }

    /// The working copy in its current state (i.e. with all removed edges missing)
    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    pub fn ranking(&self) -> &R {
        &self.ranking
    }
}

impl<N: Label, R: EdgeRanking<N>> Iterator for CommunitySequence<N, R> {
    type Item = Result<Communities<N>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Ok(Step::Split(communities)) => return Some(Ok(communities)),
                Ok(Step::Unchanged) => continue,
                Ok(Step::Exhausted) => return None,
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done() {
            (0, Some(0))
        } else {
            // each partition adds at least one community
            let remaining = self.graph.number_of_nodes() - self.number_of_communities;
            (0, Some(remaining as usize))
        }
    }
}

impl<N: Label, R: EdgeRanking<N>> FusedIterator for CommunitySequence<N, R> {}
