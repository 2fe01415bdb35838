//! Edge rankings decide which edges are removed next.
//!
//! A ranking maps a graph snapshot to a score for each candidate edge (every edge that is not a
//! self-loop). The edges of maximal score are considered to be the most "between" communities.
//! Any pure function `&Graph<N> -> Result<EdgeScores>` qualifies; the default is
//! [`EdgeBetweenness`].

pub mod betweenness;
pub mod weight;

pub use betweenness::EdgeBetweenness;
pub use weight::EdgeWeightRanking;

use crate::{errors::*, graph::*};
use fxhash::FxHashMap;
use smallvec::SmallVec;

/// Score per candidate edge. Undirected edges should be keyed in normalized form, but the
/// reverse orientation is accepted as well (as long as not both are present).
pub type EdgeScores = FxHashMap<Edge, f64>;

/// Edges sharing the maximal score of a round
pub type TieSet = SmallVec<[Edge; 4]>;

pub trait EdgeRanking<N> {
    /// Scores the candidate edges of `graph`. Must be a pure function of the snapshot.
    fn rank(&self, graph: &Graph<N>) -> Result<EdgeScores>;
}

impl<N, F> EdgeRanking<N> for F
where
    F: Fn(&Graph<N>) -> Result<EdgeScores>,
{
    fn rank(&self, graph: &Graph<N>) -> Result<EdgeScores> {
        self(graph)
    }
}

/// Validates `scores` against the candidate edges of `graph` and returns the maximal score
/// together with all edges attaining it. Scores are compared by exact equality; keys of the
/// returned tie set are given in the graph's canonical form (see [`Graph::edge_key`]).
///
/// Fails with [`Error::InvalidRankingResult`] if the mapping is empty, refers to an edge that
/// is not a candidate edge, scores an undirected edge in both orientations, or contains a
/// negative or non-finite score.
pub fn max_score_ties<N>(graph: &Graph<N>, scores: &EdgeScores) -> Result<(f64, TieSet)> {
    let n = graph.number_of_nodes();
    let mut max_score = f64::NEG_INFINITY;
    let mut ties = TieSet::new();

    for (&edge, &score) in scores {
        let Edge(u, v) = edge;
        if u >= n || v >= n || edge.is_loop() || !graph.has_edge(u, v) {
            return Err(Error::InvalidRankingResult(format!(
                "{edge:?} is not a candidate edge"
            )));
        }

        if !graph.is_directed() && !edge.is_normalized() && scores.contains_key(&edge.reverse())
        {
            return Err(Error::InvalidRankingResult(format!(
                "{edge:?} is scored in both orientations"
            )));
        }

        if !score.is_finite() || score < 0.0 {
            return Err(Error::InvalidRankingResult(format!(
                "{edge:?} has score {score}; scores must be finite and non-negative"
            )));
        }

        if score > max_score {
            max_score = score;
            ties.clear();
        }

        if score == max_score {
            ties.push(graph.edge_key(u, v));
        }
    }

    if ties.is_empty() {
        return Err(Error::InvalidRankingResult(
            "no scores for the remaining candidate edges".into(),
        ));
    }

    Ok((max_score, ties))
}
