use super::*;

/// Ranks each candidate edge by its weight, i.e. the heaviest edges are removed first.
/// Useful if weights encode dissimilarity rather than path cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeWeightRanking;

impl<N> EdgeRanking<N> for EdgeWeightRanking {
    fn rank(&self, graph: &Graph<N>) -> Result<EdgeScores> {
        Ok(graph
            .candidate_edges()
            .map(|Edge(u, v)| {
                let weight = graph.weight_of(u, v).unwrap_or(DEFAULT_WEIGHT);
                (Edge(u, v), weight)
            })
            .collect())
    }
}
