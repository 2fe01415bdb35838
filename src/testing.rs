use super::prelude::*;
use itertools::Itertools as _;
use rand::Rng;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected path 0 - 1 - ... - (n-1)
pub fn path_graph(n: NumNodes) -> Graph<u32> {
    let mut graph = Graph::undirected();
    graph.add_nodes(0..n);
    graph.add_edges((1..n).map(|u| (u - 1, u)));
    graph
}

const TWO_LOBES: [(u32, u32, Weight); 17] = [
    (1, 3, 1.0),
    (1, 2, 10.0),
    (2, 3, 2.0),
    (3, 7, 5.0),
    (7, 6, 3.0),
    (6, 4, 2.0),
    (6, 5, 2.0),
    (5, 4, 7.0),
    (7, 8, 1.0),
    (8, 9, 13.0),
    (9, 11, 1.0),
    (9, 10, 10.0),
    (10, 11, 2.0),
    (8, 12, 6.0),
    (12, 13, 5.0),
    (12, 14, 6.0),
    (13, 14, 4.0),
];

/// Two lobes {1..7} and {8..14} joined by the bridge 7 - 8; each lobe consists of two
/// triangles attached to the bridge endpoint
pub fn two_lobes() -> Graph<u32> {
    let mut graph = Graph::undirected();
    graph.add_edges(TWO_LOBES.iter().map(|&(u, v, _)| (u, v)));
    graph
}

/// Same as [`two_lobes`] but with (integral) edge weights
pub fn two_lobes_weighted() -> Graph<u32> {
    let mut graph = Graph::undirected();
    graph.add_weighted_edges(TWO_LOBES);
    graph
}

pub fn expected_lobes() -> Vec<Vec<u32>> {
    vec![(1..=7).collect(), (8..=14).collect()]
}

pub fn expected_triangles() -> Vec<Vec<u32>> {
    vec![
        vec![1, 2, 3],
        vec![4, 5, 6],
        vec![7],
        vec![8],
        vec![9, 10, 11],
        vec![12, 13, 14],
    ]
}

pub fn singletons(nodes: impl IntoIterator<Item = u32>) -> Vec<Vec<u32>> {
    nodes.into_iter().map(|u| vec![u]).collect()
}

/// Sorts the members of each community and the communities themselves, so partitions can be
/// compared independently of their order
pub fn canonical<N: Ord + Clone>(communities: &Communities<N>) -> Vec<Vec<N>> {
    communities
        .iter()
        .map(|c| c.iter().cloned().sorted().collect_vec())
        .sorted()
        .collect_vec()
}

pub fn collect_sequence<N, R>(sequence: CommunitySequence<N, R>) -> Vec<Communities<N>>
where
    N: Label,
    R: EdgeRanking<N>,
{
    sequence.map(|x| x.unwrap()).collect_vec()
}

/// Asserts that `communities` are pairwise disjoint, non-empty and cover all nodes of `graph`
pub fn assert_valid_partition<N: Label + std::fmt::Debug>(
    graph: &Graph<N>,
    communities: &Communities<N>,
) {
    let mut covered = vec![false; graph.len()];
    for community in communities {
        assert!(!community.is_empty());
        for label in community {
            let u = graph.id_of(label).unwrap();
            assert!(!covered[u as usize], "{label:?} assigned twice");
            covered[u as usize] = true;
        }
    }
    assert!(covered.into_iter().all(|x| x));
}

/// Gilbert graph `G(n,p)` on the nodes `0..n`: each of the `n(n-1)/2` edges (or `n(n-1)` arcs
/// if `directed`) exists independently with probability `p`
pub fn random_gnp(rng: &mut impl Rng, n: NumNodes, p: f64, directed: bool) -> Graph<u32> {
    let mut graph = Graph::new(if directed {
        GraphKind::Directed
    } else {
        GraphKind::Undirected
    });
    graph.add_nodes(0..n);

    for u in 0..n {
        for v in 0..n {
            let candidate = if directed { u != v } else { u < v };
            if candidate && rng.gen_bool(p) {
                graph.add_edge(u, v);
            }
        }
    }

    graph
}
