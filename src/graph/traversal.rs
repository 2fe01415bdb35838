use super::*;
use std::collections::VecDeque;

////////////////////////////////////////////////////////////////////////////////////////// BFS
/// Breadth-first search over the weak skeleton of a graph (edge directions are ignored).
pub struct WeakBfs<'a, G: WeakAdjacency> {
    graph: &'a G,
    visited: Vec<bool>,
    queue: VecDeque<Node>,
    // all nodes below are known to be visited
    first_unvisited: Node,
}

impl<'a, G: WeakAdjacency> Iterator for WeakBfs<'a, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.weak_neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited[v as usize] = true;
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let visited = self.visited.iter().filter(|&&x| x).count();
        (
            self.queue.len(),
            Some(self.queue.len() + self.graph.len() - visited),
        )
    }
}

impl<'a, G: WeakAdjacency> WeakBfs<'a, G> {
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = vec![false; graph.len()];
        visited[start as usize] = true;
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
            first_unvisited: 0,
        }
    }

    /// Tries to restart the search at the smallest unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        while (self.first_unvisited as usize) < self.visited.len() {
            let x = self.first_unvisited;
            self.first_unvisited += 1;
            if !self.visited[x as usize] {
                self.visited[x as usize] = true;
                self.queue.push_back(x);
                return true;
            }
        }
        false
    }
}

/// Offers graph traversal algorithms as methods of the graph representation
pub trait Traversal: WeakAdjacency + Sized {
    /// Returns an iterator traversing nodes weakly reachable from `start` in breadth-first-search order
    fn weak_bfs(&self, start: Node) -> WeakBfs<'_, Self> {
        WeakBfs::new(self, start)
    }
}

impl<T: WeakAdjacency + Sized> Traversal for T {}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let mut graph = Graph::undirected();
        graph.add_nodes(0..6);
        graph.add_edges([(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        {
            let order: Vec<Node> = graph.weak_bfs(1).collect();
            assert_eq!(order.len(), 6);

            assert_eq!(order[0], 1);
            assert!((order[1] == 0 && order[2] == 2) || (order[2] == 0 && order[1] == 2));
            assert!((order[3] == 4 && order[4] == 5) || (order[4] == 4 && order[3] == 5));
            assert_eq!(order[5], 3);
        }

        {
            let mut order: Vec<Node> = WeakBfs::new(&graph, 5).collect();
            order[1..3].sort();
            order[3..].sort();
            assert_eq!(order, [5, 0, 4, 1, 2, 3]);
        }
    }

    #[test]
    fn bfs_ignores_direction() {
        // 0 -> 1 <- 2    3 -> 3
        let mut graph = Graph::directed();
        graph.add_edges([(0, 1), (2, 1), (3, 3)]);

        assert_eq!(graph.weak_bfs(2).sorted().collect_vec(), vec![0, 1, 2]);
        assert_eq!(graph.weak_bfs(3).collect_vec(), vec![3]);
    }

    #[test]
    fn restart_at_unvisited() {
        let mut graph = Graph::undirected();
        graph.add_edges([(0, 1), (2, 3), (3, 4)]);
        graph.add_node(5);

        let mut bfs = graph.weak_bfs(2);
        assert_eq!(bfs.by_ref().sorted().collect_vec(), vec![2, 3, 4]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().sorted().collect_vec(), vec![0, 1]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![5]);
        assert!(!bfs.try_restart_at_unvisited());
    }
}
