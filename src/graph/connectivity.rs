use super::*;

pub trait Connectivity {
    /// Partitions all nodes into weakly connected components, i.e. components of the graph
    /// obtained by ignoring edge directions. Isolated nodes form singleton classes and
    /// self-loops have no effect. Classes are numbered by their smallest member.
    fn partition_into_weak_components(&self) -> Partition;

    /// Returns the number of weakly connected components
    fn number_of_weak_components(&self) -> NumNodes {
        self.partition_into_weak_components().number_of_classes()
    }
}

impl<G> Connectivity for G
where
    G: WeakAdjacency,
{
    fn partition_into_weak_components(&self) -> Partition {
        let mut partition = Partition::new(self.number_of_nodes());
        if self.is_empty() {
            return partition;
        }

        let mut bfs = self.weak_bfs(0);
        loop {
            let class = partition.add_class(bfs.by_ref());
            log::trace!(
                "weak component {class} with {} nodes",
                partition.number_in_class(class)
            );

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }

        partition
    }
}
