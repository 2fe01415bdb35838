use super::*;

pub type PartitionClass = Node;

/// A community: the labels of its members in node insertion order
pub type Community<N> = Vec<N>;

/// A partition of a graph's node set into disjoint communities
pub type Communities<N> = Vec<Community<N>>;

/// A partition splits a graph into node-disjoint substructures (here: weakly connected components)
#[derive(Clone, Debug)]
pub struct Partition {
    // Class 0 encodes "unassigned"; partition class `i` is stored as `i+1` and
    // `class_sizes[0]` counts the unassigned nodes.
    classes: Vec<PartitionClass>,
    class_sizes: Vec<NumNodes>,
}

impl Partition {
    /// Creates a partition for `nodes` nodes which are initially all unassigned
    ///
    /// # Example
    /// ```
    /// use divisive::graph::partition::*;
    /// let partition = Partition::new(10);
    /// assert_eq!(partition.number_of_classes(), 0);
    /// ```
    pub fn new(nodes: NumNodes) -> Self {
        Self {
            classes: vec![0; nodes as usize],
            class_sizes: vec![nodes],
        }
    }

    /// Creates a new partition class and assigns all provided nodes to it; we require that these
    /// nodes were previously unassigned.
    ///
    /// # Example
    /// ```
    /// use divisive::graph::partition::*;
    /// let mut partition = Partition::new(10);
    /// let class_id = partition.add_class([2,4]);
    /// assert_eq!(partition.number_of_classes(), 1);
    /// assert_eq!(partition.number_in_class(class_id), 2);
    /// ```
    pub fn add_class<I: IntoIterator<Item = Node>>(&mut self, nodes: I) -> PartitionClass {
        let class_id = self.class_sizes.len() as PartitionClass;
        self.class_sizes.push(0);

        let mut size = 0;
        for u in nodes {
            assert_eq!(self.classes[u as usize], 0); // check that node is unassigned
            self.classes[u as usize] = class_id;
            size += 1;
        }

        self.class_sizes[class_id as usize] = size;
        self.class_sizes[0] -= size;

        class_id - 1
    }

    /// Returns the number of nodes in class `class_id`
    pub fn number_in_class(&self, class_id: PartitionClass) -> NumNodes {
        self.class_sizes[class_id as usize + 1]
    }

    /// Returns the number of partition classes (0 if all nodes are unassigned)
    ///
    /// # Example
    /// ```
    /// use divisive::graph::partition::*;
    /// let mut partition = Partition::new(10);
    /// assert_eq!(partition.number_of_classes(), 0);
    /// partition.add_class([2,4]);
    /// assert_eq!(partition.number_of_classes(), 1);
    /// ```
    pub fn number_of_classes(&self) -> NumNodes {
        self.class_sizes.len() as NumNodes - 1
    }

    /// Translates the classes into labeled communities; `labels[u]` is the label of node `u`.
    /// The result is indexed by class id and each community lists its members in node order.
    /// Unassigned nodes are dropped.
    ///
    /// # Example
    /// ```
    /// use divisive::graph::partition::*;
    /// let mut partition = Partition::new(4);
    /// partition.add_class([3, 0]);
    /// partition.add_class([1]);
    /// assert_eq!(partition.to_communities(&["a", "b", "c", "d"]), vec![vec!["a", "d"], vec!["b"]]);
    /// ```
    pub fn to_communities<N: Clone>(&self, labels: &[N]) -> Communities<N> {
        assert_eq!(labels.len(), self.classes.len());

        let mut result: Communities<N> = self.class_sizes[1..]
            .iter()
            .map(|&size| Vec::with_capacity(size as usize))
            .collect();

        for (label, &class_id) in labels.iter().zip(&self.classes) {
            if class_id > 0 {
                result[class_id as usize - 1].push(label.clone());
            }
        }

        result
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classes_and_communities() {
        let mut partition = Partition::new(6);
        let a = partition.add_class([5, 1]);
        let b = partition.add_class([]);
        let c = partition.add_class([3, 0]);

        assert_eq!(partition.number_of_classes(), 3);
        assert_eq!(partition.number_in_class(a), 2);
        assert_eq!(partition.number_in_class(b), 0);
        assert_eq!(partition.number_in_class(c), 2);

        // nodes 2 and 4 stay unassigned and are dropped
        assert_eq!(
            partition.to_communities(&[10, 11, 12, 13, 14, 15]),
            vec![vec![11, 15], vec![], vec![10, 13]]
        );
    }

    #[test]
    #[should_panic]
    fn add_class_rejects_assigned_nodes() {
        let mut partition = Partition::new(3);
        partition.add_class([0, 1]);
        partition.add_class([1, 2]);
    }
}
