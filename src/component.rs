//! Connected-component discovery.

use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    fmt::Debug,
    hash::Hash,
};

use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// The dense node index used within a single component's compact adjacency.
pub(crate) type LocalIndex = u32;

/// A maximal connected subset of a graph's nodes.
///
/// Nodes are listed in BFS-discovery order from the component's root; no edge crosses between
/// two distinct components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Component<T> {
    nodes: Vec<T>,
}

impl<T> Component<T> {
    /// Returns the component's nodes in discovery order.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Returns the number of nodes in the component.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the component contains no nodes. Components produced by [`partition`]
    /// are never empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Partitions a graph into its connected components.
///
/// Roots are selected in ascending node order; each root's component is collected with a full
/// breadth-first traversal before the next unvisited root is picked. Component order is the
/// order in which roots were selected.
///
/// # Errors
///
/// Fails with [`GraphError::EmptyGraph`] if the graph contains no nodes.
///
/// # Examples
///
/// ```
/// use centra::component::partition;
/// use centra::graph::Graph;
///
/// // Two disjoint edges form two components.
/// let graph = Graph::from_edge_list("1 2\n3 4\n".as_bytes()).unwrap();
/// let components = partition(&graph).unwrap();
///
/// assert_eq!(components.len(), 2);
/// assert_eq!(components[0].nodes(), &[1, 2]);
/// assert_eq!(components[1].nodes(), &[3, 4]);
/// ```
pub fn partition<T>(graph: &Graph<T>) -> Result<Vec<Component<T>>>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut visited: HashSet<T> = HashSet::with_capacity(graph.node_count());
    let mut components = Vec::new();

    for root in graph.nodes() {
        if visited.contains(&root) {
            continue;
        }

        let mut nodes = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(root);
        queue.push_back(root);

        while let Some(current) = queue.pop_front() {
            nodes.push(current);

            for &neighbor in graph.neighbors(current)? {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(Component { nodes });
    }

    debug!(components = components.len(), "partitioned graph");

    Ok(components)
}

/// A component's induced subgraph in compact form: node ids sorted ascending, adjacency
/// re-indexed to dense local positions. This is the representation the centrality computations
/// run on.
pub(crate) struct Subgraph<T> {
    /// Sorted component node ids; a node's local index is its position in this list.
    ids: Vec<T>,
    /// Local adjacency lists, parallel to `ids`.
    adj: Vec<Vec<LocalIndex>>,
}

impl<T> Subgraph<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Builds the compact adjacency for one component of the graph.
    pub(crate) fn build(graph: &Graph<T>, component: &Component<T>) -> Result<Self> {
        let mut ids = component.nodes().to_vec();
        ids.sort_unstable();

        let mut adj = Vec::with_capacity(ids.len());
        for &node in &ids {
            let neighbors = graph.neighbors(node)?;

            let mut local = Vec::with_capacity(neighbors.len());
            for &neighbor in neighbors {
                // Components are edge-disjoint, so every neighbor lies in this component.
                let position = ids
                    .binary_search(&neighbor)
                    .map_err(|_| GraphError::unknown_node(neighbor))?;
                local.push(position as LocalIndex);
            }

            adj.push(local);
        }

        Ok(Self { ids, adj })
    }

    /// Returns the local adjacency lists.
    pub(crate) fn adj(&self) -> &[Vec<LocalIndex>] {
        &self.adj
    }

    /// Returns the number of nodes in the subgraph.
    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }

    /// Maps a vector of per-local-index values back onto node ids.
    pub(crate) fn scores_by_node<S>(&self, values: Vec<S>) -> BTreeMap<T, S> {
        self.ids.iter().copied().zip(values).collect()
    }
}
