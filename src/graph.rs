//! A module for working with graphs.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{self, Debug},
    hash::Hash,
    io::BufRead,
};

use tracing::debug;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
};

/// An undirected graph, stored as an adjacency map.
///
/// Neighbor sets are kept sorted and duplicate-free, which gives deterministic iteration
/// everywhere and `O(log d)` membership tests.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    /// A mapping of node ids to their sorted neighbor sets. Every edge appears symmetrically:
    /// `(u, v)` implies `v ∈ adj[u]` and `u ∈ adj[v]`.
    adj: BTreeMap<T, BTreeSet<T>>,
    /// The number of distinct undirected edges inserted so far.
    edge_count: usize,
}

impl<T> Graph<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::graph::Graph;
    ///
    /// let graph: Graph<u32> = Graph::new();
    /// ```
    pub fn new() -> Self {
        Self {
            adj: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph from a sequence of edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3)]);
    /// assert_eq!(graph.node_count(), 3);
    /// ```
    pub fn from_edges(edges: impl IntoIterator<Item = Edge<T>>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert(edge);
        }

        graph
    }

    /// Inserts an edge into the graph, registering both endpoints as neighbors of each other.
    ///
    /// Insertion is idempotent: re-inserting an edge (in either endpoint order) leaves the
    /// graph unchanged and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    ///
    /// assert!(graph.insert(Edge::new(1, 2)));
    /// assert!(!graph.insert(Edge::new(2, 1)));
    /// ```
    pub fn insert(&mut self, edge: Edge<T>) -> bool {
        let (u, v) = (*edge.source(), *edge.target());

        let is_new = self.adj.entry(u).or_default().insert(v);
        if u != v {
            self.adj.entry(v).or_default().insert(u);
        }

        if is_new {
            self.edge_count += 1;
        }

        is_new
    }

    /// Returns the sorted neighbor set of a node.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::UnknownNode`] if the node was never inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(3, 1), Edge::new(3, 2)]);
    ///
    /// let neighbors: Vec<u32> = graph.neighbors(3).unwrap().iter().copied().collect();
    /// assert_eq!(neighbors, vec![1, 2]);
    /// ```
    pub fn neighbors(&self, node: T) -> Result<&BTreeSet<T>> {
        self.adj
            .get(&node)
            .ok_or_else(|| GraphError::unknown_node(node))
    }

    /// Checks whether two nodes share an edge.
    ///
    /// The membership test probes the smaller of the two neighbor sets.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::UnknownNode`] if either node was never inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::from_edges([Edge::new(1, 2), Edge::new(2, 3)]);
    ///
    /// assert!(graph.is_connected(1, 2).unwrap());
    /// assert!(!graph.is_connected(1, 3).unwrap());
    /// assert!(graph.is_connected(1, 4).is_err());
    /// ```
    pub fn is_connected(&self, u: T, v: T) -> Result<bool> {
        let u_neighbors = self.neighbors(u)?;
        let v_neighbors = self.neighbors(v)?;

        if u_neighbors.len() < v_neighbors.len() {
            Ok(u_neighbors.contains(&v))
        } else {
            Ok(v_neighbors.contains(&u))
        }
    }

    /// Returns an iterator over all node ids, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = T> + '_ {
        self.adj.keys().copied()
    }

    /// Returns whether the node was ever inserted.
    pub fn contains_node(&self, node: T) -> bool {
        self.adj.contains_key(&node)
    }

    /// Returns the number of edges incident to a node.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::UnknownNode`] if the node was never inserted.
    pub fn degree(&self, node: T) -> Result<usize> {
        self.neighbors(node).map(BTreeSet::len)
    }

    /// Returns the node count of the graph.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns whether the graph contains any nodes.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }
}

impl Graph<u32> {
    /// Builds a graph from an edge-list stream: one edge per line, two whitespace-separated
    /// non-negative integers. Duplicate records are permitted and ignored.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::Parse`] on the first record that isn't exactly two parseable
    /// non-negative integers; no partial graph is returned. I/O failures while reading surface
    /// as [`GraphError::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::from_edge_list("1 2\n2 3\n2 3\n".as_bytes()).unwrap();
    ///
    /// assert_eq!(graph.node_count(), 3);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn from_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        let mut graph = Self::new();

        for (number, line) in reader.lines().enumerate() {
            let record = line?;
            graph.insert(parse_record(number + 1, &record)?);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "parsed edge list"
        );

        Ok(graph)
    }
}

//
// Trait implementations
//

impl<T> Default for Graph<T>
where
    T: Copy + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Graph<T>
where
    T: Copy + Ord + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in &self.adj {
            writeln!(f, "{node:?}: {neighbors:?}")?;
        }

        Ok(())
    }
}

//
// Helpers
//

/// Parses a single edge record into an edge, or fails with the record's line number.
fn parse_record(line: usize, record: &str) -> Result<Edge<u32>> {
    let malformed = || GraphError::Parse {
        line,
        record: record.to_string(),
    };

    let mut tokens = record.split_whitespace();
    let (Some(u), Some(v), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed());
    };

    let u = u.parse().map_err(|_| malformed())?;
    let v = v.parse().map_err(|_| malformed())?;

    Ok(Edge::new(u, v))
}
