//! The centrality engine: four per-component metrics and their ranked reports.

use std::{collections::BTreeMap, fmt::Debug, hash::Hash, num::NonZeroUsize, thread};

use crate::{
    betweenness::compute_betweenness,
    closeness::compute_closeness,
    component::{partition, Component, Subgraph},
    error::{GraphError, Result},
    graph::Graph,
    proximity::compute_proximity,
    rank::top_ranked,
};

/// The damping factor applied when the caller doesn't supply one.
pub const DEFAULT_ALPHA: f64 = 0.5;

pub(crate) const MIN_NUM_THREADS: usize = 1;
pub(crate) const MAX_NUM_THREADS: usize = 128;

/// Configuration for an analysis run: the proximity damping factor and the worker count used
/// by the per-source computations. No state persists between runs; the same value can be
/// applied to any number of graphs.
#[derive(Clone, Debug)]
pub struct Centrality {
    alpha: f64,
    num_threads: usize,
}

impl Centrality {
    /// Creates a configuration with the default damping factor and one worker per available
    /// core.
    pub fn new() -> Self {
        let num_threads = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(MIN_NUM_THREADS);

        Self {
            alpha: DEFAULT_ALPHA,
            num_threads,
        }
    }

    /// Creates a configuration with a caller-supplied damping factor.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::InvalidAlpha`] unless `alpha` lies in the open interval
    /// (0, 1): the proximity series decays with BFS level, so values at or beyond the bounds
    /// have no meaningful interpretation.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::centrality::Centrality;
    ///
    /// assert!(Centrality::with_alpha(0.85).is_ok());
    /// assert!(Centrality::with_alpha(1.0).is_err());
    /// ```
    pub fn with_alpha(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(GraphError::InvalidAlpha(alpha));
        }

        Ok(Self {
            alpha,
            ..Self::new()
        })
    }

    /// Sets the worker count used by the closeness and betweenness computations.
    pub fn num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    /// Returns the damping factor in use.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Partitions the graph and evaluates all four metrics over every component.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphError::EmptyGraph`] on a graph with no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::centrality::Centrality;
    /// use centra::graph::Graph;
    ///
    /// let graph = Graph::from_edge_list("1 2\n2 3\n3 4\n4 5\n".as_bytes()).unwrap();
    /// let reports = Centrality::new().analyze(&graph).unwrap();
    ///
    /// assert_eq!(reports.len(), 1);
    /// assert_eq!(reports[0].closeness[0], 3);
    /// ```
    pub fn analyze<T>(&self, graph: &Graph<T>) -> Result<Vec<ComponentReport<T>>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        partition(graph)?
            .into_iter()
            .map(|component| self.report(graph, component))
            .collect()
    }

    /// Returns each node's degree within the component.
    pub fn degree_centrality<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<BTreeMap<T, usize>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        component
            .nodes()
            .iter()
            .map(|&node| Ok((node, graph.degree(node)?)))
            .collect()
    }

    /// Returns each node's farness: the sum of its shortest-path distances to every other node
    /// in the component. Lower farness means higher closeness.
    pub fn closeness_centrality<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<BTreeMap<T, u64>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let subgraph = Subgraph::build(graph, component)?;
        let farness = compute_closeness(subgraph.adj(), self.num_threads);

        Ok(subgraph.scores_by_node(farness))
    }

    /// Returns each node's betweenness: the number of shortest paths between other node pairs
    /// it lies on, with split credit for pairs joined by several shortest paths.
    pub fn betweenness_centrality<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<BTreeMap<T, f64>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let subgraph = Subgraph::build(graph, component)?;
        let totals = compute_betweenness(subgraph.adj(), self.num_threads);

        Ok(subgraph.scores_by_node(totals))
    }

    /// Returns each node's proximity score: `alpha ^ level(v)` summed over every other node
    /// `v` in the component, where `level` is BFS depth from the node.
    pub fn proximity_centrality<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<BTreeMap<T, f64>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let subgraph = Subgraph::build(graph, component)?;
        let scores = compute_proximity(subgraph.adj(), self.alpha);

        Ok(subgraph.scores_by_node(scores))
    }

    /// Returns the component's degree centers, highest degree first.
    pub fn degree_centers<T>(&self, graph: &Graph<T>, component: &Component<T>) -> Result<Vec<T>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let scores = self.degree_centrality(graph, component)?;
        Ok(top_ranked(&scores, |a, b| b.cmp(a)))
    }

    /// Returns the component's closeness centers, lowest farness first.
    pub fn closeness_centers<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<Vec<T>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let scores = self.closeness_centrality(graph, component)?;
        Ok(top_ranked(&scores, |a, b| a.cmp(b)))
    }

    /// Returns the component's betweenness centers, highest total first.
    pub fn betweenness_centers<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<Vec<T>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let scores = self.betweenness_centrality(graph, component)?;
        Ok(top_ranked(&scores, |a, b| b.total_cmp(a)))
    }

    /// Returns the component's proximity centers, highest score first.
    pub fn proximity_centers<T>(
        &self,
        graph: &Graph<T>,
        component: &Component<T>,
    ) -> Result<Vec<T>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let scores = self.proximity_centrality(graph, component)?;
        Ok(top_ranked(&scores, |a, b| b.total_cmp(a)))
    }

    //
    // Private
    //

    /// Evaluates all four metrics over one component, building its compact adjacency once.
    fn report<T>(&self, graph: &Graph<T>, component: Component<T>) -> Result<ComponentReport<T>>
    where
        T: Copy + Eq + Hash + Ord + Debug,
    {
        let subgraph = Subgraph::build(graph, &component)?;

        let degree = self.degree_centrality(graph, &component)?;
        let farness = subgraph.scores_by_node(compute_closeness(subgraph.adj(), self.num_threads));
        let betweenness =
            subgraph.scores_by_node(compute_betweenness(subgraph.adj(), self.num_threads));
        let proximity = subgraph.scores_by_node(compute_proximity(subgraph.adj(), self.alpha));

        Ok(ComponentReport {
            degree: top_ranked(&degree, |a, b| b.cmp(a)),
            closeness: top_ranked(&farness, |a, b| a.cmp(b)),
            betweenness: top_ranked(&betweenness, |a, b| b.total_cmp(a)),
            proximity: top_ranked(&proximity, |a, b| b.total_cmp(a)),
            component,
        })
    }
}

impl Default for Centrality {
    fn default() -> Self {
        Self::new()
    }
}

/// The ranked centers of one component, one list per metric, each capped at
/// [`TOP_K`](crate::rank::TOP_K) ids and ordered by descending desirability.
#[derive(Clone, Debug)]
pub struct ComponentReport<T> {
    /// The component these rankings cover.
    pub component: Component<T>,
    /// Nodes with the most incident edges.
    pub degree: Vec<T>,
    /// Nodes with the smallest farness.
    pub closeness: Vec<T>,
    /// Nodes lying on the most shortest paths between other pairs.
    pub betweenness: Vec<T>,
    /// Nodes with the highest level-damped proximity score.
    pub proximity: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    fn graph_of(edges: &[(u32, u32)]) -> Graph<u32> {
        Graph::from_edges(edges.iter().map(|&(u, v)| Edge::new(u, v)))
    }

    fn single_component(graph: &Graph<u32>) -> Component<u32> {
        let mut components = partition(graph).unwrap();
        assert_eq!(components.len(), 1);
        components.remove(0)
    }

    #[test]
    fn path_graph_degree() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let component = single_component(&graph);
        let centrality = Centrality::new();

        let scores = centrality.degree_centrality(&graph, &component).unwrap();
        assert_eq!(scores[&1], 1);
        assert_eq!(scores[&2], 2);
        assert_eq!(scores[&3], 2);
        assert_eq!(scores[&4], 2);
        assert_eq!(scores[&5], 1);

        // The tied interior nodes rank first, in ascending id order.
        let centers = centrality.degree_centers(&graph, &component).unwrap();
        assert_eq!(centers, vec![2, 3, 4, 1, 5]);
    }

    #[test]
    fn path_graph_closeness() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let component = single_component(&graph);
        let centrality = Centrality::new();

        let farness = centrality.closeness_centrality(&graph, &component).unwrap();
        assert_eq!(farness[&1], 10);
        assert_eq!(farness[&2], 7);
        assert_eq!(farness[&3], 6);

        // The midpoint has minimal farness.
        let centers = centrality.closeness_centers(&graph, &component).unwrap();
        assert_eq!(centers[0], 3);

        let minimum = farness.values().min().copied().unwrap();
        assert_eq!(farness[&centers[0]], minimum);
    }

    #[test]
    fn path_graph_betweenness() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let component = single_component(&graph);
        let centrality = Centrality::new();

        let scores = centrality
            .betweenness_centrality(&graph, &component)
            .unwrap();
        assert_eq!(scores[&1], 0.0);
        assert_eq!(scores[&2], 3.0);
        assert_eq!(scores[&3], 4.0);
        assert_eq!(scores[&4], 3.0);
        assert_eq!(scores[&5], 0.0);

        let centers = centrality
            .betweenness_centers(&graph, &component)
            .unwrap();
        assert_eq!(centers, vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn star_graph_all_metrics_pick_the_center() {
        let graph = graph_of(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        let component = single_component(&graph);
        let centrality = Centrality::new();

        assert_eq!(
            centrality.degree_centers(&graph, &component).unwrap()[0],
            0
        );
        assert_eq!(
            centrality.closeness_centers(&graph, &component).unwrap()[0],
            0
        );

        // The center lies on the single shortest path of every one of the C(5, 2) leaf pairs.
        let betweenness = centrality
            .betweenness_centrality(&graph, &component)
            .unwrap();
        assert_eq!(betweenness[&0], 10.0);
        for leaf in 1..=5 {
            assert_eq!(betweenness[&leaf], 0.0);
        }
    }

    #[test]
    fn two_triangles_are_isolated_from_each_other() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)]);
        let reports = Centrality::new().analyze(&graph).unwrap();

        assert_eq!(reports.len(), 2);

        // All degrees tie at 2, so every ranking falls back to ascending node id; a triangle
        // has no intermediate shortest paths.
        assert_eq!(reports[0].degree, vec![1, 2, 3]);
        assert_eq!(reports[0].betweenness, vec![1, 2, 3]);
        assert_eq!(reports[1].degree, vec![4, 5, 6]);

        let component = &reports[1].component;
        let betweenness = Centrality::new()
            .betweenness_centrality(&graph, component)
            .unwrap();
        assert!(betweenness.values().all(|&total| total == 0.0));
    }

    #[test]
    fn single_node_component_has_zero_betweenness() {
        let graph = graph_of(&[(7, 7)]);
        let component = single_component(&graph);

        let scores = Centrality::new()
            .betweenness_centrality(&graph, &component)
            .unwrap();
        assert_eq!(scores[&7], 0.0);
    }

    #[test]
    fn proximity_prefers_the_path_midpoint() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let component = single_component(&graph);

        let centers = Centrality::new()
            .proximity_centers(&graph, &component)
            .unwrap();
        assert_eq!(centers[0], 3);
    }

    #[test]
    fn proximity_shrinks_with_alpha() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let component = single_component(&graph);

        let high = Centrality::with_alpha(0.9)
            .unwrap()
            .proximity_centrality(&graph, &component)
            .unwrap();
        let low = Centrality::with_alpha(0.1)
            .unwrap()
            .proximity_centrality(&graph, &component)
            .unwrap();

        for (node, score) in &high {
            assert!(score > &low[node]);
        }
    }

    #[test]
    fn alpha_bounds_are_rejected() {
        for alpha in [0.0, 1.0, -0.3, 1.5] {
            assert!(
                matches!(
                    Centrality::with_alpha(alpha),
                    Err(GraphError::InvalidAlpha(_))
                ),
                "alpha {alpha} should be rejected"
            );
        }
    }

    #[test]
    fn default_alpha() {
        assert_eq!(Centrality::new().alpha(), DEFAULT_ALPHA);
    }

    #[test]
    fn analyze_rejects_an_empty_graph() {
        let graph: Graph<u32> = Graph::new();

        assert!(matches!(
            Centrality::new().analyze(&graph),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn analyze_bundles_all_four_rankings() {
        let graph = graph_of(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        let reports = Centrality::new().num_threads(2).analyze(&graph).unwrap();

        assert_eq!(reports.len(), 1);
        let report = &reports[0];

        assert_eq!(report.component.len(), 5);
        assert_eq!(report.degree, vec![2, 3, 4, 1, 5]);
        assert_eq!(report.closeness, vec![3, 2, 4, 1, 5]);
        assert_eq!(report.betweenness, vec![3, 2, 4, 1, 5]);
        assert_eq!(report.proximity[0], 3);
    }
}
