//! Centra is a small toolkit for ranking the structurally most important nodes of an
//! undirected graph built from a static edge list.
//!
//! Four metrics are computed per connected component: degree, closeness (ranked by farness),
//! betweenness (Brandes' algorithm) and a BFS-level proximity score damped by a caller-supplied
//! alpha. Each metric reports its top five nodes with deterministic tie-breaking.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure, built from
//! [`Edge`](edge::Edge) values or parsed from an edge-list stream, and the
//! [`Centrality`](centrality::Centrality) engine which evaluates it.
//!
//! ```rust
//! use centra::centrality::Centrality;
//! use centra::graph::Graph;
//!
//! // Parse an edge list: one `u v` record per line.
//! let graph = Graph::from_edge_list("0 1\n0 2\n0 3\n1 2\n".as_bytes())?;
//!
//! // Partition the graph and rank every component by all four metrics.
//! let centrality = Centrality::with_alpha(0.5)?;
//! for report in centrality.analyze(&graph)? {
//!     println!("degree centers: {:?}", report.degree);
//!     println!("closeness centers: {:?}", report.closeness);
//!     println!("betweenness centers: {:?}", report.betweenness);
//!     println!(
//!         "proximity centers (alpha = {}): {:?}",
//!         centrality.alpha(),
//!         report.proximity
//!     );
//! }
//! # Ok::<(), centra::error::GraphError>(())
//! ```

mod betweenness;
mod closeness;
mod proximity;

pub mod centrality;
pub mod component;
pub mod edge;
pub mod error;
pub mod graph;
pub mod rank;
