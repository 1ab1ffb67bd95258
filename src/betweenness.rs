//! A module for performing the multi-threaded computation of betweenness.

use std::{
    collections::VecDeque,
    panic,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
    time::Instant,
};

use tracing::debug;

use crate::{
    centrality::{MAX_NUM_THREADS, MIN_NUM_THREADS},
    component::LocalIndex,
};

/// One Brandes iteration: BFS from `source` counting shortest paths and recording shortest-path
/// predecessors, then a backward pass over the finish-order stack distributing dependency
/// credit onto those predecessors.
///
/// This is Brandes' "Algorithm 1: Betweenness centrality in unweighted graphs",
/// <http://snap.stanford.edu/class/cs224w-readings/brandes01centrality.pdf>, page 10.
fn accumulate_for_source(source: usize, adj: &[Vec<LocalIndex>], totals: &mut [f64]) {
    let num_nodes = adj.len();

    let mut distance: Vec<i64> = vec![-1; num_nodes];
    let mut sigma: Vec<f64> = vec![0.0; num_nodes];
    let mut predecessors: Vec<Vec<LocalIndex>> = vec![Vec::new(); num_nodes];
    let mut finish_order: Vec<usize> = Vec::with_capacity(num_nodes);
    let mut queue: VecDeque<usize> = VecDeque::new();

    distance[source] = 0;
    sigma[source] = 1.0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        finish_order.push(current);

        for &next in &adj[current] {
            let next = next as usize;

            // First discovery fixes the shortest distance.
            if distance[next] < 0 {
                distance[next] = distance[current] + 1;
                queue.push_back(next);
            }

            // Any neighbor sitting one level further gains this node as a shortest-path
            // predecessor and inherits its path count.
            if distance[next] == distance[current] + 1 {
                sigma[next] += sigma[current];
                predecessors[next].push(current as LocalIndex);
            }
        }
    }

    let mut dependency: Vec<f64> = vec![0.0; num_nodes];

    for &current in finish_order.iter().rev() {
        for &predecessor in &predecessors[current] {
            let predecessor = predecessor as usize;
            dependency[predecessor] +=
                sigma[predecessor] / sigma[current] * (1.0 + dependency[current]);
        }

        if current != source {
            totals[current] += dependency[current];
        }
    }
}

/// The worker task: claims source nodes off the shared counter until none remain, accumulating
/// dependencies into a worker-local vector that the caller merges.
fn betweenness_task(next_source: &AtomicUsize, adj: &[Vec<LocalIndex>]) -> Vec<f64> {
    let num_nodes = adj.len();
    let mut totals: Vec<f64> = vec![0.0; num_nodes];

    loop {
        let source = next_source.fetch_add(1, Ordering::Relaxed);
        if source >= num_nodes {
            break;
        }

        accumulate_for_source(source, adj, &mut totals);
    }

    totals
}

/// Computes the betweenness centrality of every node in the component, one Brandes iteration
/// per source spread across a pool of workers.
pub(crate) fn compute_betweenness(adj: &[Vec<LocalIndex>], num_threads: usize) -> Vec<f64> {
    let num_nodes = adj.len();
    let num_threads = num_threads
        .clamp(MIN_NUM_THREADS, MAX_NUM_THREADS)
        .min(num_nodes.max(MIN_NUM_THREADS));

    let start = Instant::now();
    let next_source = AtomicUsize::new(0);
    let mut totals: Vec<f64> = vec![0.0; num_nodes];

    thread::scope(|scope| {
        let handles: Vec<_> = (0..num_threads)
            .map(|_| scope.spawn(|| betweenness_task(&next_source, adj)))
            .collect();

        for handle in handles {
            let local = match handle.join() {
                Ok(local) => local,
                Err(payload) => panic::resume_unwind(payload),
            };

            for (total, value) in totals.iter_mut().zip(local) {
                *total += value;
            }
        }
    });

    // The graph is undirected, so every unordered pair contributed once per endpoint.
    for total in totals.iter_mut() {
        *total /= 2.0;
    }

    debug!(
        num_nodes,
        num_threads,
        elapsed = ?start.elapsed(),
        "computed betweenness"
    );

    totals
}
