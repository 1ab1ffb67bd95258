//! A module for performing the multi-threaded computation of closeness farness.

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

/// Sums the BFS distances from `source` to every other node in the component.
///
/// A component is reachability-closed, so every node is discovered and every distance is
/// finite.
fn farness_for_node(source: usize, adj: &[Vec<LocalIndex>]) -> u64 {
    let num_nodes = adj.len();

    let mut distance: Vec<i64> = vec![-1; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut farness = 0;

    distance[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &next in &adj[current] {
            let next = next as usize;
            if distance[next] < 0 {
                distance[next] = distance[current] + 1;
                farness += distance[next] as u64;
                queue.push_back(next);
            }
        }
    }

    farness
}

/// The worker task: claims source nodes off the shared counter until none remain, recording
/// each source's farness in a worker-local vector that the caller merges.
fn closeness_task(next_source: &AtomicUsize, adj: &[Vec<LocalIndex>]) -> Vec<u64> {
    let num_nodes = adj.len();
    let mut farness: Vec<u64> = vec![0; num_nodes];

    loop {
        let source = next_source.fetch_add(1, Ordering::Relaxed);
        if source >= num_nodes {
            break;
        }

        farness[source] = farness_for_node(source, adj);
    }

    farness
}

/// Computes the farness (sum of shortest-path distances to all other nodes) of every node in
/// the component, one BFS per source spread across a pool of workers.
pub(crate) fn compute_closeness(adj: &[Vec<LocalIndex>], num_threads: usize) -> Vec<u64> {
    let num_nodes = adj.len();
    let num_threads = num_threads
        .clamp(MIN_NUM_THREADS, MAX_NUM_THREADS)
        .min(num_nodes.max(MIN_NUM_THREADS));

    let start = Instant::now();
    let next_source = AtomicUsize::new(0);
    let mut farness: Vec<u64> = vec![0; num_nodes];

    thread::scope(|scope| {
        let handles: Vec<_> = (0..num_threads)
            .map(|_| scope.spawn(|| closeness_task(&next_source, adj)))
            .collect();

        for handle in handles {
            let local = match handle.join() {
                Ok(local) => local,
                Err(payload) => panic::resume_unwind(payload),
            };

            // Each source was claimed by exactly one worker, so the merge is a plain sum.
            for (total, value) in farness.iter_mut().zip(local) {
                *total += value;
            }
        }
    });

    debug!(
        num_nodes,
        num_threads,
        elapsed = ?start.elapsed(),
        "computed closeness farness"
    );

    farness
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_farness() {
        // 0 - 1 - 2 - 3 - 4
        let adj = vec![vec![1], vec![0, 2], vec![1, 3], vec![2, 4], vec![3]];

        let farness = compute_closeness(&adj, 2);

        assert_eq!(farness, vec![10, 7, 6, 7, 10]);
    }

    #[test]
    fn single_node_has_zero_farness() {
        let adj: Vec<Vec<LocalIndex>> = vec![vec![]];

        assert_eq!(compute_closeness(&adj, 4), vec![0]);
    }

    #[test]
    fn worker_count_does_not_change_the_result() {
        let adj = vec![vec![1, 2], vec![0, 2], vec![0, 1, 3], vec![2]];

        let sequential = compute_closeness(&adj, 1);
        let parallel = compute_closeness(&adj, 8);

        assert_eq!(sequential, parallel);
    }
}
