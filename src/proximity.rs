//! A module for computing BFS-level proximity scores.
//!
//! This is a level-weighted proximity proxy rather than the classical Katz walk-counting
//! index: every reachable node contributes exactly once, weighted by `alpha ^ level` where
//! `level` is its BFS depth from the source.

use std::collections::VecDeque;

use crate::component::LocalIndex;

/// Accumulates `alpha ^ level(v)` over every node `v` discovered from `source`.
fn proximity_for_node(source: usize, adj: &[Vec<LocalIndex>], alpha: f64) -> f64 {
    let num_nodes = adj.len();

    let mut level: Vec<i32> = vec![-1; num_nodes];
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut score = 0.0;

    level[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &next in &adj[current] {
            let next = next as usize;
            if level[next] < 0 {
                level[next] = level[current] + 1;
                score += alpha.powi(level[next]);
                queue.push_back(next);
            }
        }
    }

    score
}

/// Computes the proximity score of every node in the component, one BFS per source.
///
/// The caller is responsible for validating `alpha` against the open interval (0, 1).
pub(crate) fn compute_proximity(adj: &[Vec<LocalIndex>], alpha: f64) -> Vec<f64> {
    (0..adj.len())
        .map(|source| proximity_for_node(source, adj, alpha))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_weights_leaves_by_level() {
        // Center 0 with 3 leaves.
        let adj = vec![vec![1, 2, 3], vec![0], vec![0], vec![0]];

        let scores = compute_proximity(&adj, 0.5);

        // Center sees 3 nodes at level 1; each leaf sees the center at level 1 and the other
        // two leaves at level 2.
        assert_eq!(scores[0], 1.5);
        assert_eq!(scores[1], 1.0);
        assert_eq!(scores[2], 1.0);
        assert_eq!(scores[3], 1.0);
    }

    #[test]
    fn path_middle_scores_highest() {
        // 0 - 1 - 2 - 3 - 4
        let adj = vec![vec![1], vec![0, 2], vec![1, 3], vec![2, 4], vec![3]];

        let scores = compute_proximity(&adj, 0.5);

        let best = scores
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(source, _)| source);
        assert_eq!(best, Some(2));
    }

    #[test]
    fn scores_shrink_as_alpha_decreases() {
        let adj = vec![vec![1], vec![0, 2], vec![1, 3], vec![2, 4], vec![3]];

        let high = compute_proximity(&adj, 0.8);
        let low = compute_proximity(&adj, 0.2);

        for (h, l) in high.iter().zip(&low) {
            assert!(h > l);
        }
    }

    #[test]
    fn single_node_scores_zero() {
        let adj: Vec<Vec<LocalIndex>> = vec![vec![]];

        assert_eq!(compute_proximity(&adj, 0.5), vec![0.0]);
    }
}
