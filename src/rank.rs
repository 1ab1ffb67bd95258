//! The shared top-K ranking selector.

use std::{cmp::Ordering, collections::BTreeMap};

/// The fixed number of nodes reported per (component, metric) pair.
///
/// This is a policy constant: components with fewer nodes simply return all of them.
pub const TOP_K: usize = 5;

/// Selects the top [`TOP_K`] node ids from a score map.
///
/// `better` orders scores with the more desirable score first, which lets each metric choose
/// its own direction (descending value for degree, ascending farness for closeness, and so
/// on). Ties at every rank are broken by ascending node id, so the output is fully
/// deterministic.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
///
/// use centra::rank::top_ranked;
///
/// let scores: BTreeMap<u32, u64> = [(1, 10), (2, 30), (3, 20)].into();
///
/// // Descending by score.
/// assert_eq!(top_ranked(&scores, |a, b| b.cmp(a)), vec![2, 3, 1]);
/// ```
pub fn top_ranked<T, S, F>(scores: &BTreeMap<T, S>, mut better: F) -> Vec<T>
where
    T: Copy + Ord,
    F: FnMut(&S, &S) -> Ordering,
{
    let mut entries: Vec<(&T, &S)> = scores.iter().collect();
    entries.sort_by(|(a_id, a_score), (b_id, b_score)| {
        better(a_score, b_score).then_with(|| a_id.cmp(b_id))
    });

    entries.into_iter().take(TOP_K).map(|(id, _)| *id).collect()
}
