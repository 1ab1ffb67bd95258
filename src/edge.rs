//! A module for working with edges.

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// A pair of node ids representing an undirected graph edge. The `source`-`target` nomenclature
/// carries no direction, it only reflects the order the endpoints appeared in the edge record.
#[derive(Clone, Copy, Debug, Eq)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from two node ids.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    /// assert_eq!(edge, Edge::new(2, 1));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint of the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    /// assert_eq!(edge.source(), &1);
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the second endpoint of the edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use centra::edge::Edge;
    ///
    /// let edge = Edge::new(1, 2);
    /// assert_eq!(edge.target(), &2);
    /// ```
    pub fn target(&self) -> &T {
        &self.target
    }
}

//
// Trait implementations
//

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.source, &self.target);
        let (c, d) = (&other.source, &other.target);

        a == d && b == c || a == c && b == d
    }
}

impl<T: Hash + Ord> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (a, b) = (&self.source, &self.target);

        // This ensures the hash is the same for (a, b) as it is for (b, a).
        match a.cmp(b) {
            Ordering::Greater => {
                b.hash(state);
                a.hash(state);
            }
            _ => {
                a.hash(state);
                b.hash(state);
            }
        }
    }
}
