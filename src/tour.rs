//! Completed tours and tour-length helpers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::node::{distance, Node, NodeId};

/// A closed tour produced by one ant.
///
/// `path` visits every node exactly once and implicitly returns to
/// `path[0]`; `distance` includes that closing edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tour {
    pub path: Vec<NodeId>,
    pub distance: f64,
}

impl Tour {
    /// Creates a new tour.
    pub fn new(path: Vec<NodeId>, distance: f64) -> Self {
        Self { path, distance }
    }

    /// Number of nodes visited.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the tour visits no node.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Iterates over the traversed edges, closing edge last.
    ///
    /// A two-node tour yields its single edge twice.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        let n = self.path.len();
        (0..n).map(move |i| (self.path[i], self.path[(i + 1) % n]))
    }

    /// Returns true if the path is a permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.path.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &id in &self.path {
            if id >= n || seen[id] {
                return false;
            }
            seen[id] = true;
        }
        true
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dist={:.4} path={:?}", self.distance, self.path)
    }
}

/// Length of the closed tour through `path`, including the edge back to the start.
pub fn tour_length(nodes: &[Node], path: &[NodeId]) -> f64 {
    if path.len() < 2 {
        return 0.0;
    }
    let n = path.len();
    (0..n)
        .map(|i| distance(&nodes[path[i]], &nodes[path[(i + 1) % n]]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Node> {
        Node::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn perimeter_length() {
        assert!((tour_length(&square(), &[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn crossing_length() {
        let expected = 2.0 + 2.0 * 2f64.sqrt();
        assert!((tour_length(&square(), &[0, 2, 1, 3]) - expected).abs() < 1e-10);
    }

    #[test]
    fn two_node_tour_counts_edge_twice() {
        let nodes = Node::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
        assert!((tour_length(&nodes, &[1, 0]) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn edges_include_closing_edge() {
        let tour = Tour::new(vec![2, 0, 1], 0.0);
        let edges: Vec<_> = tour.edges().collect();
        assert_eq!(edges, vec![(2, 0), (0, 1), (1, 2)]);
    }

    #[test]
    fn permutation_check() {
        assert!(Tour::new(vec![2, 0, 1], 0.0).is_permutation_of(3));
        assert!(!Tour::new(vec![2, 0, 0], 0.0).is_permutation_of(3));
        assert!(!Tour::new(vec![0, 1], 0.0).is_permutation_of(3));
        assert!(!Tour::new(vec![0, 1, 3], 0.0).is_permutation_of(3));
    }
}
