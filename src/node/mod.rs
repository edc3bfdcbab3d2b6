//! Tour nodes: immutable 2D points identified by their input index.
//!
//! A [`Node`] never changes once a run starts. The colony only ever refers to
//! nodes through their [`NodeId`], which is the position of the node in the
//! list handed to the simulator.

mod error;
mod parse;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use error::NodeParseError;
pub use parse::parse_nodes;

/// Index of a node in the simulator's node list.
pub type NodeId = usize;

/// A point in the plane that every tour must visit exactly once.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    pub x: f64,
    pub y: f64,
    pub id: NodeId,
}

impl Node {
    /// Creates a new node.
    pub fn new(x: f64, y: f64, id: NodeId) -> Self {
        Self { x, y, id }
    }

    /// Builds a node list from coordinate pairs, numbering them in order.
    pub fn from_points(points: &[(f64, f64)]) -> Vec<Node> {
        points
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Node::new(x, y, id))
            .collect()
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        distance(self, other)
    }

    /// Returns true if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} ({:.2}, {:.2})", self.id, self.x, self.y)
    }
}

/// Euclidean distance between two nodes.
///
/// Coincident nodes yield `0.0`; callers computing inverse-distance
/// heuristics must cap the result themselves.
pub fn distance(a: &Node, b: &Node) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
