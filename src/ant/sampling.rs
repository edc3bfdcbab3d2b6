//! Roulette-wheel selection over the unvisited candidates of an ant.
//!
//! Weights are normalized into probabilities, sorted in descending order and
//! accumulated. A uniform draw is mapped back to a node through
//! [`search_cumulative`].

use crate::node::NodeId;

/// Upper bound on the inverse-distance heuristic.
///
/// Coincident nodes (distance `0`) get this value instead of infinity.
pub const MAX_HEURISTIC: f64 = 1e6;

/// Inverse-distance heuristic η, capped at [`MAX_HEURISTIC`].
pub fn heuristic(distance: f64) -> f64 {
    if distance > 0.0 {
        (1.0 / distance).min(MAX_HEURISTIC)
    } else {
        MAX_HEURISTIC
    }
}

/// Desirability `τ^α · η^β` of a candidate, bounded so that summing
/// `candidates` of them stays finite.
pub fn desirability(tau: f64, eta: f64, alpha: f64, beta: f64, candidates: usize) -> f64 {
    let limit = (f64::MAX / (2.0 * candidates.max(1) as f64)).sqrt();
    let pheromone = tau.max(0.0).powf(alpha).min(limit);
    let heuristic = eta.powf(beta).min(limit);
    pheromone * heuristic
}

/// Index of the first entry of `cumulative` strictly greater than `r`.
///
/// `cumulative` must be non-decreasing. When rounding leaves the last entry
/// at or below `r`, the last index is returned instead of running off the
/// end. Returns `None` only for an empty slice.
pub fn search_cumulative(cumulative: &[f64], r: f64) -> Option<usize> {
    if cumulative.is_empty() {
        return None;
    }
    let idx = cumulative.partition_point(|&c| c <= r);
    Some(idx.min(cumulative.len() - 1))
}

/// Reusable probability distribution over candidate nodes.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    entries: Vec<(NodeId, f64)>,
    cumulative: Vec<f64>,
}

impl Distribution {
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty distribution able to hold `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            cumulative: Vec::with_capacity(capacity),
        }
    }

    /// Drops all candidates, keeping the allocations.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cumulative.clear();
    }

    /// Adds a candidate with an unnormalized weight.
    pub fn push(&mut self, node: NodeId, weight: f64) {
        self.entries.push((node, weight));
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Normalizes the weights and prepares the cumulative array.
    ///
    /// Candidates end up sorted by probability, highest first; equal
    /// probabilities keep insertion order. Returns the weight total, or
    /// `None` if it is not a positive finite number, in which case nothing
    /// can be sampled.
    pub fn normalize(&mut self) -> Option<f64> {
        let sigma: f64 = self.entries.iter().map(|&(_, w)| w).sum();
        if !(sigma.is_finite() && sigma > 0.0) {
            self.cumulative.clear();
            return None;
        }

        for entry in &mut self.entries {
            entry.1 /= sigma;
        }
        self.entries.sort_by(|a, b| b.1.total_cmp(&a.1));

        self.cumulative.clear();
        let mut acc = 0.0;
        for &(_, p) in &self.entries {
            acc += p;
            self.cumulative.push(acc);
        }
        Some(sigma)
    }

    /// Sorted `(node, probability)` pairs after [`Distribution::normalize`].
    pub fn entries(&self) -> &[(NodeId, f64)] {
        &self.entries
    }

    /// Cumulative probabilities after [`Distribution::normalize`].
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Maps a uniform draw in `[0, 1)` to a node.
    pub fn sample(&self, r: f64) -> Option<NodeId> {
        search_cumulative(&self.cumulative, r).map(|i| self.entries[i].0)
    }
}
