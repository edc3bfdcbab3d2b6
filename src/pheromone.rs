//! Edge desirability shared by every ant of a colony.
//!
//! The matrix is dense and row-major. Diagonal cells hold
//! [`PheromoneMatrix::SENTINEL`] and are never read as intensities. Off-diagonal
//! cells are non-negative and the matrix stays symmetric.
//!
//! A matrix is never edited while ants are building tours. At the end of an
//! iteration [`PheromoneMatrix::reinforce`] builds a replacement from the
//! finished tours and the simulator swaps it in.

use crate::ant::sampling::MAX_HEURISTIC;
use crate::tour::Tour;

/// Square matrix of pheromone intensities indexed by node id.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    /// Value stored on the diagonal ("no self-edge").
    pub const SENTINEL: f64 = -1.0;

    /// Creates an `n × n` matrix with `tau0` on every edge.
    pub fn uniform(n: usize, tau0: f64) -> Self {
        let mut matrix = Self::filled(n, tau0);
        matrix.mark_diagonal();
        matrix
    }

    fn filled(n: usize, value: f64) -> Self {
        Self {
            n,
            values: vec![value; n * n],
        }
    }

    fn mark_diagonal(&mut self) {
        for i in 0..self.n {
            self.values[i * self.n + i] = Self::SENTINEL;
        }
    }

    /// Number of nodes (rows) covered by the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Intensity on edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        assert!(from < self.n && to < self.n, "edge ({from}, {to}) out of range");
        self.values[from * self.n + to]
    }

    /// Row `from` of the matrix, including its sentinel cell.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.values[from * self.n..(from + 1) * self.n]
    }

    /// Returns true if `M[i][j] == M[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Largest off-diagonal intensity, or `0.0` for matrices without edges.
    pub fn max_intensity(&self) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..self.n {
            for j in 0..self.n {
                if i != j {
                    max = max.max(self.get(i, j));
                }
            }
        }
        max
    }

    /// Builds the next iteration's matrix from this one and the finished tours.
    ///
    /// Every traversed edge `(i, j)`, closing edge included, first collects a
    /// deposit `1 / distance` per tour into `delta`; a zero-length tour
    /// deposits [`MAX_HEURISTIC`] instead. The replacement then
    /// receives `(1 - rho) * M[i][j] + delta[i][j]` once per tour that traverses
    /// the edge, so evaporation is applied per contributing tour rather than
    /// once per iteration. Edges no tour touched end up at `min_pheromone`,
    /// or at zero when the floor is `0.0`. Both directions get identical increments in identical
    /// order, which keeps the result exactly symmetric.
    pub fn reinforce(&self, tours: &[Tour], rho: f64, min_pheromone: f64) -> PheromoneMatrix {
        let n = self.n;
        let mut delta = Self::filled(n, 0.0);

        for tour in tours {
            let deposit = if tour.distance > 0.0 {
                1.0 / tour.distance
            } else {
                MAX_HEURISTIC
            };
            for (i, j) in tour.edges() {
                delta.values[i * n + j] += deposit;
                delta.values[j * n + i] += deposit;
            }
        }

        let mut next = Self::filled(n, 0.0);
        for tour in tours {
            for (i, j) in tour.edges() {
                let contribution = (1.0 - rho) * self.get(i, j) + delta.get(i, j);
                next.values[i * n + j] += contribution;
                next.values[j * n + i] += contribution;
            }
        }

        if min_pheromone > 0.0 {
            for v in &mut next.values {
                *v = v.max(min_pheromone);
            }
        }
        next.mark_diagonal();
        next
    }
}
