//! Colony-level orchestration of the ACO search.
//!
//! A [`ColonySimulator`] owns the node list, the current pheromone matrix, a
//! pool of [`Ant`]s and the random source. One call to
//! [`ColonySimulator::step`] is one full iteration:
//!
//! 1. **Construct**: every ant builds a closed tour, reading the matrix
//!    snapshot taken at the start of the iteration.
//! 2. **Select**: the shortest tour is the iteration-best (first ant wins ties).
//! 3. **Update**: the matrix is replaced by
//!    [`PheromoneMatrix::reinforce`] over all tours.
//! 4. **Reset**: every ant restarts from a fresh random node.
//!
//! Ants only ever borrow the matrix immutably during construction, and the
//! replacement is assigned after the last ant has finished, so reads and the
//! write can never overlap.
//!
//! # Module Structure
//!
//! - [`config`] - Immutable run parameters and their validation
//! - [`error`] - Construction and invariant errors

mod config;
mod error;


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ant::Ant;
use crate::node::Node;
use crate::pheromone::PheromoneMatrix;
use crate::tour::Tour;

pub use config::ColonyConfig;
pub use error::ColonyError;

/// Ant colony searching for short closed tours over a fixed node set.
///
/// The random source is a type parameter so tests can inject a
/// deterministic generator; [`ColonySimulator::new`] uses a seeded [`StdRng`].
#[derive(Debug)]
pub struct ColonySimulator<R = StdRng> {
    nodes: Vec<Node>,
    config: ColonyConfig,
    pheromone: PheromoneMatrix,
    ants: Vec<Ant>,
    rng: R,
    iteration: usize,
}

impl ColonySimulator<StdRng> {
    /// Creates a simulator seeded for reproducible runs.
    pub fn new(nodes: Vec<Node>, config: ColonyConfig, seed: u64) -> Result<Self, ColonyError> {
        Self::with_rng(nodes, config, StdRng::seed_from_u64(seed))
    }

    /// Creates a seeded simulator from raw coordinate pairs.
    pub fn from_points(
        points: &[(f64, f64)],
        config: ColonyConfig,
        seed: u64,
    ) -> Result<Self, ColonyError> {
        Self::new(Node::from_points(points), config, seed)
    }
}

impl<R: Rng> ColonySimulator<R> {
    /// Creates a simulator drawing all randomness from `rng`.
    ///
    /// Fails with [`ColonyError::InvalidConfiguration`] if the configuration is
    /// out of range, fewer than two nodes are given, a coordinate is not
    /// finite, or a node's id differs from its index.
    pub fn with_rng(nodes: Vec<Node>, config: ColonyConfig, mut rng: R) -> Result<Self, ColonyError> {
        config.validate()?;
        validate_nodes(&nodes)?;

        let n = nodes.len();
        let pheromone = PheromoneMatrix::uniform(n, config.tau0);
        let ants = (0..config.ant_count)
            .map(|_| Ant::new(rng.gen_range(0..n), n))
            .collect();

        tracing::debug!(nodes = n, ants = config.ant_count, %config, "colony created");

        Ok(Self {
            nodes,
            config,
            pheromone,
            ants,
            rng,
            iteration: 0,
        })
    }

    /// Runs one full iteration and returns its best tour.
    ///
    /// If an ant reports an internal inconsistency the error is returned
    /// unchanged, the matrix is left untouched, and every ant is rewound to
    /// the start of its tour.
    pub fn step(&mut self) -> Result<Tour, ColonyError> {
        let tours = match self.construct_tours() {
            Ok(tours) => tours,
            Err(e) => {
                for ant in &mut self.ants {
                    let start = ant.start();
                    ant.reset(start);
                }
                return Err(e);
            }
        };

        let best = tours[iteration_best(&tours)].clone();

        self.pheromone =
            self.pheromone
                .reinforce(&tours, self.config.rho, self.config.min_pheromone);

        let n = self.nodes.len();
        for ant in &mut self.ants {
            ant.reset(self.rng.gen_range(0..n));
        }
        self.iteration += 1;

        tracing::debug!(
            iteration = self.iteration,
            best_distance = best.distance,
            ants = tours.len(),
            "colony step finished"
        );
        Ok(best)
    }

    /// Runs `iterations` steps and returns the shortest tour among them.
    ///
    /// Returns `Ok(None)` when `iterations` is zero.
    pub fn run(&mut self, iterations: usize) -> Result<Option<Tour>, ColonyError> {
        let mut best: Option<Tour> = None;
        for _ in 0..iterations {
            let tour = self.step()?;
            if best.as_ref().map_or(true, |b| tour.distance < b.distance) {
                best = Some(tour);
            }
        }
        Ok(best)
    }

    fn construct_tours(&mut self) -> Result<Vec<Tour>, ColonyError> {
        let Self {
            nodes,
            config,
            pheromone,
            ants,
            rng,
            ..
        } = self;

        let mut tours = Vec::with_capacity(ants.len());
        for (idx, ant) in ants.iter_mut().enumerate() {
            let tour = ant.complete_tour(nodes, pheromone, config, &mut *rng)?;
            tracing::trace!(ant = idx, distance = tour.distance, "tour completed");
            tours.push(tour);
        }
        Ok(tours)
    }

    /// Nodes of the run, indexed by id.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The current pheromone matrix.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Parameters of the run.
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    /// Ants in the order their tours are evaluated.
    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Number of ants.
    pub fn ant_count(&self) -> usize {
        self.ants.len()
    }

    /// Number of completed steps.
    pub fn iteration(&self) -> usize {
        self.iteration
    }
}

/// Index of the shortest tour; the earliest one wins ties.
///
/// # Panics
///
/// Panics if `tours` is empty.
pub(crate) fn iteration_best(tours: &[Tour]) -> usize {
    let mut best = 0;
    for (i, tour) in tours.iter().enumerate().skip(1) {
        if tour.distance < tours[best].distance {
            best = i;
        }
    }
    best
}

fn validate_nodes(nodes: &[Node]) -> Result<(), ColonyError> {
    if nodes.len() < 2 {
        return Err(ColonyError::invalid(
            "nodes",
            format!("must contain at least 2 entries, got {}", nodes.len()),
        ));
    }
    for (idx, node) in nodes.iter().enumerate() {
        if !node.is_finite() {
            return Err(ColonyError::invalid(
                "nodes",
                format!("entry {idx} has a non-finite coordinate"),
            ));
        }
        if node.id != idx {
            return Err(ColonyError::invalid(
                "nodes",
                format!("entry {idx} has id {}", node.id),
            ));
        }
    }
    Ok(())
}
