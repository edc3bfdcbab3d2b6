//! Fixed-budget batch runs over several independent colonies.
//!
//! A [`BatchRunner`] owns `simulators` colonies built from the same nodes and
//! configuration, each with its own seed (`seed + k` for the k-th colony).
//! Every iteration steps each colony once and records its iteration-best
//! distance, which yields the table a [`BatchReport`] writes as a CSV log.
//!
//! Rendering is left to the caller: [`BatchRunner::run_with`] hands the
//! iteration's tours and the colonies (and so their pheromone matrices) to an
//! observer after every iteration.

mod error;
mod report;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::colony::{ColonyConfig, ColonySimulator};
use crate::node::{parse_nodes, Node};
use crate::tour::Tour;

pub use error::BatchError;
pub use report::BatchReport;

/// Size of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchConfig {
    /// Number of independent colonies.
    pub simulators: usize,
    /// Steps applied to every colony.
    pub iterations: usize,
    /// Seed of the first colony.
    pub seed: u64,
}

impl BatchConfig {
    /// Checks that the batch does at least one step of one colony.
    pub fn validate(&self) -> Result<(), BatchError> {
        if self.simulators < 1 {
            return Err(BatchError::InvalidConfiguration {
                parameter: "simulators",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.iterations < 1 {
            return Err(BatchError::InvalidConfiguration {
                parameter: "iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            simulators: 20,
            iterations: 20,
            seed: 0,
        }
    }
}

/// Drives a set of colonies for a fixed number of iterations.
#[derive(Debug)]
pub struct BatchRunner {
    simulators: Vec<ColonySimulator>,
    iterations: usize,
    label: String,
}

impl BatchRunner {
    /// Builds every colony up front; fails without running anything if any
    /// parameter is invalid.
    pub fn new(
        nodes: Vec<Node>,
        colony: ColonyConfig,
        batch: BatchConfig,
    ) -> Result<Self, BatchError> {
        batch.validate()?;

        let label = colony.to_string();
        let simulators = (0..batch.simulators as u64)
            .map(|k| {
                ColonySimulator::new(nodes.clone(), colony.clone(), batch.seed.wrapping_add(k))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            simulators,
            iterations: batch.iterations,
            label,
        })
    }

    /// Builds a runner from a text node list (see [`parse_nodes`]).
    pub fn from_node_list(
        input: &str,
        colony: ColonyConfig,
        batch: BatchConfig,
    ) -> Result<Self, BatchError> {
        Self::new(parse_nodes(input)?, colony, batch)
    }

    /// The colonies driven by this runner.
    pub fn simulators(&self) -> &[ColonySimulator] {
        &self.simulators
    }

    /// Runs the whole batch.
    pub fn run(self) -> Result<BatchReport, BatchError> {
        self.run_with(|_, _, _| {})
    }

    /// Runs the whole batch, calling `observer` after every iteration with
    /// the 1-based iteration number, each colony's iteration-best tour, and
    /// the colonies themselves.
    pub fn run_with<F>(mut self, mut observer: F) -> Result<BatchReport, BatchError>
    where
        F: FnMut(usize, &[Tour], &[ColonySimulator]),
    {
        let mut rows = Vec::with_capacity(self.iterations);
        let mut best: Option<Tour> = None;

        for iteration in 1..=self.iterations {
            let tours = self
                .simulators
                .iter_mut()
                .map(|sim| sim.step())
                .collect::<Result<Vec<_>, _>>()?;

            for tour in &tours {
                if best.as_ref().map_or(true, |b| tour.distance < b.distance) {
                    best = Some(tour.clone());
                }
            }

            tracing::debug!(
                iteration,
                first_distance = tours[0].distance,
                "batch iteration finished"
            );

            rows.push(tours.iter().map(|t| t.distance).collect());
            observer(iteration, &tours, &self.simulators);
        }

        let best = best.ok_or_else(|| BatchError::InvalidConfiguration {
            parameter: "iterations",
            reason: "must be at least 1".to_string(),
        })?;

        Ok(BatchReport {
            label: self.label,
            rows,
            best,
        })
    }
}
