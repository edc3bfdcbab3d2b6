//! Parameters of a colony run.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ColonyError;

/// Immutable parameters of a colony run.
///
/// `alpha` and `beta` weight pheromone against inverse distance when an ant
/// picks its next node, `rho` is the fraction of pheromone evaporated per
/// contributing tour, and `tau0` seeds every edge of the initial matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ColonyConfig {
    /// Pheromone exponent α.
    pub alpha: f64,
    /// Heuristic (inverse distance) exponent β.
    pub beta: f64,
    /// Evaporation fraction ρ in `[0, 1]`.
    pub rho: f64,
    /// Initial pheromone on every edge.
    pub tau0: f64,
    /// Number of ants building a tour each iteration.
    pub ant_count: usize,
    /// Lower bound applied to every edge after an update.
    ///
    /// `0.0` disables it and leaves edges no tour traversed at zero, which can
    /// starve an ant of candidates on larger instances.
    pub min_pheromone: f64,
}

impl ColonyConfig {
    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation fraction.
    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_tau0(mut self, tau0: f64) -> Self {
        self.tau0 = tau0;
        self
    }

    /// Sets the number of ants.
    pub fn with_ant_count(mut self, ant_count: usize) -> Self {
        self.ant_count = ant_count;
        self
    }

    /// Sets the pheromone floor.
    pub fn with_min_pheromone(mut self, min_pheromone: f64) -> Self {
        self.min_pheromone = min_pheromone;
        self
    }

    /// Checks every parameter, reporting the first one out of range.
    pub fn validate(&self) -> Result<(), ColonyError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("rho", self.rho),
            ("tau0", self.tau0),
            ("min_pheromone", self.min_pheromone),
        ] {
            if !value.is_finite() {
                return Err(ColonyError::invalid(name, format!("must be finite, got {value}")));
            }
        }

        if self.alpha < 0.0 {
            return Err(ColonyError::invalid(
                "alpha",
                format!("must not be negative, got {}", self.alpha),
            ));
        }
        if self.beta < 0.0 {
            return Err(ColonyError::invalid(
                "beta",
                format!("must not be negative, got {}", self.beta),
            ));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(ColonyError::invalid(
                "rho",
                format!("must lie in [0, 1], got {}", self.rho),
            ));
        }
        if self.tau0 <= 0.0 {
            return Err(ColonyError::invalid(
                "tau0",
                format!("must be positive, got {}", self.tau0),
            ));
        }
        if self.min_pheromone < 0.0 {
            return Err(ColonyError::invalid(
                "min_pheromone",
                format!("must not be negative, got {}", self.min_pheromone),
            ));
        }
        if self.ant_count < 1 {
            return Err(ColonyError::invalid("ant_count", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            alpha: 1.5,
            beta: 2.0,
            rho: 0.5,
            tau0: 0.01,
            ant_count: 20,
            min_pheromone: 1e-6,
        }
    }
}

impl fmt::Display for ColonyConfig {
    /// Run label, e.g. `alpha=1.5,beta=2,rho=0.5,tau0=0.01`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alpha={},beta={},rho={},tau0={}",
            self.alpha, self.beta, self.rho, self.tau0
        )
    }
}
