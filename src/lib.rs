//! aco-tour - Ant Colony Optimization for closed tours over 2D points
//!
//! A colony of ants repeatedly builds round trips through a fixed set of
//! nodes, choosing each next node by pheromone intensity and inverse
//! distance. After every iteration the pheromone matrix is replaced by an
//! evaporated and reinforced copy, so short edges attract more ants over time.
//!
//! # Module Structure
//!
//! - [`node`] - Immutable points and the text node-list parser
//! - [`tour`] - Closed tours and their lengths
//! - [`pheromone`] - Symmetric pheromone matrix and the update rule
//! - [`ant`] - Per-ant tour construction and roulette-wheel sampling
//! - [`colony`] - Simulator orchestrating construct, select, update, reset
//! - [`batch`] - Fixed-budget runs over several seeded colonies

pub mod ant;
pub mod batch;
pub mod colony;
pub mod node;
pub mod pheromone;
pub mod tour;

pub use ant::{Advance, Ant, AntState, Progress};
pub use batch::{BatchConfig, BatchError, BatchReport, BatchRunner};
pub use colony::{ColonyConfig, ColonyError, ColonySimulator};
pub use node::{parse_nodes, Node, NodeId, NodeParseError};
pub use pheromone::PheromoneMatrix;
pub use tour::Tour;
