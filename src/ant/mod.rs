//! Tour construction by a single ant.
//!
//! An [`Ant`] is an explicit state machine. Each call to [`Ant::advance`]
//! performs exactly one move:
//!
//! 1. **Selecting**: while unvisited nodes remain, pick one by roulette-wheel
//!    selection weighted by `τ^α · η^β` and walk to it.
//! 2. **Closing**: once every node is in the tabu list, walk back to the start
//!    node. This move is reported as progress, not completion.
//! 3. **Done**: the next call reports the finished [`Tour`]. Later calls keep
//!    returning the same tour without touching the state.
//!
//! The ant never stores the pheromone matrix. It is lent to every
//! [`Ant::advance`] call, so the simulator can only replace it between
//! iterations, once no ant holds a borrow.

pub mod sampling;

use rand::Rng;

use crate::colony::{ColonyConfig, ColonyError};
use crate::node::{distance, Node, NodeId};
use crate::pheromone::PheromoneMatrix;
use crate::tour::Tour;

use sampling::{desirability, heuristic, Distribution};

/// Phase of an ant's tour construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    /// Unvisited nodes remain.
    Selecting,
    /// All nodes visited; the return to the start node is pending.
    Closing,
    /// The tour is closed and reported.
    Done,
}

/// Snapshot of an unfinished tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Node the ant stands on after the move.
    pub position: NodeId,
    /// Number of distinct nodes visited so far.
    pub visited: usize,
    /// Distance walked so far.
    pub distance: f64,
}

/// Outcome of one [`Ant::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Continue(Progress),
    Done(Tour),
}

impl Advance {
    /// Returns true for the terminal outcome.
    pub fn is_done(&self) -> bool {
        matches!(self, Advance::Done(_))
    }
}

/// Tour-building agent.
#[derive(Debug, Clone)]
pub struct Ant {
    position: NodeId,
    tabu: Vec<NodeId>,
    visited: Vec<bool>,
    distance: f64,
    done: bool,
    distribution: Distribution,
}

impl Ant {
    /// Creates an ant standing on `start` in a graph of `n` nodes.
    ///
    /// # Panics
    ///
    /// Panics if `start >= n`.
    pub fn new(start: NodeId, n: usize) -> Self {
        assert!(start < n, "start node {start} out of range for {n} nodes");
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut tabu = Vec::with_capacity(n);
        tabu.push(start);

        Self {
            position: start,
            tabu,
            visited,
            distance: 0.0,
            done: false,
            distribution: Distribution::with_capacity(n),
        }
    }

    /// Starts a fresh tour from `start`, reusing the existing buffers.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a node of the graph the ant was created for.
    pub fn reset(&mut self, start: NodeId) {
        assert!(
            start < self.visited.len(),
            "start node {start} out of range for {} nodes",
            self.visited.len()
        );
        self.visited.iter_mut().for_each(|v| *v = false);
        self.visited[start] = true;
        self.tabu.clear();
        self.tabu.push(start);
        self.position = start;
        self.distance = 0.0;
        self.done = false;
        self.distribution.clear();
    }

    /// Node the tour started from.
    pub fn start(&self) -> NodeId {
        self.tabu[0]
    }

    /// Node the ant currently stands on.
    pub fn position(&self) -> NodeId {
        self.position
    }

    /// Visited nodes in order.
    pub fn path(&self) -> &[NodeId] {
        &self.tabu
    }

    /// Distance walked so far.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Current phase of the state machine.
    pub fn state(&self) -> AntState {
        if self.done {
            AntState::Done
        } else if self.tabu.len() == self.visited.len() {
            AntState::Closing
        } else {
            AntState::Selecting
        }
    }

    /// Performs one move of the state machine.
    ///
    /// `nodes` and `pheromone` must describe the graph the ant was created
    /// for. Returns [`ColonyError::InternalInconsistency`] when the unvisited
    /// candidates carry no usable probability mass.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        nodes: &[Node],
        pheromone: &PheromoneMatrix,
        config: &ColonyConfig,
        rng: &mut R,
    ) -> Result<Advance, ColonyError> {
        let n = self.visited.len();
        let start = self.start();

        if self.tabu.len() == n {
            if self.position == start {
                self.done = true;
                return Ok(Advance::Done(Tour::new(self.tabu.clone(), self.distance)));
            }
            self.distance += distance(&nodes[self.position], &nodes[start]);
            self.position = start;
            return Ok(Advance::Continue(self.progress()));
        }

        let from = self.position;
        let remaining = n - self.tabu.len();

        self.distribution.clear();
        for (candidate, node) in nodes.iter().enumerate() {
            if self.visited[candidate] {
                continue;
            }
            let eta = heuristic(distance(&nodes[from], node));
            let weight = desirability(
                pheromone.get(from, candidate),
                eta,
                config.alpha,
                config.beta,
                remaining,
            );
            self.distribution.push(candidate, weight);
        }

        let inconsistency = ColonyError::InternalInconsistency {
            position: from,
            remaining,
        };
        if self.distribution.normalize().is_none() {
            tracing::warn!(position = from, remaining, "probability mass collapsed");
            return Err(inconsistency);
        }

        let r: f64 = rng.gen();
        let next = self.distribution.sample(r).ok_or(inconsistency)?;

        self.visited[next] = true;
        self.tabu.push(next);
        self.distance += distance(&nodes[from], &nodes[next]);
        self.position = next;

        Ok(Advance::Continue(self.progress()))
    }

    /// Advances until the tour is reported done.
    pub fn complete_tour<R: Rng + ?Sized>(
        &mut self,
        nodes: &[Node],
        pheromone: &PheromoneMatrix,
        config: &ColonyConfig,
        rng: &mut R,
    ) -> Result<Tour, ColonyError> {
        loop {
            if let Advance::Done(tour) = self.advance(nodes, pheromone, config, rng)? {
                return Ok(tour);
            }
        }
    }

    fn progress(&self) -> Progress {
        Progress {
            position: self.position,
            visited: self.tabu.len(),
            distance: self.distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::tour_length;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Always draws `0.0`, so the most probable candidate wins.
    fn greedy_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    fn config(alpha: f64, beta: f64) -> ColonyConfig {
        ColonyConfig::default().with_alpha(alpha).with_beta(beta)
    }

    #[test]
    fn new_ant_is_selecting() {
        let ant = Ant::new(2, 4);
        assert_eq!(ant.start(), 2);
        assert_eq!(ant.position(), 2);
        assert_eq!(ant.path(), &[2]);
        assert_eq!(ant.distance(), 0.0);
        assert_eq!(ant.state(), AntState::Selecting);
    }

    #[test]
    #[should_panic]
    fn start_out_of_range_panics() {
        Ant::new(4, 4);
    }

    #[test]
    fn collinear_nodes_follow_nearest_neighbour() {
        let nodes = Node::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let matrix = PheromoneMatrix::uniform(3, 0.01);
        let cfg = config(1.0, 5.0);
        let mut rng = greedy_rng();
        let mut ant = Ant::new(0, 3);

        let mut last = None;
        while ant.state() == AntState::Selecting {
            last = Some(ant.advance(&nodes, &matrix, &cfg, &mut rng).unwrap());
        }
        assert_eq!(ant.path(), &[0, 1, 2]);
        match last {
            Some(Advance::Continue(p)) => assert!((p.distance - 2.0).abs() < 1e-12),
            other => panic!("unexpected {other:?}"),
        }

        let tour = ant.complete_tour(&nodes, &matrix, &cfg, &mut rng).unwrap();
        assert_eq!(tour.path, vec![0, 1, 2]);
        assert!((tour.distance - 4.0).abs() < 1e-12);
    }

    #[test]
    fn two_nodes_close_without_extra_step() {
        let nodes = Node::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
        let matrix = PheromoneMatrix::uniform(2, 0.01);
        let cfg = ColonyConfig::default();
        let mut rng = greedy_rng();
        let mut ant = Ant::new(0, 2);

        let first = ant.advance(&nodes, &matrix, &cfg, &mut rng).unwrap();
        assert_eq!(
            first,
            Advance::Continue(Progress {
                position: 1,
                visited: 2,
                distance: 5.0
            })
        );
        assert_eq!(ant.state(), AntState::Closing);

        let second = ant.advance(&nodes, &matrix, &cfg, &mut rng).unwrap();
        assert_eq!(
            second,
            Advance::Continue(Progress {
                position: 0,
                visited: 2,
                distance: 10.0
            })
        );

        let third = ant.advance(&nodes, &matrix, &cfg, &mut rng).unwrap();
        assert_eq!(third, Advance::Done(Tour::new(vec![0, 1], 10.0)));
        assert_eq!(ant.state(), AntState::Done);
    }

    #[test]
    fn done_is_idempotent() {
        let nodes = Node::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let matrix = PheromoneMatrix::uniform(3, 0.5);
        let cfg = ColonyConfig::default();
        let mut rng = greedy_rng();
        let mut ant = Ant::new(1, 3);

        let tour = ant.complete_tour(&nodes, &matrix, &cfg, &mut rng).unwrap();
        for _ in 0..3 {
            let again = ant.advance(&nodes, &matrix, &cfg, &mut rng).unwrap();
            assert_eq!(again, Advance::Done(tour.clone()));
        }
        assert_eq!(ant.distance(), tour.distance);
    }

    #[test]
    fn tour_distance_matches_path_length() {
        let nodes = Node::from_points(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (2.0, 7.0),
            (9.0, 3.0),
            (5.0, 5.0),
            (1.0, 8.0),
        ]);
        let matrix = PheromoneMatrix::uniform(nodes.len(), 0.01);
        let cfg = ColonyConfig::default();
        let mut rng = StdRng::seed_from_u64(7);

        for start in 0..nodes.len() {
            let mut ant = Ant::new(start, nodes.len());
            let tour = ant.complete_tour(&nodes, &matrix, &cfg, &mut rng).unwrap();
            assert!(tour.is_permutation_of(nodes.len()));
            assert_eq!(tour.path[0], start);
            assert!((tour.distance - tour_length(&nodes, &tour.path)).abs() < 1e-9);
        }
    }

    #[test]
    fn coincident_nodes_do_not_poison_sampling() {
        let nodes = Node::from_points(&[(0.0, 0.0), (0.0, 0.0), (5.0, 0.0)]);
        let matrix = PheromoneMatrix::uniform(3, 0.01);
        let cfg = ColonyConfig::default();
        let mut rng = greedy_rng();
        let mut ant = Ant::new(0, 3);

        let tour = ant.complete_tour(&nodes, &matrix, &cfg, &mut rng).unwrap();
        assert_eq!(tour.path, vec![0, 1, 2]);
        assert!((tour.distance - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_pheromone_reports_inconsistency() {
        let nodes = Node::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let empty = PheromoneMatrix::uniform(4, 1.0).reinforce(&[], 0.5, 0.0);
        let cfg = config(1.0, 2.0);
        let mut ant = Ant::new(0, 4);

        let err = ant
            .advance(&nodes, &empty, &cfg, &mut greedy_rng())
            .unwrap_err();
        assert_eq!(
            err,
            ColonyError::InternalInconsistency {
                position: 0,
                remaining: 3
            }
        );
        assert_eq!(ant.path(), &[0]);
    }

    #[test]
    fn zero_alpha_ignores_empty_pheromone() {
        let nodes = Node::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let empty = PheromoneMatrix::uniform(4, 1.0).reinforce(&[], 0.5, 0.0);
        let cfg = config(0.0, 2.0);
        let mut ant = Ant::new(0, 4);

        let tour = ant
            .complete_tour(&nodes, &empty, &cfg, &mut greedy_rng())
            .unwrap();
        assert!(tour.is_permutation_of(4));
    }

    #[test]
    fn reset_starts_a_new_tour() {
        let nodes = Node::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let matrix = PheromoneMatrix::uniform(3, 0.5);
        let cfg = ColonyConfig::default();
        let mut rng = greedy_rng();
        let mut ant = Ant::new(0, 3);
        ant.complete_tour(&nodes, &matrix, &cfg, &mut rng).unwrap();

        ant.reset(2);
        assert_eq!(ant.state(), AntState::Selecting);
        assert_eq!(ant.path(), &[2]);
        assert_eq!(ant.position(), 2);
        assert_eq!(ant.distance(), 0.0);

        let tour = ant.complete_tour(&nodes, &matrix, &cfg, &mut rng).unwrap();
        assert_eq!(tour.path[0], 2);
        assert!(tour.is_permutation_of(3));
    }
}
