use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{Precondition, Result},
    instance::{Assignment, Instance, Literal, Variable},
};

use super::greedy::randomized_greedy_assign;

pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_BLOCK_SIZES: [usize; 3] = [2, 3, 4];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraspConfig {
    /// Number of construct-then-improve rounds.
    pub max_iterations: usize,
    /// Block sizes the construction step picks from uniformly.
    pub block_sizes: Vec<usize>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        GraspConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            block_sizes: DEFAULT_BLOCK_SIZES.to_vec(),
        }
    }
}

impl GraspConfig {
    pub fn with_max_iterations(max_iterations: usize) -> GraspConfig {
        GraspConfig {
            max_iterations,
            ..GraspConfig::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraspOutcome {
    /// Lowest unsatisfied ratio over all rounds; 1.0 if no round ran.
    pub best_ratio: f64,
    /// The assignment that first reached `best_ratio`.
    pub best_assignment: Assignment,
    pub iterations: usize,
}

/// Greedy Randomized Adaptive Search: each round builds a candidate with randomized greedy
/// and improves it with one pass of single-variable flips.
#[derive(Debug, Clone, Default)]
pub struct Grasp {
    config: GraspConfig,
}

impl Grasp {
    pub fn new(config: GraspConfig) -> Grasp {
        Grasp { config }
    }

    pub fn config(&self) -> &GraspConfig {
        &self.config
    }

    /// Runs the configured number of rounds. The instance is left holding whatever the last
    /// round produced; the best assignment seen is returned in the outcome.
    pub fn search<R: Rng + ?Sized>(
        &self,
        instance: &mut Instance,
        rng: &mut R,
    ) -> Result<GraspOutcome> {
        if self.config.block_sizes.is_empty() {
            return Err(Precondition::NoBlockSizes.into());
        }
        if self.config.block_sizes.contains(&0) {
            return Err(Precondition::ZeroBlockSize.into());
        }
        instance.require_clauses()?;

        let mut best_ratio = 1.0;
        let mut best_assignment = instance.snapshot();
        for iteration in 0..self.config.max_iterations {
            let block_size = *self
                .config
                .block_sizes
                .choose(rng)
                .ok_or(Precondition::NoBlockSizes)?;
            let constructed = randomized_greedy_assign(instance, block_size, rng)?;
            let candidate = improve(instance);
            trace!(
                "round {}: block size {}, constructed {}, improved {}",
                iteration,
                block_size,
                constructed,
                candidate
            );

            if candidate < best_ratio {
                debug!("round {}: best ratio {} -> {}", iteration, best_ratio, candidate);
                best_ratio = candidate;
                best_assignment = instance.snapshot();
            }
        }

        Ok(GraspOutcome {
            best_ratio,
            best_assignment,
            iterations: self.config.max_iterations,
        })
    }
}

/// One left-to-right pass of first-improvement flips. A flip that strictly lowers the number of
/// false clauses is kept; any other flip is undone straight away. Returns the ratio after the
/// pass, which is never worse than the ratio before it.
fn improve(instance: &mut Instance) -> f64 {
    let mut unsatisfied = instance.unsatisfied_count();
    for v in 1..=instance.num_variables() {
        let literal = Literal::new(Variable(v), true);
        instance.flip(literal);
        let neighbour = instance.unsatisfied_count();
        if neighbour < unsatisfied {
            unsatisfied = neighbour;
        } else {
            instance.flip(literal);
        }
    }
    instance.ratio_of(unsatisfied)
}

/// The best unsatisfied ratio GRASP reaches in `max_iterations` rounds with the default block
/// sizes.
pub fn grasp_search<R: Rng + ?Sized>(
    instance: &mut Instance,
    max_iterations: usize,
    rng: &mut R,
) -> Result<f64> {
    Grasp::new(GraspConfig::with_max_iterations(max_iterations))
        .search(instance, rng)
        .map(|outcome| outcome.best_ratio)
}
