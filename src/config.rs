//! Simulation parameters.
//!
//! The `HEFT_` constants are the defaults used when a parameter is not
//! given. A [Config] is read-only once a [crate::Simulation] owns it.

use crate::{population::Weight, Error};
use serde::{Deserialize, Serialize};

// ============================================================================
// Goal & Termination
// ============================================================================

/// Target mean weight, in grams
pub const HEFT_GOAL: f64 = 50_000.;

/// Generations to run before giving up on the goal
pub const HEFT_GENERATION_LIMIT: usize = 500;

// ============================================================================
// Initial Population
// ============================================================================

/// Individuals in the first generation; also the size of every breeding pool
pub const HEFT_NUM_RATS: usize = 20;

pub const HEFT_MIN_WEIGHT: Weight = 200;
pub const HEFT_MAX_WEIGHT: Weight = 600;

/// Most common starting weight
pub const HEFT_MODE_WEIGHT: Weight = 300;

// ============================================================================
// Mutation
// ============================================================================

/// Probability that a newborn is mutated
pub const HEFT_MUTATE_ODDS: f64 = 0.01;

/// Smallest factor a mutation multiplies a weight by
pub const HEFT_MUTATE_MIN: f64 = 0.5;

/// Largest factor a mutation multiplies a weight by
pub const HEFT_MUTATE_MAX: f64 = 1.2;

// ============================================================================
// Breeding
// ============================================================================

/// Offspring per breeding pair
pub const HEFT_LITTER_SIZE: usize = 8;

/// Generations per simulated year
pub const HEFT_LITTERS_PER_YEAR: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub goal: f64,
    /// Rounded up to an even number by [Config::normalized].
    pub num_rats: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
    pub mode_weight: Weight,
    pub mutate_odds: f64,
    pub mutate_min: f64,
    pub mutate_max: f64,
    pub litter_size: usize,
    pub litters_per_year: usize,
    pub generation_limit: usize,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goal: HEFT_GOAL,
            num_rats: HEFT_NUM_RATS,
            min_weight: HEFT_MIN_WEIGHT,
            max_weight: HEFT_MAX_WEIGHT,
            mode_weight: HEFT_MODE_WEIGHT,
            mutate_odds: HEFT_MUTATE_ODDS,
            mutate_min: HEFT_MUTATE_MIN,
            mutate_max: HEFT_MUTATE_MAX,
            litter_size: HEFT_LITTER_SIZE,
            litters_per_year: HEFT_LITTERS_PER_YEAR,
            generation_limit: HEFT_GENERATION_LIMIT,
            seed: None,
        }
    }
}

impl Config {
    pub fn with_goal(mut self, goal: f64) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_num_rats(mut self, n: usize) -> Self {
        self.num_rats = n;
        self
    }

    /// Sets the triangular distribution the first generation is drawn from.
    pub fn with_weights(mut self, min: Weight, max: Weight, mode: Weight) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self.mode_weight = mode;
        self
    }

    pub fn with_mutate_odds(mut self, odds: f64) -> Self {
        self.mutate_odds = odds;
        self
    }

    /// Sets the range mutation factors are drawn from.
    pub fn with_mutate_range(mut self, min: f64, max: f64) -> Self {
        self.mutate_min = min;
        self.mutate_max = max;
        self
    }

    pub fn with_litter_size(mut self, n: usize) -> Self {
        self.litter_size = n;
        self
    }

    pub fn with_litters_per_year(mut self, n: usize) -> Self {
        self.litters_per_year = n;
        self
    }

    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Males and females are split by rank, so the population must be even.
    /// An odd `num_rats` is bumped up by one.
    pub fn normalized(mut self) -> Result<Self, Error> {
        self.num_rats = self
            .num_rats
            .checked_add(self.num_rats % 2)
            .ok_or_else(|| Error::invalid(format!("num_rats too large, got {}", self.num_rats)))?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !(self.goal.is_finite() && self.goal > 0.) {
            return Err(Error::invalid(format!(
                "goal must be positive, got {}",
                self.goal
            )));
        }
        if self.num_rats == 0 {
            return Err(Error::invalid("num_rats must be at least 1"));
        }
        if self.num_rats % 2 != 0 {
            return Err(Error::invalid(format!(
                "num_rats must be even, got {}",
                self.num_rats
            )));
        }
        if self.min_weight > self.mode_weight || self.mode_weight > self.max_weight {
            return Err(Error::invalid(format!(
                "weights must satisfy min <= mode <= max. min = {}, mode = {}, max = {}",
                self.min_weight, self.mode_weight, self.max_weight
            )));
        }
        if !(0. ..=1.).contains(&self.mutate_odds) {
            return Err(Error::invalid(format!(
                "mutate_odds must be within [0, 1], got {}",
                self.mutate_odds
            )));
        }
        if !(self.mutate_min > 0. && self.mutate_min <= self.mutate_max)
            || !self.mutate_max.is_finite()
        {
            return Err(Error::invalid(format!(
                "mutation factors must satisfy 0 < min <= max. min = {}, max = {}",
                self.mutate_min, self.mutate_max
            )));
        }
        if self.litter_size == 0 {
            return Err(Error::invalid("litter_size must be at least 1"));
        }
        if self.litters_per_year == 0 {
            return Err(Error::invalid("litters_per_year must be at least 1"));
        }
        if self.generation_limit == 0 {
            return Err(Error::invalid("generation_limit must be at least 1"));
        }
        Ok(())
    }
}
