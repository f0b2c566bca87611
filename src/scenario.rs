//! The generational loop: select, breed, mutate, repeat until the population
//! is heavy enough or the generation budget runs out.

use crate::{
    config::Config,
    crossover::breed,
    mutation::mutate,
    population::{fitness, mean, populate, Weight},
    random::{default_rng, Source},
    selection::select,
    Error,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    Running,
    Converged,
    Exhausted,
}

impl State {
    fn after(fitness: f64, generation: usize, limit: usize) -> Self {
        if fitness >= 1. {
            Self::Converged
        } else if generation >= limit {
            Self::Exhausted
        } else {
            Self::Running
        }
    }
}

/// Progress of one generation, handed to a [Reporter] and then dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    pub generation: usize,
    pub fitness: f64,
    pub average_weight: f64,
    pub population_size: usize,
}

/// Where a run ended up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub state: State,
    pub population: Vec<Weight>,
    pub fitness: f64,
    pub generations: usize,
    /// `(generations + 1) / litters_per_year`, rounded down.
    pub years: usize,
    /// Mean of the final population, truncated.
    pub average_weight: Weight,
    /// Fitness after each generation, starting with the initial population.
    pub history: Vec<f64>,
}

pub trait Reporter {
    /// Called once with the freshly drawn first generation.
    fn on_start(&mut self, _population: &[Weight]) {}

    fn on_generation(&mut self, report: &GenerationReport);

    fn on_finish(&mut self, _outcome: &Outcome) {}
}

impl Reporter for () {
    fn on_generation(&mut self, _report: &GenerationReport) {}
}

impl<F: FnMut(&GenerationReport)> Reporter for F {
    fn on_generation(&mut self, report: &GenerationReport) {
        self(report)
    }
}

#[derive(Debug, Clone)]
pub struct Simulation {
    config: Config,
}

impl Simulation {
    /// Rounds an odd `num_rats` up, then rejects anything else that is off.
    pub fn new(config: Config) -> Result<Self, Error> {
        let config = config.normalized()?;
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run with a generator seeded from the config, or from entropy when it has no seed.
    pub fn run(&self, reporter: &mut impl Reporter) -> Result<Outcome, Error> {
        self.run_with(&mut default_rng(self.config.seed), reporter)
    }

    #[instrument(level = "debug", skip_all, fields(goal = self.config.goal, num_rats = self.config.num_rats))]
    pub fn run_with(
        &self,
        rng: &mut impl Source,
        reporter: &mut impl Reporter,
    ) -> Result<Outcome, Error> {
        let c = &self.config;
        let mut population = populate(
            c.num_rats,
            c.min_weight,
            c.max_weight,
            c.mode_weight,
            rng,
        )?;
        reporter.on_start(&population);
        let mut generation = 0;
        let mut score = fitness(&population, c.goal)?;
        let mut history = vec![score];
        report(reporter, generation, score, &population)?;

        let mut state = State::after(score, generation, c.generation_limit);
        while state == State::Running {
            generation += 1;

            let mut pool = select(&population, c.num_rats)?;
            let children = breed(&mut pool.males, &mut pool.females, c.litter_size, rng)?;
            let children = mutate(children, c.mutate_odds, c.mutate_min, c.mutate_max, rng);

            population = pool.into_population();
            population.extend(children);

            score = fitness(&population, c.goal)?;
            history.push(score);
            debug!(generation, fitness = score, size = population.len());
            report(reporter, generation, score, &population)?;

            state = State::after(score, generation, c.generation_limit);
        }

        let outcome = Outcome {
            state,
            average_weight: mean(&population)? as Weight,
            population,
            fitness: score,
            generations: generation,
            years: (generation + 1) / c.litters_per_year,
            history,
        };
        info!(
            state = ?outcome.state,
            generations = outcome.generations,
            fitness = outcome.fitness,
            "evolution finished"
        );
        reporter.on_finish(&outcome);
        Ok(outcome)
    }
}

fn report(
    reporter: &mut impl Reporter,
    generation: usize,
    fitness: f64,
    population: &[Weight],
) -> Result<(), Error> {
    reporter.on_generation(&GenerationReport {
        generation,
        fitness,
        average_weight: mean(population)?,
        population_size: population.len(),
    });
    Ok(())
}
