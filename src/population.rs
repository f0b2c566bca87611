//! Creating a population and scoring it against the goal weight.

use crate::{random::Source, Error};
use tracing::instrument;

/// Weight of one individual, in grams. Individuals carry nothing else.
pub type Weight = u64;

/// Draw `count` weights from a triangular distribution over `[min, max]`
/// peaking at `mode`. Samples are truncated, not rounded.
#[instrument(level = "debug", skip(rng))]
pub fn populate(
    count: usize,
    min: Weight,
    max: Weight,
    mode: Weight,
    rng: &mut impl Source,
) -> Result<Vec<Weight>, Error> {
    if count == 0 {
        return Err(Error::invalid("population count must be positive"));
    }
    if min > mode || mode > max {
        return Err(Error::invalid(format!(
            "weights must satisfy min <= mode <= max. min = {min}, mode = {mode}, max = {max}"
        )));
    }

    (0..count)
        .map(|_| {
            rng.triangular(min as f64, max as f64, mode as f64)
                .map(|w| w as Weight)
        })
        .collect()
}

pub fn mean(population: &[Weight]) -> Result<f64, Error> {
    if population.is_empty() {
        return Err(Error::EmptyPopulation);
    }
    let total = population.iter().map(|&w| w as f64).sum::<f64>();
    Ok(total / population.len() as f64)
}

/// Ratio of the mean weight to `goal`. Anything `>= 1.0` means the goal is met.
pub fn fitness(population: &[Weight], goal: f64) -> Result<f64, Error> {
    if !(goal.is_finite() && goal > 0.) {
        return Err(Error::invalid(format!("goal must be positive, got {goal}")));
    }
    Ok(mean(population)? / goal)
}
