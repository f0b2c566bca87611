//! Culling a population down to a breeding pool.

use crate::{population::Weight, Error};
use tracing::instrument;

/// Parents kept for the next round of breeding. Every male weighs at least
/// as much as every female, up to ties at the split point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreedingPool {
    pub males: Vec<Weight>,
    pub females: Vec<Weight>,
}

impl BreedingPool {
    #[inline]
    pub fn len(&self) -> usize {
        self.males.len() + self.females.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.males.is_empty() && self.females.is_empty()
    }

    /// Males followed by females.
    pub fn into_population(self) -> Vec<Weight> {
        let mut population = self.males;
        population.extend(self.females);
        population
    }
}

/// Keep the heaviest `to_retain / 2` of each sex.
///
/// The sorted population is split at `len / 2`: the lighter part are
/// females, the heavier part males. With an odd length the heavier part
/// holds the extra individual.
#[instrument(level = "debug", skip(population), fields(population = population.len()))]
pub fn select(population: &[Weight], to_retain: usize) -> Result<BreedingPool, Error> {
    let mut sorted = population.to_vec();
    sorted.sort_unstable();

    let per_sex = to_retain / 2;
    let (females, males) = sorted.split_at(sorted.len() / 2);

    let available = females.len().min(males.len());
    if per_sex > available {
        return Err(Error::InsufficientPopulation {
            wanted: per_sex,
            available,
        });
    }

    Ok(BreedingPool {
        males: males[males.len() - per_sex..].to_vec(),
        females: females[females.len() - per_sex..].to_vec(),
    })
}
