//! Random multiplicative perturbation of offspring weights.

use crate::{population::Weight, random::Source};
use tracing::instrument;

/// Each weight independently, with probability `odds`, is scaled by a factor
/// drawn uniformly from `[min_factor, max_factor]` and rounded.
///
/// `odds` of zero never mutates. The factor range may be given in either
/// order; factors should be positive (see [crate::Config::validate]).
#[instrument(level = "debug", skip(children, rng), fields(children = children.len()))]
pub fn mutate(
    children: Vec<Weight>,
    odds: f64,
    min_factor: f64,
    max_factor: f64,
    rng: &mut impl Source,
) -> Vec<Weight> {
    children
        .into_iter()
        .map(|w| {
            if odds > 0. && rng.roll() <= odds {
                (w as f64 * rng.uniform_real(min_factor, max_factor)).round() as Weight
            } else {
                w
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{population::populate, random::WyRng};

    #[test]
    fn test_mutate_never() {
        let mut rng = WyRng::seeded(1);
        let children = populate(500, 100, 900, 400, &mut rng).unwrap();
        assert_eq!(mutate(children.clone(), 0., 0.5, 1.2, &mut rng), children);
    }

    #[test]
    fn test_mutate_always() {
        let mut rng = WyRng::seeded(2);
        let children = populate(500, 100, 900, 400, &mut rng).unwrap();
        let mutated = mutate(children.clone(), 1., 2., 3., &mut rng);
        assert_eq!(mutated.len(), children.len());
        for (before, after) in children.iter().zip(mutated.iter()) {
            assert!(
                (before * 2..=before * 3).contains(after),
                "{before} -> {after}"
            );
        }
    }

    #[test]
    fn test_mutate_fixed_factor() {
        let mut rng = WyRng::seeded(3);
        assert_eq!(mutate(vec![10, 21, 0], 1., 1., 1., &mut rng), vec![10, 21, 0]);
        assert_eq!(mutate(vec![10, 21, 0], 1., 0.5, 0.5, &mut rng), vec![5, 11, 0]);
    }

    #[test]
    fn test_mutate_reversed_range() {
        let mut rng = WyRng::seeded(5);
        let mutated = mutate(vec![100; 1_000], 1., 1.2, 0.5, &mut rng);
        assert!(mutated.iter().all(|w| (50..=120).contains(w)), "{mutated:?}");
    }

    #[test]
    fn test_mutate_rate() {
        let mut rng = WyRng::seeded(4);
        let mutated = mutate(vec![1_000; 10_000], 0.25, 2., 2., &mut rng);
        let changed = mutated.iter().filter(|&&w| w == 2_000).count();
        assert!((changed as f64 - 2_500.).abs() < 250., "{changed} mutated");
        assert!(mutated.iter().all(|&w| w == 1_000 || w == 2_000));
    }
}
