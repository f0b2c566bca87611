//! Breeding: crossover of a single weight between two parents.

use crate::{population::Weight, random::Source, Error};
use tracing::instrument;

/// Shuffle both groups, pair them up index by index and draw `litter_size`
/// children per pair, each uniform over the weights spanned by its parents.
///
/// `males` and `females` are reordered in place.
#[instrument(level = "debug", skip(males, females, rng), fields(males = males.len(), females = females.len()))]
pub fn breed(
    males: &mut [Weight],
    females: &mut [Weight],
    litter_size: usize,
    rng: &mut impl Source,
) -> Result<Vec<Weight>, Error> {
    if males.is_empty() || females.is_empty() {
        return Err(Error::EmptyParentGroup {
            males: males.len(),
            females: females.len(),
        });
    }

    rng.shuffle(males);
    rng.shuffle(females);

    let pairs = males.len().min(females.len());
    let mut children = Vec::with_capacity(pairs * litter_size);
    for (&male, &female) in males.iter().zip(females.iter()) {
        let (lo, hi) = (male.min(female), male.max(female));
        children.extend((0..litter_size).map(|_| rng.uniform_int(lo, hi)));
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::WyRng;

    #[test]
    fn test_breed_count() {
        let mut rng = WyRng::seeded(1);
        let children = breed(&mut [500, 600, 700], &mut [100, 200, 300], 4, &mut rng).unwrap();
        assert_eq!(children.len(), 12);

        let children = breed(&mut [500, 600], &mut [100, 200, 300], 3, &mut rng).unwrap();
        assert_eq!(children.len(), 6);

        let children = breed(&mut [500], &mut [100], 0, &mut rng).unwrap();
        assert!(children.is_empty());
    }

    #[test]
    fn test_breed_within_parents() {
        let mut rng = WyRng::seeded(2);
        for _ in 0..1_000 {
            let mut males = [400];
            let mut females = [250];
            let children = breed(&mut males, &mut females, 5, &mut rng).unwrap();
            assert!(children.iter().all(|c| (250..=400).contains(c)), "{children:?}");
        }

        // parents out of the usual order still bound their litter
        for _ in 0..1_000 {
            let children = breed(&mut [100], &mut [900], 5, &mut rng).unwrap();
            assert!(children.iter().all(|c| (100..=900).contains(c)), "{children:?}");
        }

        let children = breed(&mut [42], &mut [42], 8, &mut rng).unwrap();
        assert_eq!(children, vec![42; 8]);
    }

    #[test]
    fn test_breed_pairs_litters() {
        // litters come out in the order of the shuffled pairing
        let mut rng = WyRng::seeded(3);
        let mut males = [11, 21, 31, 41];
        let mut females = [10, 20, 30, 40];
        let children = breed(&mut males, &mut females, 6, &mut rng).unwrap();

        for (litter, (m, f)) in children.chunks(6).zip(males.iter().zip(females.iter())) {
            let (lo, hi) = (*m.min(f), *m.max(f));
            assert!(litter.iter().all(|c| (lo..=hi).contains(c)));
        }

        males.sort();
        females.sort();
        assert_eq!(males, [11, 21, 31, 41]);
        assert_eq!(females, [10, 20, 30, 40]);
    }

    #[test]
    fn test_breed_empty_group() {
        let mut rng = WyRng::seeded(4);
        assert!(matches!(
            breed(&mut [], &mut [1, 2], 4, &mut rng),
            Err(Error::EmptyParentGroup {
                males: 0,
                females: 2
            })
        ));
        assert!(matches!(
            breed(&mut [1], &mut [], 4, &mut rng),
            Err(Error::EmptyParentGroup { .. })
        ));
    }
}
