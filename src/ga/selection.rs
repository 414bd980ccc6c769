//! Fitness-proportional selection.
//!
//! Builds the next generation's starting pool by sampling the current,
//! ranked population with replacement. An individual's chance of being
//! copied grows with its fitness relative to the best individual.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)
//! - Lipowski & Lipowska (2012), "Roulette-wheel selection via stochastic
//!   acceptance"

use super::types::Individual;
use rand::Rng;

/// Samples `source.len()` individuals from a ranked population.
///
/// # Algorithm
///
/// `max_fitness` is the fitness at index 0 (the best individual once
/// ranked). A read cursor walks the source, wrapping back to 0 past the
/// end. For every read a threshold is drawn from `[0, max_fitness)`; the
/// individual is copied into the pool when its fitness is at least the
/// threshold. Sampling stops after exactly `source.len()` acceptances, so a
/// pass may be repeated many times.
///
/// When `max_fitness` is a whole number the threshold is a uniform integer
/// in `0..max_fitness`, so an individual with fitness `f` is accepted with
/// probability `(⌊f⌋ + 1) / max_fitness` and zero-fitness individuals still
/// get picked with probability `1 / max_fitness`. With `max_fitness == 1`
/// every read is accepted. Fractional `max_fitness` falls back to a
/// continuous uniform threshold.
///
/// The individual at index 0 always passes its draw, so every pass accepts
/// at least one individual and the loop ends within `source.len()` passes.
///
/// # Degenerate fitness
///
/// When `max_fitness <= 0` or is not finite the draw range is empty. Every
/// read is then accepted, which returns a copy of `source` in order.
///
/// # Complexity
/// O(n²) reads in the worst case, O(n) space
pub fn fitness_proportional<R: Rng>(source: &[Individual], rng: &mut R) -> Vec<Individual> {
    let n = source.len();
    let Some(top) = source.first() else {
        return Vec::new();
    };

    let max_fitness = top.fitness;
    if !(max_fitness.is_finite() && max_fitness > 0.0) {
        log::warn!(
            "degenerate max fitness {max_fitness}; selection accepts every individual"
        );
        return source.to_vec();
    }

    let whole_bound = (max_fitness.fract() == 0.0).then_some(max_fitness as u64);

    let mut pool = Vec::with_capacity(n);
    let mut read = 0;
    while pool.len() < n {
        let threshold = match whole_bound {
            Some(bound) => rng.random_range(0..bound) as f64,
            None => rng.random_range(0.0..max_fitness),
        };
        let candidate = &source[read];
        if candidate.fitness >= threshold {
            pool.push(candidate.clone());
        }
        read += 1;
        if read == n {
            read = 0;
        }
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Chromosome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Individual {
                chromosome: Chromosome::new(vec![i]),
                fitness: f,
            })
            .collect()
    }

    /// Tags each selected individual by its single gene, i.e. source index.
    fn counts(pool: &[Individual], counts: &mut [u32]) {
        for ind in pool {
            counts[ind.chromosome.genes()[0]] += 1;
        }
    }

    #[test]
    fn test_output_size_matches_source() {
        let pop = make_population(&[9.0, 5.0, 3.0, 1.0, 1.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert_eq!(fitness_proportional(&pop, &mut rng).len(), pop.len());
        }
    }

    #[test]
    fn test_favors_fitter_individuals() {
        let pop = make_population(&[100.0, 50.0, 10.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut tally = [0u32; 4];
        for _ in 0..2500 {
            counts(&fitness_proportional(&pop, &mut rng), &mut tally);
        }
        assert!(
            tally[0] > tally[1] && tally[1] > tally[2] && tally[2] > tally[3],
            "expected counts to follow fitness, got {tally:?}"
        );
    }

    #[test]
    fn test_unit_max_fitness_accepts_every_read() {
        let pop = make_population(&[1.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut zero_picks = 0;
        for _ in 0..100 {
            let pool = fitness_proportional(&pop, &mut rng);
            assert_eq!(pool, pop);
            zero_picks += pool.iter().filter(|ind| ind.fitness == 0.0).count();
        }
        assert_eq!(zero_picks, 300);
    }

    #[test]
    fn test_zero_fitness_selected_at_one_over_max() {
        // Per read: top accepted with p = 1, each zero with p = 1/4.
        let pop = make_population(&[4.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut tally = [0u32; 4];
        for _ in 0..2000 {
            counts(&fitness_proportional(&pop, &mut rng), &mut tally);
        }
        let total: u32 = tally.iter().sum();
        let zero_share = f64::from(tally[1] + tally[2] + tally[3]) / f64::from(total);

        // Reads start at the top and stop at four acceptances, which puts
        // the expected share of zeros near 0.35.
        assert!(
            (0.30..0.40).contains(&zero_share),
            "expected zero-fitness share near 0.35, got {zero_share} ({tally:?})"
        );
    }

    #[test]
    fn test_fractional_max_fitness_never_picks_zero() {
        let pop = make_population(&[2.5, 0.0, 1.5, 0.0]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let pool = fitness_proportional(&pop, &mut rng);
            assert!(pool.iter().all(|ind| ind.fitness > 0.0));
        }
    }

    #[test]
    fn test_top_individual_always_accepted_on_first_read() {
        let pop = make_population(&[3.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(3);

        // Both individuals equal max_fitness, so every read is accepted in order.
        let pool = fitness_proportional(&pop, &mut rng);
        assert_eq!(pool, pop);
    }

    #[test]
    fn test_zero_max_fitness_accepts_all() {
        let pop = make_population(&[0.0, 0.0, 0.0, 0.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(fitness_proportional(&pop, &mut rng), pop);
    }

    #[test]
    fn test_negative_max_fitness_accepts_all() {
        let pop = make_population(&[-1.0, -2.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(fitness_proportional(&pop, &mut rng), pop);
    }

    #[test]
    fn test_empty_source() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(fitness_proportional(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_deterministic_under_seed() {
        let pop = make_population(&[10.0, 7.0, 4.0, 2.0, 1.0, 1.0]);
        let a = fitness_proportional(&pop, &mut StdRng::seed_from_u64(99));
        let b = fitness_proportional(&pop, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
