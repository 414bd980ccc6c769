//! Population store.
//!
//! A [`Population`] is a contiguous, ordered collection of [`Individual`]s.
//! Order only carries meaning right after [`Population::rank`], where index
//! 0 holds the fittest individual.

use super::error::GaError;
use super::types::{GaProblem, Individual};
use std::fmt;

/// An ordered collection of individuals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Wraps a vector of individuals without scoring them.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individuals in their current order.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Replaces every individual at once.
    pub fn replace(&mut self, individuals: Vec<Individual>) {
        self.individuals = individuals;
    }

    /// Sorts by fitness, descending.
    ///
    /// The sort is stable: individuals with equal fitness keep their prior
    /// relative order. Comparison uses [`f64::total_cmp`].
    pub fn rank(&mut self) {
        self.individuals.sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    /// Returns `true` when fitness is non-increasing along the population.
    pub fn is_ranked(&self) -> bool {
        self.individuals
            .windows(2)
            .all(|w| w[0].fitness >= w[1].fitness)
    }

    /// The individual with the highest fitness, if any.
    ///
    /// Ties resolve to the lowest index.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .reduce(|best, ind| if ind.fitness > best.fitness { ind } else { best })
    }

    /// Mean fitness, or 0.0 for an empty population.
    pub fn mean_fitness(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.individuals.iter().map(|i| i.fitness).sum::<f64>() / self.individuals.len() as f64
    }

    /// Lowest fitness, or `None` for an empty population.
    pub fn worst_fitness(&self) -> Option<f64> {
        self.individuals
            .iter()
            .map(|i| i.fitness)
            .reduce(f64::min)
    }

    /// Checks every chromosome's length and gene range.
    pub fn validate(&self, chromosome_length: usize, gene_size: usize) -> Result<(), GaError> {
        self.individuals
            .iter()
            .enumerate()
            .try_for_each(|(index, ind)| ind.chromosome.validate(index, chromosome_length, gene_size))
    }

    /// Re-scores every individual with `problem`.
    ///
    /// Each chromosome is validated before it is evaluated, and a non-finite
    /// score is rejected. Scores are only written once every individual has
    /// been scored, so on error the population is left untouched.
    pub fn evaluate<P: GaProblem>(
        &mut self,
        problem: &P,
        chromosome_length: usize,
        gene_size: usize,
    ) -> Result<(), GaError> {
        let scores = self
            .individuals
            .iter()
            .enumerate()
            .map(|(index, ind)| {
                ind.chromosome.validate(index, chromosome_length, gene_size)?;
                let fitness = problem.evaluate(&ind.chromosome);
                if fitness.is_finite() {
                    Ok(fitness)
                } else {
                    Err(GaError::NonFiniteFitness { index, fitness })
                }
            })
            .collect::<Result<Vec<f64>, GaError>>()?;

        for (ind, fitness) in self.individuals.iter_mut().zip(scores) {
            ind.fitness = fitness;
        }
        Ok(())
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "index  chromosome  fitness")?;
        for (i, ind) in self.individuals.iter().enumerate() {
            writeln!(f, "{:>5}  {}  {}", i, ind.chromosome, ind.fitness)?;
        }
        Ok(())
    }
}
