//! Core type definitions for the GA engine.
//!
//! [`Chromosome`] and [`Individual`] are plain value records. The
//! [`GaProblem`] trait is the contract between the generic engine and a
//! domain-specific problem: how to create a chromosome and how to score it.

use super::config::GaConfig;
use super::error::GaError;
use rand::Rng;
use std::fmt;

/// A single gene value, always in `0..gene_size`.
pub type Gene = usize;

/// An ordered, fixed-length sequence of genes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    /// Wraps a gene vector.
    pub fn new(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// The genes in order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Consumes the chromosome, returning its genes.
    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }

    /// Checks that the chromosome has exactly `length` genes, each in
    /// `0..gene_size`.
    ///
    /// `index` is the chromosome's position in the population and is only
    /// used to label the error.
    pub fn validate(&self, index: usize, length: usize, gene_size: usize) -> Result<(), GaError> {
        if self.genes.len() != length {
            return Err(GaError::ChromosomeLength {
                index,
                expected: length,
                actual: self.genes.len(),
            });
        }
        match self.genes.iter().position(|&g| g >= gene_size) {
            Some(position) => Err(GaError::GeneOutOfRange {
                index,
                position,
                gene: self.genes[position],
                gene_size,
            }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Gene>> for Chromosome {
    fn from(genes: Vec<Gene>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}

/// A chromosome paired with its fitness.
///
/// Fitness is derived from the chromosome by [`GaProblem::evaluate`]. It is
/// only guaranteed to match the chromosome at generation boundaries; the
/// crossover and mutation stages leave it stale until the next scoring pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub chromosome: Chromosome,
    pub fitness: f64,
}

impl Individual {
    /// Creates an unscored individual.
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: 0.0,
        }
    }
}

/// Defines a GA optimization problem.
///
/// Both operations have defaults, so an empty `impl` yields the
/// sum-of-genes placeholder problem (see [`SumOfGenes`]):
///
/// 1. **Initialization**: every gene drawn uniformly from `0..gene_size`
/// 2. **Evaluation**: the sum of all gene values
///
/// Higher fitness is better. Selection is fitness-proportional, so useful
/// objectives should produce non-negative scores.
///
/// # Implementing
///
/// ```
/// use u_genetic::ga::{Chromosome, GaProblem};
///
/// /// Counts genes equal to zero.
/// struct Zeros;
///
/// impl GaProblem for Zeros {
///     fn evaluate(&self, chromosome: &Chromosome) -> f64 {
///         chromosome.genes().iter().filter(|&&g| g == 0).count() as f64
///     }
/// }
/// ```
pub trait GaProblem {
    /// Rejects run parameters this problem cannot score meaningfully.
    ///
    /// Called once at construction, after [`GaConfig::validate`]. The default
    /// accepts every valid configuration.
    fn validate_config(&self, _config: &GaConfig) -> Result<(), GaError> {
        Ok(())
    }

    /// Creates a random chromosome for generation 0.
    ///
    /// Must return exactly `config.chromosome_length` genes, each in
    /// `0..config.gene_size`; the engine rejects anything else.
    fn initialize_chromosome<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> Chromosome {
        let genes = (0..config.chromosome_length)
            .map(|_| rng.random_range(0..config.gene_size))
            .collect();
        Chromosome::new(genes)
    }

    /// Scores a chromosome. Higher is better.
    ///
    /// Must be pure and return a finite value. The engine validates the
    /// chromosome's shape before calling this.
    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        chromosome.genes().iter().map(|&g| g as f64).sum()
    }

    /// Called at the end of each generation with the best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}

/// The placeholder problem: uniform random genes, fitness = sum of genes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfGenes;

impl GaProblem for SumOfGenes {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_initialization_shape() {
        let config = GaConfig::default().with_chromosome_length(25).with_gene_size(3);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let c = SumOfGenes.initialize_chromosome(&config, &mut rng);
            assert!(c.validate(0, 25, 3).is_ok());
        }
    }

    #[test]
    fn test_default_initialization_covers_gene_range() {
        let config = GaConfig::default().with_chromosome_length(200).with_gene_size(4);
        let mut rng = StdRng::seed_from_u64(1);

        let c = SumOfGenes.initialize_chromosome(&config, &mut rng);
        for value in 0..4 {
            assert!(c.genes().contains(&value), "gene {value} never drawn");
        }
    }

    #[test]
    fn test_sum_of_genes() {
        assert_eq!(SumOfGenes.evaluate(&Chromosome::new(vec![1, 0, 1])), 2.0);
        assert_eq!(SumOfGenes.evaluate(&Chromosome::new(vec![10, 10])), 20.0);
        assert_eq!(SumOfGenes.evaluate(&Chromosome::default()), 0.0);
    }

    #[test]
    fn test_validate_wrong_length() {
        let c = Chromosome::new(vec![0, 1]);
        assert_eq!(
            c.validate(5, 3, 2),
            Err(GaError::ChromosomeLength {
                index: 5,
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_validate_gene_out_of_range() {
        let c = Chromosome::new(vec![0, 1, 2]);
        assert_eq!(
            c.validate(0, 3, 2),
            Err(GaError::GeneOutOfRange {
                index: 0,
                position: 2,
                gene: 2,
                gene_size: 2
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Chromosome::from(vec![3, 1, 4]).to_string(), "[3, 1, 4]");
    }
}
