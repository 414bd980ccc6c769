//! GA configuration.
//!
//! [`GaConfig`] holds the run parameters that stay fixed for the lifetime
//! of a [`GeneticAlgorithm`](super::GeneticAlgorithm).

use super::error::GaError;

/// Run parameters for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_genetic::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.chromosome_length, 10);
/// assert_eq!(config.gene_size, 11);
/// assert_eq!(config.mutation_chance, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_chromosome_length(8)
///     .with_gene_size(2)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Must be even and at least 2: crossover pairs neighbours `(0,1), (2,3), …`.
    pub population_size: usize,

    /// Number of genes in every chromosome.
    pub chromosome_length: usize,

    /// Number of distinct gene values. Genes lie in `0..gene_size`.
    pub gene_size: usize,

    /// Percent chance (0–100) that a generation mutates one gene.
    pub mutation_chance: u8,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 10,
            gene_size: 11,
            mutation_chance: 50,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the number of distinct gene values.
    pub fn with_gene_size(mut self, n: usize) -> Self {
        self.gene_size = n;
        self
    }

    /// Sets the per-generation mutation chance in percent, clamped to 100.
    pub fn with_mutation_chance(mut self, percent: u8) -> Self {
        self.mutation_chance = percent.min(100);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::InvalidConfig(format!(
                "population_size must be even for crossover pairing, got {}",
                self.population_size
            )));
        }
        if self.chromosome_length == 0 {
            return Err(GaError::InvalidConfig(
                "chromosome_length must be at least 1".into(),
            ));
        }
        if self.gene_size == 0 {
            return Err(GaError::InvalidConfig("gene_size must be at least 1".into()));
        }
        if self.mutation_chance > 100 {
            return Err(GaError::InvalidConfig(format!(
                "mutation_chance is a percentage, got {}",
                self.mutation_chance
            )));
        }
        Ok(())
    }
}
