//! String approximation.
//!
//! Evolves random strings towards a target string. Each gene is a code
//! point in `0..=128`, so the gene space has [`ALPHABET_SIZE`] values and
//! the chromosome length equals the target's length.

use super::config::GaConfig;
use super::error::GaError;
use super::types::{Chromosome, GaProblem, Gene};

/// Number of symbols a gene can take: code points `0..=128`.
pub const ALPHABET_SIZE: usize = 129;

/// Target used by [`StringProblem::default`].
pub const DEFAULT_TARGET: &str = "Monty";

/// Scores a chromosome by how many positions match a target string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringProblem {
    target: Vec<Gene>,
}

impl StringProblem {
    /// Creates a problem for `target`.
    ///
    /// Fails when `target` is empty or contains a character outside the
    /// gene alphabet.
    pub fn new(target: &str) -> Result<Self, GaError> {
        if target.is_empty() {
            return Err(GaError::InvalidConfig("target string must not be empty".into()));
        }
        let target = target
            .chars()
            .map(|c| match c as usize {
                code if code < ALPHABET_SIZE => Ok(code),
                _ => Err(GaError::InvalidConfig(format!(
                    "character {c:?} is outside the {ALPHABET_SIZE}-symbol alphabet"
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { target })
    }

    /// The target as a chromosome.
    pub fn target(&self) -> Chromosome {
        Chromosome::new(self.target.clone())
    }

    /// Run parameters sized for this target: 100 individuals, one gene per
    /// character, the full alphabet per gene.
    pub fn config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(100)
            .with_chromosome_length(self.target.len())
            .with_gene_size(ALPHABET_SIZE)
    }

    /// Renders a chromosome as text.
    pub fn decode(chromosome: &Chromosome) -> String {
        chromosome
            .genes()
            .iter()
            .map(|&g| char::from_u32(g as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl Default for StringProblem {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.chars().map(|c| c as usize).collect(),
        }
    }
}

impl GaProblem for StringProblem {
    fn validate_config(&self, config: &GaConfig) -> Result<(), GaError> {
        if config.chromosome_length != self.target.len() {
            return Err(GaError::InvalidConfig(format!(
                "chromosome_length {} does not match target length {}",
                config.chromosome_length,
                self.target.len()
            )));
        }
        if let Some(&code) = self.target.iter().find(|&&code| code >= config.gene_size) {
            return Err(GaError::InvalidConfig(format!(
                "gene_size {} cannot encode target symbol {code}",
                config.gene_size
            )));
        }
        Ok(())
    }

    fn evaluate(&self, chromosome: &Chromosome) -> f64 {
        chromosome
            .genes()
            .iter()
            .zip(&self.target)
            .filter(|(a, b)| a == b)
            .count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::GeneticAlgorithm;

    #[test]
    fn test_default_target() {
        let problem = StringProblem::default();
        assert_eq!(StringProblem::decode(&problem.target()), "Monty");
        assert_eq!(problem, StringProblem::new("Monty").expect("ascii target"));
    }

    #[test]
    fn test_config_matches_target() {
        let config = StringProblem::new("hello world").expect("ascii target").config();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.chromosome_length, 11);
        assert_eq!(config.gene_size, 129);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_target() {
        assert!(StringProblem::new("").is_err());
    }

    #[test]
    fn test_rejects_non_alphabet_target() {
        assert!(matches!(
            StringProblem::new("héllo"),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_engine_rejects_mismatched_length() {
        let err = GeneticAlgorithm::new(GaConfig::default(), StringProblem::default())
            .err()
            .expect("default config has 10 genes, target has 5");
        assert!(
            matches!(&err, GaError::InvalidConfig(msg) if msg.contains("target length 5")),
            "got: {err}"
        );
    }

    #[test]
    fn test_engine_rejects_gene_size_below_alphabet() {
        let problem = StringProblem::default();
        let config = problem.config().with_gene_size(100);
        // 'y' is code 121.
        assert!(matches!(
            GeneticAlgorithm::new(config, problem),
            Err(GaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fitness_counts_matches() {
        let problem = StringProblem::new("abc").expect("ascii target");
        assert_eq!(problem.evaluate(&problem.target()), 3.0);

        let partial = Chromosome::new(vec!['a' as usize, 'x' as usize, 'c' as usize]);
        assert_eq!(problem.evaluate(&partial), 2.0);

        let none = Chromosome::new(vec![0, 0, 0]);
        assert_eq!(problem.evaluate(&none), 0.0);
    }

    #[test]
    fn test_evolve_keeps_strings_well_formed() {
        let problem = StringProblem::default();
        let config = problem.config().with_seed(42);
        let mut ga = GeneticAlgorithm::new(config, problem).expect("valid config");

        ga.evolve(20).expect("evolve");

        for ind in ga.population().iter() {
            assert_eq!(StringProblem::decode(&ind.chromosome).chars().count(), 5);
            assert!((0.0..=5.0).contains(&ind.fitness));
        }
    }
}
