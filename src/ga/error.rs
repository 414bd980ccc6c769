//! Error types for the GA engine.

use thiserror::Error;

/// Errors reported by the GA engine.
///
/// Configuration problems are caught when an engine is constructed.
/// The remaining variants signal a faulty [`GaProblem`](super::GaProblem)
/// implementation and are raised the moment the bad value is observed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("expected {expected} chromosomes, got {actual}")]
    PopulationSize { expected: usize, actual: usize },

    #[error("chromosome {index} has {actual} genes, expected {expected}")]
    ChromosomeLength {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("chromosome {index} has gene {gene} at position {position}, outside 0..{gene_size}")]
    GeneOutOfRange {
        index: usize,
        position: usize,
        gene: usize,
        gene_size: usize,
    },

    #[error("chromosome {index} evaluated to non-finite fitness {fitness}")]
    NonFiniteFitness { index: usize, fitness: f64 },
}
