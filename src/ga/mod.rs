//! Genetic Algorithm engine.
//!
//! A generic GA over fixed-length integer-gene chromosomes. Users define
//! their problem by implementing [`GaProblem`], which specifies how to
//! create and how to score a chromosome; the evolutionary loop is shared.
//!
//! # Generation pipeline
//!
//! 1. Fitness-proportional selection ([`selection`])
//! 2. Ranking, best first
//! 3. Single-point crossover of neighbouring pairs ([`operators`])
//! 4. Point mutation of at most one gene ([`operators`])
//! 5. Re-scoring of the whole population
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters
//! - [`GeneticAlgorithm`]: Owns the population and runs generations
//! - [`Population`]: Ranked store of [`Individual`]s
//! - [`StringProblem`]: Ready-made string approximation problem
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod string;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use operators::MutationSite;
pub use population::Population;
pub use runner::{GenerationStats, GeneticAlgorithm};
pub use string::{StringProblem, ALPHABET_SIZE, DEFAULT_TARGET};
pub use types::{Chromosome, GaProblem, Gene, Individual, SumOfGenes};
