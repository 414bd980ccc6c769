//! Generic evolutionary optimization over integer-gene chromosomes.
//!
//! The [`ga`] module maintains a population of candidate solutions, scores
//! them with a pluggable fitness function and improves them over successive
//! generations with:
//!
//! - **Selection**: fitness-proportional sampling with a wrapping cursor
//! - **Crossover**: single-point recombination of neighbouring pairs
//! - **Mutation**: an occasional redraw of one gene
//!
//! # Architecture
//!
//! Problems plug in through the [`ga::GaProblem`] trait, which supplies
//! chromosome initialization and fitness evaluation. All randomness flows
//! through one caller-visible RNG, so a fixed seed reproduces a run exactly.
//! The engine is single-threaded and performs no I/O.

pub mod ga;
