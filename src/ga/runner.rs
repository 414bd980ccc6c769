//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] owns the population and orchestrates each
//! generation: rank → selection → rank → crossover → mutation → scoring.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{crossover_pairs, point_mutation, MutationSite};
use super::population::Population;
use super::selection::fitness_proportional;
use super::types::{Chromosome, GaProblem, Individual};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Summary of one completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based generation number, counted across all `evolve` calls.
    pub generation: usize,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub worst_fitness: f64,
    /// The mutation applied this generation, if the draw succeeded.
    pub mutation: Option<MutationSite>,
}

/// A generic genetic algorithm over integer-gene chromosomes.
///
/// Construction validates the [`GaConfig`], builds generation 0 with
/// [`GaProblem::initialize_chromosome`] and scores it. Each call to
/// [`evolve`](Self::evolve) advances the population and leaves it ranked
/// best-first.
///
/// # Usage
///
/// ```
/// use u_genetic::ga::{GaConfig, GeneticAlgorithm, SumOfGenes};
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_chromosome_length(6)
///     .with_gene_size(4)
///     .with_seed(42);
///
/// let mut ga = GeneticAlgorithm::new(config, SumOfGenes)?;
/// ga.evolve(10)?;
///
/// assert_eq!(ga.population().len(), 20);
/// assert_eq!(ga.final_generation(), 10);
/// assert!(ga.population().is_ranked());
/// # Ok::<(), u_genetic::ga::GaError>(())
/// ```
pub struct GeneticAlgorithm<P: GaProblem, R: Rng = StdRng> {
    config: GaConfig,
    problem: P,
    rng: R,
    population: Population,
    final_generation: usize,
    history: Vec<GenerationStats>,
}

impl<P: GaProblem> GeneticAlgorithm<P> {
    /// Creates an engine seeded from `config.seed`, or a random seed when
    /// it is `None`.
    pub fn new(config: GaConfig, problem: P) -> Result<Self, GaError> {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(config, problem, StdRng::seed_from_u64(seed))
    }
}

impl<P: GaProblem, R: Rng> GeneticAlgorithm<P, R> {
    /// Creates an engine drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GaConfig, problem: P, mut rng: R) -> Result<Self, GaError> {
        config.validate()?;
        problem.validate_config(&config)?;

        let chromosomes = (0..config.population_size)
            .map(|_| problem.initialize_chromosome(&config, &mut rng))
            .collect();
        Self::with_population(config, problem, chromosomes, rng)
    }

    /// Creates an engine whose generation 0 is `chromosomes`.
    ///
    /// The chromosomes must match the configured population size,
    /// chromosome length and gene range.
    pub fn with_population(
        config: GaConfig,
        problem: P,
        chromosomes: Vec<Chromosome>,
        rng: R,
    ) -> Result<Self, GaError> {
        config.validate()?;
        problem.validate_config(&config)?;
        if chromosomes.len() != config.population_size {
            return Err(GaError::PopulationSize {
                expected: config.population_size,
                actual: chromosomes.len(),
            });
        }

        let mut population =
            Population::new(chromosomes.into_iter().map(Individual::new).collect());
        population.evaluate(&problem, config.chromosome_length, config.gene_size)?;

        log::debug!(
            "initialized population of {} (chromosome_length={}, gene_size={})",
            config.population_size,
            config.chromosome_length,
            config.gene_size
        );

        Ok(Self {
            config,
            problem,
            rng,
            population,
            final_generation: 0,
            history: Vec::new(),
        })
    }

    /// Advances the population by `generations` steps, then ranks it.
    ///
    /// Records `generations` as the final generation count. Generations run
    /// strictly one after another; `evolve(0)` only ranks.
    pub fn evolve(&mut self, generations: usize) -> Result<(), GaError> {
        self.final_generation = generations;
        for _ in 0..generations {
            self.step()?;
        }
        self.population.rank();

        if let Some(best) = self.population.best() {
            log::info!(
                "evolved {generations} generations; best fitness {}",
                best.fitness
            );
        }
        Ok(())
    }

    /// Runs a single generation.
    ///
    /// Fitness is consistent with every chromosome when this returns `Ok`.
    /// The population is not left ranked.
    ///
    /// The next generation is built aside and only replaces the current one
    /// once it is fully scored. On error the population keeps its previous
    /// chromosomes and scores (possibly reordered by ranking), no history
    /// entry is recorded, and the RNG has still advanced.
    pub fn step(&mut self) -> Result<&GenerationStats, GaError> {
        let length = self.config.chromosome_length;
        let gene_size = self.config.gene_size;

        // Selection reads the best individual from index 0.
        self.population.rank();
        let mut next =
            Population::new(fitness_proportional(self.population.individuals(), &mut self.rng));
        next.rank();

        crossover_pairs(next.individuals_mut(), length, &mut self.rng);
        let mutation = point_mutation(
            next.individuals_mut(),
            self.config.mutation_chance,
            length,
            gene_size,
            &mut self.rng,
        );

        next.evaluate(&self.problem, length, gene_size)?;
        self.population = next;

        let generation = self.history.len() + 1;
        let best_fitness = self.population.best().map_or(0.0, |b| b.fitness);
        let stats = GenerationStats {
            generation,
            best_fitness,
            mean_fitness: self.population.mean_fitness(),
            worst_fitness: self.population.worst_fitness().unwrap_or(0.0),
            mutation,
        };
        log::debug!(
            "generation {generation}: best={best_fitness} mean={:.3}",
            stats.mean_fitness
        );

        self.problem.on_generation(generation, best_fitness);
        self.history.push(stats);
        Ok(&self.history[generation - 1])
    }

    pub fn population_size(&self) -> usize {
        self.config.population_size
    }

    pub fn chromosome_length(&self) -> usize {
        self.config.chromosome_length
    }

    pub fn gene_size(&self) -> usize {
        self.config.gene_size
    }

    pub fn mutation_chance(&self) -> u8 {
        self.config.mutation_chance
    }

    /// The generation count passed to the most recent `evolve` call.
    pub fn final_generation(&self) -> usize {
        self.final_generation
    }

    /// Total generations run since construction.
    pub fn generations_run(&self) -> usize {
        self.history.len()
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// The fittest individual in the current population.
    pub fn best(&self) -> Option<&Individual> {
        self.population.best()
    }

    /// Per-generation statistics since construction.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }
}

impl<P: GaProblem, R: Rng> fmt::Display for GeneticAlgorithm<P, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.population)
    }
}

// ============================================================================
// Tests
// ============================================================================
