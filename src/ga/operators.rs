//! Integer-gene genetic operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: cut two parents at one point and swap tails
//! - [`crossover_pairs`]: apply it to neighbouring pairs `(0,1), (2,3), …`
//!
//! # Mutation
//!
//! - [`point_mutation`]: with a percent chance, redraw one gene somewhere in
//!   the population
//!
//! None of the operators touch fitness; it stays stale until the next
//! scoring pass.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::{Chromosome, Gene, Individual};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover at `cut`.
///
/// Child A is `parent1[cut..]` followed by `parent2[..cut]`; child B is
/// `parent2[cut..]` followed by `parent1[..cut]`. Both children keep the
/// parents' length. `cut == 0` returns copies of the parents.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `cut > parent1.len()`.
pub fn single_point_crossover(
    parent1: &[Gene],
    parent2: &[Gene],
    cut: usize,
) -> (Vec<Gene>, Vec<Gene>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(cut <= parent1.len(), "cut point out of range");

    let splice = |tail: &[Gene], head: &[Gene]| -> Vec<Gene> {
        let mut child = Vec::with_capacity(tail.len());
        child.extend_from_slice(&tail[cut..]);
        child.extend_from_slice(&head[..cut]);
        child
    };

    (splice(parent1, parent2), splice(parent2, parent1))
}

/// Recombines neighbouring individuals in place.
///
/// Pairs are `(0,1), (2,3), …`. One cut point is drawn from
/// `0..chromosome_length` per pair and both children overwrite their
/// parents. A trailing unpaired individual is left as is.
///
/// Returns the cut point used for each pair, in pair order.
pub fn crossover_pairs<R: Rng>(
    individuals: &mut [Individual],
    chromosome_length: usize,
    rng: &mut R,
) -> Vec<usize> {
    individuals
        .chunks_exact_mut(2)
        .map(|pair| {
            let cut = rng.random_range(0..chromosome_length);
            let (a, b) = single_point_crossover(
                pair[0].chromosome.genes(),
                pair[1].chromosome.genes(),
                cut,
            );
            pair[0].chromosome = Chromosome::new(a);
            pair[1].chromosome = Chromosome::new(b);
            cut
        })
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Location and values of an applied point mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutationSite {
    /// Index of the mutated individual.
    pub individual: usize,
    /// Gene position within the chromosome.
    pub position: usize,
    /// Gene value before mutation.
    pub previous: Gene,
    /// Freshly drawn gene value. May equal `previous`.
    pub gene: Gene,
}

/// Point mutation over the whole population.
///
/// Draws a percentage in `0..100`; when it is below `chance`, one individual
/// and one gene position are picked uniformly and the gene is replaced by a
/// fresh draw from `0..gene_size`. At most one gene changes per call.
///
/// `chance == 0` never mutates, `chance >= 100` always does.
///
/// # Complexity
/// O(1)
pub fn point_mutation<R: Rng>(
    individuals: &mut [Individual],
    chance: u8,
    chromosome_length: usize,
    gene_size: usize,
    rng: &mut R,
) -> Option<MutationSite> {
    if individuals.is_empty() || rng.random_range(0..100u8) >= chance {
        return None;
    }

    let individual = rng.random_range(0..individuals.len());
    let position = rng.random_range(0..chromosome_length);
    let gene = rng.random_range(0..gene_size);

    let slot = &mut individuals[individual].chromosome.genes_mut()[position];
    let previous = std::mem::replace(slot, gene);

    log::trace!("mutated individual {individual} gene {position}: {previous} -> {gene}");
    Some(MutationSite {
        individual,
        position,
        previous,
        gene,
    })
}

// ============================================================================
// Tests
// ============================================================================
