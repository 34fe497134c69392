use crate::algorithm::bitset::TileBitset;
use crate::spatial::board::Cell;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Compatibility of one frontier cell during a selection round
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntropyEntry {
    /// Number of compatible tiles
    pub entropy: usize,
    /// Frontier cell
    pub cell: Cell,
    /// Tiles that fit every filled neighbour
    pub compatible: TileBitset,
}

impl EntropyEntry {
    /// Build an entry, taking the entropy from the set size
    pub fn new(cell: Cell, compatible: TileBitset) -> Self {
        Self {
            entropy: compatible.count(),
            cell,
            compatible,
        }
    }
}

/// Keep only the entries sharing the lowest entropy
///
/// Input order is preserved among the survivors.
pub fn minimum_entropy_ties(entries: Vec<EntropyEntry>) -> Vec<EntropyEntry> {
    let Some(minimum) = entries.iter().map(|entry| entry.entropy).min() else {
        return entries;
    };

    entries
        .into_iter()
        .filter(|entry| entry.entropy == minimum)
        .collect()
}

/// Seeded random selector for reproducible stochastic choices
///
/// One selector belongs to one solve attempt.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Derive an independent selector from a parent generator
    pub fn from_parent(parent: &mut StdRng) -> Self {
        Self::new(parent.random())
    }

    /// Uniform index in `0..len`, or `None` when `len` is zero
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly pick one item
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    /// Pick a cell among the lowest-entropy entries
    ///
    /// Every tied entry is equally likely. Returns `None` only for an empty
    /// input.
    pub fn choose_min_entropy(&mut self, entries: Vec<EntropyEntry>) -> Option<EntropyEntry> {
        let mut ties = minimum_entropy_ties(entries);
        let index = self.choose_index(ties.len())?;
        Some(ties.swap_remove(index))
    }

    /// Uniformly pick one tile from a compatible set
    pub fn choose_tile(&mut self, compatible: &TileBitset) -> Option<usize> {
        let index = self.choose_index(compatible.count())?;
        compatible.iter().nth(index)
    }
}
