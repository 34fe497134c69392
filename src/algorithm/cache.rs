use crate::algorithm::bitset::TileBitset;
use crate::spatial::tiles::{Catalog, Direction, Edge};
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Key for caching edge compatibility results
///
/// Identifies "tiles whose edge on `side` equals `edge`".
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    /// Side of the candidate tile being matched
    pub side: Direction,
    /// Required edge on that side
    pub edge: Edge,
}

impl EdgeKey {
    /// Create a key for one side and required edge
    pub const fn new(side: Direction, edge: Edge) -> Self {
        Self { side, edge }
    }
}

/// Collect every catalog tile whose edge on `side` equals `edge`
pub fn tiles_with_edge(catalog: &Catalog, side: Direction, edge: &Edge) -> TileBitset {
    let mut matching = TileBitset::new(catalog.len());
    for (index, tile) in catalog.iter().enumerate() {
        if tile.edge(side) == edge {
            matching.insert(index);
        }
    }
    matching
}

/// Memoization cache for edge compatibility sets
///
/// The catalog never changes while solving, so a set computed once stays
/// valid for every later cell of the same attempt.
#[derive(Default)]
pub struct CompatibilityCache {
    /// Edge requirement to compatible tiles mapping
    sets: HashMap<EdgeKey, TileBitset>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl CompatibilityCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached result or compute and store new one
    ///
    /// Uses the provided closure to compute the set only when the key is not
    /// already cached.
    pub fn get_or_compute<F>(&mut self, key: EdgeKey, compute_fn: F) -> &TileBitset
    where
        F: FnOnce(&EdgeKey) -> TileBitset,
    {
        match self.sets.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let set = compute_fn(entry.key());
                entry.insert(set)
            }
        }
    }

    /// Tiles of `catalog` whose edge on `side` equals `edge`
    pub fn tiles_with_edge(
        &mut self,
        catalog: &Catalog,
        side: Direction,
        edge: Edge,
    ) -> &TileBitset {
        self.get_or_compute(EdgeKey::new(side, edge), |key| {
            tiles_with_edge(catalog, key.side, &key.edge)
        })
    }

    /// Number of cached sets
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Test for an empty cache
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
