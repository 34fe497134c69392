//! Greedy minimum-entropy collapse over a bounded board
//!
//! Each step looks only at the frontier, the unassigned cells touching the
//! filled region. A cell's compatible set is built from its filled
//! neighbours alone; there is no wider propagation and no backtracking. A
//! frontier cell left with nothing compatible ends the attempt.

use crate::algorithm::bitset::TileBitset;
use crate::algorithm::cache::CompatibilityCache;
use crate::algorithm::selection::{EntropyEntry, RandomSelector};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::board::{Board, Cell};
use crate::spatial::tiles::{Catalog, Direction};
use std::collections::BTreeSet;
use std::fmt;

/// Outcome of an attempt that reached a cell with no compatible tile
///
/// Expected and cheap: the caller discards the attempt and starts over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoSolution {
    /// Frontier cell with nothing compatible
    pub cell: Cell,
    /// Cells assigned before the failure
    pub placed: usize,
}

impl fmt::Display for NoSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no compatible tile for cell ({}, {}) after {} placements",
            self.cell.col, self.cell.row, self.placed
        )
    }
}

impl std::error::Error for NoSolution {}

impl From<NoSolution> for TilingError {
    fn from(failure: NoSolution) -> Self {
        Self::NoSolution {
            cell: (failure.cell.col, failure.cell.row),
            placed: failure.placed,
        }
    }
}

/// Lifecycle of one solve attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// Some cells are still unassigned
    Solving,
    /// Every cell holds a tile
    Solved,
    /// A frontier cell ran out of compatible tiles
    Failed(NoSolution),
}

/// Compute the tiles that fit every filled neighbour of `cell`
///
/// A filled neighbour on side `d` admits tiles whose `d` edge equals the
/// neighbour's opposite edge reversed. Unfilled and off-board neighbours
/// leave their side unconstrained.
pub fn compatible_tiles(
    catalog: &Catalog,
    board: &Board,
    cell: Cell,
    cache: &mut CompatibilityCache,
) -> TileBitset {
    let mut compatible = TileBitset::all(catalog.len());

    for (direction, neighbour) in board.neighbours(cell) {
        let Some(tile) = board.get(neighbour).and_then(|index| catalog.get(index)) else {
            continue;
        };

        let required = tile.edge(direction.opposite()).reversed();
        compatible.intersect_with(cache.tiles_with_edge(catalog, direction, required));

        if compatible.is_empty() {
            break;
        }
    }

    compatible
}

/// Single solve attempt: owns the board, the filled set and its randomness
pub struct CollapseEngine<'a> {
    catalog: &'a Catalog,
    board: Board,
    filled: BTreeSet<Cell>,
    selector: RandomSelector,
    cache: CompatibilityCache,
    state: EngineState,
}

impl<'a> CollapseEngine<'a> {
    /// Create an attempt over an empty `width × height` board
    ///
    /// # Errors
    ///
    /// Returns `EmptyCatalog` for a catalog without tiles and
    /// `InvalidParameter` for a zero or oversized dimension.
    pub fn new(
        catalog: &'a Catalog,
        width: usize,
        height: usize,
        selector: RandomSelector,
    ) -> Result<Self> {
        if catalog.is_empty() {
            return Err(TilingError::EmptyCatalog);
        }
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        Ok(Self {
            catalog,
            board: Board::new(width, height),
            filled: BTreeSet::new(),
            selector,
            cache: CompatibilityCache::new(),
            state: EngineState::Solving,
        })
    }

    /// Current lifecycle state
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Board in its current, possibly partial, state
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Cells assigned so far
    pub const fn filled(&self) -> &BTreeSet<Cell> {
        &self.filled
    }

    /// Number of cells assigned so far
    pub fn placed(&self) -> usize {
        self.filled.len()
    }

    /// Access the edge compatibility cache
    pub const fn cache(&self) -> &CompatibilityCache {
        &self.cache
    }

    /// Unassigned cells 4-adjacent to the filled region
    ///
    /// An empty filled set, or a region without open neighbours, yields the
    /// origin alone.
    pub fn frontier(&self) -> BTreeSet<Cell> {
        let frontier: BTreeSet<Cell> = self
            .filled
            .iter()
            .flat_map(|&cell| self.board.neighbours(cell))
            .map(|(_, neighbour)| neighbour)
            .filter(|neighbour| !self.filled.contains(neighbour))
            .collect();

        if frontier.is_empty() {
            BTreeSet::from([Cell::ORIGIN])
        } else {
            frontier
        }
    }

    /// Compatible tiles and entropy of one cell under the current board
    pub fn entropy_at(&mut self, cell: Cell) -> EntropyEntry {
        let compatible = compatible_tiles(self.catalog, &self.board, cell, &mut self.cache);
        EntropyEntry::new(cell, compatible)
    }

    /// Assign one frontier cell
    ///
    /// Returns `Ok(true)` after a placement and `Ok(false)` once the board is
    /// complete.
    ///
    /// # Errors
    ///
    /// Returns `NoSolution` when the chosen cell has no compatible tile. The
    /// attempt stays failed and every later call repeats the error.
    pub fn step(&mut self) -> std::result::Result<bool, NoSolution> {
        match self.state {
            EngineState::Solved => return Ok(false),
            EngineState::Failed(failure) => return Err(failure),
            EngineState::Solving => {}
        }

        if self.filled.len() >= self.board.area() {
            self.state = EngineState::Solved;
            return Ok(false);
        }

        let entries: Vec<EntropyEntry> = self
            .frontier()
            .into_iter()
            .map(|cell| self.entropy_at(cell))
            .collect();

        let Some(chosen) = self.selector.choose_min_entropy(entries) else {
            return Err(self.fail(Cell::ORIGIN));
        };
        let Some(tile) = self.selector.choose_tile(&chosen.compatible) else {
            return Err(self.fail(chosen.cell));
        };

        self.board.assign(chosen.cell, tile);
        self.filled.insert(chosen.cell);

        if self.filled.len() >= self.board.area() {
            self.state = EngineState::Solved;
        }

        Ok(true)
    }

    /// Run steps until the board is complete or the attempt fails
    ///
    /// # Errors
    ///
    /// Returns `NoSolution` if a frontier cell runs out of compatible tiles;
    /// the partial board is dropped.
    pub fn solve(mut self) -> std::result::Result<Board, NoSolution> {
        while self.step()? {}
        Ok(self.board)
    }

    fn fail(&mut self, cell: Cell) -> NoSolution {
        let failure = NoSolution {
            cell,
            placed: self.filled.len(),
        };
        self.state = EngineState::Failed(failure);
        failure
    }
}

/// Check that every pair of adjacent assigned cells fits edge to edge
pub fn satisfies_adjacency(board: &Board, catalog: &Catalog) -> bool {
    board.cells().all(|cell| {
        let Some(tile) = board.get(cell).and_then(|index| catalog.get(index)) else {
            return true;
        };
        [Direction::Right, Direction::Down]
            .into_iter()
            .filter_map(|direction| Some((direction, board.neighbour(cell, direction)?)))
            .all(|(direction, neighbour)| {
                board
                    .get(neighbour)
                    .and_then(|index| catalog.get(index))
                    .is_none_or(|other| tile.accepts(direction, other))
            })
    })
}
