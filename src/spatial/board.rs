//! Board storage and 4-connected cell geometry

use crate::spatial::tiles::{Catalog, Direction};
use ndarray::Array2;

/// Board coordinate
///
/// Field order makes the derived ordering row-major, which keeps iteration
/// over cell sets deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index (0 is the top row)
    pub row: usize,
    /// Column index (0 is the left column)
    pub col: usize,
}

impl Cell {
    /// Top-left cell, where an empty board starts
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Create a cell from column and row
    pub const fn new(col: usize, row: usize) -> Self {
        Self { row, col }
    }
}

/// Grid of optional catalog indices, indexed `[row, col]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Array2<Option<usize>>,
}

impl Board {
    /// Create a board with every cell unassigned
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Test whether a cell lies on the board
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width() && cell.row < self.height()
    }

    /// Catalog index assigned to a cell
    pub fn get(&self, cell: Cell) -> Option<usize> {
        self.cells.get([cell.row, cell.col]).copied().flatten()
    }

    /// Assign a catalog index to a cell
    ///
    /// Out-of-bounds cells are ignored and reported as `false`.
    pub fn assign(&mut self, cell: Cell, tile: usize) -> bool {
        self.cells
            .get_mut([cell.row, cell.col])
            .map(|slot| *slot = Some(tile))
            .is_some()
    }

    /// Number of assigned cells
    pub fn assigned_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Test whether every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Neighbouring cell one step away, if it lies on the board
    pub fn neighbour(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dcol, drow) = direction.offset();
        let col = cell.col.checked_add_signed(dcol)?;
        let row = cell.row.checked_add_signed(drow)?;
        let next = Cell::new(col, row);
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbours of a cell with the direction leading to each
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = (Direction, Cell)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| Some((direction, self.neighbour(cell, direction)?)))
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let width = self.width();
        let height = self.height();
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(col, row)))
    }

    /// Tile identifiers per cell, or `None` while any cell is unassigned
    pub fn tile_ids<'a>(&self, catalog: &'a Catalog) -> Option<Array2<&'a str>> {
        let mut ids = Vec::with_capacity(self.area());
        for slot in &self.cells {
            ids.push(catalog.get((*slot)?)?.id());
        }
        Array2::from_shape_vec((self.height(), self.width()), ids).ok()
    }
}
